#[path = "value_type.rs"]
pub mod value_type;

#[path = "record.rs"]
pub mod record;

#[path = "kind.rs"]
pub mod kind;

#[path = "store.rs"]
pub mod store;

#[path = "filter.rs"]
pub mod filter;

#[path = "form.rs"]
pub mod form;

#[path = "aggregate.rs"]
pub mod aggregate;

#[path = "seed.rs"]
pub mod seed;
