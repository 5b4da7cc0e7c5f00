pub mod records;

pub mod desk;

pub mod shell;

pub mod config;

pub mod error;
