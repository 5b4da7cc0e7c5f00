use super::record::Record;

/// Keeps the records where any of `fields` contains `query`, ignoring case.
///
/// The query is used verbatim: an empty query keeps everything, while a
/// whitespace-only query only matches values containing that whitespace.
/// Output order follows input order.
pub fn filter<'a, S: AsRef<str>>(
    records: &'a [Record],
    query: &str,
    fields: &[S],
) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches(record, &needle, fields))
        .collect()
}

/// `needle` must already be lowercased.
pub fn matches<S: AsRef<str>>(record: &Record, needle: &str, fields: &[S]) -> bool {
    fields.iter().any(|field| {
        record
            .get_field(field.as_ref())
            .map(|value| value.to_string().to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}
