///
/// Access to the current location of a history stack.
///
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    ///
    /// Current query string without the leading `?`
    ///
    fn query(&self) -> String;

    ///
    /// Current path without query string
    ///
    fn path(&self) -> String;

    ///
    /// Replaces the current URL (path with optional `?query`)
    /// without adding a history entry.
    ///
    fn replace(&mut self, url: &str);
}

/// Joins path and query, skipping `?` for an empty query
pub fn join_url(path: &str, query: &str) -> String {
    match query.is_empty() {
        true => path.to_string(),
        false => format!("{path}?{query}"),
    }
}
