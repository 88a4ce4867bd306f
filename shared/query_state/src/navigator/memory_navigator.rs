use super::Navigator;

///
/// History stack kept in memory.
///
/// Used where no browser location exists, it also records
/// every replaced URL so callers can inspect navigation.
///
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    entries: Vec<String>,
    replaced: Vec<String>,
}

impl MemoryNavigator {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            entries: vec![url.into()],
            replaced: Vec::new(),
        }
    }

    /// Navigates to `url` adding a history entry
    pub fn push(&mut self, url: impl Into<String>) {
        self.entries.push(url.into());
    }

    pub fn url(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or_default()
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    /// URLs passed to [Navigator::replace], oldest first
    pub fn replaced(&self) -> &[String] {
        &self.replaced
    }

    fn split(&self) -> (&str, &str) {
        let url = self.url();
        let url = url.split_once('#').map_or(url, |(url, _fragment)| url);

        url.split_once('?').unwrap_or((url, ""))
    }
}

impl Navigator for MemoryNavigator {
    fn query(&self) -> String {
        self.split().1.to_string()
    }

    fn path(&self) -> String {
        self.split().0.to_string()
    }

    fn replace(&mut self, url: &str) {
        match self.entries.last_mut() {
            Some(current) => *current = url.to_string(),
            None => self.entries.push(url.to_string()),
        }
        self.replaced.push(url.to_string());
    }
}
