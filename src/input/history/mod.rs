/// Lines submitted during one session, oldest first, plus the recall cursor
/// used for arrow-key navigation.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry` and resets the recall cursor.
    pub fn push(&mut self, entry: &str) {
        self.entries.push(entry.to_owned());
        self.cursor = None;
    }

    /// Steps towards older entries, stopping at the oldest one.
    pub fn recall_previous(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;
        let index = match self.cursor {
            None => last,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Steps towards newer entries, stopping at the newest one. Does nothing
    /// until `recall_previous` has been called.
    pub fn recall_next(&mut self) -> Option<&str> {
        let cursor = self.cursor?;
        let last = self.entries.len().checked_sub(1)?;
        let index = (cursor + 1).min(last);
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
