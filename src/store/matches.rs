use crate::domain::MatchRecord;

/// Append-only log of recorded matches
#[derive(Debug, Clone, Default)]
pub struct MatchLog {
    matches: Vec<MatchRecord>,
}

impl MatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: MatchRecord) {
        self.matches.push(record);
    }

    pub fn list_all(&self) -> &[MatchRecord] {
        &self.matches
    }
}
