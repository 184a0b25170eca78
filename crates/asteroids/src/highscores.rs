//! In-memory high-score table

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreEntry {
    /// Player name
    pub name: String,
    /// Final score
    pub score: u32,
}

/// Bounded table kept in descending score order
#[derive(Debug, Clone)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
    capacity: usize,
}

impl HighScoreTable {
    /// Empty table holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Entries, best first
    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `score` would earn a place. A full table needs a strictly
    /// better score than its lowest entry.
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < self.capacity {
            return true;
        }
        self.entries.last().is_some_and(|lowest| score > lowest.score)
    }

    /// Insert an entry. Equal scores keep their arrival order; the lowest
    /// entry falls off a full table.
    pub fn insert(&mut self, name: impl Into<String>, score: u32) {
        let name = name.into();
        log::info!("High score: {} with {}", name, score);
        self.entries.push(HighScoreEntry { name, score });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(self.capacity);
    }
}
