//! Player directory: the list of rated players analyses run against
//!
//! The directory is loaded once from a ratings CSV and is read-only after
//! that. Entries keep file order, which is also resolution order.

pub mod loader;
pub mod search;

use std::path::Path;

use crate::config::DataSettings;
use crate::types::RatedPlayer;

// Re-export commonly used items
pub use loader::{load_directory, RawPlayerRecord, SkipReason};
pub use search::{display_name, search};

/// Ordered, immutable set of rated players
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerDirectory {
    players: Vec<RatedPlayer>,
}

impl PlayerDirectory {
    pub fn new(players: Vec<RatedPlayer>) -> Self {
        Self { players }
    }

    /// Load a directory from a ratings CSV file
    pub fn load<P: AsRef<Path>>(path: P, settings: &DataSettings) -> crate::error::Result<Self> {
        load_directory(path, settings)
    }

    pub fn players(&self) -> &[RatedPlayer] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players whose names contain `query`, in directory order
    pub fn search(&self, query: &str, limit: usize) -> Vec<&RatedPlayer> {
        search(query, &self.players, limit)
    }
}

impl AsRef<[RatedPlayer]> for PlayerDirectory {
    fn as_ref(&self) -> &[RatedPlayer] {
        &self.players
    }
}

impl From<Vec<RatedPlayer>> for PlayerDirectory {
    fn from(players: Vec<RatedPlayer>) -> Self {
        Self::new(players)
    }
}
