//! Name search over the directory, for pickers and suggestions

use crate::types::RatedPlayer;
use crate::utils::normalize_name;

/// Players whose name contains `query` (case-insensitive), in directory order
///
/// A blank query matches everyone. At most `limit` players are returned.
pub fn search<'a>(query: &str, directory: &'a [RatedPlayer], limit: usize) -> Vec<&'a RatedPlayer> {
    let needle = normalize_name(query);
    directory
        .iter()
        .filter(|player| normalize_name(&player.name).contains(&needle))
        .take(limit)
        .collect()
}

/// Directory spelling of an exactly matching name
pub fn display_name<'a>(value: &str, directory: &'a [RatedPlayer]) -> Option<&'a str> {
    crate::rating::resolver::find(value, directory).map(|player| player.name.as_str())
}
