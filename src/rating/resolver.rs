//! Player rating resolution
//!
//! Names are matched after trimming and case folding. When several entries
//! share a name the first one in directory order wins.

use crate::error::ValidationError;
use crate::types::RatedPlayer;
use crate::utils::normalize_name;

/// Find the directory entry for `name`, if any
pub fn find<'a>(name: &str, directory: &'a [RatedPlayer]) -> Option<&'a RatedPlayer> {
    let wanted = normalize_name(name);
    directory
        .iter()
        .find(|player| normalize_name(&player.name) == wanted)
}

/// Look up the current rating for `name`
pub fn resolve(name: &str, directory: &[RatedPlayer]) -> Option<f64> {
    find(name, directory).map(|player| player.rating)
}

/// Resolve both players of a matchup
///
/// Every unresolved name is reported in a single `PlayerNotFound`, in
/// request order.
pub fn resolve_pair(
    name1: &str,
    name2: &str,
    directory: &[RatedPlayer],
) -> Result<(f64, f64), ValidationError> {
    match (resolve(name1, directory), resolve(name2, directory)) {
        (Some(rating1), Some(rating2)) => Ok((rating1, rating2)),
        (rating1, rating2) => {
            let mut names = Vec::new();
            if rating1.is_none() {
                names.push(name1.trim().to_string());
            }
            if rating2.is_none() {
                names.push(name2.trim().to_string());
            }
            Err(ValidationError::PlayerNotFound { names })
        }
    }
}
