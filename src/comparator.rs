use serde::Serialize;
use std::collections::HashSet;

/// The two one-directional differences between the following and followers
/// handle lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    /// Handles you follow that do not follow you back
    /// (following − followers, in following's relative order).
    pub not_followed_back: Vec<String>,
    /// Handles following you that you do not follow back
    /// (followers − following, in followers' relative order).
    pub not_following_back: Vec<String>,
}

/// Compute both asymmetric differences.
///
/// Pure: inputs are never mutated and identical inputs always produce
/// identical output. Membership is exact string equality, no case folding.
pub fn diff(following: &[String], followers: &[String]) -> DiffReport {
    DiffReport {
        not_followed_back: subtract(following, followers),
        not_following_back: subtract(followers, following),
    }
}

// The set is an internal lookup optimization only; output order follows
// `keep_from`.
fn subtract(keep_from: &[String], remove: &[String]) -> Vec<String> {
    let remove: HashSet<&str> = remove.iter().map(String::as_str).collect();

    keep_from
        .iter()
        .filter(|handle| !remove.contains(handle.as_str()))
        .cloned()
        .collect()
}
