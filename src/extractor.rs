/// Action-button labels and search-box placeholders the export renders
/// between entries. Matched by exact equality after trimming; both label
/// languages the export is known to ship are listed.
const NOISE_TOKENS: &[&str] = &["Remove", "Entfernen", "Follow", "Unfollow", "Search", "Suchen"];

/// Substrings identifying the "profile picture" marker line that precedes a
/// handle line. Case-sensitive, matching the export's own casing.
const MARKER_SUBSTRINGS: &[&str] = &["Profilbild", "profile picture"];

/// Recovers the ordered handle list from the text dump of a scrollable
/// follow/followers UI list.
///
/// Each entry renders as an optional marker line ("...profile picture"),
/// the handle line, and optionally an action-button label; a search
/// placeholder may sit at the very top. The extractor never fails on
/// malformed input, it just emits fewer handles.
#[derive(Debug, Default)]
pub struct UsernameExtractor;

impl UsernameExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract handles from one export file's raw lines, preserving order.
    ///
    /// Per line, first matching rule wins:
    /// 1. trim surrounding whitespace;
    /// 2. empty lines and noise tokens are discarded and clear any pending
    ///    marker, so a marker followed directly by an action label is
    ///    skipped whole instead of mis-capturing the label;
    /// 3. a marker line flags the next non-noise line as a handle;
    /// 4. a flagged line is consumed as a handle;
    /// 5. a bare handle on the very first line is captured directly (the
    ///    export's first entry sometimes lacks its marker line).
    pub fn extract(&self, lines: &[String]) -> Vec<String> {
        let mut handles = Vec::new();
        let mut next_is_handle = false;

        for (index, raw) in lines.iter().enumerate() {
            let line = raw.trim();

            if line.is_empty() || is_noise_token(line) {
                next_is_handle = false;
                continue;
            }

            if is_marker_line(line) {
                next_is_handle = true;
                continue;
            }

            if next_is_handle {
                handles.push(line.to_string());
                next_is_handle = false;
                continue;
            }

            if index == 0 {
                handles.push(line.to_string());
            }
        }

        handles
    }
}

fn is_noise_token(line: &str) -> bool {
    NOISE_TOKENS.contains(&line)
}

fn is_marker_line(line: &str) -> bool {
    MARKER_SUBSTRINGS.iter().any(|marker| line.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_well_formed_export_round_trip() {
        let input = lines(&[
            "Search",
            "alice's profile picture",
            "alice",
            "Remove",
            "bob's profile picture",
            "bob",
            "Remove",
            "carol's profile picture",
            "carol",
            "Remove",
        ]);

        let extractor = UsernameExtractor::new();
        assert_eq!(extractor.extract(&input), vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_bare_handle_on_first_line_is_captured() {
        let input = lines(&["alice", "bob's profile picture", "bob"]);

        let extractor = UsernameExtractor::new();
        assert_eq!(extractor.extract(&input), vec!["alice", "bob"]);
    }

    #[test]
    fn test_first_line_search_placeholder_is_not_a_handle() {
        let input = lines(&["Search", "alice's profile picture", "alice"]);

        let extractor = UsernameExtractor::new();
        assert_eq!(extractor.extract(&input), vec!["alice"]);
    }

    #[test]
    fn test_first_line_marker_is_not_a_handle() {
        let input = lines(&["alice's profile picture", "alice"]);

        let extractor = UsernameExtractor::new();
        assert_eq!(extractor.extract(&input), vec!["alice"]);
    }

    #[test]
    fn test_german_export_variant() {
        let input = lines(&[
            "Suchen",
            "Profilbild von alice",
            "alice",
            "Entfernen",
            "Profilbild von bob",
            "bob",
            "Entfernen",
        ]);

        let extractor = UsernameExtractor::new();
        assert_eq!(extractor.extract(&input), vec!["alice", "bob"]);
    }

    #[test]
    fn test_mixed_label_languages_in_one_file() {
        let input = lines(&[
            "Search",
            "Profilbild von alice",
            "alice",
            "Entfernen",
            "bob's profile picture",
            "bob",
            "Remove",
        ]);

        let extractor = UsernameExtractor::new();
        assert_eq!(extractor.extract(&input), vec!["alice", "bob"]);
    }

    #[test]
    fn test_noise_never_emitted_as_handle() {
        let input = lines(&["Search", "Remove", "Entfernen", "Follow", "Unfollow", "Suchen"]);

        let extractor = UsernameExtractor::new();
        assert!(extractor.extract(&input).is_empty());
    }

    #[test]
    fn test_marker_followed_by_action_label_is_skipped() {
        // Malformed entry: the marker's handle line is missing. The label
        // must clear the pending flag, not become the handle, and the next
        // entry must still parse.
        let input = lines(&[
            "alice's profile picture",
            "Remove",
            "bob's profile picture",
            "bob",
        ]);

        let extractor = UsernameExtractor::new();
        assert_eq!(extractor.extract(&input), vec!["bob"]);
    }

    #[test]
    fn test_blank_line_clears_pending_marker() {
        let input = lines(&["alice's profile picture", "", "not_alice_entry"]);

        let extractor = UsernameExtractor::new();
        assert!(extractor.extract(&input).is_empty());
    }

    #[test]
    fn test_leading_blank_line_disables_first_line_rule() {
        // The bare-handle rule applies to the physical first line only; after
        // a leading blank line an entry needs its marker to be captured.
        let input = lines(&["", "alice"]);

        let extractor = UsernameExtractor::new();
        assert!(extractor.extract(&input).is_empty());
    }

    #[test]
    fn test_handles_are_trimmed() {
        let input = lines(&["  alice's profile picture  ", "   alice   "]);

        let extractor = UsernameExtractor::new();
        assert_eq!(extractor.extract(&input), vec!["alice"]);
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        let extractor = UsernameExtractor::new();
        assert!(extractor.extract(&[]).is_empty());
    }

    #[test]
    fn test_case_sensitive_noise_matching() {
        // "remove" is not a known label; on line 1 it is a bare handle.
        let input = lines(&["remove"]);

        let extractor = UsernameExtractor::new();
        assert_eq!(extractor.extract(&input), vec!["remove"]);
    }

    #[test]
    fn test_repeated_handles_are_kept() {
        let input = lines(&[
            "alice's profile picture",
            "alice",
            "alice's profile picture",
            "alice",
        ]);

        let extractor = UsernameExtractor::new();
        assert_eq!(extractor.extract(&input), vec!["alice", "alice"]);
    }
}
