//! Splitting free-text form fields into display lines.

use crate::render::document::Block;

const BULLET_MARKERS: &[char] = &['-', '•', '*'];

/// Strips one leading bullet marker and the whitespace after it.
pub fn strip_bullet_marker(line: &str) -> &str {
    let line = line.trim();
    match line.strip_prefix(BULLET_MARKERS) {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

/// Description lines: split on line breaks, blank lines dropped, bullet markers stripped.
pub fn description_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_bullet_marker)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Skills: split on commas or line breaks, trimmed, blanks dropped.
pub fn skill_items(text: &str) -> Vec<String> {
    text.split([',', '\n', '\r'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// One line renders as plain text; never a one-item list. No lines gives `None`.
pub fn block_from_lines(mut lines: Vec<String>) -> Option<Block> {
    match lines.len() {
        0 => None,
        1 => lines.pop().map(Block::Plain),
        _ => Some(Block::Bullets(lines)),
    }
}

/// Joins the non-empty trimmed parts with `sep`.
pub fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

pub fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_each_marker() {
        assert_eq!(strip_bullet_marker("- Led team"), "Led team");
        assert_eq!(strip_bullet_marker("•   Shipped it"), "Shipped it");
        assert_eq!(strip_bullet_marker("*Reviewed"), "Reviewed");
        assert_eq!(strip_bullet_marker("  Plain line  "), "Plain line");
    }

    #[test]
    fn test_only_one_marker_is_stripped() {
        assert_eq!(strip_bullet_marker("-- double"), "- double");
    }

    #[test]
    fn test_description_lines_drop_blanks() {
        let lines = description_lines("- Led team\n\n   \n• Cut costs 20%\r\n");
        assert_eq!(lines, vec!["Led team", "Cut costs 20%"]);
    }

    #[test]
    fn test_marker_only_line_is_dropped() {
        assert_eq!(description_lines("-\n- Real bullet"), vec!["Real bullet"]);
    }

    #[test]
    fn test_single_line_block_is_plain() {
        let block = block_from_lines(description_lines("- Led team"));
        assert_eq!(block, Some(Block::Plain("Led team".to_string())));
    }

    #[test]
    fn test_multi_line_block_is_bullets() {
        let block = block_from_lines(description_lines("- Led team\n- Hired 4"));
        assert_eq!(
            block,
            Some(Block::Bullets(vec!["Led team".to_string(), "Hired 4".to_string()]))
        );
    }

    #[test]
    fn test_empty_text_has_no_block() {
        assert_eq!(block_from_lines(description_lines("  \n \n")), None);
    }

    #[test]
    fn test_skill_items_split_on_commas_and_newlines() {
        let items = skill_items("Rust, Go,\nSQL\n\n , Docker");
        assert_eq!(items, vec!["Rust", "Go", "SQL", "Docker"]);
    }

    #[test]
    fn test_join_present_skips_empty_parts() {
        assert_eq!(join_present(&["Jan 2020", "", " Present "], " - "), "Jan 2020 - Present");
        assert_eq!(join_present(&["", "  "], " - "), "");
    }
}
