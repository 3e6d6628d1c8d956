//! Marker handling for the tool-use instruction block
//!
//! The instruction text travels inside a `<tool_use_instructions>` tag
//! pair so callers can find it again after splicing it into a larger
//! system prompt. This module covers both directions: appending the
//! block to a system prompt, and pulling the body back out of a prompt
//! that carries one.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tool_use::TOOL_USE_INSTRUCTION;

static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    // Match <tool_use_instructions>BODY</tool_use_instructions>
    // Using [\s\S]*? for non-greedy match of any content including newlines
    Regex::new(r"<tool_use_instructions>([\s\S]*?)</tool_use_instructions>").unwrap()
});

/// Check whether the text contains a complete marker pair in order.
pub fn has_markers(text: &str) -> bool {
    MARKER_RE.is_match(text)
}

/// Extract the body between the first complete marker pair.
///
/// Markers are excluded and leading/trailing newlines are trimmed.
/// Returns `None` when no complete pair exists.
pub fn instruction_body(text: &str) -> Option<&str> {
    let caps = MARKER_RE.captures(text)?;
    Some(caps.get(1)?.as_str().trim_matches('\n'))
}

/// Append the tool-use instruction block to a system prompt.
///
/// The two parts are separated by exactly one blank line. An empty
/// system prompt yields the instruction block alone.
pub fn append_instructions(system_prompt: &str) -> String {
    if system_prompt.is_empty() {
        return TOOL_USE_INSTRUCTION.to_string();
    }
    format!("{}\n\n{}", system_prompt.trim_end(), TOOL_USE_INSTRUCTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool_use::{TOOL_USE_CLOSE, TOOL_USE_OPEN};

    #[test]
    fn test_has_markers_on_instruction_constant() {
        assert!(has_markers(TOOL_USE_INSTRUCTION));
    }

    #[test]
    fn test_pattern_matches_marker_constants() {
        // The compiled pattern and the exported tag constants must agree.
        let text = format!("{}body{}", TOOL_USE_OPEN, TOOL_USE_CLOSE);
        assert_eq!(instruction_body(&text), Some("body"));
    }

    #[test]
    fn test_instruction_body_trims_newlines() {
        let text = "<tool_use_instructions>\nline one\nline two\n</tool_use_instructions>";
        assert_eq!(instruction_body(text), Some("line one\nline two"));
    }

    #[test]
    fn test_instruction_body_inside_larger_prompt() {
        let prompt = append_instructions("You are a helpful assistant.");
        let body = instruction_body(&prompt).unwrap();
        assert!(body.contains("## Task Process Framework"));
        assert!(!body.contains("<tool_use_instructions>"));
    }

    #[test]
    fn test_no_match_cases() {
        // Regular text
        assert!(!has_markers("hello world"));
        assert!(instruction_body("hello world").is_none());

        // Open tag only
        assert!(!has_markers("<tool_use_instructions>dangling"));

        // Close before open
        assert!(!has_markers(
            "</tool_use_instructions>x<tool_use_instructions>"
        ));
    }

    #[test]
    fn test_first_pair_wins_when_repeated() {
        let text = "<tool_use_instructions>first</tool_use_instructions>\
                    <tool_use_instructions>second</tool_use_instructions>";
        assert_eq!(instruction_body(text), Some("first"));
    }

    #[test]
    fn test_append_separates_with_one_blank_line() {
        let result = append_instructions("You are a helpful assistant.");
        assert!(result.starts_with("You are a helpful assistant.\n\n<tool_use_instructions>"));
        assert!(result.ends_with(TOOL_USE_INSTRUCTION));
    }

    #[test]
    fn test_append_normalizes_trailing_whitespace() {
        let result = append_instructions("System prompt.\n\n\n");
        assert!(result.starts_with("System prompt.\n\n<tool_use_instructions>"));
    }

    #[test]
    fn test_append_to_empty_prompt() {
        assert_eq!(append_instructions(""), TOOL_USE_INSTRUCTION);
    }
}
