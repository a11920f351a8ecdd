//! Turns completion text into a `ClosingScript`.
//!
//! The default parser is line-based and trusts the model to follow the prompt's
//! layout. A response in any other shape decomposes badly; nothing here
//! validates the content.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosingScript {
    pub pitch: String,
    pub rebuttals: Vec<String>,
}

/// Implement this to replace the parsing strategy (e.g. a delimited or JSON
/// output contract) without touching the generator or handlers.
pub trait ScriptParser: Send + Sync {
    fn parse(&self, completion: &str) -> ClosingScript;
}

/// First non-empty line is the pitch, every later line a rebuttal.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineScriptParser;

impl ScriptParser for LineScriptParser {
    fn parse(&self, completion: &str) -> ClosingScript {
        let mut lines = completion
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty());

        let pitch = lines.next().unwrap_or_default().to_string();
        let rebuttals = lines
            .map(|line| strip_numbering(line).to_string())
            .collect();

        ClosingScript { pitch, rebuttals }
    }
}

/// Strips a leading `N.` list marker and the whitespace after it.
fn strip_numbering(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    match rest.strip_prefix('.') {
        Some(after) => after.trim_start(),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_and_numbered_rebuttals() {
        let text = "This plan keeps your $0 premium and adds dental.\n\n\
                    1. \"I like my current plan.\" Let's compare side by side.\n\
                    2. \"Premiums go up.\" This plan has held $0 for three years.\n\
                    3.   \"My doctor may not be covered.\" We can check the network now.\n";

        let script = LineScriptParser.parse(text);

        assert_eq!(
            script.pitch,
            "This plan keeps your $0 premium and adds dental."
        );
        assert_eq!(
            script.rebuttals,
            vec![
                "\"I like my current plan.\" Let's compare side by side.",
                "\"Premiums go up.\" This plan has held $0 for three years.",
                "\"My doctor may not be covered.\" We can check the network now.",
            ]
        );
    }

    #[test]
    fn test_empty_completion() {
        assert_eq!(LineScriptParser.parse(""), ClosingScript::default());
        assert_eq!(LineScriptParser.parse("\n \n"), ClosingScript::default());
    }

    #[test]
    fn test_crlf_and_indentation_are_trimmed() {
        let script = LineScriptParser.parse("  Pitch line  \r\n\r\n   10. Rebuttal ten\r\n");
        assert_eq!(script.pitch, "Pitch line");
        assert_eq!(script.rebuttals, vec!["Rebuttal ten"]);
    }

    #[test]
    fn test_numbering_only_stripped_from_rebuttals() {
        let script = LineScriptParser.parse("1. Pitch\n2. Objection");
        assert_eq!(script.pitch, "1. Pitch");
        assert_eq!(script.rebuttals, vec!["Objection"]);
    }

    #[test]
    fn test_strip_numbering_leaves_other_prefixes() {
        assert_eq!(strip_numbering("- bullet"), "- bullet");
        assert_eq!(strip_numbering("2024 was a good year"), "2024 was a good year");
        assert_eq!(strip_numbering("3.5 stars"), "5 stars");
        assert_eq!(strip_numbering("Objection: cost"), "Objection: cost");
    }
}
