//! Accelerator string parsing
//!
//! Grammar (case-insensitive):
//!
//! ```text
//! pattern     := "" | whitespace* | alternative ("or" alternative)*
//! alternative := (modifier "+")* terminal-key
//! ```
//!
//! `"or"` separates alternatives even inside a word, so `"EnterOrSpace"`
//! accepts Enter or Space. The compound aliases `cmdorctrl` and
//! `commandorcontrol` are read as single words by the tokenizer and never
//! split. Only the first alternative's modifiers apply to the whole pattern:
//! `"Ctrl+EnterOrSpace"` is Ctrl+Enter or Ctrl+Space.

use std::fmt;

use super::modifiers::resolve_modifiers;
use super::platform::PlatformDetector;
use super::types::{AcceleratorPattern, Modifiers};

/// An alternative without a terminal key (`"ctrl+"`, `"+"`, a dangling `"or"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAccelerator {
    /// The offending alternative as written, trimmed
    pub accelerator: String,
}

impl InvalidAccelerator {
    pub fn new(accelerator: impl Into<String>) -> Self {
        Self {
            accelerator: accelerator.into(),
        }
    }
}

impl fmt::Display for InvalidAccelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid accelerator: {:?}", self.accelerator)
    }
}

impl std::error::Error for InvalidAccelerator {}

/// Words that contain "or" but are modifier names, not alternatives
const COMPOUND_ALIASES: &[&str] = &["commandorcontrol", "cmdorctrl"];

const ALTERNATIVE_SEPARATOR: &str = "or";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Plus,
    Or,
}

fn starts_with_ignore_case(haystack: &[u8], needle: &str) -> bool {
    haystack.len() >= needle.len()
        && haystack[..needle.len()].eq_ignore_ascii_case(needle.as_bytes())
}

/// Split an accelerator into text runs, `+` and `or` delimiters in one pass
///
/// Delimiters are ASCII, so every slice boundary falls on a char boundary.
fn tokenize(input: &str) -> Vec<Token<'_>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut run_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let rest = &bytes[i..];

        if let Some(alias) = COMPOUND_ALIASES
            .iter()
            .find(|alias| starts_with_ignore_case(rest, alias))
        {
            i += alias.len();
            continue;
        }

        let delimiter = if rest[0] == b'+' {
            Some((Token::Plus, 1))
        } else if starts_with_ignore_case(rest, ALTERNATIVE_SEPARATOR) {
            Some((Token::Or, ALTERNATIVE_SEPARATOR.len()))
        } else {
            None
        };

        match delimiter {
            Some((token, len)) => {
                if run_start < i {
                    tokens.push(Token::Text(&input[run_start..i]));
                }
                tokens.push(token);
                i += len;
                run_start = i;
            }
            None => i += 1,
        }
    }

    if run_start < bytes.len() {
        tokens.push(Token::Text(&input[run_start..]));
    }

    tokens
}

/// One alternative: its `+`-separated segments, untrimmed
#[derive(Debug, Default)]
struct Fragment<'a> {
    segments: Vec<&'a str>,
}

impl<'a> Fragment<'a> {
    fn source(&self) -> String {
        self.segments.join("+").trim().to_string()
    }

    /// Split into (modifier segments, terminal key)
    fn split_terminal(&self) -> Result<(&[&'a str], &'a str), InvalidAccelerator> {
        match self.segments.split_last() {
            Some((&key, modifiers)) if !key.trim().is_empty() => Ok((modifiers, key.trim())),
            _ => Err(InvalidAccelerator::new(self.source())),
        }
    }
}

fn split_fragments<'a>(tokens: &[Token<'a>]) -> Vec<Fragment<'a>> {
    let mut fragments = Vec::new();
    let mut current = Fragment::default();
    let mut segment = "";

    for token in tokens {
        match *token {
            Token::Text(text) => segment = text,
            Token::Plus => current.segments.push(std::mem::take(&mut segment)),
            Token::Or => {
                current.segments.push(std::mem::take(&mut segment));
                fragments.push(std::mem::take(&mut current));
            }
        }
    }
    current.segments.push(segment);
    fragments.push(current);

    fragments
}

/// Parse an accelerator pattern such as `"CmdOrCtrl+Shift+S"` or `"EnterOrSpace"`
///
/// Blank input, and a combination the platform cannot produce (`Option` off
/// Apple), parse to [`AcceleratorPattern::inert`]. Terminal keys are
/// lowercased but not normalized; normalization applies to event keys at
/// match time.
pub fn parse_accelerator<P>(
    pattern: &str,
    platform: &P,
) -> Result<AcceleratorPattern, InvalidAccelerator>
where
    P: PlatformDetector + ?Sized,
{
    if pattern.trim().is_empty() {
        return Ok(AcceleratorPattern::inert());
    }

    let tokens = tokenize(pattern);
    let fragments = split_fragments(&tokens);

    // Outer None: first alternative not seen yet. Inner None: unsatisfiable.
    let mut mods: Option<Option<Modifiers>> = None;
    let mut keys = Vec::with_capacity(fragments.len());

    for fragment in &fragments {
        let (modifiers, key) = fragment.split_terminal()?;
        if mods.is_none() {
            let lowered: Vec<String> = modifiers
                .iter()
                .map(|m| m.trim().to_lowercase())
                .collect();
            mods = Some(resolve_modifiers(lowered.iter().map(String::as_str), platform));
        }
        keys.push(key.to_lowercase());
    }

    let Some(mods) = mods.flatten() else {
        tracing::trace!(pattern, "accelerator cannot be pressed on this platform");
        return Ok(AcceleratorPattern::inert());
    };

    let parsed = AcceleratorPattern::new(mods, keys);
    tracing::trace!(pattern, parsed = %parsed, "parsed accelerator");
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accelerator::platform::Platform;

    fn parse(pattern: &str) -> AcceleratorPattern {
        parse_accelerator(pattern, &Platform::Other).unwrap()
    }

    #[test]
    fn test_tokenize_alternatives() {
        assert_eq!(
            tokenize("Ctrl+EnterOrSpace"),
            vec![
                Token::Text("Ctrl"),
                Token::Plus,
                Token::Text("Enter"),
                Token::Or,
                Token::Text("Space"),
            ]
        );
    }

    #[test]
    fn test_tokenize_keeps_compound_aliases() {
        assert_eq!(
            tokenize("CmdOrCtrl+n"),
            vec![Token::Text("CmdOrCtrl"), Token::Plus, Token::Text("n")]
        );
        assert_eq!(
            tokenize("COMMANDORCONTROL+aORb"),
            vec![
                Token::Text("COMMANDORCONTROL"),
                Token::Plus,
                Token::Text("a"),
                Token::Or,
                Token::Text("b"),
            ]
        );
    }

    #[test]
    fn test_tokenize_non_ascii_key() {
        assert_eq!(
            tokenize("alt+é"),
            vec![Token::Text("alt"), Token::Plus, Token::Text("é")]
        );
    }

    #[test]
    fn test_parse_simple_key() {
        let parsed = parse("a");
        assert_eq!(parsed.keys, vec!["a"]);
        assert!(parsed.mods.is_empty());
    }

    #[test]
    fn test_parse_key_with_multiple_modifiers() {
        let parsed = parse("Ctrl+Shift+S");
        assert_eq!(parsed.keys, vec!["s"]);
        assert_eq!(parsed.mods, Modifiers::CTRL | Modifiers::SHIFT);
    }

    #[test]
    fn test_parse_modifier_order_irrelevant() {
        assert_eq!(parse("ctrl+shift+z"), parse("shift+ctrl+z"));
    }

    #[test]
    fn test_parse_trims_segments() {
        let parsed = parse(" Ctrl + S ");
        assert_eq!(parsed.keys, vec!["s"]);
        assert!(parsed.ctrl());
    }

    #[test]
    fn test_parse_alternatives_share_first_modifiers() {
        let parsed = parse("Ctrl+EnterOrSpace");
        assert_eq!(parsed.keys, vec!["enter", "space"]);
        assert_eq!(parsed.mods, Modifiers::CTRL);
    }

    #[test]
    fn test_parse_later_alternative_modifiers_discarded() {
        let parsed = parse("EnterOrShift+Space");
        assert_eq!(parsed.keys, vec!["enter", "space"]);
        assert!(parsed.mods.is_empty());
    }

    #[test]
    fn test_parse_cmd_or_ctrl_by_platform() {
        let other = parse_accelerator("CmdOrCtrl+n", &Platform::Other).unwrap();
        assert_eq!(other.mods, Modifiers::CTRL);
        assert_eq!(other.keys, vec!["n"]);

        let apple = parse_accelerator("CommandOrControl+n", &Platform::Apple).unwrap();
        assert_eq!(apple.mods, Modifiers::META);
    }

    #[test]
    fn test_parse_option_off_apple_is_inert() {
        let apple = parse_accelerator("Option+F", &Platform::Apple).unwrap();
        assert_eq!(apple.mods, Modifiers::ALT);
        assert_eq!(apple.keys, vec!["f"]);

        assert_eq!(parse("Option+F"), AcceleratorPattern::inert());
        assert_eq!(parse("Shift+Option+FOrG"), AcceleratorPattern::inert());
        // Malformed alternatives are still reported
        assert_eq!(
            parse_accelerator("Option+FOrCtrl+", &Platform::Other).unwrap_err(),
            InvalidAccelerator::new("Ctrl+")
        );
    }

    #[test]
    fn test_parse_blank_is_inert() {
        assert_eq!(parse(""), AcceleratorPattern::inert());
        assert_eq!(parse("   \t"), AcceleratorPattern::inert());
    }

    #[test]
    fn test_parse_duplicate_keys_kept() {
        assert_eq!(parse("aOrA").keys, vec!["a", "a"]);
    }

    #[test]
    fn test_trailing_plus_is_invalid() {
        let err = parse_accelerator("ctrl+", &Platform::Other).unwrap_err();
        assert_eq!(err.accelerator, "ctrl+");
    }

    #[test]
    fn test_lone_plus_is_invalid() {
        let err = parse_accelerator("+", &Platform::Other).unwrap_err();
        assert_eq!(err, InvalidAccelerator::new("+"));
    }

    #[test]
    fn test_invalid_alternative_reports_fragment() {
        let err = parse_accelerator("Ctrl+EnterOrShift+", &Platform::Other).unwrap_err();
        assert_eq!(err.accelerator, "Shift+");

        let err = parse_accelerator("EnterOr", &Platform::Other).unwrap_err();
        assert_eq!(err.accelerator, "");
    }

    #[test]
    fn test_error_display() {
        let err = InvalidAccelerator::new("ctrl+");
        assert_eq!(err.to_string(), "Invalid accelerator: \"ctrl+\"");
    }
}
