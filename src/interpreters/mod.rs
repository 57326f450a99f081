//! Interpreters: concrete bindings of the capability traits.
//!
//! [`Terminal`] runs asynchronously on tokio against real (or in-memory)
//! byte streams; [`Script`] runs synchronously against scripted queues for
//! deterministic tests. Both apply the same parsing rule, so a program
//! behaves identically under either one.

mod script;
mod terminal;

pub use script::{Script, ScriptComp, ScriptState};
pub use terminal::Terminal;

use crate::error::GameError;

/// Base-10 integer parsing rule shared by both interpreters.
///
/// The line is trimmed first (terminal input may carry a stray `\r`), then
/// parsed as a whole token; trailing garbage is rejected.
pub(crate) fn parse_base10(text: &str) -> Result<i64, GameError> {
    text.trim().parse::<i64>().map_err(|_| GameError::ParseInt {
        input: text.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_integers() {
        assert_eq!(parse_base10("3").unwrap(), 3);
        assert_eq!(parse_base10("-17").unwrap(), -17);
        assert_eq!(parse_base10("  42\r").unwrap(), 42);
    }

    #[test]
    fn test_rejects_non_numeric_text() {
        for bad in ["abc", "", "3x", "1.5", "0x10"] {
            let err = parse_base10(bad).unwrap_err();
            match err {
                GameError::ParseInt { input } => assert_eq!(input, bad),
                other => panic!("expected parse error, got {other}"),
            }
        }
    }
}
