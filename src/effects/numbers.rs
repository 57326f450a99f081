//! Numeric-parsing capability.

use super::Sequence;

/// Abstract base-10 integer parsing.
pub trait Numbers: Sequence {
    /// A computation yielding the integer value of `text`.
    ///
    /// Fails with an error carrying the offending text when `text` is not a
    /// valid base-10 integer under the interpreter's parsing rules.
    fn parse_int(&self, text: &str) -> Self::Comp<i64>;
}
