//! Console capability: line-oriented text input and output.

use super::Sequence;

/// Abstract console access.
pub trait Console: Sequence {
    /// A computation that outputs `line` followed by a line terminator.
    fn write_line(&self, line: &str) -> Self::Comp<()>;

    /// A computation that suspends until one line of input is available and
    /// yields it as-is, with no trimming or validation.
    fn read_line(&self) -> Self::Comp<String>;
}
