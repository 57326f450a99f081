//! Random-generation capability.

use super::Sequence;

/// Abstract source of random integers.
pub trait Random: Sequence {
    /// A computation yielding a uniformly-distributed integer in the
    /// inclusive range `[min, max]`.
    ///
    /// `min <= max` is a precondition; whether an interpreter validates it
    /// or trusts the caller is up to the interpreter.
    fn random_int(&self, min: i64, max: i64) -> Self::Comp<i64>;
}
