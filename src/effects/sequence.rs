//! Sequencing capability: lifting values and chaining dependent computations.

use std::ops::ControlFlow;

/// Defines the computational context an interpreter runs programs in.
///
/// Implementations must satisfy the monad laws, checked by the test suite
/// for every interpreter in this crate:
///
/// - right identity: `chain(m, pure)` behaves like `m`;
/// - left identity: `chain(pure(a), f)` behaves like `f(a)`;
/// - associativity: `chain(chain(m, f), g)` behaves like
///   `chain(m, |x| chain(f(x), g))`.
///
/// "Behaves like" covers both the final result and every observable effect.
pub trait Sequence {
    /// A deferred computation yielding an `A` when run.
    ///
    /// Constructing one performs no effect; effects happen only when the
    /// interpreter's runner forces it.
    type Comp<A>: Send
    where
        A: Send + 'static;

    /// Lifts a plain value into the context without any effect.
    fn pure<A>(&self, value: A) -> Self::Comp<A>
    where
        A: Send + 'static;

    /// Sequential composition: run `fa`, feed its result to `f`, run the
    /// computation `f` returns.
    fn chain<A, B, F>(&self, fa: Self::Comp<A>, f: F) -> Self::Comp<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Self::Comp<B> + Send + 'static;

    /// Stack-safe monadic iteration.
    ///
    /// Runs `step` repeatedly, threading the accumulator through
    /// [`ControlFlow::Continue`] until a step yields [`ControlFlow::Break`].
    /// Interpreters implement this with an explicit loop, so a logically
    /// unbounded repetition (such as a replay loop a player keeps answering
    /// "y" to) cannot grow the call stack or the pending-continuation chain.
    fn tail_rec<A, B, F>(&self, init: A, step: F) -> Self::Comp<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnMut(A) -> Self::Comp<ControlFlow<B, A>> + Send + 'static;
}
