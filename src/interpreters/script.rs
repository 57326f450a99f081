//! Deterministic interpreter running against scripted in-memory state.
//!
//! A [`ScriptComp`] is a thunk over [`ScriptState`]: reads dequeue pending
//! input lines, writes append to a log, and random draws dequeue pending
//! numbers. Tests build a state per scenario, run a program, and assert on
//! the log and on full consumption of the queues.

use super::parse_base10;
use crate::effects::{Console, Numbers, Random, Sequence};
use crate::error::GameError;
use std::collections::VecDeque;
use std::ops::ControlFlow;
use tracing::debug;

/// Scripted session state threaded through every [`ScriptComp`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptState {
    inputs: VecDeque<String>,
    written: Vec<String>,
    randoms: VecDeque<i64>,
}

impl ScriptState {
    /// Builds a state from pending input lines and pending random numbers.
    pub fn new<I, S>(inputs: I, randoms: impl IntoIterator<Item = i64>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            written: Vec::new(),
            randoms: randoms.into_iter().collect(),
        }
    }

    /// Every line written so far, in order.
    pub fn written(&self) -> &[String] {
        &self.written
    }

    /// Input lines not yet consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Random numbers not yet consumed.
    pub fn remaining_randoms(&self) -> usize {
        self.randoms.len()
    }

    fn next_input(&mut self) -> Result<String, GameError> {
        self.inputs.pop_front().ok_or(GameError::ScriptExhausted {
            resource: "input lines",
        })
    }

    fn next_random(&mut self) -> Result<i64, GameError> {
        self.randoms.pop_front().ok_or(GameError::ScriptExhausted {
            resource: "random numbers",
        })
    }

    fn record(&mut self, line: &str) {
        self.written.push(line.to_owned());
    }
}

/// A deferred computation over [`ScriptState`].
///
/// Nothing executes until [`ScriptComp::run`] forces it.
pub struct ScriptComp<A>(Thunk<A>);

type Thunk<A> = Box<dyn FnOnce(&mut ScriptState) -> Result<A, GameError> + Send>;

impl<A> ScriptComp<A> {
    fn new(f: impl FnOnce(&mut ScriptState) -> Result<A, GameError> + Send + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Runs the computation, consuming it and mutating `state`.
    ///
    /// This is the runner for the scripted context: synchronous, and
    /// deterministic for a given starting state.
    pub fn run(self, state: &mut ScriptState) -> Result<A, GameError> {
        (self.0)(state)
    }
}

/// The scripted interpreter handle. Stateless; the session state is owned
/// by the caller and supplied at run time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Script;

impl Sequence for Script {
    type Comp<A>
        = ScriptComp<A>
    where
        A: Send + 'static;

    fn pure<A>(&self, value: A) -> Self::Comp<A>
    where
        A: Send + 'static,
    {
        ScriptComp::new(move |_| Ok(value))
    }

    fn chain<A, B, F>(&self, fa: Self::Comp<A>, f: F) -> Self::Comp<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Self::Comp<B> + Send + 'static,
    {
        ScriptComp::new(move |state| {
            let a = fa.run(state)?;
            f(a).run(state)
        })
    }

    fn tail_rec<A, B, F>(&self, init: A, mut step: F) -> Self::Comp<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnMut(A) -> Self::Comp<ControlFlow<B, A>> + Send + 'static,
    {
        ScriptComp::new(move |state| {
            let mut acc = init;
            loop {
                match step(acc).run(state)? {
                    ControlFlow::Continue(next) => acc = next,
                    ControlFlow::Break(done) => return Ok(done),
                }
            }
        })
    }
}

impl Console for Script {
    fn write_line(&self, line: &str) -> Self::Comp<()> {
        let line = line.to_owned();
        ScriptComp::new(move |state| {
            debug!(line = %line, "script write");
            state.record(&line);
            Ok(())
        })
    }

    fn read_line(&self) -> Self::Comp<String> {
        ScriptComp::new(|state| state.next_input())
    }
}

impl Numbers for Script {
    fn parse_int(&self, text: &str) -> Self::Comp<i64> {
        let text = text.to_owned();
        ScriptComp::new(move |_| parse_base10(&text))
    }
}

impl Random for Script {
    /// The bounds are ignored; the next scripted number is yielded
    /// regardless, so scenarios stay in full control of the draw.
    fn random_int(&self, _min: i64, _max: i64) -> Self::Comp<i64> {
        ScriptComp::new(|state| state.next_random())
    }
}
