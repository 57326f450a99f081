//! The game program: pure composition over the capability traits.
//!
//! Nothing here knows how computations execute. Each function builds a
//! deferred computation out of `pure`/`chain`/`tail_rec` and the console,
//! parsing, and random capabilities; an interpreter's runner forces it.

use crate::config::GameConfig;
use crate::effects::Effects;
use std::ops::ControlFlow;
use tracing::instrument;

/// A single round: prompt, draw the secret, read and parse the guess,
/// report win or loss.
///
/// Effect order is fixed: the prompt write happens before the secret is
/// drawn, which happens before the guess is read. A parse failure is not
/// caught here; it fails the whole computation.
#[instrument(skip(fx))]
pub fn game_round<F: Effects>(fx: &F, config: GameConfig) -> F::Comp<()> {
    let prompt = fx.write_line(&format!(
        "Please enter a number from {} to {}",
        config.min(),
        config.max()
    ));
    let fx1 = fx.clone();
    fx.chain(prompt, move |()| {
        let fx2 = fx1.clone();
        fx1.chain(fx1.random_int(config.min(), config.max()), move |secret| {
            let parse_fx = fx2.clone();
            let outcome_fx = fx2.clone();
            let guess = fx2.chain(fx2.read_line(), move |line| parse_fx.parse_int(&line));
            fx2.chain(guess, move |guess| {
                if guess == secret {
                    outcome_fx.write_line("You Win!")
                } else {
                    outcome_fx.write_line(&format!("Wrong! The right number was {secret}"))
                }
            })
        })
    })
}

/// Plays rounds until the player declines a replay.
///
/// Iteration runs through [`crate::effects::Sequence::tail_rec`] rather
/// than recursion, so an arbitrarily long run of "y" answers executes in
/// constant stack and constant pending-continuation depth.
#[instrument(skip(fx))]
pub fn game_loop<F: Effects>(fx: &F, config: GameConfig) -> F::Comp<()> {
    let fx_step = fx.clone();
    fx.tail_rec((), move |()| {
        let fx1 = fx_step.clone();
        let round = game_round(&fx_step, config);
        fx_step.chain(round, move |()| {
            let fx2 = fx1.clone();
            let ask = fx1.write_line("Do you want to play again? [Y/n]:");
            fx1.chain(ask, move |()| {
                let fx3 = fx2.clone();
                fx2.chain(fx2.read_line(), move |answer| {
                    if wants_replay(&answer) {
                        fx3.pure(ControlFlow::Continue(()))
                    } else {
                        fx3.pure(ControlFlow::Break(()))
                    }
                })
            })
        })
    })
}

/// The full session: greeting, replay loop, farewell.
///
/// No error recovery happens at this layer: a parse failure or an
/// interrupt aborts the computation before "Done." is emitted.
#[instrument(skip(fx))]
pub fn game<F: Effects>(fx: &F, config: GameConfig) -> F::Comp<()> {
    let greeting = fx.write_line("Hello & welcome to our game (press CTRL/CMD+C to exit)");
    let fx1 = fx.clone();
    fx.chain(greeting, move |()| {
        let fx2 = fx1.clone();
        let looped = game_loop(&fx1, config);
        fx1.chain(looped, move |()| fx2.write_line("Done."))
    })
}

/// An answer continues the game when, after trimming, it is empty or
/// case-insensitively equals "y".
fn wants_replay(answer: &str) -> bool {
    let trimmed = answer.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_on_y_any_case() {
        assert!(wants_replay("y"));
        assert!(wants_replay("Y"));
        assert!(wants_replay(" y "));
    }

    #[test]
    fn test_replay_on_empty_answer() {
        assert!(wants_replay(""));
        assert!(wants_replay("   "));
    }

    #[test]
    fn test_stop_on_anything_else() {
        assert!(!wants_replay("n"));
        assert!(!wants_replay("N"));
        assert!(!wants_replay("no"));
        assert!(!wants_replay("yes"));
        assert!(!wants_replay("q"));
    }
}
