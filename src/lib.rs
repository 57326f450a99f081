//! Numguess library - a guessing game over swappable effect interpreters
//!
//! The game logic is written once against abstract capability traits and
//! runs under any interpreter that implements them.
//!
//! # Architecture
//!
//! - **Effects**: capability traits ([`Sequence`], [`Console`], [`Numbers`],
//!   [`Random`]) and the aggregate [`Effects`] bound
//! - **Game**: round, replay loop, and session wrapper composed purely from
//!   the capabilities
//! - **Interpreters**: [`Terminal`] (async tokio console) and [`Script`]
//!   (deterministic in-memory queues)
//!
//! # Example
//!
//! Running a scripted session:
//!
//! ```
//! use numguess::config::GameConfig;
//! use numguess::game::game;
//! use numguess::{Script, ScriptState};
//!
//! let mut state = ScriptState::new(["3", "n"], [3]);
//! game(&Script, GameConfig::default()).run(&mut state).unwrap();
//!
//! assert_eq!(state.written().last().map(String::as_str), Some("Done."));
//! assert_eq!(state.remaining_inputs(), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Public module declarations
pub mod cli;
pub mod config;
pub mod effects;
pub mod error;
pub mod game;
pub mod interpreters;

// Crate-level exports - configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - capability traits
pub use effects::{Console, Effects, Numbers, Random, Sequence};

// Crate-level exports - errors
pub use error::GameError;

// Crate-level exports - interpreters
pub use interpreters::{Script, ScriptComp, ScriptState, Terminal};
