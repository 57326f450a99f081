//! Error types shared by the game program and its interpreters.

use derive_more::{Display, Error};

/// Errors surfaced while running a game computation.
///
/// The game program never catches these; every failure propagates to
/// whoever forces the computation.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// Input text that could not be parsed as a base-10 integer.
    #[display("failed to parse integer from {input:?}")]
    ParseInt {
        /// The offending input text.
        input: String,
    },

    /// A pending read was cancelled by an interrupt signal.
    #[display("interrupted while waiting for input")]
    Interrupted,

    /// The input stream closed while a read was pending.
    #[display("input stream closed")]
    InputClosed,

    /// A scripted interpreter read past the end of one of its queues.
    #[display("script ran out of {resource}")]
    ScriptExhausted {
        /// Which queue was exhausted.
        resource: &'static str,
    },

    /// Underlying console I/O failure.
    #[display("console I/O error: {source}")]
    Io {
        /// The I/O error reported by the stream.
        source: std::io::Error,
    },
}

impl From<std::io::Error> for GameError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_carries_input() {
        let err = GameError::ParseInt {
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse integer from \"abc\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err = GameError::from(io);
        assert!(matches!(err, GameError::Io { .. }));
    }
}
