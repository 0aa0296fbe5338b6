//! Error types for the caller-facing game surface.

/// A move rejected by the session because it is not legal at the current
/// state.
///
/// The session's real state is left untouched when this is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IllegalMove {
    mv: String,
}

impl IllegalMove {
    /// Record the rejected move's debug rendering.
    pub fn new(mv: impl Into<String>) -> Self {
        Self { mv: mv.into() }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "illegal move: {}", self.mv)
    }
}

impl std::error::Error for IllegalMove {}

/// Input text that does not denote a move of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMoveError {
    input: String,
    expected: &'static str,
}

impl ParseMoveError {
    /// Record the offending input and a short description of the
    /// accepted form.
    pub fn new(input: impl Into<String>, expected: &'static str) -> Self {
        Self {
            input: input.into(),
            expected,
        }
    }

    /// The input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cannot parse {:?} as a move: expected {}",
            self.input, self.expected
        )
    }
}

impl std::error::Error for ParseMoveError {}
