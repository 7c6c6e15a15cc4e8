//! The boundary between this crate and a regular expression engine.
//!
//! A [`PatternCompiler`] turns a pattern and a [`FlagSet`] into a
//! [`Matcher`]. Matchers hold no search position of their own: every
//! call to [`Matcher::exec_next`] receives the offset to search from,
//! and callers decide how that offset moves between calls.

use crate::flags::FlagSet;

/// Error produced when a pattern cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// Malformed pattern syntax or an incompatible flag combination.
    #[error("invalid regular expression: {message}")]
    InvalidPattern { message: String },
    /// A flag the engine does not recognise.
    #[error("unsupported flag '{0}'")]
    UnsupportedFlag(char),
}

/// One successful match within a subject string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'h> {
    /// Byte offset of the match start.
    pub index: usize,
    /// The full matched text.
    pub text: &'h str,
    /// Capturing groups in order; `None` for groups that did not take part.
    pub groups: Vec<Option<&'h str>>,
}

impl MatchResult<'_> {
    /// Byte offset one past the end of the match.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.index + self.text.len()
    }
}

/// A compiled pattern.
pub trait Matcher {
    /// Whether matching should continue after the first hit on a line.
    fn is_repeatable(&self) -> bool;

    /// Find the next match in `subject` starting at byte offset `from`.
    fn exec_next<'h>(&self, subject: &'h str, from: usize) -> Option<MatchResult<'h>>;
}

/// Something that can compile patterns into [`Matcher`]s.
pub trait PatternCompiler {
    type Matcher: Matcher;

    /// Compile `pattern` under `flags`.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::InvalidPattern`] if the engine rejects the
    /// pattern, or [`CompileError::UnsupportedFlag`] for a flag it cannot
    /// honour.
    fn compile(&self, pattern: &str, flags: &FlagSet) -> Result<Self::Matcher, CompileError>;
}

/// Parse a flag string and compile `pattern` with it.
///
/// # Errors
///
/// Returns [`CompileError::UnsupportedFlag`] for an unknown flag letter,
/// [`CompileError::InvalidPattern`] for a duplicate or conflicting flag,
/// and otherwise whatever the compiler reports.
pub fn compile_with<C: PatternCompiler>(
    compiler: &C,
    pattern: &str,
    flags: &str,
) -> Result<C::Matcher, CompileError> {
    let flags: FlagSet = flags.parse()?;
    compiler.compile(pattern, &flags)
}
