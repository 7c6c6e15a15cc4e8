//! One full recomputation of everything shown for a pattern.
//!
//! A [`Report`] is rebuilt from scratch whenever the pattern, flags, or
//! input change: the pattern is re-tokenized, a fresh matcher is compiled,
//! and every line is matched again. Nothing carries over between reports.

use tracing::debug;

use crate::classify::{TokenClass, classify};
use crate::compiler::{PatternCompiler, compile_with};
use crate::flags::{FlagReport, FlagSupportCache, describe_flags};
use crate::lexer::tokenize;
use crate::matching::{CaptureSet, LineMatches, match_lines};
use crate::segments::{Segment, build_segments};
use crate::token::Token;

/// Pattern used when nothing else has been entered.
pub const DEMO_PATTERN: &str = r"(\/) (o,,o) (\/)";
pub const DEMO_FLAGS: &str = "g";
pub const DEMO_INPUT: &str = "Need a regular expression? Why not Zoidberg?\n/ o,,o /\n";

/// The three strings a report is computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub pattern: String,
    pub flags: String,
    pub input: String,
}

impl Query {
    pub fn new(
        pattern: impl Into<String>,
        flags: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            flags: flags.into(),
            input: input.into(),
        }
    }

    #[must_use]
    pub fn demo() -> Self {
        Self::new(DEMO_PATTERN, DEMO_FLAGS, DEMO_INPUT)
    }
}

/// A token together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribedToken {
    pub token: Token,
    pub class: TokenClass,
}

/// Everything a presentation layer needs for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<'a> {
    pub query: &'a Query,
    pub tokens: Vec<DescribedToken>,
    pub flags: Vec<FlagReport>,
    /// Compile error message, if the pattern could not be compiled.
    pub error: Option<String>,
    pub matches: LineMatches<'a>,
}

impl<'a> Report<'a> {
    /// Recompute tokens, flags, matches, and captures for `query`.
    pub fn compute<C: PatternCompiler>(
        compiler: &C,
        query: &'a Query,
        cache: &mut FlagSupportCache,
    ) -> Self {
        let tokens = tokenize(&query.pattern)
            .into_iter()
            .map(|token| {
                let class = classify(&token);
                DescribedToken { token, class }
            })
            .collect();

        let flags = describe_flags(&query.flags, compiler, cache);

        let (matcher, error) = match compile_with(compiler, &query.pattern, &query.flags) {
            Ok(matcher) => {
                debug!(
                    target: "regularish",
                    pattern = %query.pattern,
                    flags = %query.flags,
                    "compiled pattern"
                );
                (Some(matcher), None)
            }
            Err(err) => {
                debug!(
                    target: "regularish",
                    pattern = %query.pattern,
                    error = %err,
                    "pattern failed to compile"
                );
                (None, Some(err.to_string()))
            }
        };

        // An empty pattern means nothing has been entered yet, so it
        // highlights nothing even though it would match everywhere.
        let matcher = matcher.filter(|_| !query.pattern.is_empty());
        let matches = match_lines(matcher.as_ref(), &query.input);

        Self {
            query,
            tokens,
            flags,
            error,
            matches,
        }
    }

    /// Segments of every line, in line order.
    #[must_use]
    pub fn segments(&self) -> Vec<Vec<Segment<'a>>> {
        self.matches
            .lines
            .iter()
            .zip(&self.matches.spans)
            .map(|(line, spans)| build_segments(line, spans))
            .collect()
    }

    #[must_use]
    pub fn captures(&self) -> &[CaptureSet] {
        &self.matches.captures
    }

    /// Whether there is no input to match against.
    #[must_use]
    pub fn is_input_empty(&self) -> bool {
        self.query.input.is_empty()
    }
}
