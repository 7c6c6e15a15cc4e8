//! [`PatternCompiler`] implementation backed by the `regex` crate.

use regex::{Regex, RegexBuilder};

use crate::compiler::{CompileError, MatchResult, Matcher, PatternCompiler};
use crate::flags::FlagSet;

/// Compiles patterns with [`regex::RegexBuilder`].
#[derive(Debug, Clone, Default)]
pub struct RegexCompiler {
    size_limit: Option<usize>,
}

impl RegexCompiler {
    #[must_use]
    pub const fn new() -> Self {
        Self { size_limit: None }
    }

    /// Cap the size of compiled programs, in bytes.
    #[must_use]
    pub const fn with_size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }
}

impl PatternCompiler for RegexCompiler {
    type Matcher = RegexMatcher;

    fn compile(&self, pattern: &str, flags: &FlagSet) -> Result<RegexMatcher, CompileError> {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(flags.ignore_case)
            .multi_line(flags.multiline)
            .dot_matches_new_line(flags.dot_all)
            .unicode(true);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }

        let regex = builder.build().map_err(|err| CompileError::InvalidPattern {
            message: err.to_string(),
        })?;

        Ok(RegexMatcher {
            regex,
            global: flags.global,
            sticky: flags.sticky,
        })
    }
}

/// A pattern compiled by [`RegexCompiler`].
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
    global: bool,
    sticky: bool,
}

impl RegexMatcher {
    /// Number of capturing groups, not counting the whole match.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }
}

impl Matcher for RegexMatcher {
    fn is_repeatable(&self) -> bool {
        self.global
    }

    fn exec_next<'h>(&self, subject: &'h str, from: usize) -> Option<MatchResult<'h>> {
        if from > subject.len() || !subject.is_char_boundary(from) {
            return None;
        }

        let caps = self.regex.captures_at(subject, from)?;
        let whole = caps.get(0)?;
        // Leftmost search: a match anchored at `from` exists iff the
        // leftmost one starts there.
        if self.sticky && whole.start() != from {
            return None;
        }

        Some(MatchResult {
            index: whole.start(),
            text: whole.as_str(),
            groups: caps
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str()))
                .collect(),
        })
    }
}
