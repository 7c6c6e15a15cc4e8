//! Line-by-line matching driven by a compiled [`Matcher`].
//!
//! The subject is split on `\n` and every line is searched on its own,
//! starting from offset zero. Repeatable matchers are stepped through the
//! line with a [`SearchCursor`] until they stop finding matches.

use tracing::trace;

use crate::compiler::{MatchResult, Matcher};

/// Where a match was found within one line.
///
/// Offsets are byte offsets into the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    pub from: usize,
    pub to: usize,
    pub text: String,
}

impl MatchSpan {
    /// Whether the match is zero-width.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

impl From<&MatchResult<'_>> for MatchSpan {
    fn from(found: &MatchResult<'_>) -> Self {
        Self {
            from: found.index,
            to: found.end(),
            text: found.text.to_string(),
        }
    }
}

/// Non-empty captured groups of one match, in group order.
pub type CaptureSet = Vec<String>;

/// The search position within a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchCursor {
    offset: usize,
}

impl SearchCursor {
    /// A cursor at the start of a line.
    #[must_use]
    pub const fn start() -> Self {
        Self { offset: 0 }
    }

    #[must_use]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Move past `span`, or return `None` when `line` is exhausted.
    ///
    /// A zero-width span advances the cursor by one character so the
    /// next search cannot find the same empty match again. The cursor
    /// never moves backwards.
    #[must_use]
    pub fn advance(self, line: &str, span: &MatchSpan) -> Option<Self> {
        let next = if span.is_empty() {
            let step = line.get(span.to..)?.chars().next()?.len_utf8();
            span.to + step
        } else {
            span.to
        };

        (next > self.offset && next <= line.len()).then_some(Self { offset: next })
    }
}

/// Match spans and captures for every line of a subject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMatches<'a> {
    /// The subject split on `\n`.
    pub lines: Vec<&'a str>,
    /// Spans per line, parallel to `lines`.
    pub spans: Vec<Vec<MatchSpan>>,
    /// Capture sets of all lines, in line order then match order.
    pub captures: Vec<CaptureSet>,
}

impl LineMatches<'_> {
    /// Total number of matches across all lines.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.spans.iter().map(Vec::len).sum()
    }
}

/// Split `subject` into lines; an empty subject has one empty line.
#[must_use]
pub fn split_lines(subject: &str) -> Vec<&str> {
    subject.split('\n').collect()
}

/// Run `matcher` over each line of `subject`.
///
/// Without a matcher every line gets an empty span list.
pub fn match_lines<'a, M: Matcher>(matcher: Option<&M>, subject: &'a str) -> LineMatches<'a> {
    let lines = split_lines(subject);
    let mut spans = Vec::with_capacity(lines.len());
    let mut captures = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let line_spans = match matcher {
            Some(matcher) => match_line(matcher, line, &mut captures),
            None => Vec::new(),
        };
        trace!(target: "regularish", line = index, matches = line_spans.len(), "matched line");
        spans.push(line_spans);
    }

    LineMatches {
        lines,
        spans,
        captures,
    }
}

/// Find the spans of one line, appending any capture sets to `captures`.
pub fn match_line<M: Matcher>(
    matcher: &M,
    line: &str,
    captures: &mut Vec<CaptureSet>,
) -> Vec<MatchSpan> {
    let mut spans = Vec::new();
    let mut cursor = SearchCursor::start();

    if !matcher.is_repeatable() {
        if let Some(found) = matcher.exec_next(line, cursor.offset()) {
            spans.push(record(&found, captures));
        }
        return spans;
    }

    while let Some(found) = matcher.exec_next(line, cursor.offset()) {
        let span = record(&found, captures);
        let next = cursor.advance(line, &span);
        spans.push(span);
        match next {
            Some(next) => cursor = next,
            None => break,
        }
    }

    spans
}

fn record(found: &MatchResult<'_>, captures: &mut Vec<CaptureSet>) -> MatchSpan {
    if let Some(set) = capture_set(found) {
        captures.push(set);
    }
    MatchSpan::from(found)
}

/// Keep the groups of `found` that took part and captured something.
#[must_use]
pub fn capture_set(found: &MatchResult<'_>) -> Option<CaptureSet> {
    let set: CaptureSet = found
        .groups
        .iter()
        .flatten()
        .filter(|group| !group.is_empty())
        .map(|group| (*group).to_string())
        .collect();
    (!set.is_empty()).then_some(set)
}
