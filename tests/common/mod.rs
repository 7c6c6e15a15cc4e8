#![allow(dead_code)]

use std::cell::RefCell;

use regularish::{
    CompileError, Flag, FlagSet, MatchResult, MatchSpan, Matcher, PatternCompiler, RegexCompiler,
    RegexMatcher, compile_with, tokenize,
};

/// Compile with the regex backend, panicking on failure.
pub fn regex(pattern: &str, flags: &str) -> RegexMatcher {
    compile_with(&RegexCompiler::new(), pattern, flags)
        .unwrap_or_else(|e| panic!("failed to compile /{pattern}/{flags}: {e}"))
}

/// Token texts of `pattern`.
pub fn texts(pattern: &str) -> Vec<String> {
    tokenize(pattern).into_iter().map(|t| t.text).collect()
}

/// `(from, to, text)` triples for easy comparison.
pub fn triples(spans: &[MatchSpan]) -> Vec<(usize, usize, &str)> {
    spans
        .iter()
        .map(|s| (s.from, s.to, s.text.as_str()))
        .collect()
}

/// Assert `spans` are sorted, non-overlapping, and inside `line`.
pub fn assert_well_formed(line: &str, spans: &[MatchSpan]) {
    for span in spans {
        assert!(span.from <= span.to, "inverted span {span:?}");
        assert!(span.to <= line.len(), "span {span:?} past end of {line:?}");
        assert_eq!(&line[span.from..span.to], span.text);
    }
    for pair in spans.windows(2) {
        assert!(
            pair[0].to <= pair[1].from,
            "overlapping spans {:?} and {:?} in {line:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Matcher that replays a fixed list of results and records every
/// offset it was asked to search from.
pub struct ScriptedMatcher {
    pub repeatable: bool,
    results: RefCell<Vec<Option<(usize, usize)>>>,
    pub calls: RefCell<Vec<usize>>,
}

impl ScriptedMatcher {
    pub fn new(repeatable: bool, results: Vec<Option<(usize, usize)>>) -> Self {
        Self {
            repeatable,
            results: RefCell::new(results),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Matcher for ScriptedMatcher {
    fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    fn exec_next<'h>(&self, subject: &'h str, from: usize) -> Option<MatchResult<'h>> {
        self.calls.borrow_mut().push(from);
        let mut results = self.results.borrow_mut();
        if results.is_empty() {
            return None;
        }
        let (start, end) = results.remove(0)?;
        Some(MatchResult {
            index: start,
            text: &subject[start..end],
            groups: Vec::new(),
        })
    }
}

/// Compiler that rejects a chosen flag and otherwise defers to the
/// regex backend.
pub struct RestrictedCompiler {
    pub rejected: Flag,
}

impl PatternCompiler for RestrictedCompiler {
    type Matcher = RegexMatcher;

    fn compile(&self, pattern: &str, flags: &FlagSet) -> Result<RegexMatcher, CompileError> {
        if flags.contains(self.rejected) {
            return Err(CompileError::UnsupportedFlag(self.rejected.letter()));
        }
        RegexCompiler::new().compile(pattern, flags)
    }
}
