//! Regular expression breakdown and line-aware match inspection.
//!
//! Splits a pattern into display tokens with short descriptions, runs a
//! compiled pattern over each line of an input, and partitions every line
//! into matched and unmatched segments together with the captured groups.
//!
//! # Quick start
//!
//! ## Break a pattern down
//!
//! ```
//! use regularish::{tokenize, describe};
//!
//! let tokens = tokenize(r"^\d{4}-[a-z]+$");
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["^", r"\d", "{4}", "-", "[a-z]", "+", "$"]);
//! assert_eq!(describe(&tokens[2]), "Exactly 4");
//! ```
//!
//! ## Match line by line
//!
//! ```
//! use regularish::{RegexCompiler, build_segments, compile_with, match_lines};
//!
//! let matcher = compile_with(&RegexCompiler::new(), "o+", "g").unwrap();
//! let result = match_lines(Some(&matcher), "foo\nbar\nboo");
//! assert_eq!(result.spans[0].len(), 1);
//! assert!(result.spans[1].is_empty());
//!
//! let segments = build_segments(result.lines[2], &result.spans[2]);
//! assert_eq!(segments[1].text, "oo");
//! assert!(segments[1].matched);
//! ```

#![allow(
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod backend;
pub mod classify;
pub mod compiler;
pub mod flags;
pub mod lexer;
pub mod matching;
pub mod render;
pub mod report;
pub mod segments;
pub mod telemetry;
pub mod token;

pub use backend::{RegexCompiler, RegexMatcher};
pub use classify::{Bounds, TokenClass, classify, describe};
pub use compiler::{CompileError, MatchResult, Matcher, PatternCompiler, compile_with};
pub use flags::{Flag, FlagReport, FlagSet, FlagStatus, FlagSupportCache, describe_flags};
pub use lexer::tokenize;
pub use matching::{CaptureSet, LineMatches, MatchSpan, SearchCursor, match_line, match_lines};
pub use render::{RenderOptions, Style, render};
pub use report::{DescribedToken, Query, Report};
pub use segments::{Segment, build_segments};
pub use token::{Token, TokenKind};
