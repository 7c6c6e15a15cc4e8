//! Plain-text rendering of a [`Report`] for terminals.
//!
//! Produces the breakdown, flag, match, and capture sections with the
//! same empty-state messages the interactive editor shows.

use std::fmt::Write as _;

use crate::flags::FlagStatus;
use crate::report::Report;
use crate::segments::Segment;

/// How matched segments are highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// Wrap matches in `«` and `»`.
    #[default]
    Plain,
    /// Reverse-video ANSI escapes.
    Ansi,
}

impl Style {
    const fn markers(self) -> (&'static str, &'static str) {
        match self {
            Self::Plain => ("«", "»"),
            Self::Ansi => ("\x1b[7m", "\x1b[0m"),
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub style: Style,
}

/// Render `report` into a string.
#[must_use]
pub fn render(report: &Report<'_>, options: &RenderOptions) -> String {
    let mut out = String::new();

    if let Some(error) = &report.error {
        let _ = writeln!(out, "Error: {error}\n");
    }

    render_breakdown(&mut out, report);
    out.push('\n');
    render_flags(&mut out, report);
    out.push('\n');
    render_matches(&mut out, report, options.style);
    out.push('\n');
    render_captures(&mut out, report);

    out
}

fn render_breakdown(out: &mut String, report: &Report<'_>) {
    out.push_str("Breakdown:\n");
    if report.tokens.is_empty() {
        out.push_str("  Start typing to see a breakdown of your regex\n");
        return;
    }

    let width = report
        .tokens
        .iter()
        .map(|t| t.token.text.chars().count())
        .max()
        .unwrap_or(0);

    for described in &report.tokens {
        let _ = writeln!(
            out,
            "  {:<width$}  {}",
            described.token.text, described.class
        );
    }
}

fn render_flags(out: &mut String, report: &Report<'_>) {
    out.push_str("Flags:\n");
    if report.flags.is_empty() {
        out.push_str("  Add flags to change matching behavior\n");
        return;
    }

    for flag in &report.flags {
        let marker = match flag.status {
            FlagStatus::Known(_) => ' ',
            FlagStatus::Unsupported(_) | FlagStatus::Invalid => '!',
        };
        let _ = writeln!(out, " {marker}{}  {}", flag.letter, flag.detail());
    }
}

fn render_matches(out: &mut String, report: &Report<'_>, style: Style) {
    out.push_str("Matches:\n");
    if report.is_input_empty() && report.matches.match_count() == 0 {
        out.push_str("  Add input to see matches.\n");
        return;
    }

    for segments in report.segments() {
        let mut line = String::new();
        render_line(&mut line, &segments, style);
        if !line.is_empty() {
            out.push_str("  ");
            out.push_str(&line);
        }
        out.push('\n');
    }
}

fn render_line(out: &mut String, segments: &[Segment<'_>], style: Style) {
    let (open, close) = style.markers();
    for segment in segments {
        if segment.matched {
            out.push_str(open);
            out.push_str(segment.text);
            out.push_str(close);
        } else {
            out.push_str(segment.text);
        }
    }
}

fn render_captures(out: &mut String, report: &Report<'_>) {
    out.push_str("Capture groups:\n");
    let captures = report.captures();
    if captures.is_empty() {
        out.push_str("  No capture groups\n");
        return;
    }

    for (index, set) in captures.iter().enumerate() {
        let _ = writeln!(out, "  Match {} capture groups", index + 1);
        for (item_index, item) in set.iter().enumerate() {
            let _ = writeln!(out, "    {}: {item}", item_index + 1);
        }
    }
}
