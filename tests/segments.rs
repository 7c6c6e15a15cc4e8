//! Segment building on top of real match results.

mod common;

use common::regex;
use regularish::{Segment, build_segments, match_lines};

fn joined(segments: &[Segment<'_>]) -> String {
    segments.iter().map(|s| s.text).collect()
}

fn marked(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.matched {
                format!("<{}>", s.text)
            } else {
                s.text.to_string()
            }
        })
        .collect()
}

#[test]
fn demo_line_is_fully_matched() {
    let result = match_lines(Some(&regex(r"(\/) (o,,o) (\/)", "g")), "/ o,,o /");
    let segments = build_segments(result.lines[0], &result.spans[0]);
    assert_eq!(marked(&segments), "</ o,,o />");
}

#[test]
fn matches_in_the_middle() {
    let line = "cat scatter";
    let result = match_lines(Some(&regex("cat", "g")), line);
    let segments = build_segments(line, &result.spans[0]);
    assert_eq!(marked(&segments), "<cat> s<cat>ter");
    assert_eq!(joined(&segments), line);
}

#[test]
fn zero_width_matches_become_empty_segments() {
    let line = "aaab";
    let result = match_lines(Some(&regex("a*", "g")), line);
    let segments = build_segments(line, &result.spans[0]);
    assert_eq!(marked(&segments), "<aaa><>b<>");
    assert_eq!(segments.iter().filter(|s| s.is_empty()).count(), 2);
}

#[test]
fn every_line_round_trips() {
    let input = "alpha beta\n\ngamma\nβeta δelta";
    let result = match_lines(Some(&regex(r"\w+", "g")), input);
    for (line, spans) in result.lines.iter().zip(&result.spans) {
        assert_eq!(joined(&build_segments(line, spans)), *line);
    }
}

#[test]
fn unmatched_line_is_single_segment() {
    let result = match_lines(Some(&regex("z", "g")), "abc");
    let segments = build_segments(result.lines[0], &result.spans[0]);
    assert_eq!(
        segments,
        vec![Segment {
            text: "abc",
            matched: false
        }]
    );
}
