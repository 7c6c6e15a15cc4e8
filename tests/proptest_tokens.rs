//! Property-based tests with proptest.
//!
//! The tokenizer must be lossless and stable on arbitrary input, segments
//! must always rebuild their line, and repeated matching must terminate
//! with sorted, non-overlapping spans even for patterns that match the
//! empty string.

mod common;

use common::{assert_well_formed, regex};
use proptest::prelude::*;
use regularish::{MatchSpan, build_segments, match_lines, tokenize};

/// Pattern-ish text heavy on metacharacters.
fn pattern_text() -> impl Strategy<Value = String> {
    "[a-c\\\\\\[\\]{}()|*+?^$.,0-9é]{0,24}"
}

/// Patterns that can match empty strings, combined from safe pieces.
fn empty_capable_pattern() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just("a*"),
        Just("b?"),
        Just("(a|)"),
        Just("^"),
        Just("$"),
        Just(r"\b"),
        Just("[ab]*"),
        Just("é?"),
        Just("(b)?"),
    ];
    prop::collection::vec(piece, 1..=4).prop_map(|pieces| pieces.concat())
}

/// Line text with multibyte characters mixed in.
fn line_text() -> impl Strategy<Value = String> {
    "[ab é]{0,16}"
}

/// A line plus sorted, non-overlapping spans on char boundaries.
fn line_with_spans() -> impl Strategy<Value = (String, Vec<MatchSpan>)> {
    (line_text(), prop::collection::vec(any::<prop::sample::Index>(), 0..8)).prop_map(
        |(line, picks)| {
            let bounds: Vec<usize> = line
                .char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(line.len()))
                .collect();
            let mut cuts: Vec<usize> = picks.iter().map(|p| *p.get(&bounds)).collect();
            cuts.sort_unstable();

            let spans = cuts
                .chunks(2)
                .filter(|pair| pair.len() == 2)
                .map(|pair| MatchSpan {
                    from: pair[0],
                    to: pair[1],
                    text: line[pair[0]..pair[1]].to_string(),
                })
                .collect();
            (line, spans)
        },
    )
}

proptest! {
    #[test]
    fn tokenize_is_lossless(pattern in pattern_text()) {
        let joined: String = tokenize(&pattern).into_iter().map(|t| t.text).collect();
        prop_assert_eq!(joined, pattern);
    }

    #[test]
    fn tokenize_never_emits_empty_tokens(pattern in pattern_text()) {
        prop_assert!(tokenize(&pattern).iter().all(|t| !t.text.is_empty()));
    }

    #[test]
    fn tokenize_is_idempotent(pattern in pattern_text()) {
        let first = tokenize(&pattern);
        let joined: String = first.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(tokenize(&joined), first);
    }

    #[test]
    fn tokenize_arbitrary_strings(pattern in any::<String>()) {
        let joined: String = tokenize(&pattern).into_iter().map(|t| t.text).collect();
        prop_assert_eq!(joined, pattern);
    }

    #[test]
    fn segments_rebuild_line((line, spans) in line_with_spans()) {
        let segments = build_segments(&line, &spans);
        let joined: String = segments.iter().map(|s| s.text).collect();
        prop_assert_eq!(&joined, &line);
        prop_assert_eq!(segments.iter().filter(|s| s.matched).count(), spans.len());
    }

    #[test]
    fn repeated_matching_terminates_without_overlap(
        pattern in empty_capable_pattern(),
        lines in prop::collection::vec(line_text(), 1..4),
    ) {
        let subject = lines.join("\n");
        let matcher = regex(&pattern, "g");
        let result = match_lines(Some(&matcher), &subject);

        prop_assert_eq!(result.lines.len(), lines.len());
        for (line, spans) in result.lines.iter().zip(&result.spans) {
            assert_well_formed(line, spans);
            // At most one match per character boundary.
            prop_assert!(spans.len() <= line.chars().count() + 1);
        }
    }
}
