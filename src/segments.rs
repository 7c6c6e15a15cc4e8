use crate::matching::MatchSpan;

/// A piece of a line, either inside a match or between matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

impl Segment<'_> {
    /// Zero-width match markers have no text.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Partition `line` into matched and unmatched segments.
///
/// `spans` must be sorted and non-overlapping, as produced by
/// [`match_line`](crate::matching::match_line). Zero-width spans yield an
/// empty matched segment. The segment texts concatenate to `line`.
#[must_use]
pub fn build_segments<'a>(line: &'a str, spans: &[MatchSpan]) -> Vec<Segment<'a>> {
    if spans.is_empty() {
        return vec![Segment {
            text: line,
            matched: false,
        }];
    }

    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        if cursor < span.from {
            segments.push(Segment {
                text: &line[cursor..span.from],
                matched: false,
            });
        }
        segments.push(Segment {
            text: &line[span.from..span.to],
            matched: true,
        });
        cursor = span.to;
    }

    if cursor < line.len() {
        segments.push(Segment {
            text: &line[cursor..],
            matched: false,
        });
    }

    segments
}
