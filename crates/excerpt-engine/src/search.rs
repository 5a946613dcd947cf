//! Binary searches over reading-ordered word arrays.
//!
//! Both searches return `None` for "not found"; callers treat that as a
//! normal branch (a click in the margin, a span outside the page).

use std::cmp::Ordering;
use std::ops::Range;

use shared_types::{Point, Span, Word};

use crate::geometry::compare_point_to_polygon;
use crate::region::EnrichedDocument;

/// Three-way comparison of a target span against a word's span: `Less` when
/// the target ends before the word starts, `Greater` when it starts at or
/// after the word's end, `Equal` on any overlap.
fn compare_spans(target: &Span, word: &Span) -> Ordering {
    if target.end() <= word.offset {
        Ordering::Less
    } else if target.offset >= word.end() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Find the maximal contiguous run of words in `range` whose spans overlap
/// `target`. Binary search to any overlapping word, then widen linearly in
/// both directions. Returns inclusive word indices, or `None` when the range
/// is empty or no word overlaps.
pub fn words_by_span(words: &[Word], range: Range<usize>, target: &Span) -> Option<(usize, usize)> {
    let mut low = range.start;
    let mut high = range.end.min(words.len());
    if low >= high {
        return None;
    }

    while low < high {
        let mid = low + (high - low) / 2;
        match compare_spans(target, &words[mid].span) {
            Ordering::Less => high = mid,
            Ordering::Greater => low = mid + 1,
            Ordering::Equal => {
                let mut first = mid;
                while first > range.start
                    && compare_spans(target, &words[first - 1].span) == Ordering::Equal
                {
                    first -= 1;
                }
                let mut last = mid;
                while last + 1 < range.end.min(words.len())
                    && compare_spans(target, &words[last + 1].span) == Ordering::Equal
                {
                    last += 1;
                }
                return Some((first, last));
            }
        }
    }

    None
}

/// Resolve a page-relative point to the index of the word whose polygon
/// contains it.
///
/// Narrows through the page's regions (every region containing the point is
/// tried in order, since enriched regions can overlap on noisy layouts), then
/// through the region's lines, then resolves the line's span to a narrow word
/// range and scans it. A point no word polygon contains yields `None` —
/// never a nearest-word guess.
pub fn word_at_point(
    document: &EnrichedDocument,
    page_index: usize,
    point: &Point,
) -> Option<usize> {
    let page = document.analysis().pages.get(page_index)?;

    for region in document.regions(page_index) {
        if compare_point_to_polygon(point, &region.polygon) != Ordering::Equal {
            continue;
        }
        let (first_line, last_line) = region.line_range;
        let (first_word, last_word) = region.word_range;
        for line in &page.lines[first_line..=last_line] {
            if compare_point_to_polygon(point, &line.polygon) != Ordering::Equal {
                continue;
            }
            let Some(extent) = line.extent() else {
                continue;
            };
            let Some((start, end)) = words_by_span(&page.words, first_word..last_word + 1, &extent)
            else {
                continue;
            };
            for index in start..=end {
                if compare_point_to_polygon(point, &page.words[index].polygon) == Ordering::Equal {
                    return Some(index);
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(content: &str, offset: usize) -> Word {
        Word {
            content: content.to_string(),
            polygon: vec![0.0; 8],
            span: Span {
                offset,
                length: content.len(),
            },
            confidence: 1.0,
        }
    }

    // "alpha beta gamma delta" laid out at offsets 0, 6, 11, 17.
    fn words() -> Vec<Word> {
        vec![
            word("alpha", 0),
            word("beta", 6),
            word("gamma", 11),
            word("delta", 17),
        ]
    }

    #[test]
    fn test_words_by_span_single_hit() {
        let words = words();
        let target = Span { offset: 6, length: 4 };
        assert_eq!(words_by_span(&words, 0..words.len(), &target), Some((1, 1)));
    }

    #[test]
    fn test_words_by_span_widens_to_full_run() {
        let words = words();
        // Covers "beta gamma" and a bit of "delta".
        let target = Span { offset: 6, length: 12 };
        assert_eq!(words_by_span(&words, 0..words.len(), &target), Some((1, 3)));
    }

    #[test]
    fn test_words_by_span_no_overlap() {
        let words = words();
        let target = Span { offset: 40, length: 5 };
        assert_eq!(words_by_span(&words, 0..words.len(), &target), None);
    }

    #[test]
    fn test_words_by_span_gap_between_words() {
        let words = words();
        // The space at offset 5 belongs to no word span.
        let target = Span { offset: 5, length: 1 };
        assert_eq!(words_by_span(&words, 0..words.len(), &target), None);
    }

    #[test]
    fn test_words_by_span_empty_range() {
        let words = words();
        let target = Span { offset: 0, length: 5 };
        assert_eq!(words_by_span(&words, 2..2, &target), None);
    }

    #[test]
    fn test_words_by_span_respects_range_bounds() {
        let words = words();
        let target = Span { offset: 0, length: 22 };
        // Restricted to the middle two words even though the span covers all.
        assert_eq!(words_by_span(&words, 1..3, &target), Some((1, 2)));
    }

    mod point_lookup {
        use super::super::word_at_point;
        use crate::region::EnrichedDocument;
        use crate::testfix::{word_center, DocumentBuilder};
        use shared_types::Point;

        #[test]
        fn test_point_inside_word_resolves_it() {
            let mut builder = DocumentBuilder::new();
            builder.page(&[&["alpha beta gamma", "delta epsilon zeta"]]);
            let document = EnrichedDocument::new(builder.build());

            let target = &document.analysis().pages[0].words[4];
            assert_eq!(
                word_at_point(&document, 0, &word_center(target)),
                Some(4)
            );
        }

        #[test]
        fn test_point_in_margin_resolves_nothing() {
            let mut builder = DocumentBuilder::new();
            builder.page(&[&["alpha beta gamma"]]);
            let document = EnrichedDocument::new(builder.build());

            let margin = Point { x: 7.9, y: 10.2 };
            assert_eq!(word_at_point(&document, 0, &margin), None);
        }

        #[test]
        fn test_point_between_words_is_not_guessed() {
            let mut builder = DocumentBuilder::new();
            builder.page(&[&["alpha beta"]]);
            let document = EnrichedDocument::new(builder.build());

            // Inside the line box, inside the inter-word gap.
            let words = &document.analysis().pages[0].words;
            let gap_x = (words[0].polygon[2] + words[1].polygon[0]) / 2.0;
            let gap = Point {
                x: gap_x,
                y: word_center(&words[0]).y,
            };
            assert_eq!(word_at_point(&document, 0, &gap), None);
        }

        #[test]
        fn test_unknown_page_index_resolves_nothing() {
            let mut builder = DocumentBuilder::new();
            builder.page(&[&["alpha beta"]]);
            let document = EnrichedDocument::new(builder.build());

            let point = word_center(&document.analysis().pages[0].words[0]);
            assert_eq!(word_at_point(&document, 5, &point), None);
        }
    }
}
