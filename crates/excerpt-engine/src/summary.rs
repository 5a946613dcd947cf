//! Cursor-range mapping: from a user-drawn selection to an excerpt summary.

use shared_types::{CursorRange, Polygon, PolygonOnPage, Summary};

use crate::geometry::bounding_polygon;
use crate::region::EnrichedDocument;
use crate::search::word_at_point;

/// One region's contribution to a summary: the clamped words' text and their
/// merged polygon.
pub(crate) struct RegionSlice {
    pub text: String,
    pub polygon: Polygon,
}

/// Slice a page's regions against an inclusive word window. `None` on either
/// side means unbounded (interior pages of a multi-page range).
pub(crate) fn region_slices(
    document: &EnrichedDocument,
    page_index: usize,
    start_word: Option<usize>,
    end_word: Option<usize>,
) -> Vec<RegionSlice> {
    let page = &document.analysis().pages[page_index];
    if page.words.is_empty() {
        return Vec::new();
    }
    let mut slices = Vec::new();
    for region in document.regions(page_index) {
        if let Some(start) = start_word {
            if region.word_range.1 < start {
                continue;
            }
        }
        if let Some(end) = end_word {
            if region.word_range.0 > end {
                break;
            }
        }
        let first = start_word.map_or(region.word_range.0, |s| s.max(region.word_range.0));
        let last = end_word.map_or(region.word_range.1, |e| e.min(region.word_range.1));
        // Out-of-range indices mean the upstream line/word data disagrees;
        // clamp instead of crashing.
        debug_assert!(last < page.words.len());
        let last = last.min(page.words.len() - 1);
        if first > last {
            continue;
        }
        let words = &page.words[first..=last];
        let text = words
            .iter()
            .map(|word| word.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        slices.push(RegionSlice {
            text,
            polygon: bounding_polygon(words.iter().map(|word| &word.polygon)),
        });
    }
    slices
}

/// Summary over an inclusive page window and the word window it carries:
/// `start_word` applies on the first page, `end_word` on the last, interior
/// pages contribute whole. One coarse polygon per touched (page, region).
pub(crate) fn build_summary(
    document: &EnrichedDocument,
    start_page: usize,
    start_word: usize,
    end_page: usize,
    end_word: usize,
) -> Summary {
    let mut excerpt = String::new();
    let mut polygons = Vec::new();
    for page_index in start_page..=end_page {
        let page_number = document.analysis().pages[page_index].page_number;
        let lower = (page_index == start_page).then_some(start_word);
        let upper = (page_index == end_page).then_some(end_word);
        for slice in region_slices(document, page_index, lower, upper) {
            if !excerpt.is_empty() {
                excerpt.push(' ');
            }
            excerpt.push_str(&slice.text);
            polygons.push(PolygonOnPage {
                page: page_number,
                polygon: slice.polygon,
            });
        }
    }
    Summary { excerpt, polygons }
}

/// Map a selection to its excerpt and per-region polygons.
///
/// A start point that resolves to no word yields the empty summary. An end
/// point that fails to resolve degrades to the one-word summary of the start
/// word, so interactive dragging over unrecognized page area stays
/// responsive instead of erroring.
pub fn range_to_summary(range: &CursorRange, document: &EnrichedDocument) -> Summary {
    let Some(start_page) = document.page_index(range.start.page) else {
        return Summary::empty();
    };
    let Some(start_word) = word_at_point(document, start_page, &range.start.point) else {
        return Summary::empty();
    };

    // Degenerate single click selects the one word under it.
    if range.start.page == range.end.page && range.start.point == range.end.point {
        return build_summary(document, start_page, start_word, start_page, start_word);
    }

    let end = document.page_index(range.end.page).and_then(|end_page| {
        word_at_point(document, end_page, &range.end.point).map(|word| (end_page, word))
    });
    match end {
        Some((end_page, end_word)) => {
            build_summary(document, start_page, start_word, end_page, end_word)
        }
        None => build_summary(document, start_page, start_word, start_page, start_word),
    }
}
