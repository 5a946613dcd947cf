//! Forward text search: locating excerpt text in the document without any
//! coordinates, for citations that arrive with no stored bounds.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{SearchMatch, SearchResultSegment, Summary};

use crate::condense::condense_polygons;
use crate::region::EnrichedDocument;
use crate::summary::{build_summary, region_slices};

lazy_static! {
    /// Everything that is not a letter or digit, stripped by relaxed
    /// comparison.
    static ref NON_ALPHANUMERIC: Regex = Regex::new(r"[^\p{L}\p{N}]+").unwrap();
}

fn normalize_token(token: &str) -> String {
    NON_ALPHANUMERIC
        .replace_all(&token.to_lowercase(), "")
        .into_owned()
}

/// Find the first occurrence of `excerpt` in document reading order and
/// summarize it.
///
/// Comparison is exact and forward-only: a failed continuation restarts the
/// match counter at zero without re-examining the word that broke the run,
/// so overlapping candidate starts are intentionally not revisited. Empty or
/// single-character input short-circuits to the empty summary.
pub fn excerpt_to_summary(excerpt: &str, document: &EnrichedDocument) -> Summary {
    if excerpt.trim().len() <= 1 {
        return Summary::empty();
    }
    let target: Vec<&str> = excerpt.split_whitespace().collect();
    if target.is_empty() {
        return Summary::empty();
    }

    let mut matched = 0usize;
    for (page_index, page) in document.pages().iter().enumerate() {
        for (word_index, word) in page.words.iter().enumerate() {
            if word.content == target[matched] {
                matched += 1;
            } else if matched > 0 {
                matched = 0;
            }
            if matched == target.len() {
                let (start_page, start_word) =
                    match_start(document, page_index, word_index, target.len());
                return build_summary(document, start_page, start_word, page_index, word_index);
            }
        }
    }

    Summary::empty()
}

/// Where a completed match began. A match that does not fit on the ending
/// page started on the previous one; the counter cannot span further back
/// than that.
fn match_start(
    document: &EnrichedDocument,
    end_page: usize,
    end_word: usize,
    need: usize,
) -> (usize, usize) {
    if end_word + 1 >= need || end_page == 0 {
        (end_page, (end_word + 1).saturating_sub(need))
    } else {
        let on_previous = need - (end_word + 1);
        let previous = &document.pages()[end_page - 1];
        (
            end_page - 1,
            previous.words.len().saturating_sub(on_previous),
        )
    }
}

/// Every disjoint exact occurrence of `excerpt`, in document order. Each
/// match carries one segment per page it touches and a matching ratio of 1.0.
/// The scan resumes after a consumed run, so occurrences never overlap.
pub fn exact_match_search(excerpt: &str, document: &EnrichedDocument) -> Vec<SearchMatch> {
    search_matches(excerpt, document, false)
}

/// Like [`exact_match_search`] but comparing normalized tokens (lowercased,
/// punctuation stripped) and skipping punctuation-only words. The matching
/// ratio reports the fraction of words that also matched exactly.
pub fn relaxed_match_search(excerpt: &str, document: &EnrichedDocument) -> Vec<SearchMatch> {
    search_matches(excerpt, document, true)
}

fn search_matches(excerpt: &str, document: &EnrichedDocument, relaxed: bool) -> Vec<SearchMatch> {
    if excerpt.trim().len() <= 1 {
        return Vec::new();
    }
    let raw_target: Vec<&str> = excerpt.split_whitespace().collect();
    let target: Vec<String> = if relaxed {
        raw_target
            .iter()
            .map(|token| normalize_token(token))
            .filter(|token| !token.is_empty())
            .collect()
    } else {
        raw_target.iter().map(|token| token.to_string()).collect()
    };
    if target.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut matched = 0usize;
    let mut exact_hits = 0usize;
    let mut run_start: Option<(usize, usize)> = None;

    for (page_index, page) in document.pages().iter().enumerate() {
        for (word_index, word) in page.words.iter().enumerate() {
            let probe = if relaxed {
                normalize_token(&word.content)
            } else {
                word.content.clone()
            };
            if relaxed && probe.is_empty() {
                // Punctuation-only word: neutral, neither advances nor
                // breaks a relaxed run.
                continue;
            }
            if probe == target[matched] {
                if matched == 0 {
                    run_start = Some((page_index, word_index));
                    exact_hits = 0;
                }
                if raw_target.get(matched).copied() == Some(word.content.as_str()) {
                    exact_hits += 1;
                }
                matched += 1;
            } else if matched > 0 {
                matched = 0;
                run_start = None;
            }
            if matched == target.len() {
                if let Some((start_page, start_word)) = run_start.take() {
                    let ratio = exact_hits as f64 / target.len() as f64;
                    if let Some(found) =
                        build_match(document, start_page, start_word, page_index, word_index, ratio)
                    {
                        matches.push(found);
                    }
                }
                matched = 0;
            }
        }
    }

    matches
}

/// One segment per page the run touches, each with its condensed composite
/// polygon.
fn build_match(
    document: &EnrichedDocument,
    start_page: usize,
    start_word: usize,
    end_page: usize,
    end_word: usize,
    matching_ratio: f64,
) -> Option<SearchMatch> {
    let mut segments = Vec::new();
    for page_index in start_page..=end_page {
        let page_number = document.analysis().pages[page_index].page_number;
        let lower = (page_index == start_page).then_some(start_word);
        let upper = (page_index == end_page).then_some(end_word);
        let slices = region_slices(document, page_index, lower, upper);
        if slices.is_empty() {
            continue;
        }
        let text = slices
            .iter()
            .map(|slice| slice.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let polygons: Vec<_> = slices.into_iter().map(|slice| slice.polygon).collect();
        let bounding_regions = condense_polygons(&polygons, false)?;
        segments.push(SearchResultSegment {
            text,
            page: page_number,
            bounding_regions,
        });
    }
    (!segments.is_empty()).then_some(SearchMatch {
        segments,
        matching_ratio,
    })
}
