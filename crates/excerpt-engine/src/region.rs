//! Reading-order region preprocessing.
//!
//! A region is a maximal run of mutually adjacent lines: a paragraph, or the
//! slice of a column between breaks. Regions are computed once per document,
//! at construction of [`EnrichedDocument`], and queries only exist on the
//! enriched type — there is no way to search a document that has not been
//! preprocessed.

use shared_types::{AnalysisResult, DocumentPage, Line, Polygon};

use crate::geometry::{adjacent, bounding_polygon, DEFAULT_ADJACENCY_DELTA};
use crate::search::words_by_span;

/// A contiguous reading block on one page. Both index ranges are inclusive
/// and refer to the page's `lines` / `words` arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub line_range: (usize, usize),
    pub word_range: (usize, usize),
    pub polygon: Polygon,
    /// Index into the document's paragraph list, when one covers this region.
    /// Cross-referencing only; excerpt mapping works without it.
    pub paragraph: Option<usize>,
}

/// An analysis result plus its derived per-page regions.
///
/// Construction is the preprocessing step; it is pure, so racing two
/// constructions of the same document wastes work but cannot corrupt state.
#[derive(Debug, Clone)]
pub struct EnrichedDocument {
    analysis: AnalysisResult,
    regions: Vec<Vec<Region>>,
}

impl EnrichedDocument {
    pub fn new(analysis: AnalysisResult) -> Self {
        let regions = analysis
            .pages
            .iter()
            .map(|page| page_regions(page, &analysis))
            .collect::<Vec<_>>();
        for (page, page_regions) in analysis.pages.iter().zip(&regions) {
            tracing::debug!(
                "page {}: {} lines grouped into {} regions",
                page.page_number,
                page.lines.len(),
                page_regions.len()
            );
        }
        Self { analysis, regions }
    }

    pub fn analysis(&self) -> &AnalysisResult {
        &self.analysis
    }

    pub fn pages(&self) -> &[DocumentPage] {
        &self.analysis.pages
    }

    /// Regions of the page at `page_index`, ordered by first line.
    pub fn regions(&self, page_index: usize) -> &[Region] {
        self.regions
            .get(page_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Index of the page carrying the given 1-based page number.
    pub fn page_index(&self, page_number: u32) -> Option<usize> {
        self.analysis
            .pages
            .iter()
            .position(|page| page.page_number == page_number)
    }
}

/// Inclusive word range for each line, resolved against the page's word
/// array by span. Lines whose spans resolve to no words fall back to a
/// running whitespace-token count, which keeps subsequent indices aligned.
fn line_word_ranges(page: &DocumentPage) -> Vec<(usize, usize)> {
    let mut ranges = Vec::with_capacity(page.lines.len());
    let mut next_word = 0usize;
    for line in &page.lines {
        let resolved = line
            .extent()
            .and_then(|extent| words_by_span(&page.words, 0..page.words.len(), &extent));
        let range = match resolved {
            Some(range) => range,
            None => {
                let count = line.content.split_whitespace().count().max(1);
                (next_word, next_word + count - 1)
            }
        };
        next_word = range.1 + 1;
        ranges.push(range);
    }
    ranges
}

fn page_regions(page: &DocumentPage, analysis: &AnalysisResult) -> Vec<Region> {
    if page.lines.is_empty() {
        return Vec::new();
    }

    let word_ranges = line_word_ranges(page);
    let mut regions = Vec::new();
    let mut start = 0usize;
    for index in 0..page.lines.len() {
        let last = index + 1 == page.lines.len();
        if !last
            && adjacent(
                &page.lines[index].polygon,
                &page.lines[index + 1].polygon,
                DEFAULT_ADJACENCY_DELTA,
            )
        {
            continue;
        }
        let polygon = bounding_polygon(page.lines[start..=index].iter().map(|line| &line.polygon));
        let word_range = (word_ranges[start].0, word_ranges[index].1);
        let paragraph = paragraph_for(page, &page.lines[start], analysis);
        regions.push(Region {
            line_range: (start, index),
            word_range,
            polygon,
            paragraph,
        });
        start = index + 1;
    }
    regions
}

/// Paragraph covering the region's first line: same page, span containing
/// the line's starting offset.
fn paragraph_for(page: &DocumentPage, first_line: &Line, analysis: &AnalysisResult) -> Option<usize> {
    let extent = first_line.extent()?;
    analysis.paragraphs.iter().position(|paragraph| {
        paragraph
            .bounding_regions
            .iter()
            .any(|region| region.page_number == page.page_number)
            && paragraph
                .spans
                .iter()
                .any(|span| span.contains(extent.offset))
    })
}
