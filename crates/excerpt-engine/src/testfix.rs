//! Synthetic analysis-result fixtures for the unit suites.
//!
//! Pages are laid out on a fixed grid: 0.1in per character, 0.2in line
//! height, 0.25in line step inside a block, 1.0in between blocks. The grid
//! keeps intra-block lines adjacent and block/column gaps well past the
//! default delta.

use shared_types::{
    AnalysisResult, BoundingRegion, DocumentPage, Line, Paragraph, Point, Polygon, Span, Word,
};

pub const CHAR_WIDTH: f64 = 0.1;
pub const LINE_HEIGHT: f64 = 0.2;
pub const LINE_STEP: f64 = 0.25;
pub const BLOCK_GAP: f64 = 1.0;
const MARGIN: f64 = 1.0;
const RIGHT_COLUMN_X: f64 = 5.5;

/// Center of a word polygon, for point-lookup tests.
pub fn word_center(word: &Word) -> Point {
    let xs: Vec<f64> = word.polygon.iter().step_by(2).copied().collect();
    let ys: Vec<f64> = word.polygon.iter().skip(1).step_by(2).copied().collect();
    Point {
        x: (xs.iter().cloned().fold(f64::MAX, f64::min)
            + xs.iter().cloned().fold(f64::MIN, f64::max))
            / 2.0,
        y: (ys.iter().cloned().fold(f64::MAX, f64::min)
            + ys.iter().cloned().fold(f64::MIN, f64::max))
            / 2.0,
    }
}

pub struct DocumentBuilder {
    content: String,
    pages: Vec<DocumentPage>,
    paragraphs: Vec<Paragraph>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            content: String::new(),
            pages: Vec::new(),
            paragraphs: Vec::new(),
        }
    }

    pub fn build(self) -> AnalysisResult {
        AnalysisResult {
            content: self.content,
            pages: self.pages,
            paragraphs: self.paragraphs,
        }
    }

    pub fn empty_page(&mut self) {
        let page_number = self.pages.len() as u32 + 1;
        self.pages.push(DocumentPage {
            page_number,
            unit: Some("inch".to_string()),
            width: Some(8.5),
            height: Some(11.0),
            words: Vec::new(),
            lines: Vec::new(),
        });
    }

    /// Single-column page: each block is a list of line texts, words derived
    /// by whitespace splitting.
    pub fn page(&mut self, blocks: &[&[&str]]) {
        self.empty_page();
        let mut y = MARGIN;
        for block in blocks {
            let lines: Vec<(String, Vec<String>)> = block
                .iter()
                .map(|text| {
                    (
                        text.to_string(),
                        text.split_whitespace().map(str::to_string).collect(),
                    )
                })
                .collect();
            y = self.add_block(&lines, MARGIN, y) + BLOCK_GAP;
        }
    }

    /// Page whose first block carries explicit line text and word lists (for
    /// tokenization-drift cases), followed by derived blocks.
    pub fn page_with_line_text(&mut self, custom: &[(&str, &[&str])], blocks: &[&[&str]]) {
        self.empty_page();
        let lines: Vec<(String, Vec<String>)> = custom
            .iter()
            .map(|(text, words)| {
                (
                    text.to_string(),
                    words.iter().map(|w| w.to_string()).collect(),
                )
            })
            .collect();
        let mut y = self.add_block(&lines, MARGIN, MARGIN) + BLOCK_GAP;
        for block in blocks {
            let lines: Vec<(String, Vec<String>)> = block
                .iter()
                .map(|text| {
                    (
                        text.to_string(),
                        text.split_whitespace().map(str::to_string).collect(),
                    )
                })
                .collect();
            y = self.add_block(&lines, MARGIN, y) + BLOCK_GAP;
        }
    }

    /// Two side-by-side columns starting at the same height. Lines arrive in
    /// reading order: the whole left column, then the right column.
    pub fn two_column_page(&mut self, left: &[&str], right: &[&str]) {
        self.empty_page();
        for (column, x) in [(left, MARGIN), (right, RIGHT_COLUMN_X)] {
            let lines: Vec<(String, Vec<String>)> = column
                .iter()
                .map(|text| {
                    (
                        text.to_string(),
                        text.split_whitespace().map(str::to_string).collect(),
                    )
                })
                .collect();
            self.add_block(&lines, x, MARGIN);
        }
    }

    /// Lay one block of lines onto the current (last) page. Returns the y
    /// coordinate below the block.
    fn add_block(&mut self, lines: &[(String, Vec<String>)], x0: f64, y0: f64) -> f64 {
        let page_index = self.pages.len() - 1;
        let page_number = self.pages[page_index].page_number;
        let block_start_offset = self.content.len();
        let mut block_line_polygons: Vec<Polygon> = Vec::new();
        let mut block_text = String::new();
        let mut y = y0;

        for (text, words) in lines {
            let mut x = x0;
            let line_start_offset = self.content.len();
            let mut line_end_offset = line_start_offset;
            for word in words {
                let offset = self.content.len();
                self.content.push_str(word);
                self.content.push(' ');
                line_end_offset = offset + word.len();
                let width = word.chars().count() as f64 * CHAR_WIDTH;
                self.pages[page_index].words.push(Word {
                    content: word.clone(),
                    polygon: vec![x, y, x + width, y, x + width, y + LINE_HEIGHT, x, y + LINE_HEIGHT],
                    span: Span {
                        offset,
                        length: word.len(),
                    },
                    confidence: 0.95,
                });
                x += width + CHAR_WIDTH;
            }
            let polygon = vec![
                x0,
                y,
                x - CHAR_WIDTH,
                y,
                x - CHAR_WIDTH,
                y + LINE_HEIGHT,
                x0,
                y + LINE_HEIGHT,
            ];
            block_line_polygons.push(polygon.clone());
            self.pages[page_index].lines.push(Line {
                content: text.clone(),
                polygon,
                spans: vec![Span {
                    offset: line_start_offset,
                    length: line_end_offset - line_start_offset,
                }],
            });
            if !block_text.is_empty() {
                block_text.push(' ');
            }
            block_text.push_str(text);
            y += LINE_STEP;
        }

        let block_end_offset = self.content.len().saturating_sub(1);
        self.paragraphs.push(Paragraph {
            content: block_text,
            spans: vec![Span {
                offset: block_start_offset,
                length: block_end_offset - block_start_offset,
            }],
            bounding_regions: vec![BoundingRegion {
                page_number,
                polygon: crate::geometry::bounding_polygon(block_line_polygons.iter()),
            }],
        });

        y - LINE_STEP + LINE_HEIGHT
    }
}
