//! Data model for the document-intelligence analysis result.
//!
//! Mirrors the JSON payload produced by the upstream layout analyzer. The
//! payload is deserialized here and otherwise treated as opaque: beyond shape,
//! nothing is validated.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Flat clockwise corner list as emitted by the analyzer:
/// `[x0, y0, x1, y1, x2, y2, x3, y3]` in page-relative inches.
/// Callers multiply by 72 to reach PDF points.
pub type Polygon = Vec<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Half-open character range into the document content string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub offset: usize,
    pub length: usize,
}

impl Span {
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.offset && offset < self.end()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub content: String,
    pub polygon: Polygon,
    pub span: Span,
    /// Recognition confidence. Carried through for callers; the engine
    /// ignores it.
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub content: String,
    pub polygon: Polygon,
    pub spans: Vec<Span>,
}

impl Line {
    /// Single span covering everything the line's spans cover.
    pub fn extent(&self) -> Option<Span> {
        let first = self.spans.first()?;
        let end = self.spans.iter().map(Span::end).max().unwrap_or_else(|| first.end());
        Some(Span {
            offset: first.offset,
            length: end - first.offset,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingRegion {
    pub page_number: u32,
    pub polygon: Polygon,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub content: String,
    #[serde(default)]
    pub spans: Vec<Span>,
    #[serde(default)]
    pub bounding_regions: Vec<BoundingRegion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPage {
    /// 1-based page number as reported by the analyzer.
    pub page_number: u32,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub words: Vec<Word>,
    #[serde(default)]
    pub lines: Vec<Line>,
}

/// A full per-document analysis response: the document content string plus
/// per-page words/lines and document-wide paragraphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub content: String,
    pub pages: Vec<DocumentPage>,
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl AnalysisResult {
    /// Parse a raw analyzer response.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::Parse(e.to_string()))
    }
}
