//! Citation record shape the review workflow persists engine output into.

use serde::{Deserialize, Serialize};

use crate::model::Polygon;
use crate::summary::Summary;

/// A citation as stored by the review workflow: the excerpt text plus the
/// flat bounding polygons recovered for it. Citations imported from upstream
/// sources often arrive without bounds; those are bootstrapped by searching
/// the excerpt against the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub id: String,
    pub excerpt: String,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub bounds: Vec<Polygon>,
}

impl Citation {
    pub fn new(id: impl Into<String>, excerpt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            excerpt: excerpt.into(),
            page: None,
            bounds: Vec::new(),
        }
    }

    pub fn has_bounds(&self) -> bool {
        !self.bounds.is_empty()
    }

    /// Store a located summary back onto the record. An empty summary clears
    /// nothing: a citation keeps whatever bounds it already had.
    pub fn apply_summary(&mut self, summary: &Summary) {
        if summary.is_empty() {
            return;
        }
        self.excerpt = summary.excerpt.clone();
        self.page = summary.polygons.first().map(|p| p.page);
        self.bounds = summary.polygons.iter().map(|p| p.polygon.clone()).collect();
    }
}
