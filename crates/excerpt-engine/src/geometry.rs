//! Geometry primitives over analyzer polygons.
//!
//! All comparisons are in reading order: y first (which row), then x (where
//! in the row). Polygons are the flat 8-number corner lists the analyzer
//! emits; every operation here reduces them to axis-aligned bounding boxes.

use std::cmp::Ordering;

use shared_types::{Point, Polygon};

/// Bounding boxes within this distance (inches) in both axes count as
/// adjacent. Tuned against analyzer output where line boxes of one paragraph
/// nearly touch and column gutters are an order of magnitude wider.
pub const DEFAULT_ADJACENCY_DELTA: f64 = 0.2;

/// Axis-aligned bounds of a polygon: (min x, min y, max x, max y).
pub(crate) fn bounds(polygon: &[f64]) -> (f64, f64, f64, f64) {
    debug_assert!(polygon.len() >= 8 && polygon.len() % 2 == 0);
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;
    for pair in polygon.chunks_exact(2) {
        min_x = min_x.min(pair[0]);
        max_x = max_x.max(pair[0]);
        min_y = min_y.min(pair[1]);
        max_y = max_y.max(pair[1]);
    }
    (min_x, min_y, max_x, max_y)
}

/// Clockwise 4-corner polygon from axis-aligned bounds.
pub(crate) fn rect_polygon(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Polygon {
    vec![min_x, min_y, max_x, min_y, max_x, max_y, min_x, max_y]
}

/// Round to the 1-decimal granularity used for adjacency decisions. OCR boxes
/// jitter well below this; column gutters sit well above it.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Total order over points in reading order: row first, then position within
/// the row.
pub fn compare_points(point: &Point, reference: &Point) -> Ordering {
    match point.y.partial_cmp(&reference.y).unwrap_or(Ordering::Equal) {
        Ordering::Equal => point.x.partial_cmp(&reference.x).unwrap_or(Ordering::Equal),
        ordering => ordering,
    }
}

/// Compare a point against a polygon's bounding box in reading order:
/// `Less` when the point is above or left of the box, `Greater` when below or
/// right, `Equal` when inside. The `Equal` case is what makes this usable as
/// a binary-search comparator over reading-ordered polygon sequences.
pub fn compare_point_to_polygon(point: &Point, polygon: &[f64]) -> Ordering {
    let (min_x, min_y, max_x, max_y) = bounds(polygon);
    if point.y < min_y {
        Ordering::Less
    } else if point.y > max_y {
        Ordering::Greater
    } else if point.x < min_x {
        Ordering::Less
    } else if point.x > max_x {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Whether two polygons' bounding boxes overlap or sit within `delta` of each
/// other in both axes, after rounding every bound to 1 decimal place. This is
/// the sole primitive deciding "same reading block".
pub fn adjacent(a: &[f64], b: &[f64], delta: f64) -> bool {
    let (a_min_x, a_min_y, a_max_x, a_max_y) = bounds(a);
    let (b_min_x, b_min_y, b_max_x, b_max_y) = bounds(b);

    let x_gap = round1(a_min_x.max(b_min_x)) - round1(a_max_x.min(b_max_x));
    let y_gap = round1(a_min_y.max(b_min_y)) - round1(a_max_y.min(b_max_y));

    x_gap <= delta && y_gap <= delta
}

/// Minimal axis-aligned rectangle covering all input polygons. Empty input
/// is a programmer error and yields an empty polygon.
pub fn bounding_polygon<'a, I>(polygons: I) -> Polygon
where
    I: IntoIterator<Item = &'a Polygon>,
{
    let mut iter = polygons.into_iter();
    let Some(first) = iter.next() else {
        debug_assert!(false, "bounding_polygon over empty input");
        return Polygon::new();
    };
    let (mut min_x, mut min_y, mut max_x, mut max_y) = bounds(first);
    for polygon in iter {
        let (x0, y0, x1, y1) = bounds(polygon);
        min_x = min_x.min(x0);
        min_y = min_y.min(y0);
        max_x = max_x.max(x1);
        max_y = max_y.max(y1);
    }
    rect_polygon(min_x, min_y, max_x, max_y)
}
