//! Condensing a run of line/region polygons into the composite
//! head/body/tail shape used for highlight overlays.

use shared_types::{CompositePolygon, Polygon};

use crate::geometry::{bounds, rect_polygon, round1};

/// Whether a vertical gap remains between an upper bound and a lower bound
/// at the adjacency granularity.
fn gap_below(upper_max_y: f64, lower_min_y: f64) -> bool {
    round1(lower_min_y) > round1(upper_max_y)
}

/// Condense a reading-order run of polygons (already known to belong to one
/// excerpt) into a composite shape: one polygon is the head alone, two are
/// head and tail, three or more merge the middle into a single body block
/// spanning the full column width.
///
/// With `force_overlap`, interior vertical gaps are closed by stretching
/// edges down/up to meet the neighboring part, so a rendered highlight shows
/// no seam between its parts. Gap detection rounds to the same granularity
/// as adjacency, so floating-point jitter cannot flap the result.
///
/// An empty run condenses to `None`.
pub fn condense_polygons(ordered: &[Polygon], force_overlap: bool) -> Option<CompositePolygon> {
    match ordered {
        [] => None,
        [only] => Some(CompositePolygon::Head { head: only.clone() }),
        [first, last] => {
            let mut head = first.clone();
            let tail = last.clone();
            let (h_min_x, h_min_y, h_max_x, h_max_y) = bounds(&head);
            let (_, t_min_y, _, _) = bounds(&tail);
            if force_overlap && gap_below(h_max_y, t_min_y) {
                head = rect_polygon(h_min_x, h_min_y, h_max_x, t_min_y);
            }
            Some(CompositePolygon::HeadTail { head, tail })
        }
        [first, middle @ .., last] => {
            let head = first.clone();
            let tail = last.clone();
            let (h_min_x, _, h_max_x, h_max_y) = bounds(&head);
            let (t_min_x, t_min_y, t_max_x, _) = bounds(&tail);

            let (mut b_min_x, mut b_min_y, mut b_max_x, mut b_max_y) = bounds(&middle[0]);
            for polygon in &middle[1..] {
                let (x0, y0, x1, y1) = bounds(polygon);
                b_min_x = b_min_x.min(x0);
                b_min_y = b_min_y.min(y0);
                b_max_x = b_max_x.max(x1);
                b_max_y = b_max_y.max(y1);
            }
            // Body spans the full column width.
            b_min_x = b_min_x.min(h_min_x).min(t_min_x);
            b_max_x = b_max_x.max(h_max_x).max(t_max_x);

            if force_overlap {
                if gap_below(h_max_y, b_min_y) {
                    b_min_y = h_max_y;
                }
                if gap_below(b_max_y, t_min_y) {
                    b_max_y = t_min_y;
                }
            }

            Some(CompositePolygon::HeadBodyTail {
                head,
                body: rect_polygon(b_min_x, b_min_y, b_max_x, b_max_y),
                tail,
            })
        }
    }
}
