// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::geometry::{Point2, Segment2};
use crate::kernel::orientation::{Orientation, orient2d};
use crate::numeric::Coord;

/// Axis-aligned containment of `p` in the bounding box spanned by `a`
/// and `b`. Valid as an on-segment test only once `p` is known to be
/// collinear with `a` and `b`.
pub fn point_in_bbox<T: Coord>(p: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> bool {
    let (lo_x, hi_x) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
    let (lo_y, hi_y) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };

    lo_x <= p.x && p.x <= hi_x && lo_y <= p.y && p.y <= hi_y
}

fn opposite_signs(d1: Orientation, d2: Orientation) -> bool {
    matches!(
        (d1, d2),
        (Orientation::Clockwise, Orientation::Counterclockwise)
            | (Orientation::Counterclockwise, Orientation::Clockwise)
    )
}

/// Whether two closed segments share at least one point.
///
/// Covers proper crossings (both endpoint pairs on strictly opposite
/// sides of the other segment) and every collinear touching or overlap
/// configuration, via the bounding-box check on whichever endpoint is
/// collinear with the other segment. Integer cross products only; no
/// division anywhere, so near-parallel inputs lose no precision.
pub fn segments_intersect<T: Coord>(s: &Segment2<T>, t: &Segment2<T>) -> bool {
    let (p1, p2) = (&s.a, &s.b);
    let (p3, p4) = (&t.a, &t.b);

    let d1 = orient2d(p1, p3, p4);
    let d2 = orient2d(p2, p3, p4);
    let d3 = orient2d(p3, p1, p2);
    let d4 = orient2d(p4, p1, p2);

    if opposite_signs(d1, d2) && opposite_signs(d3, d4) {
        return true;
    }

    (d1 == Orientation::Collinear && point_in_bbox(p1, p3, p4))
        || (d2 == Orientation::Collinear && point_in_bbox(p2, p3, p4))
        || (d3 == Orientation::Collinear && point_in_bbox(p3, p1, p2))
        || (d4 == Orientation::Collinear && point_in_bbox(p4, p1, p2))
}

#[cfg(test)]
mod tests {
    use super::{point_in_bbox, segments_intersect};
    use crate::geometry::{Point2, Segment2};

    fn seg(ax: i32, ay: i32, bx: i32, by: i32) -> Segment2<i32> {
        Segment2::new(Point2::new(ax, ay), Point2::new(bx, by))
    }

    #[test]
    fn bbox_containment() {
        let a = Point2::new(0i32, 0);
        let b = Point2::new(10, 4);
        assert!(point_in_bbox(&Point2::new(5, 2), &a, &b));
        assert!(point_in_bbox(&a, &a, &b));
        assert!(!point_in_bbox(&Point2::new(11, 2), &a, &b));
        assert!(!point_in_bbox(&Point2::new(5, 5), &a, &b));
    }

    #[test]
    fn proper_crossing() {
        assert!(segments_intersect(&seg(0, 0, 10, 10), &seg(0, 10, 10, 0)));
    }

    #[test]
    fn endpoint_touch() {
        assert!(segments_intersect(&seg(0, 0, 5, 5), &seg(5, 5, 10, 0)));
    }

    #[test]
    fn t_shaped_touch() {
        // Endpoint of one segment interior to the other.
        assert!(segments_intersect(&seg(0, 0, 10, 0), &seg(5, 0, 5, 7)));
    }

    #[test]
    fn parallel_disjoint() {
        assert!(!segments_intersect(&seg(0, 0, 10, 0), &seg(0, 1, 10, 1)));
    }

    #[test]
    fn collinear_disjoint() {
        assert!(!segments_intersect(&seg(0, 0, 10, 0), &seg(20, 0, 30, 0)));
    }

    #[test]
    fn collinear_overlap() {
        assert!(segments_intersect(&seg(0, 0, 10, 0), &seg(5, 0, 15, 0)));
    }
}
