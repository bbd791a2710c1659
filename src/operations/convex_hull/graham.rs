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

use std::cmp::Ordering;

use log::debug;

use crate::geometry::Point2;
use crate::kernel::orientation::{Orientation, orient2d};
use crate::numeric::Coord;

use super::ConvexHullError;

/// Convex hull by Graham scan: angular sort around the lowest pivot,
/// then one monotonic stack pass. O(n log n), dominated by the sort.
///
/// Returns the boundary counter-clockwise starting at the pivot.
/// Duplicate input points are tolerated; collinear interior points
/// never survive to the output.
pub fn graham_scan<T: Coord>(points: &[Point2<T>]) -> Result<Vec<Point2<T>>, ConvexHullError> {
    if points.len() < 3 {
        return Err(ConvexHullError::InsufficientPoints);
    }

    // Lowest y, ties by lowest x. The x tie-break keeps every polar
    // angle about the pivot inside [0, pi), which the collinearity
    // check below relies on.
    let pivot = *points
        .iter()
        .min_by_key(|p| (p.y, p.x))
        .ok_or(ConvexHullError::InsufficientPoints)?;

    let mut rest: Vec<Point2<T>> = points.iter().copied().filter(|p| *p != pivot).collect();
    rest.sort_by(|a, b| angular_order(&pivot, a, b));
    rest.dedup();

    if rest.len() < 2 {
        return Err(ConvexHullError::DegenerateInput);
    }
    // Sorted by angle within [0, pi), so the whole set is collinear
    // exactly when the first and last rays coincide.
    if orient2d(&pivot, &rest[0], &rest[rest.len() - 1]) == Orientation::Collinear {
        return Err(ConvexHullError::DegenerateInput);
    }

    let mut stack: Vec<Point2<T>> = vec![pivot, rest[0]];
    for p in rest.into_iter().skip(1) {
        while stack.len() >= 2
            && orient2d(&stack[stack.len() - 2], &stack[stack.len() - 1], &p)
                != Orientation::Counterclockwise
        {
            stack.pop();
        }
        stack.push(p);
    }

    debug!(
        "graham scan: {} of {} input points on the hull",
        stack.len(),
        points.len()
    );
    Ok(stack)
}

/// Ascending angle about `pivot` measured from the positive x-axis,
/// decided by orientation alone (never slope division). Equal angles
/// order nearer first, so the farther collinear point survives the
/// scan as the true extreme vertex.
fn angular_order<T: Coord>(pivot: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> Ordering {
    match orient2d(pivot, a, b) {
        Orientation::Counterclockwise => Ordering::Less,
        Orientation::Clockwise => Ordering::Greater,
        Orientation::Collinear => pivot.dist2(a).cmp(&pivot.dist2(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::graham_scan;
    use crate::geometry::Point2;
    use crate::operations::convex_hull::ConvexHullError;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point2<i32>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn square_with_interior_point() {
        let input = pts(&[(0, 0), (0, 10), (10, 10), (10, 0), (5, 5)]);
        let hull = graham_scan(&input).unwrap();
        assert_eq!(hull, pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]));
    }

    #[test]
    fn collinear_edge_point_is_dropped() {
        let input = pts(&[(0, 0), (5, 0), (10, 0), (10, 10), (0, 10)]);
        let hull = graham_scan(&input).unwrap();
        assert_eq!(hull, pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]));
    }

    #[test]
    fn pivot_tie_breaks_by_lowest_x() {
        // Two points share the minimum y; the hull must start at the
        // left one.
        let input = pts(&[(7, 0), (0, 0), (7, 7), (0, 7)]);
        let hull = graham_scan(&input).unwrap();
        assert_eq!(hull[0], Point2::new(0, 0));
    }

    #[test]
    fn rejects_small_and_collinear_inputs() {
        assert_eq!(
            graham_scan(&pts(&[(0, 0), (1, 1)])),
            Err(ConvexHullError::InsufficientPoints)
        );
        assert_eq!(
            graham_scan(&pts(&[(0, 0), (5, 0), (10, 0)])),
            Err(ConvexHullError::DegenerateInput)
        );
        assert_eq!(
            graham_scan(&pts(&[(3, 3), (3, 3), (3, 3)])),
            Err(ConvexHullError::DegenerateInput)
        );
    }

    #[test]
    fn duplicates_do_not_break_the_scan() {
        let input = pts(&[(0, 0), (0, 0), (10, 0), (10, 0), (5, 9), (5, 9)]);
        let hull = graham_scan(&input).unwrap();
        assert_eq!(hull, pts(&[(0, 0), (10, 0), (5, 9)]));
    }
}
