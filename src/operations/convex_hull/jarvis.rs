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

use std::cmp::Reverse;

use log::debug;

use crate::geometry::Point2;
use crate::kernel::orientation::{Orientation, orient2d};
use crate::numeric::Coord;

use super::{ConvexHullError, all_collinear};

/// Which side of the hull a wrapping chain traverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chain {
    Right,
    Left,
}

/// Convex hull by Jarvis march (gift wrapping): two chains anchored at
/// the lowest and highest points, each advanced by an O(n) extreme-
/// point scan. O(n*h) for h hull vertices.
///
/// Returns the boundary counter-clockwise starting at the lowest
/// point: the right chain ascending, the highest point, then the left
/// chain descending.
pub fn jarvis_march<T: Coord>(points: &[Point2<T>]) -> Result<Vec<Point2<T>>, ConvexHullError> {
    if points.len() < 3 {
        return Err(ConvexHullError::InsufficientPoints);
    }
    if all_collinear(points) {
        return Err(ConvexHullError::DegenerateInput);
    }

    // Both anchors break y-ties toward the smaller x, which guarantees
    // each is a true hull vertex even when a horizontal edge spans the
    // extreme row.
    let lowest = *points
        .iter()
        .min_by_key(|p| (p.y, p.x))
        .ok_or(ConvexHullError::InsufficientPoints)?;
    let highest = *points
        .iter()
        .min_by_key(|p| (Reverse(p.y), p.x))
        .ok_or(ConvexHullError::InsufficientPoints)?;

    let mut hull = vec![lowest];
    walk_chain(points, lowest, highest, Chain::Right, &mut hull)?;
    hull.push(highest);

    let mut left = Vec::new();
    walk_chain(points, lowest, highest, Chain::Left, &mut left)?;
    hull.extend(left.into_iter().rev());

    debug!(
        "jarvis march: {} of {} input points on the hull",
        hull.len(),
        points.len()
    );
    Ok(hull)
}

/// Advance from `start` until the selection lands on `stop`, pushing
/// every intermediate vertex. A scan that cannot advance, or selects
/// more vertices than there are input points, aborts with
/// `DegenerateInput` rather than looping.
fn walk_chain<T: Coord>(
    points: &[Point2<T>],
    start: Point2<T>,
    stop: Point2<T>,
    chain: Chain,
    out: &mut Vec<Point2<T>>,
) -> Result<(), ConvexHullError> {
    let mut current = start;
    for _ in 0..points.len() {
        let next =
            next_vertex(points, &current, chain).ok_or(ConvexHullError::DegenerateInput)?;
        if next == stop {
            return Ok(());
        }
        out.push(next);
        current = next;
    }
    Err(ConvexHullError::DegenerateInput)
}

/// The wrap step: the candidate no other point lies outside of. On the
/// right chain nothing may sit strictly clockwise of `current -> best`;
/// on the left chain the roles are mirrored. Collinear ties go to the
/// farther point so the wrap lands on the true extreme vertex, never an
/// interior collinear one.
fn next_vertex<T: Coord>(
    points: &[Point2<T>],
    current: &Point2<T>,
    chain: Chain,
) -> Option<Point2<T>> {
    let mut best = points.iter().copied().find(|q| q != current)?;
    for &q in points {
        if q == *current || q == best {
            continue;
        }
        match (orient2d(current, &best, &q), chain) {
            (Orientation::Clockwise, Chain::Right) | (Orientation::Counterclockwise, Chain::Left) => {
                best = q;
            }
            (Orientation::Collinear, _) if current.dist2(&q) > current.dist2(&best) => {
                best = q;
            }
            _ => {}
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::jarvis_march;
    use crate::geometry::Point2;
    use crate::operations::convex_hull::ConvexHullError;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point2<i32>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn square_with_interior_point() {
        let input = pts(&[(0, 0), (0, 10), (10, 10), (10, 0), (5, 5)]);
        let hull = jarvis_march(&input).unwrap();
        assert_eq!(hull, pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]));
    }

    #[test]
    fn horizontal_top_edge_stops_at_the_left_anchor() {
        // Three collinear points along the top row; only the two
        // corners may survive, and the march must terminate.
        let input = pts(&[(0, 0), (10, 0), (0, 10), (5, 10), (10, 10)]);
        let hull = jarvis_march(&input).unwrap();
        assert_eq!(hull, pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]));
    }

    #[test]
    fn collinear_edge_point_is_skipped() {
        let input = pts(&[(0, 0), (5, 0), (10, 0), (10, 10), (0, 10)]);
        let hull = jarvis_march(&input).unwrap();
        assert_eq!(hull, pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]));
    }

    #[test]
    fn rejects_small_and_collinear_inputs() {
        assert_eq!(
            jarvis_march(&pts(&[(0, 0), (1, 1)])),
            Err(ConvexHullError::InsufficientPoints)
        );
        assert_eq!(
            jarvis_march(&pts(&[(0, 0), (5, 0), (10, 0)])),
            Err(ConvexHullError::DegenerateInput)
        );
        assert_eq!(
            jarvis_march(&pts(&[(2, 2), (2, 2), (2, 2), (2, 2)])),
            Err(ConvexHullError::DegenerateInput)
        );
    }

    #[test]
    fn duplicate_anchors_terminate() {
        let input = pts(&[(0, 0), (0, 0), (10, 0), (5, 9), (5, 9)]);
        let hull = jarvis_march(&input).unwrap();
        assert_eq!(hull, pts(&[(0, 0), (10, 0), (5, 9)]));
    }
}
