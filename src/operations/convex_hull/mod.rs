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

//! Convex hulls of planar integer point sets.
//!
//! Two independent builders share one contract: the boundary of the
//! minimal convex polygon containing the input, in counter-clockwise
//! order starting at the lowest point, with no redundant collinear
//! vertices. Inputs with fewer than three points or with all points on
//! one line are rejected with a distinguishable error instead of a
//! silent partial result.

use std::error::Error;
use std::fmt;

use crate::geometry::Point2;
use crate::kernel::orientation::{Orientation, orient2d};
use crate::numeric::Coord;

pub mod graham;
pub mod jarvis;

pub use graham::graham_scan;
pub use jarvis::jarvis_march;

/// Precondition violations of the hull builders. Never retried
/// internally; callers branch on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvexHullError {
    /// Fewer than three input points.
    InsufficientPoints,
    /// All input points collinear or coincident: no 2-D hull exists.
    DegenerateInput,
}

impl fmt::Display for ConvexHullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvexHullError::InsufficientPoints => {
                write!(f, "convex hull requires at least three points")
            }
            ConvexHullError::DegenerateInput => {
                write!(f, "input points are collinear; no 2-D hull exists")
            }
        }
    }
}

impl Error for ConvexHullError {}

/// True when the set spans no area: empty, a single repeated point, or
/// all points on one line.
pub fn all_collinear<T: Coord>(points: &[Point2<T>]) -> bool {
    let Some(&first) = points.first() else {
        return true;
    };
    let Some(&second) = points.iter().find(|&&p| p != first) else {
        return true;
    };
    points
        .iter()
        .all(|p| orient2d(&first, &second, p) == Orientation::Collinear)
}

/// True if `p` lies inside or on the boundary of a CCW-ordered convex
/// polygon: no edge may see it strictly clockwise.
pub fn hull_contains<T: Coord>(hull: &[Point2<T>], p: &Point2<T>) -> bool {
    if hull.len() < 3 {
        return false;
    }
    (0..hull.len()).all(|i| {
        let a = &hull[i];
        let b = &hull[(i + 1) % hull.len()];
        orient2d(a, b, p) != Orientation::Clockwise
    })
}

#[cfg(test)]
mod tests {
    use super::{all_collinear, hull_contains};
    use crate::geometry::Point2;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point2<i32>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn collinearity_detection() {
        assert!(all_collinear::<i32>(&[]));
        assert!(all_collinear(&pts(&[(1, 1), (1, 1), (1, 1)])));
        assert!(all_collinear(&pts(&[(0, 0), (5, 0), (10, 0)])));
        assert!(all_collinear(&pts(&[(0, 0), (2, 2), (7, 7)])));
        assert!(!all_collinear(&pts(&[(0, 0), (5, 0), (5, 5)])));
    }

    #[test]
    fn containment_in_ccw_square() {
        let hull = pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        assert!(hull_contains(&hull, &Point2::new(5, 5)));
        assert!(hull_contains(&hull, &Point2::new(0, 0)));
        assert!(hull_contains(&hull, &Point2::new(10, 5)));
        assert!(!hull_contains(&hull, &Point2::new(11, 5)));
        assert!(!hull_contains(&hull, &Point2::new(-1, -1)));
    }
}
