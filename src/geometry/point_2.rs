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

use crate::numeric::Coord;

/// Immutable 2-D point with integer coordinates. Compared by structural
/// equality; ordered lexicographically by `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point2<T: Coord> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance, exact in the wide accumulator.
    ///
    /// Distance tie-breaks in the hull builders compare these directly,
    /// so no square root (and no floating point) is ever needed.
    pub fn dist2(&self, other: &Self) -> T::Wide {
        let dx = self.x.wide() - other.x.wide();
        let dy = self.y.wide() - other.y.wide();
        dx * dx + dy * dy
    }
}

impl<T: Coord> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::Point2;

    #[test]
    fn dist2_is_exact() {
        let a = Point2::new(0i32, 0);
        let b = Point2::new(3, 4);
        assert_eq!(a.dist2(&b), 25);
        assert_eq!(b.dist2(&a), 25);
    }

    #[test]
    fn order_is_x_then_y() {
        let a = Point2::new(1i32, 5);
        let b = Point2::new(2, 0);
        let c = Point2::new(1, 6);
        assert!(a < b);
        assert!(a < c);
    }
}
