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

use num_traits::Zero;

use crate::geometry::Point2;
use crate::numeric::Coord;

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Counterclockwise,
    Collinear,
}

/// Sign of the cross product of `b - a` and `c - a`:
/// - `Counterclockwise` if the triple turns left,
/// - `Clockwise` if it turns right,
/// - `Collinear` if the three points sit on one line.
///
/// The single source of truth for turn direction: every predicate and
/// hull builder in this crate classifies turns through this function so
/// the sign convention stays consistent. The product is accumulated in
/// `T::Wide`, which cannot overflow for any supported coordinate type.
pub fn orient2d<T: Coord>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Orientation {
    let cross = (b.x.wide() - a.x.wide()) * (c.y.wide() - a.y.wide())
        - (c.x.wide() - a.x.wide()) * (b.y.wide() - a.y.wide());

    if cross < T::Wide::zero() {
        Orientation::Clockwise
    } else if cross > T::Wide::zero() {
        Orientation::Counterclockwise
    } else {
        Orientation::Collinear
    }
}
