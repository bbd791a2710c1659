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

//! Random demo inputs for the kernel.
//!
//! The generator is always passed in explicitly so callers control
//! seeding and replay; nothing here touches ambient global state.

use std::collections::HashSet;

use rand::Rng;

use crate::geometry::{Point2, Segment2};

/// `n` points drawn uniformly from `[0, max_x) x [0, max_y)`.
pub fn random_points<R: Rng>(rng: &mut R, n: usize, max_x: i32, max_y: i32) -> Vec<Point2<i32>> {
    (0..n)
        .map(|_| Point2::new(rng.random_range(0..max_x), rng.random_range(0..max_y)))
        .collect()
}

/// Up to `m` segments spanning distinct index pairs of `points`.
///
/// Draws that repeat an unordered endpoint pair are discarded, so the
/// result may hold fewer than `m` segments. Endpoints are ordered by
/// ascending x within each segment.
pub fn random_segments<R: Rng>(
    rng: &mut R,
    points: &[Point2<i32>],
    m: usize,
) -> Vec<Segment2<i32>> {
    let mut segments = Vec::with_capacity(m);
    if points.len() < 2 {
        return segments;
    }

    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    for _ in 0..m {
        let mut i = 0;
        let mut j = 0;
        while i == j {
            i = rng.random_range(0..points.len());
            j = rng.random_range(0..points.len());
        }
        if !seen.insert((i.min(j), i.max(j))) {
            continue;
        }
        let (a, b) = if points[i].x <= points[j].x {
            (points[i], points[j])
        } else {
            (points[j], points[i])
        };
        segments.push(Segment2::new(a, b));
    }
    segments
}
