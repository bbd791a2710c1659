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

use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{PrimInt, Signed};

/// Signed integer coordinate scalar with a widening accumulator.
///
/// `Wide` must hold any 2-D cross product of coordinate differences
/// without overflow. Differences of N-bit values need N+1 bits and
/// their product 2N+2, so each implementation pairs a coordinate type
/// with an accumulator at least that wide. `i64` has no such primitive
/// partner and is deliberately left unimplemented.
pub trait Coord: PrimInt + Signed + Hash + Debug {
    type Wide: PrimInt + Signed;

    fn wide(self) -> Self::Wide;
}

impl Coord for i8 {
    type Wide = i32;

    #[inline]
    fn wide(self) -> i32 {
        self as i32
    }
}

impl Coord for i16 {
    type Wide = i64;

    #[inline]
    fn wide(self) -> i64 {
        self as i64
    }
}

impl Coord for i32 {
    type Wide = i128;

    #[inline]
    fn wide(self) -> i128 {
        self as i128
    }
}
