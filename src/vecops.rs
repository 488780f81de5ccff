// Copyright (c) 2024-2025  EcoSwitch Lite authors

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// -----------------------------------------------------------------------------------
// Numeric helpers
// -----------------------------------------------------------------------------------

use num::Float;

/// Quotient num / den, or zero when den is zero or the result is not finite
pub fn safe_div<T: Float>(num: T, den: T) -> T {
    if den == T::zero() {
        return T::zero();
    }
    let res = num / den;
    if res.is_finite() {
        res
    } else {
        T::zero()
    }
}

/// Median of the values, averaging the two central values for even lengths
///
/// NaN values are ignored. None for an empty list.
pub fn median<T: Float>(values: &[T]) -> Option<T> {
    let mut sorted: Vec<T> = values.iter().cloned().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    // No NaN left, partial_cmp is total here
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        let two = T::one() + T::one();
        Some((sorted[mid - 1] + sorted[mid]) / two)
    } else {
        Some(sorted[mid])
    }
}

/// Clamp value to the closed interval [lo, hi]
pub fn clamp<T: Float>(value: T, lo: T, hi: T) -> T {
    value.max(lo).min(hi)
}

/// Round value to the given number of decimals
pub fn round_to<T: Float>(value: T, decimals: i32) -> T {
    let k = T::from(10.0).unwrap_or_else(T::one).powi(decimals);
    (value * k).round() / k
}
