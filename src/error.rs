// Copyright (c) 2024 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The error module contains the `Error` type returned when an argument is
//! outside of its valid range.

use thiserror::Error;

/// The errors returned by `Ellipsoid` construction and the geodesic solvers.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    /// An argument is outside of its valid range, or is not a number.
    #[error("invalid argument `{name}`: {value}")]
    InvalidArgument { name: &'static str, value: f64 },
}

/// Check that an argument lies within the closed range `min..=max`.
/// * `name` - the name of the argument.
/// * `value` - the argument.
/// * `min`, `max` - the limits of the valid range.
///
/// returns the argument if valid, `Error::InvalidArgument` otherwise.
pub(crate) fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<f64, Error> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        tracing::debug!(name, value, min, max, "argument out of range");
        Err(Error::InvalidArgument { name, value })
    }
}
