/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use std::cell::Cell;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Floating point condition raised while evaluating a math function.
///
/// The function itself always returns a value; the condition is delivered
/// to a [MathErrorSink] alongside it.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum MathError {
    /// Negative finite base raised to a non integer power, result is NaN.
    InvalidOperation,
    /// Zero base raised to a negative power, result is a signed infinity.
    DivideByZero,
    /// Result is too large in magnitude, result is a signed infinity.
    Overflow,
    /// Result is too small in magnitude, result is a signed zero or
    /// the nearest subnormal.
    Underflow,
}

/// `errno` class of a [MathError]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ErrnoKind {
    /// `EDOM`
    Domain,
    /// `ERANGE`
    Range,
}

impl MathError {
    /// Returns the `errno` class C library math stores for this condition
    #[inline]
    pub const fn errno_kind(self) -> ErrnoKind {
        match self {
            MathError::InvalidOperation => ErrnoKind::Domain,
            MathError::DivideByZero | MathError::Overflow | MathError::Underflow => {
                ErrnoKind::Range
            }
        }
    }
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::InvalidOperation => f.write_str("Invalid operation"),
            MathError::DivideByZero => f.write_str("Divide by zero"),
            MathError::Overflow => f.write_str("Result overflows"),
            MathError::Underflow => f.write_str("Result underflows"),
        }
    }
}

impl Error for MathError {}

/// Receives floating point conditions raised by the math functions.
pub trait MathErrorSink {
    fn raise(&self, error: MathError);
}

thread_local! {
    static LAST_MATH_ERROR: Cell<Option<MathError>> = const { Cell::new(None) };
}

/// Sink which stores the condition into the per thread error indicator,
/// the same way C library math sets `errno`.
///
/// Read it back with [last_math_error].
#[derive(Debug, Copy, Clone, Default)]
pub struct ErrnoIndicator;

impl MathErrorSink for ErrnoIndicator {
    #[inline]
    fn raise(&self, error: MathError) {
        LAST_MATH_ERROR.with(|cell| cell.set(Some(error)));
    }
}

/// Sink that drops every condition
#[derive(Debug, Copy, Clone, Default)]
pub struct Quiet;

impl MathErrorSink for Quiet {
    #[inline(always)]
    fn raise(&self, _: MathError) {}
}

/// Returns the last condition stored by [ErrnoIndicator] on this thread.
///
/// Like `errno` it is never cleared by a successful call,
/// use [clear_math_error] before the call being inspected.
pub fn last_math_error() -> Option<MathError> {
    LAST_MATH_ERROR.with(|cell| cell.get())
}

/// Resets the per thread error indicator
pub fn clear_math_error() {
    LAST_MATH_ERROR.with(|cell| cell.set(None));
}
