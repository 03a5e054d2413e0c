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
use crate::err::{ErrnoIndicator, MathError, MathErrorSink};
use crate::math::classify::{IntegerClass, checkint, is_sign_negative, is_signaling_nan, zeroinfnan};
use crate::math::common::{EXPONENT_MASK_F32, MIN_NORMAL_F32, ONE_F32};
use crate::math::exp2f::{Sign, powf_exp2};
use crate::math::log2f::powf_log2;
use crate::math::powf_data::{
    POWF_MAY_UNDERFLOW_BOUND, POWF_OVERFLOW_BOUND, POWF_THRESHOLD_TOP, POWF_UNDERFLOW_BOUND,
};
use crate::math::xflow::{divzerof, invalidf, may_uflowf, oflowf, uflowf};

/// Controls how [powf_with_options] and [powf_with_sink] report
/// floating point conditions.
///
/// Returned values never depend on these options, except that
/// reporting possible underflow also rounds results in `(2^-150, 2^-149)`
/// straight to the smallest subnormal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PowfOptions {
    /// Invalid operation, divide by zero, overflow and underflow
    /// are passed to the error sink.
    /// Defaults to `true` when the `errno` feature is on.
    pub report_errors: bool,
    /// Results smaller than the smallest subnormal, that would be non-zero
    /// with more precision, are reported as underflow as well.
    /// Defaults to `true` when the `errno-underflow` feature is on.
    pub report_may_underflow: bool,
}

impl Default for PowfOptions {
    fn default() -> Self {
        Self {
            report_errors: cfg!(feature = "errno"),
            report_may_underflow: cfg!(feature = "errno-underflow"),
        }
    }
}

/// Forwards to the sink only when reporting is enabled
struct Reporter<'a, S: ?Sized> {
    sink: &'a S,
    enabled: bool,
}

impl<S: MathErrorSink + ?Sized> MathErrorSink for Reporter<'_, S> {
    #[inline]
    fn raise(&self, error: MathError) {
        if self.enabled {
            self.sink.raise(error);
        }
    }
}

/// Computes `x` raised to the power `y`.
///
/// ULP error is 0.82. Conditions are stored in the per thread indicator,
/// see [crate::last_math_error].
#[inline]
pub fn powf(x: f32, y: f32) -> f32 {
    powf_with_sink(x, y, PowfOptions::default(), &ErrnoIndicator)
}

/// Computes `x` raised to the power `y` with explicit reporting options.
#[inline]
pub fn powf_with_options(x: f32, y: f32, options: PowfOptions) -> f32 {
    powf_with_sink(x, y, options, &ErrnoIndicator)
}

/// Computes `x` raised to the power `y`, conditions go to `sink`.
///
/// Special values follow IEEE 754-2019 `pow`:
/// - `powf(x, ±0) = 1` for any `x` except signaling NaN,
/// - `powf(1, y) = 1` for any `y` except signaling NaN,
/// - `powf(-1, ±inf) = 1`,
/// - negative finite `x` with non integer `y` is an invalid operation,
/// - `powf(±0, y)` with negative `y` is a division by zero.
pub fn powf_with_sink<S: MathErrorSink + ?Sized>(
    x: f32,
    y: f32,
    options: PowfOptions,
    sink: &S,
) -> f32 {
    let reporter = Reporter {
        sink,
        enabled: options.report_errors,
    };
    let mut sign = Sign::Positive;
    let mut ix = x.to_bits();
    let iy = y.to_bits();

    if ix.wrapping_sub(MIN_NORMAL_F32) >= EXPONENT_MASK_F32 - MIN_NORMAL_F32 || zeroinfnan(iy) {
        // Either (x < 0x1p-126 or inf or nan) or (y is 0 or inf or nan).
        if zeroinfnan(iy) {
            if iy.wrapping_mul(2) == 0 {
                return if is_signaling_nan(ix) { x + y } else { 1. };
            }
            if ix == ONE_F32 {
                return if is_signaling_nan(iy) { x + y } else { 1. };
            }
            if ix.wrapping_mul(2) > 2 * EXPONENT_MASK_F32
                || iy.wrapping_mul(2) > 2 * EXPONENT_MASK_F32
            {
                return x + y;
            }
            if ix.wrapping_mul(2) == 2 * ONE_F32 {
                return 1.;
            }
            if (ix.wrapping_mul(2) < 2 * ONE_F32) == !is_sign_negative(iy) {
                // |x|<1 && y==inf or |x|>1 && y==-inf.
                return 0.;
            }
            return y * y;
        }
        if zeroinfnan(ix) {
            let mut x2 = x * x;
            if is_sign_negative(ix) && checkint(iy) == IntegerClass::OddInteger {
                x2 = -x2;
                sign = Sign::Negative;
            }
            if ix.wrapping_mul(2) == 0 && is_sign_negative(iy) {
                return divzerof(sign, &reporter);
            }
            return if is_sign_negative(iy) { 1. / x2 } else { x2 };
        }
        // x and y are non-zero finite.
        if is_sign_negative(ix) {
            match checkint(iy) {
                IntegerClass::NotInteger => return invalidf(x, &reporter),
                IntegerClass::OddInteger => sign = Sign::Negative,
                IntegerClass::EvenInteger => {}
            }
            ix &= 0x7fffffff;
        }
        if ix < MIN_NORMAL_F32 {
            // Normalize subnormal x so exponent becomes negative.
            ix = (x * f32::from_bits(0x4b000000)).to_bits(); // 0x1p23
            ix &= 0x7fffffff;
            ix = ix.wrapping_sub(23 << 23);
        }
    }

    let logx = powf_log2(ix);
    // y is single precision, the product cannot overflow.
    let ylogx = y as f64 * logx;
    if ((ylogx.to_bits() >> 47) & 0xffff) >= POWF_THRESHOLD_TOP {
        // |y*log(x)| >= 126.
        if ylogx > POWF_OVERFLOW_BOUND {
            return oflowf(sign, &reporter);
        }
        if ylogx <= POWF_UNDERFLOW_BOUND {
            return uflowf(sign, &reporter);
        }
        if options.report_may_underflow && ylogx < POWF_MAY_UNDERFLOW_BOUND {
            return may_uflowf(sign, &reporter);
        }
    }
    powf_exp2(ylogx, sign) as f32
}
