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
use crate::err::{MathError, MathErrorSink};
use crate::math::exp2f::Sign;
use std::hint::black_box;

/// Squares a signed constant at runtime so the result carries
/// the hardware flags together with the correct sign.
#[inline(always)]
fn xflowf(sign: Sign, y: f32) -> f32 {
    black_box(if sign.is_negative() { -y } else { y }) * y
}

/// Signed infinity
#[cold]
pub(crate) fn oflowf(sign: Sign, sink: &impl MathErrorSink) -> f32 {
    sink.raise(MathError::Overflow);
    xflowf(sign, f32::from_bits(0x70000000)) // 0x1p97
}

/// Signed zero
#[cold]
pub(crate) fn uflowf(sign: Sign, sink: &impl MathErrorSink) -> f32 {
    sink.raise(MathError::Underflow);
    xflowf(sign, f32::from_bits(0x10000000)) // 0x1p-95
}

/// Signed smallest subnormal
#[cold]
pub(crate) fn may_uflowf(sign: Sign, sink: &impl MathErrorSink) -> f32 {
    sink.raise(MathError::Underflow);
    xflowf(sign, f32::from_bits(0x1a200000)) // 0x1.4p-75
}

/// Signed infinity
#[cold]
pub(crate) fn divzerof(sign: Sign, sink: &impl MathErrorSink) -> f32 {
    sink.raise(MathError::DivideByZero);
    black_box(if sign.is_negative() { -1f32 } else { 1f32 }) / 0f32
}

/// NaN computed from the finite `x`
#[cold]
pub(crate) fn invalidf(x: f32, sink: &impl MathErrorSink) -> f32 {
    sink.raise(MathError::InvalidOperation);
    (x - x) / (x - x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err::Quiet;
    use std::cell::Cell;

    #[test]
    fn xflow_values() {
        assert_eq!(oflowf(Sign::Positive, &Quiet), f32::INFINITY);
        assert_eq!(oflowf(Sign::Negative, &Quiet), f32::NEG_INFINITY);
        let zero = uflowf(Sign::Positive, &Quiet);
        assert_eq!(zero, 0.);
        assert!(zero.is_sign_positive());
        let zero = uflowf(Sign::Negative, &Quiet);
        assert_eq!(zero, 0.);
        assert!(zero.is_sign_negative());
        assert_eq!(may_uflowf(Sign::Positive, &Quiet), f32::from_bits(1));
        assert_eq!(may_uflowf(Sign::Negative, &Quiet), -f32::from_bits(1));
        assert_eq!(divzerof(Sign::Positive, &Quiet), f32::INFINITY);
        assert_eq!(divzerof(Sign::Negative, &Quiet), f32::NEG_INFINITY);
        assert!(invalidf(-2., &Quiet).is_nan());
    }

    #[derive(Default)]
    struct LastError(Cell<Option<MathError>>);

    impl MathErrorSink for LastError {
        fn raise(&self, error: MathError) {
            self.0.set(Some(error));
        }
    }

    #[test]
    fn xflow_reports() {
        let sink = LastError::default();
        assert!(invalidf(-8., &sink).is_nan());
        assert_eq!(sink.0.get(), Some(MathError::InvalidOperation));
        assert!(invalidf(-f32::from_bits(1), &sink).is_nan());
        assert_eq!(sink.0.get(), Some(MathError::InvalidOperation));
        assert!(divzerof(Sign::Negative, &sink).is_infinite());
        assert_eq!(sink.0.get(), Some(MathError::DivideByZero));
        assert!(oflowf(Sign::Positive, &sink).is_infinite());
        assert_eq!(sink.0.get(), Some(MathError::Overflow));
        assert_eq!(uflowf(Sign::Positive, &sink), 0.);
        assert_eq!(sink.0.get(), Some(MathError::Underflow));
    }
}
