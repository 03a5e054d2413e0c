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
use crate::mlaf::mlaf;

#[inline(always)]
pub(crate) fn f_fmla(a: f64, b: f64, c: f64) -> f64 {
    mlaf(c, a, b)
}

/// Bit pattern of `f32` exponent field
pub(crate) const EXPONENT_MASK_F32: u32 = 0x7f800000;
/// Bit pattern of `1.0f32`
pub(crate) const ONE_F32: u32 = 0x3f800000;
/// Smallest positive normal `f32`
pub(crate) const MIN_NORMAL_F32: u32 = 0x00800000;
pub(crate) const SIGN_MASK_F32: u32 = 0x80000000;

/// Distance of `d` from the exact value `c` in ULPs of the `f32` nearest to `c`
#[cfg(test)]
pub(crate) fn count_ulp(d: f32, c: f64) -> f64 {
    let biased = (((c as f32).to_bits() >> 23) & 0xff) as i32;
    let e = if biased == 0 { -149 } else { biased - 127 - 23 };
    (d as f64 - c).abs() / 2f64.powi(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_ulp_test() {
        assert_eq!(count_ulp(1.0, 1.0), 0.);
        let next = f32::from_bits(ONE_F32 + 1);
        assert!((count_ulp(next, 1.0) - 1.0).abs() < 1e-12);
        let tiny = f32::from_bits(1);
        assert!((count_ulp(tiny, 0.) - 1.0).abs() < 1e-12);
        assert!((count_ulp(1.0, 1.0 + 2f64.powi(-24)) - 0.5).abs() < 1e-12);
    }
}
