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
use crate::math::common::f_fmla;
#[cfg(not(any(target_arch = "aarch64", feature = "toint")))]
use crate::math::powf_data::EXP2F_SHIFT_SCALED;
use crate::math::powf_data::{EXP2_N, EXP2_TABLE_BITS, EXP2F_POLY, EXP2F_TABLE, SIGN_BIAS};

/// Sign applied to the exp2 result
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub(crate) enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Value added to the table index, lands on the sign bit after
    /// the index is shifted into the exponent field.
    #[inline(always)]
    pub(crate) const fn bias(self) -> u64 {
        match self {
            Sign::Positive => 0,
            Sign::Negative => SIGN_BIAS,
        }
    }

    #[inline(always)]
    pub(crate) const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

/// Splits `xd` into `k/N + r` rounding with the shift constant.
/// Returns `k/N` and the bits holding `k` in their low part.
#[cfg(not(any(target_arch = "aarch64", feature = "toint")))]
#[inline(always)]
fn reduce(xd: f64) -> (f64, u64) {
    // x = k/N + r with r in [-1/(2N), 1/(2N)]
    let kd = xd + EXP2F_SHIFT_SCALED;
    let ki = kd.to_bits();
    (kd - EXP2F_SHIFT_SCALED, ki)
}

/// Splits scaled `xd = N*x` into `k + r` rounding with the native round.
#[cfg(any(target_arch = "aarch64", feature = "toint"))]
#[inline(always)]
fn reduce(xd: f64) -> (f64, u64) {
    // N*x = k + r with r in [-1/2, 1/2]
    let kd = xd.round();
    (kd, kd as i64 as u64)
}

/// Computes `2^(xd / POWF_SCALE)` negated when `sign` is negative.
///
/// Unscaled `xd` must be in `[-1021, 1023]`. Relative error is 1.69 * 2^-34.
#[inline(always)]
pub(crate) fn powf_exp2(xd: f64, sign: Sign) -> f64 {
    let (kd, ki) = reduce(xd);
    let r = xd - kd;

    // exp2(x) = 2^(k/N) * 2^r ~= s * (C0*r^3 + C1*r^2 + C2*r + 1)
    let mut t = EXP2F_TABLE[(ki % EXP2_N) as usize];
    let ski = ki.wrapping_add(sign.bias());
    t = t.wrapping_add(ski << (52 - EXP2_TABLE_BITS));
    let s = f64::from_bits(t);

    let c = &EXP2F_POLY;
    let z = f_fmla(c[0], r, c[1]);
    let r2 = r * r;
    let y = f_fmla(c[2], r, 1.);
    let y = f_fmla(z, r2, y);
    y * s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::powf_data::POWF_SCALE;

    #[test]
    fn test_exp2() {
        for n in -149..128 {
            let my_exp = powf_exp2(n as f64 * POWF_SCALE, Sign::Positive);
            assert_eq!(my_exp, 2f64.powi(n), "Invalid exp2 for {}", n);
        }

        let mut max_rel = 0f64;
        for i in -100000..100000 {
            let x = i as f64 / 700.;
            let system = x.exp2();
            let my_exp = powf_exp2(x * POWF_SCALE, Sign::Positive);
            max_rel = max_rel.max(((my_exp - system) / system).abs());
        }
        println!("exp2 max relative error {}", max_rel);
        assert!(max_rel < 2f64.powi(-33), "Relative error {}", max_rel);
    }

    #[test]
    fn test_exp2_sign() {
        for i in -2000..2000 {
            let x = i as f64 / 17. * POWF_SCALE;
            let positive = powf_exp2(x, Sign::Positive);
            let negative = powf_exp2(x, Sign::Negative);
            assert!(positive > 0.);
            assert_eq!(negative, -positive, "Sign is not applied for {}", x);
        }
        assert!(Sign::Negative.is_negative());
        assert!(!Sign::default().is_negative());
    }
}
