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
use crate::math::powf_data::{
    LOG2_N, LOG2_OFF, LOG2_TABLE_BITS, POWF_LOG2_POLY, POWF_LOG2_TABLE, POWF_SCALE_BITS,
};

/// Computes `log2(x) * POWF_SCALE` from the bit pattern of a positive `x`.
///
/// Subnormal `x` must be normalized first, so `ix` carries a negative
/// biased exponent. Relative error is 1.83 * 2^-33.
#[inline(always)]
pub(crate) fn powf_log2(ix: u32) -> f64 {
    // x = 2^k z; where z is in range [OFF, 2*OFF) and exact.
    // The range is split into N subintervals.
    // The ith subinterval contains z and c is near its center.
    let tmp = ix.wrapping_sub(LOG2_OFF);
    let i = ((tmp >> (23 - LOG2_TABLE_BITS)) % LOG2_N) as usize;
    let top = tmp & 0xff800000;
    let iz = ix.wrapping_sub(top);
    let k = (top as i32) >> (23 - POWF_SCALE_BITS);
    let entry = POWF_LOG2_TABLE[i];
    let z = f32::from_bits(iz) as f64;

    // log2(x) = log1p(z/c-1)/ln2 + log2(c) + k
    let r = f_fmla(z, entry.invc, -1.);
    let y0 = entry.logc + k as f64;

    let a = &POWF_LOG2_POLY;
    let r2 = r * r;
    let y = f_fmla(a[0], r, a[1]);
    let p = f_fmla(a[2], r, a[3]);
    let r4 = r2 * r2;
    let q = f_fmla(a[4], r, y0);
    let q = f_fmla(p, r2, q);
    f_fmla(y, r4, q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::powf_data::POWF_SCALE;

    fn unscaled(x: f32) -> f64 {
        powf_log2(x.to_bits()) / POWF_SCALE
    }

    #[test]
    fn test_log2() {
        assert_eq!(unscaled(1.), 0.);
        assert_eq!(unscaled(2.), 1.);
        assert_eq!(unscaled(0.5), -1.);
        assert_eq!(unscaled(1024.), 10.);

        let mut max_rel = 0f64;
        for i in 1..20000 {
            let x = i as f32 / 1000.;
            let system = (x as f64).log2();
            let my_log = unscaled(x);
            if system == 0. {
                assert_eq!(my_log, 0.);
                continue;
            }
            max_rel = max_rel.max(((my_log - system) / system).abs());
        }
        println!("log2 max relative error {}", max_rel);
        assert!(max_rel < 2f64.powi(-32), "Relative error {}", max_rel);
    }

    #[test]
    fn test_log2_full_range() {
        let mut max_rel = 0f64;
        let mut bits = 0x00800000u32;
        while bits < 0x7f800000 {
            let x = f32::from_bits(bits);
            let system = (x as f64).log2();
            let my_log = unscaled(x);
            if system != 0. {
                max_rel = max_rel.max(((my_log - system) / system).abs());
            }
            bits += 0x1235;
        }
        println!("log2 max relative error over range {}", max_rel);
        assert!(max_rel < 2f64.powi(-32), "Relative error {}", max_rel);
    }

    #[test]
    fn test_log2_normalized_subnormal() {
        // 2^-149 scaled by 2^23 with the exponent moved below zero
        let ix = (f32::from_bits(1) * f32::from_bits(0x4b000000))
            .to_bits()
            .wrapping_sub(23 << 23);
        assert_eq!(powf_log2(ix) / POWF_SCALE, -149.);

        let x = f32::from_bits(0x0003_0000);
        let ix = (x * f32::from_bits(0x4b000000))
            .to_bits()
            .wrapping_sub(23 << 23);
        let system = (x as f64).log2();
        let my_log = powf_log2(ix) / POWF_SCALE;
        assert!(
            ((my_log - system) / system).abs() < 2f64.powi(-32),
            "Invalid log2 {} vs {}",
            my_log,
            system
        );
    }
}
