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

/// log2 table has 2^4 entries
pub(crate) const LOG2_TABLE_BITS: u32 = 4;
pub(crate) const LOG2_N: u32 = 1 << LOG2_TABLE_BITS;

/// exp2 table has 2^5 entries
pub(crate) const EXP2_TABLE_BITS: u32 = 5;
pub(crate) const EXP2_N: u64 = 1 << EXP2_TABLE_BITS;

/// Reduced log2 input is `z` in `[OFF, 2*OFF)`, `OFF` is ~0.699
pub(crate) const LOG2_OFF: u32 = 0x3f330000;

/// When the table index is shifted into the exponent field this bit
/// lands exactly on the sign bit of the f64.
pub(crate) const SIGN_BIAS: u64 = 1 << (EXP2_TABLE_BITS + 11);

/// With round to integer reduction log2 output is produced scaled by `N`,
/// so exp2 can take its table index directly from the integer part.
#[cfg(any(target_arch = "aarch64", feature = "toint"))]
pub(crate) const POWF_SCALE_BITS: u32 = EXP2_TABLE_BITS;
#[cfg(not(any(target_arch = "aarch64", feature = "toint")))]
pub(crate) const POWF_SCALE_BITS: u32 = 0;

pub(crate) const POWF_SCALE: f64 = (1u32 << POWF_SCALE_BITS) as f64;

/// Reciprocal of the subinterval center and its log2
#[derive(Debug, Copy, Clone)]
pub(crate) struct LogTableEntry {
    pub(crate) invc: f64,
    pub(crate) logc: f64,
}

const fn log_entry(invc: u64, logc: u64) -> LogTableEntry {
    LogTableEntry {
        invc: f64::from_bits(invc),
        logc: f64::from_bits(logc) * POWF_SCALE,
    }
}

/// `invc = 1/c`, `logc = log2(c)` for `c` near the center of
/// the subinterval `[OFF + i*2^-4, OFF + (i+1)*2^-4)` in mantissa units.
/// Entry 9 covers 1.0 and is exact.
pub(crate) static POWF_LOG2_TABLE: [LogTableEntry; LOG2_N as usize] = [
    log_entry(0x3ff661ec79f8f3be, 0xbfdefec65b963019),
    log_entry(0x3ff571ed4aaf883d, 0xbfdb0b6832d4fca4),
    log_entry(0x3ff49539f0f010b0, 0xbfd7418b0a1fb77b),
    log_entry(0x3ff3c995b0b80385, 0xbfd39de91a6dcf7b),
    log_entry(0x3ff30d190c8864a5, 0xbfd01d9bf3f2b631),
    log_entry(0x3ff25e227b0b8ea0, 0xbfc97c1d1b3b7af0),
    log_entry(0x3ff1bb4a4a1a343f, 0xbfc2f9e393af3c9f),
    log_entry(0x3ff12358f08ae5ba, 0xbfb960cbbf788d5c),
    log_entry(0x3ff0953f419900a7, 0xbfaa6f9db6475fce),
    log_entry(0x3ff0000000000000, 0x0000000000000000),
    log_entry(0x3fee608cfd9a47ac, 0x3fb338ca9f24f53d),
    log_entry(0x3feca4b31f026aa0, 0x3fc476a9543891ba),
    log_entry(0x3feb2036576afce6, 0x3fce840b4ac4e4d2),
    log_entry(0x3fe9c2d163a1aa2d, 0x3fd40645f0c6651c),
    log_entry(0x3fe886e6037841ed, 0x3fd88e9c2c1b9ff8),
    log_entry(0x3fe767dcf5534862, 0x3fdce0a44eb17bcc),
];

/// Minimax for `log1p(r)/ln2` on `|r| < 0.0313`, highest order first.
/// Relative error of log2 1.83 * 2^-33.
pub(crate) static POWF_LOG2_POLY: [f64; 5] = [
    f64::from_bits(0x3fd27616c9496e0b) * POWF_SCALE,
    f64::from_bits(0xbfd71969a075c67a) * POWF_SCALE,
    f64::from_bits(0x3fdec70a6ca7badd) * POWF_SCALE,
    f64::from_bits(0xbfe7154748bef6c8) * POWF_SCALE,
    f64::from_bits(0x3ff71547652ab82b) * POWF_SCALE,
];

/// `tab[i] = bits(2^(i/N)) - (i << 52) / N`, adding `k << 52 - 5` back
/// produces `2^(k/N)` for any `|k| < 150 N`.
pub(crate) static EXP2F_TABLE: [u64; EXP2_N as usize] = [
    0x3ff0000000000000, 0x3fefd9b0d3158574, 0x3fefb5586cf9890f, 0x3fef9301d0125b51,
    0x3fef72b83c7d517b, 0x3fef54873168b9aa, 0x3fef387a6e756238, 0x3fef1e9df51fdee1,
    0x3fef06fe0a31b715, 0x3feef1a7373aa9cb, 0x3feedea64c123422, 0x3feece086061892d,
    0x3feebfdad5362a27, 0x3feeb42b569d4f82, 0x3feeab07dd485429, 0x3feea47eb03a5585,
    0x3feea09e667f3bcd, 0x3fee9f75e8ec5f74, 0x3feea11473eb0187, 0x3feea589994cce13,
    0x3feeace5422aa0db, 0x3feeb737b0cdc5e5, 0x3feec49182a3f090, 0x3feed503b23e255d,
    0x3feee89f995ad3ad, 0x3feeff76f2fb5e47, 0x3fef199bdd85529c, 0x3fef3720dcef9069,
    0x3fef5818dcfba487, 0x3fef7c97337b9b5f, 0x3fefa4afa2a490da, 0x3fefd0765b6e4540,
];

const EXP2_C0: f64 = f64::from_bits(0x3fac6af84b912394);
const EXP2_C1: f64 = f64::from_bits(0x3fcebfce50fac4f3);
const EXP2_C2: f64 = f64::from_bits(0x3fe62e42ff0c52d6);

/// `2^r ~ 1 + C2 r + C1 r^2 + C0 r^3` on `|r| <= 1/(2N)`,
/// relative error 1.69 * 2^-34.
/// Scaled variant takes `N*r` in `[-1/2, 1/2]` instead.
#[cfg(not(any(target_arch = "aarch64", feature = "toint")))]
pub(crate) static EXP2F_POLY: [f64; 3] = [EXP2_C0, EXP2_C1, EXP2_C2];
#[cfg(any(target_arch = "aarch64", feature = "toint"))]
pub(crate) static EXP2F_POLY: [f64; 3] = [
    EXP2_C0 / (EXP2_N * EXP2_N * EXP2_N) as f64,
    EXP2_C1 / (EXP2_N * EXP2_N) as f64,
    EXP2_C2 / EXP2_N as f64,
];

/// 0x1.8p52 / N, adding it rounds to a multiple of 1/N
/// and leaves the multiple in the low mantissa bits.
#[cfg(not(any(target_arch = "aarch64", feature = "toint")))]
pub(crate) const EXP2F_SHIFT_SCALED: f64 = f64::from_bits(0x4338000000000000) / EXP2_N as f64;

/// `|y log2(x)|` is at least 126 when the top 17 bits of the product reach this value
pub(crate) const POWF_THRESHOLD_TOP: u64 = (126.0 * POWF_SCALE).to_bits() >> 47;

/// Largest `y log2(x)` still rounding below `f32::MAX` after exp2 error
pub(crate) const POWF_OVERFLOW_BOUND: f64 = f64::from_bits(0x405fffffffd1d571) * POWF_SCALE;

/// At or below this result rounds to zero
pub(crate) const POWF_UNDERFLOW_BOUND: f64 = -150.0 * POWF_SCALE;

/// Below this result rounds to the smallest subnormal or to zero
pub(crate) const POWF_MAY_UNDERFLOW_BOUND: f64 = -149.0 * POWF_SCALE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_table_is_consistent() {
        for (i, entry) in POWF_LOG2_TABLE.iter().enumerate() {
            let c = 1. / entry.invc;
            let lo = f32::from_bits(LOG2_OFF + ((i as u32) << (23 - LOG2_TABLE_BITS))) as f64;
            let hi = f32::from_bits(LOG2_OFF + ((i as u32 + 1) << (23 - LOG2_TABLE_BITS))) as f64;
            assert!(lo <= c && c < hi, "Center {} for {} is out of [{}, {})", c, i, lo, hi);
            let logc = entry.logc / POWF_SCALE;
            assert!(
                (logc + entry.invc.log2()).abs() < 1e-15,
                "Invalid log entry {}: {} vs {}",
                i,
                logc,
                -entry.invc.log2()
            );
        }
    }

    #[test]
    fn exp2_table_is_consistent() {
        for (i, &bits) in EXP2F_TABLE.iter().enumerate() {
            let restored = f64::from_bits(bits + ((i as u64) << (52 - EXP2_TABLE_BITS)));
            let expected = (i as f64 / EXP2_N as f64).exp2();
            assert!(
                (restored - expected).abs() <= f64::EPSILON * expected,
                "Invalid exp2 entry {}: {} vs {}",
                i,
                restored,
                expected
            );
        }
    }

    #[test]
    fn sign_bias_hits_sign_bit() {
        assert_eq!(SIGN_BIAS << (52 - EXP2_TABLE_BITS), 1u64 << 63);
        assert_eq!(POWF_THRESHOLD_TOP, (126.0 * POWF_SCALE).to_bits() >> 47);
        assert!(POWF_OVERFLOW_BOUND < 128.0 * POWF_SCALE);
    }
}
