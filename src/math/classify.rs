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
use crate::math::common::{EXPONENT_MASK_F32, SIGN_MASK_F32};

/// Parity of an `f32` treated as an integer
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum IntegerClass {
    NotInteger,
    OddInteger,
    EvenInteger,
}

/// Classifies `f32` bit pattern `iy` as integer.
///
/// Infinities and every value at or above 2^24 are even; NaN is even as
/// well and must be filtered out by the caller.
#[inline]
pub(crate) const fn checkint(iy: u32) -> IntegerClass {
    let e = ((iy >> 23) & 0xff) as i32;
    if e < 0x7f {
        return IntegerClass::NotInteger;
    }
    if e > 0x7f + 23 {
        return IntegerClass::EvenInteger;
    }
    // Position of the units bit in the mantissa
    let unit = (0x7f + 23 - e) as u32;
    if iy & ((1 << unit) - 1) != 0 {
        return IntegerClass::NotInteger;
    }
    if iy & (1 << unit) != 0 {
        return IntegerClass::OddInteger;
    }
    IntegerClass::EvenInteger
}

/// True for +-0, +-inf and NaN
#[inline(always)]
pub(crate) const fn zeroinfnan(ix: u32) -> bool {
    ix.wrapping_mul(2).wrapping_sub(1) >= 2u32 * EXPONENT_MASK_F32 - 1
}

/// NaN with the quiet bit cleared
#[inline(always)]
pub(crate) const fn is_signaling_nan(ix: u32) -> bool {
    (ix ^ 0x00400000).wrapping_mul(2) > 2u32 * 0x7fc00000
}

#[inline(always)]
pub(crate) const fn is_sign_negative(ix: u32) -> bool {
    ix & SIGN_MASK_F32 != 0
}
