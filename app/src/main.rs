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
use fpowf::{MathError, MathErrorSink, PowfOptions, powf, powf_with_sink};
use rand::Rng;
use std::cell::Cell;

#[derive(Default)]
struct Counter {
    invalid: Cell<usize>,
    divide_by_zero: Cell<usize>,
    overflow: Cell<usize>,
    underflow: Cell<usize>,
}

impl MathErrorSink for Counter {
    fn raise(&self, error: MathError) {
        let cell = match error {
            MathError::InvalidOperation => &self.invalid,
            MathError::DivideByZero => &self.divide_by_zero,
            MathError::Overflow => &self.overflow,
            MathError::Underflow => &self.underflow,
        };
        cell.set(cell.get() + 1);
    }
}

fn ulp_of(reference: f64) -> f64 {
    let biased = (((reference as f32).to_bits() >> 23) & 0xff) as i32;
    let e = if biased == 0 { -149 } else { biased - 127 - 23 };
    2f64.powi(e)
}

fn main() {
    let mut rng = rand::rng();
    let counter = Counter::default();
    let options = PowfOptions::default();

    let mut ulp_peak = 0f64;
    let mut worst = (0f32, 0f32);
    let mut libm_peak = 0f64;
    let mut pxfm_away = 0i64;
    for _ in 0..5_000_000 {
        let x = f32::from_bits(rng.random_range(0u32..0x7f800000));
        let y = rng.random_range(-160f32..160f32);
        let reference = (x as f64).powf(y as f64);
        let value = powf_with_sink(x, y, options, &counter);
        if !(f32::MIN_POSITIVE as f64..=f32::MAX as f64).contains(&reference) {
            continue;
        }
        let ulp = (value as f64 - reference).abs() / ulp_of(reference);
        if ulp > ulp_peak {
            ulp_peak = ulp;
            worst = (x, y);
        }
        let libm_ulp = (libm::powf(x, y) as f64 - reference).abs() / ulp_of(reference);
        libm_peak = libm_peak.max(libm_ulp);
        let correct = pxfm::f_powf(x, y);
        pxfm_away = pxfm_away.max((value.to_bits() as i64 - correct.to_bits() as i64).abs());
    }

    println!(
        "fpowf ULP peak {} at powf({}, {}), libm ULP peak {}, max away from correctly rounded {}",
        ulp_peak, worst.0, worst.1, libm_peak, pxfm_away
    );
    println!(
        "invalid {}, divide by zero {}, overflow {}, underflow {}",
        counter.invalid.get(),
        counter.divide_by_zero.get(),
        counter.overflow.get(),
        counter.underflow.get()
    );
    println!("powf(-8, 1/3) = {}", powf(-8., 1. / 3.));
    println!("last error {:?}", fpowf::last_math_error());
}
