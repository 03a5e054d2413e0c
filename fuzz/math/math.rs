#![no_main]

use fpowf::{MathError, MathErrorSink, PowfOptions, powf_with_sink};
use libfuzzer_sys::fuzz_target;
use std::cell::Cell;

#[derive(Default)]
struct LastError(Cell<Option<MathError>>);

impl MathErrorSink for LastError {
    fn raise(&self, error: MathError) {
        self.0.set(Some(error));
    }
}

fuzz_target!(|data: u64| {
    let lo = data.to_ne_bytes();

    let x = f32::from_bits(u32::from_ne_bytes([lo[0], lo[1], lo[2], lo[3]]));
    let y = f32::from_bits(u32::from_ne_bytes([lo[4], lo[5], lo[6], lo[7]]));

    let options = PowfOptions {
        report_errors: true,
        report_may_underflow: false,
    };
    let sink = LastError::default();
    let value = powf_with_sink(x, y, options, &sink);

    if !x.is_nan() || x.to_bits() & 0x00400000 != 0 {
        assert_eq!(powf_with_sink(x, 0., options, &sink), 1.);
    }
    if x.is_finite() {
        assert_eq!(powf_with_sink(x, 1., options, &sink).to_bits(), x.to_bits());
    }
    if x == 1. && (!y.is_nan() || y.to_bits() & 0x00400000 != 0) {
        assert_eq!(value, 1.);
    }
    if x.is_finite() && x < 0. && y.is_finite() && y.fract() != 0. {
        assert!(value.is_nan());
        assert_eq!(sink.0.get(), Some(MathError::InvalidOperation));
    }
    if value.is_finite() {
        assert_eq!(
            powf_with_sink(value, 1., options, &sink).to_bits(),
            value.to_bits()
        );
    }
});
