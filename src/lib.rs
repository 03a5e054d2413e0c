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
#![allow(clippy::excessive_precision, clippy::unreadable_literal)]
#![deny(unreachable_pub)]
//! Single precision `pow` built from a table driven `log2` and `exp2`
//! evaluated in double precision.
//!
//! ULP error is 0.82 for the whole domain, special values follow IEEE 754.
//!
//! # Example
//! ```
//! use fpowf::{MathError, clear_math_error, last_math_error, powf};
//!
//! assert_eq!(powf(2., 10.), 1024.);
//! clear_math_error();
//! assert!(powf(-8., 1. / 3.).is_nan());
//! # if cfg!(feature = "errno") {
//! assert_eq!(last_math_error(), Some(MathError::InvalidOperation));
//! # }
//! ```
mod err;
mod math;
mod mlaf;

pub use err::{
    ErrnoIndicator, ErrnoKind, MathError, MathErrorSink, Quiet, clear_math_error,
    last_math_error,
};
pub use math::{PowfOptions, powf, powf_with_options, powf_with_sink};

#[cfg(test)]
mod tests {
    use std::path::Path;

    fn visit(dir: &Path, files: &mut Vec<std::path::PathBuf>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                visit(&path, files);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
    }

    #[test]
    fn license_headers_are_closed() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let mut files = Vec::new();
        visit(&root.join("src"), &mut files);
        visit(&root.join("app"), &mut files);
        assert!(files.len() > 10);
        for file in files {
            let source = std::fs::read_to_string(&file).unwrap();
            if !source.starts_with("/*") {
                continue;
            }
            let header_end = source.lines().position(|line| line == " */");
            assert!(
                header_end.is_some_and(|end| end < 28),
                "License header in {:?} is not closed",
                file
            );
        }
    }
}
