//! Kernel Errors

use microperf_core::BenchError;

/// Errors a kernel can raise on its own
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// Formatting then parsing an integer did not give back the original
    #[error("hex round trip mismatch: {value} rendered as {text:?} parsed back as {parsed}")]
    RoundTrip {
        /// The drawn integer
        value: u32,
        /// Its hexadecimal rendering
        text: String,
        /// What the parser returned
        parsed: u32,
    },
    /// Hexadecimal text could not be parsed
    #[error("invalid hexadecimal text {text:?}")]
    ParseHex {
        /// The rejected text
        text: String,
        /// Parser error
        #[source]
        source: std::num::ParseIntError,
    },
    /// Hexadecimal text carried a sign after the prefix
    #[error("sign not allowed in hexadecimal text {text:?}")]
    SignedHex {
        /// The rejected text
        text: String,
    },
    /// Block matrices could not be assembled
    #[error("matrix shape mismatch")]
    Shape(#[from] ndarray::ShapeError),
    /// A statistic was requested over zero trials
    #[error("statistic needs at least one trial slot")]
    EmptySample,
}

impl From<KernelError> for BenchError {
    fn from(err: KernelError) -> Self {
        BenchError::Kernel(Box::new(err))
    }
}
