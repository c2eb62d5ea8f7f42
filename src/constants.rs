//! Crate-wide constants.

/// The name of the label column used when none is specified.
pub const DEFAULT_TARGET: &str = "label";

/// Two gains closer than this are treated as a tie.
pub const GAIN_TOLERANCE: f64 = 1e-12;

pub const BUFFER_SIZE: usize = 256;
