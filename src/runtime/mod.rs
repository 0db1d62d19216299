/// Runtime layer.
///
/// Sits above the circuit front end and handles:
///   - In-order execution of a `Program` on a caller-owned `Register`
///   - Measurement bookkeeping
///   - Ket readout of the final state
///
/// Architecture:
///   circuit text → compiler (lexer+parser+IR) → executor → readout
pub mod executor;
pub mod readout;

pub use executor::{execute, ExecutionResult, MeasurementRecord};
pub use readout::format_state;
