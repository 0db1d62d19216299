//! Error types shared by the engine, the circuit front end and the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for register operations.
pub type Result<T> = std::result::Result<T, QregError>;

/// Errors raised while building operators, parsing circuits or measuring.
#[derive(Error, Debug)]
pub enum QregError {
    /// Qubit index is not an integer, lies outside `[1, n]`, or repeats
    /// another index of the same gate.
    #[error("invalid qubit index '{index}': {reason}")]
    InvalidQubitIndex {
        /// Offending index as written.
        index: String,
        /// Why the index was rejected.
        reason: String,
    },

    /// Unrecognized instruction opcode.
    #[error("unrecognized opcode '{opcode}'")]
    InvalidOpcode {
        /// Opcode token as written.
        opcode: String,
    },

    /// Operand count does not match the opcode.
    #[error("'{opcode}' expects {expected} operand(s), found {found}")]
    MalformedInstruction {
        /// Canonical opcode name.
        opcode: &'static str,
        /// Operand count the opcode takes.
        expected: usize,
        /// Operand count supplied.
        found: usize,
    },

    /// Register size outside the supported range.
    #[error("register size must be between 1 and {max} qubits, got {requested}")]
    InvalidRegisterSize {
        /// Requested qubit count.
        requested: usize,
        /// Largest supported qubit count.
        max: usize,
    },

    /// Amplitude vector whose length is not 2^n for a supported n.
    #[error("amplitude count {len} is not 2^n for any n in 1..={max}")]
    InvalidAmplitudeCount {
        /// Number of amplitudes supplied.
        len: usize,
        /// Largest supported qubit count.
        max: usize,
    },

    /// Measurement draw outside `[0, 1]`.
    #[error("measurement draw {0} is outside [0, 1]")]
    InvalidDraw(f64),

    /// A circuit error annotated with its 1-based source line.
    #[error("line {line}: {source}")]
    AtLine {
        /// Source line of the failing instruction.
        line: usize,
        /// Underlying error.
        #[source]
        source: Box<QregError>,
    },

    /// Circuit file could not be read.
    #[error("cannot read circuit '{}': {source}", .path.display())]
    CircuitRead {
        /// Path that was requested.
        path: PathBuf,
        /// I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl QregError {
    /// Index outside `[1, num_qubits]`.
    pub fn out_of_range(index: usize, num_qubits: usize) -> Self {
        Self::InvalidQubitIndex {
            index: index.to_string(),
            reason: format!("expected a qubit in 1..={num_qubits}"),
        }
    }

    /// Index repeated within one gate.
    pub fn aliased(index: usize) -> Self {
        Self::InvalidQubitIndex {
            index: index.to_string(),
            reason: "gate requires distinct qubits".into(),
        }
    }

    /// Operand token that does not parse as a qubit number.
    pub fn not_a_qubit(token: impl Into<String>) -> Self {
        Self::InvalidQubitIndex {
            index: token.into(),
            reason: "not a positive integer".into(),
        }
    }

    /// Attach a source line to this error.
    pub fn at_line(self, line: usize) -> Self {
        Self::AtLine {
            line,
            source: Box::new(self),
        }
    }

    /// The underlying error with any line annotation stripped.
    pub fn kind(&self) -> &QregError {
        match self {
            Self::AtLine { source, .. } => source.kind(),
            other => other,
        }
    }
}
