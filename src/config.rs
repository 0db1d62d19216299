//! Run configuration

use crate::core::{Register, MAX_QUBITS};
use crate::error::{QregError, Result};
use std::path::PathBuf;

/// Register size used when none is given.
pub const DEFAULT_NUM_QUBITS: usize = 5;

/// Circuit file read when none is given.
pub const DEFAULT_CIRCUIT: &str = "examplecircuit";

/// Configuration for one circuit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of qubits in the register
    ///
    /// Must be in 1..=MAX_QUBITS.
    ///
    /// Default: 5
    pub num_qubits: usize,

    /// Path of the circuit file
    ///
    /// Default: "examplecircuit"
    pub circuit: PathBuf,

    /// Random number generator seed for reproducible measurements
    ///
    /// Default: None (entropy-seeded)
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_qubits: DEFAULT_NUM_QUBITS,
            circuit: PathBuf::from(DEFAULT_CIRCUIT),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the register size
    pub fn with_num_qubits(mut self, num_qubits: usize) -> Self {
        self.num_qubits = num_qubits;
        self
    }

    /// Set the circuit path
    pub fn with_circuit(mut self, circuit: impl Into<PathBuf>) -> Self {
        self.circuit = circuit.into();
        self
    }

    /// Set the measurement seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_qubits == 0 || self.num_qubits > MAX_QUBITS {
            return Err(QregError::InvalidRegisterSize {
                requested: self.num_qubits,
                max: MAX_QUBITS,
            });
        }
        Ok(())
    }

    /// Build the register this configuration describes.
    pub fn register(&self) -> Result<Register> {
        self.validate()?;
        match self.seed {
            Some(seed) => Register::with_seed(self.num_qubits, seed),
            None => Register::new(self.num_qubits),
        }
    }
}
