//! # qreg
//!
//! Dense state-vector simulator for a small fixed-size qubit register,
//! with a line-oriented circuit format and a ket-notation readout.
//!
//! ## Quick Start
//!
//! ```rust
//! use qreg::core::Register;
//!
//! // Create a 2-qubit register with reproducible measurements
//! let mut reg = Register::with_seed(2, 7).unwrap();
//!
//! // Build a Bell state: (|00⟩ + |11⟩) / √2
//! reg.hadamard(1).unwrap().cnot(1, 2).unwrap();
//! assert_eq!(reg.to_string(), "1/√2|00> + 1/√2|11>");
//!
//! // Measure: collapses the whole register
//! let outcome = reg.measure().unwrap();
//! assert!(outcome == 0 || outcome == 3);
//! ```
//!
//! Circuits can also be run from text:
//!
//! ```rust
//! use qreg::{compiler, core::Register};
//!
//! let mut reg = Register::with_seed(2, 0).unwrap();
//! let result = compiler::run("not 1\ncnot 1 2", &mut reg).unwrap();
//! assert_eq!(result.readout, "|11>");
//! ```

pub mod compiler;
pub mod config;
pub mod core;
pub mod error;
pub mod runtime;

pub use config::SimulationConfig;
pub use error::{QregError, Result};
