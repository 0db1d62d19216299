pub mod gates;
pub mod operators;
pub mod register;
pub mod state;

// Convenience re-exports for library users
pub use gates::{Gate, Operator, ERR_THRESH};
pub use register::Register;
pub use state::{basis_label, StateVector, MAX_QUBITS};
