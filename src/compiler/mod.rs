/// Circuit front end.
///
/// Pipeline: circuit text → Lexer → Parser → IR → Runtime Executor → Result
///
/// Each stage is a separate module with a clean boundary.
/// Parse errors carry source line numbers for precise diagnostics.
pub mod ir;
pub mod lexer;
pub mod parser;

pub use crate::runtime::{execute, ExecutionResult, MeasurementRecord};
pub use ir::{Instruction, Program};
pub use parser::parse;

use crate::core::Register;
use crate::error::{QregError, Result};
use rand::Rng;
use std::path::Path;

/// Read circuit text from `path`.
pub fn read_circuit(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| QregError::CircuitRead {
        path: path.to_path_buf(),
        source,
    })
}

/// One-shot: lex + parse circuit text for an `num_qubits` register.
pub fn parse_source(source: &str, num_qubits: usize) -> Result<Program> {
    parser::parse(lexer::tokenize(source), num_qubits)
}

/// One-shot: read + lex + parse a circuit file.
pub fn load_program(path: impl AsRef<Path>, num_qubits: usize) -> Result<Program> {
    let source = read_circuit(path)?;
    parse_source(&source, num_qubits)
}

/// One-shot: lex + parse + execute on `register`.
pub fn run<R: Rng>(source: &str, register: &mut Register<R>) -> Result<ExecutionResult> {
    let program = parse_source(source, register.num_qubits())?;
    crate::runtime::execute(&program, register)
}
