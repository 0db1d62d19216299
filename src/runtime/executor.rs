/// Circuit executor: drives a `Register` through a `Program`.
///
/// Execution model:
///   1. Instructions are executed in order on the caller's register.
///   2. Before the first measurement, a probability snapshot is captured
///      so the caller can display the theoretical distribution.
///   3. Each MEASURE collapses the whole register and records the basis
///      state it landed on.
///   4. The final amplitudes are rendered as a ket readout.
use crate::compiler::ir::{Instruction, Program};
use crate::core::{basis_label, Register};
use crate::error::Result;
use rand::Rng;
use tracing::{debug, info};

use super::readout;

// ── Result types ──────────────────────────────────────────────────────────

/// One whole-register measurement outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord {
    /// Index into Program.instructions where this measurement occurred.
    pub step: usize,
    /// Basis index the register collapsed onto.
    pub outcome: usize,
    /// Outcome as a bit string, qubit 1 leftmost.
    pub label: String,
}

/// The full result of executing a circuit.
#[derive(Debug)]
pub struct ExecutionResult {
    pub num_qubits: usize,
    /// All measurement outcomes in the order they were performed.
    pub measurements: Vec<MeasurementRecord>,
    /// Probability distribution captured just before the first measurement.
    /// `None` if the circuit contained no measurement.
    pub pre_measurement_probs: Option<Vec<f64>>,
    /// Final amplitudes after all instructions.
    pub amplitudes: Vec<f64>,
    /// Gate operations applied (MEASURE not counted).
    pub gate_count: usize,
    /// Ket expression of the final state.
    pub readout: String,
}

impl ExecutionResult {
    /// Outcome of the last measurement, if any.
    pub fn last_outcome(&self) -> Option<&MeasurementRecord> {
        self.measurements.last()
    }

    /// Final probability distribution.
    pub fn final_probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a * a).collect()
    }

    /// (basis_label, probability) pairs for states with p > threshold.
    pub fn significant_states(&self, probs: &[f64], threshold: f64) -> Vec<(String, f64)> {
        probs
            .iter()
            .enumerate()
            .filter(|(_, &p)| p > threshold)
            .map(|(i, &p)| (basis_label(i, self.num_qubits), p))
            .collect()
    }
}

// ── Execution ─────────────────────────────────────────────────────────────

/// Execute `program` on `register`, mutating it in place.
pub fn execute<R: Rng>(program: &Program, register: &mut Register<R>) -> Result<ExecutionResult> {
    info!(
        qubits = register.num_qubits(),
        gates = program.gate_count,
        measurements = program.measure_count,
        "executing circuit"
    );

    let mut measurements: Vec<MeasurementRecord> = Vec::new();
    let mut pre_measurement_probs: Option<Vec<f64>> = None;
    let mut gate_count: usize = 0;

    for (step, instr) in program.instructions.iter().enumerate() {
        match instr {
            Instruction::Gate(gate) => {
                register.apply(*gate)?;
                gate_count += 1;
            }
            Instruction::Measure => {
                if pre_measurement_probs.is_none() {
                    let state = register.state();
                    let probs = (0..state.dim()).map(|i| state.probability(i)).collect();
                    pre_measurement_probs = Some(probs);
                }
                let outcome = register.measure()?;
                let label = register.state().basis_label(outcome);
                debug!(step, outcome, %label, "measurement recorded");
                measurements.push(MeasurementRecord { step, outcome, label });
            }
        }
    }

    let state = register.state();
    let result = ExecutionResult {
        num_qubits: state.num_qubits(),
        measurements,
        pre_measurement_probs,
        amplitudes: state.to_vec(),
        gate_count,
        readout: readout::format_state(state),
    };
    info!(readout = %result.readout, "circuit finished");
    Ok(result)
}

// ── Tests ─────────────────────────────────────────────────────────────────
