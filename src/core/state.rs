/// Dense state vector of an n-qubit register.
///
/// An n-qubit register has 2^n basis states and one real amplitude per
/// basis state. The vector satisfies Σ αᵢ² = 1 up to drift of `ERR_THRESH`.
///
/// Basis index bits are read most significant first: qubit 1 is the MSB,
/// qubit n the LSB.
use super::gates::{Operator, ERR_THRESH};
use super::operators::validate_qubits;
use crate::error::{QregError, Result};
use crate::runtime::readout;
use ndarray::Array1;
use std::fmt;

/// Largest register the dense operator builder is allowed to lift to.
/// A single 2^n × 2^n operator at n = 10 is already 8 MiB.
pub const MAX_QUBITS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Array1<f64>,
}

impl StateVector {
    /// Create a new state vector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Result<Self> {
        check_register_size(num_qubits)?;
        let mut amplitudes = Array1::zeros(1 << num_qubits);
        amplitudes[0] = 1.0;
        Ok(Self { num_qubits, amplitudes })
    }

    /// Build a state from explicit amplitudes. The length must be 2^n for a
    /// supported n. Normalization is left to the caller.
    pub fn from_amplitudes(amplitudes: Vec<f64>) -> Result<Self> {
        let len = amplitudes.len();
        if !len.is_power_of_two() || len < 2 || len > 1 << MAX_QUBITS {
            return Err(QregError::InvalidAmplitudeCount { len, max: MAX_QUBITS });
        }
        let num_qubits = len.trailing_zeros() as usize;
        Ok(Self { num_qubits, amplitudes: Array1::from(amplitudes) })
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimension of the state space: 2^n
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn amplitudes(&self) -> &Array1<f64> {
        &self.amplitudes
    }

    /// Amplitudes copied into a plain `Vec`.
    pub fn to_vec(&self) -> Vec<f64> {
        self.amplitudes.to_vec()
    }

    /// Probability of basis state `index`: αᵢ²
    #[inline(always)]
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index] * self.amplitudes[index]
    }

    /// Σ αᵢ², ≈ 1.0 for every reachable state.
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a * a).sum()
    }

    /// True when the total probability is 1 within `tolerance`.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total_probability() - 1.0).abs() < tolerance
    }

    /// Value (0 or 1) of 1-based `qubit` in basis state `index`.
    pub fn qubit_value(&self, index: usize, qubit: usize) -> Result<u8> {
        validate_qubits(&[qubit], self.num_qubits)?;
        Ok(((index >> (self.num_qubits - qubit)) & 1) as u8)
    }

    /// Basis state `index` as a zero-padded bit string, qubit 1 leftmost.
    pub fn basis_label(&self, index: usize) -> String {
        basis_label(index, self.num_qubits)
    }

    /// Left-multiply by a full-size operator and replace the state.
    pub(crate) fn apply_operator(&mut self, op: &Operator) {
        debug_assert_eq!(op.dim(), (self.dim(), self.dim()));
        self.amplitudes = op.dot(&self.amplitudes);
    }

    /// Snap amplitudes within `ERR_THRESH` of 1.0 to exactly 1.0.
    pub(crate) fn snap_near_one(&mut self) {
        self.amplitudes
            .mapv_inplace(|v| if (1.0 - v).abs() < ERR_THRESH { 1.0 } else { v });
    }

    /// Collapse onto basis state `index`: one-hot at `index`.
    pub(crate) fn collapse_to(&mut self, index: usize) {
        self.amplitudes.fill(0.0);
        self.amplitudes[index] = 1.0;
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&readout::format_state(self))
    }
}

/// Basis index `index` as `num_qubits` bits, qubit 1 leftmost.
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    format!("{:0>width$b}", index, width = num_qubits)
}

fn check_register_size(num_qubits: usize) -> Result<()> {
    if num_qubits == 0 || num_qubits > MAX_QUBITS {
        return Err(QregError::InvalidRegisterSize { requested: num_qubits, max: MAX_QUBITS });
    }
    Ok(())
}
