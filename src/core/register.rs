/// Qubit register: the state-vector engine.
///
/// `Register` owns one state vector and the random source used by
/// measurement. Every gate is addressed by 1-based qubit indices, lifted to
/// a full-size operator by the builder and left-multiplied into the state.
/// It handles:
///   - Gate application (NOT, Z, Hadamard, CNOT, SWAP, CCNOT, CSWAP)
///   - Whole-register measurement from a single uniform draw
///   - Deterministic mode (seeded or injected RNG) for tests and replays
use super::gates::{self, Gate, ERR_THRESH};
use super::operators::{build_ccnot, build_controlled, build_cswap, build_single, validate_qubits};
use super::state::StateVector;
use crate::error::{QregError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct Register<R = StdRng> {
    state: StateVector,
    rng: R,
    gate_count: usize,
}

impl Register<StdRng> {
    /// Create an `n`-qubit register in |0...0⟩ with an entropy-seeded RNG.
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::with_rng(num_qubits, StdRng::from_entropy())
    }

    /// Create a register whose measurements are reproducible for `seed`.
    pub fn with_seed(num_qubits: usize, seed: u64) -> Result<Self> {
        Self::with_rng(num_qubits, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Register<R> {
    /// Create a register in |0...0⟩ drawing measurement randomness from `rng`.
    pub fn with_rng(num_qubits: usize, rng: R) -> Result<Self> {
        Ok(Self::with_state(StateVector::new(num_qubits)?, rng))
    }

    /// Wrap an existing state vector.
    pub fn with_state(state: StateVector, rng: R) -> Self {
        Self { state, rng, gate_count: 0 }
    }

    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Gates applied since construction or the last reset.
    pub fn gate_count(&self) -> usize {
        self.gate_count
    }

    // ── Gates ─────────────────────────────────────────────────────────────

    pub fn not(&mut self, qubit: usize) -> Result<&mut Self> {
        self.apply(Gate::Not(qubit))
    }

    pub fn z(&mut self, qubit: usize) -> Result<&mut Self> {
        self.apply(Gate::Z(qubit))
    }

    pub fn hadamard(&mut self, qubit: usize) -> Result<&mut Self> {
        self.apply(Gate::Hadamard(qubit))
    }

    pub fn cnot(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        self.apply(Gate::Cnot { control, target })
    }

    pub fn swap(&mut self, a: usize, b: usize) -> Result<&mut Self> {
        self.apply(Gate::Swap { a, b })
    }

    pub fn ccnot(&mut self, control0: usize, control1: usize, target: usize) -> Result<&mut Self> {
        self.apply(Gate::Ccnot { control0, control1, target })
    }

    pub fn cswap(&mut self, control: usize, a: usize, b: usize) -> Result<&mut Self> {
        self.apply(Gate::Cswap { control, a, b })
    }

    /// Apply one gate. Indices are validated before the state is touched,
    /// so a rejected gate leaves the register unchanged.
    pub fn apply(&mut self, gate: Gate) -> Result<&mut Self> {
        let n = self.num_qubits();
        match gate {
            Gate::Not(q) => {
                self.state.apply_operator(&build_single(&gates::pauli_x(), q, n)?);
            }
            Gate::Z(q) => {
                self.state.apply_operator(&build_single(&gates::pauli_z(), q, n)?);
            }
            Gate::Hadamard(q) => {
                self.state.apply_operator(&build_single(&gates::hadamard(), q, n)?);
                self.state.snap_near_one();
            }
            Gate::Cnot { control, target } => {
                self.state
                    .apply_operator(&build_controlled(control, target, &gates::pauli_x(), n)?);
            }
            Gate::Swap { a, b } => {
                validate_qubits(&[a, b], n)?;
                let x = gates::pauli_x();
                for (control, target) in [(a, b), (b, a), (a, b)] {
                    self.state.apply_operator(&build_controlled(control, target, &x, n)?);
                }
            }
            Gate::Ccnot { control0, control1, target } => {
                self.state.apply_operator(&build_ccnot(control0, control1, target, n)?);
            }
            Gate::Cswap { control, a, b } => {
                self.state.apply_operator(&build_cswap(control, a, b, n)?);
            }
        }
        self.gate_count += 1;
        debug!(gate = gate.mnemonic(), qubits = ?gate.qubits(), "applied gate");
        Ok(self)
    }

    // ── Measurement ───────────────────────────────────────────────────────

    /// Measure the whole register with one uniform draw from the RNG.
    /// Returns the basis index the state collapsed onto.
    pub fn measure(&mut self) -> Result<usize> {
        let r: f64 = self.rng.gen();
        self.measure_with_draw(r)
    }

    /// Measure using the supplied draw `r` in [0, 1].
    ///
    /// Basis indices own consecutive buckets of width αᵢ² + `ERR_THRESH`
    /// in ascending order; the index whose bucket contains `r` wins and the
    /// state becomes one-hot there. All qubits collapse together.
    pub fn measure_with_draw(&mut self, r: f64) -> Result<usize> {
        if !(0.0..=1.0).contains(&r) {
            return Err(QregError::InvalidDraw(r));
        }

        let mut bucket_start = 0.0;
        let mut selected = None;
        for (idx, &a) in self.state.amplitudes().iter().enumerate() {
            let bucket_end = bucket_start + a * a + ERR_THRESH;
            if bucket_start <= r && r < bucket_end {
                selected = Some(idx);
                break;
            }
            bucket_start = bucket_end;
        }

        let outcome = match selected {
            Some(idx) => idx,
            None => {
                let fallback = (0..self.state.dim())
                    .rev()
                    .find(|&i| self.state.probability(i) > 0.0)
                    .unwrap_or(self.state.dim() - 1);
                warn!(draw = r, total = bucket_start, fallback, "draw past final bucket");
                fallback
            }
        };

        self.state.collapse_to(outcome);
        debug!(draw = r, outcome, label = %self.state.basis_label(outcome), "measured register");
        Ok(outcome)
    }

    // ── State Control ─────────────────────────────────────────────────────

    /// Reset to |0...0⟩ and clear the gate count. The RNG keeps its position.
    pub fn reset(&mut self) {
        self.state.collapse_to(0);
        self.gate_count = 0;
    }
}

impl<R> fmt::Display for Register<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)
    }
}
