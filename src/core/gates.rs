/// Gate primitives and the plain-data gate description.
///
/// Single-qubit operators are 2×2 real matrices. Every gate in the set is
/// real-valued, so amplitudes never need a complex representation.
/// Multi-qubit operators are assembled from these by the builders in
/// `operators`.
use ndarray::{array, Array2};
use std::f64::consts::FRAC_1_SQRT_2;

/// A dense real operator. 2×2 for primitives, 2^n × 2^n once lifted.
pub type Operator = Array2<f64>;

/// Tolerance absorbing floating-point drift in amplitudes and probabilities.
pub const ERR_THRESH: f64 = 1e-14;

// ── Standard Gate Matrices ─────────────────────────────────────────────────

/// Identity on one qubit.
pub fn identity() -> Operator {
    array![[1.0, 0.0], [0.0, 1.0]]
}

/// Pauli-X gate: quantum NOT, flips |0⟩ ↔ |1⟩.
/// X = [[0, 1], [1, 0]]
pub fn pauli_x() -> Operator {
    array![[0.0, 1.0], [1.0, 0.0]]
}

/// Pauli-Z gate: phase flip, |1⟩ → -|1⟩.
/// Z = [[1, 0], [0, -1]]
pub fn pauli_z() -> Operator {
    array![[1.0, 0.0], [0.0, -1.0]]
}

/// Hadamard gate.
/// H = (1/√2) * [[1, 1], [1, -1]]
pub fn hadamard() -> Operator {
    array![
        [FRAC_1_SQRT_2, FRAC_1_SQRT_2],
        [FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
    ]
}

/// |0⟩⟨0|
pub fn projector_zero() -> Operator {
    array![[1.0, 0.0], [0.0, 0.0]]
}

/// |1⟩⟨1|
pub fn projector_one() -> Operator {
    array![[0.0, 0.0], [0.0, 1.0]]
}

// ── Gate ───────────────────────────────────────────────────────────────────

/// One gate application, addressed by 1-based qubit indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Not(usize),
    Z(usize),
    Hadamard(usize),
    Cnot { control: usize, target: usize },
    Swap { a: usize, b: usize },
    Ccnot { control0: usize, control1: usize, target: usize },
    Cswap { control: usize, a: usize, b: usize },
}

impl Gate {
    /// Opcode used in circuit text.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Not(_)        => "not",
            Self::Z(_)          => "z",
            Self::Hadamard(_)   => "hadamard",
            Self::Cnot { .. }   => "cnot",
            Self::Swap { .. }   => "swap",
            Self::Ccnot { .. }  => "ccnot",
            Self::Cswap { .. }  => "cswap",
        }
    }

    /// Qubits this gate touches, in operand order.
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Self::Not(q) | Self::Z(q) | Self::Hadamard(q)     => vec![q],
            Self::Cnot { control, target }                    => vec![control, target],
            Self::Swap { a, b }                               => vec![a, b],
            Self::Ccnot { control0, control1, target }        => vec![control0, control1, target],
            Self::Cswap { control, a, b }                     => vec![control, a, b],
        }
    }
}
