/// Circuit intermediate representation.
///
/// After parsing, a circuit is a flat, ordered sequence of `Instruction`s
/// wrapped in a validated `Program`. Gates are plain data; the register
/// dispatches them to the operator builders.
///
/// The `Display` impls produce valid circuit text, so the IR round-trips
/// through the parser.
use crate::core::Gate;

// ── Instruction ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Gate(Gate),
    /// Collapse the whole register onto one basis state.
    Measure,
}

impl Instruction {
    /// Opcode used in circuit text and diagnostics.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Gate(g) => g.mnemonic(),
            Self::Measure => "measure",
        }
    }

    pub fn is_gate(&self) -> bool {
        matches!(self, Self::Gate(_))
    }

    pub fn is_measurement(&self) -> bool {
        matches!(self, Self::Measure)
    }

    /// Qubit operands of this instruction.
    pub fn qubits(&self) -> Vec<usize> {
        match self {
            Self::Gate(g) => g.qubits(),
            Self::Measure => vec![],
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())?;
        for q in self.qubits() {
            write!(f, " {q}")?;
        }
        Ok(())
    }
}

// ── Program ───────────────────────────────────────────────────────────────

/// A validated, ready-to-execute circuit for an `num_qubits` register.
#[derive(Debug, Clone)]
pub struct Program {
    /// Register size the operands were validated against.
    pub num_qubits: usize,
    pub instructions: Vec<Instruction>,
    /// Number of gate operations (excludes MEASURE).
    pub gate_count: usize,
    /// Number of measurement operations.
    pub measure_count: usize,
}

impl Program {
    pub fn new(num_qubits: usize, instructions: Vec<Instruction>) -> Self {
        let gate_count    = instructions.iter().filter(|i| i.is_gate()).count();
        let measure_count = instructions.iter().filter(|i| i.is_measurement()).count();
        Self { num_qubits, instructions, gate_count, measure_count }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for instr in &self.instructions {
            writeln!(f, "{}", instr)?;
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
