/// Circuit parser: converts a token stream into a validated Program.
///
/// Grammar:
///   program     := instruction*
///   instruction := ('NOT'|'Z'|'HADAMARD') INT
///                | ('CNOT'|'SWAP') INT INT
///                | ('CCNOT'|'CSWAP') INT INT INT
///                | 'MEASURE'
///
/// Validation:
///   - Opcode must be one of the above
///   - Exact operand count per opcode
///   - Operands are 1-based qubit indices in [1, num_qubits]
///   - Operands of one gate are pairwise distinct
///
/// Every error is tagged with the source line it came from.
use super::{
    ir::{Instruction, Program},
    lexer::{Spanned, Token},
};
use crate::core::operators::validate_qubits;
use crate::core::Gate;
use crate::error::{QregError, Result};

// ── Public API ────────────────────────────────────────────────────────────

/// Parse a token stream (output of the lexer) into a Program for an
/// `num_qubits` register. Empty statements are skipped.
pub fn parse(statements: Vec<Vec<Spanned>>, num_qubits: usize) -> Result<Program> {
    let mut body: Vec<Instruction> = Vec::with_capacity(statements.len());
    for stmt in &statements {
        let Some(first) = stmt.first() else { continue };
        let line = first.line;
        let instr = parse_statement(stmt, num_qubits).map_err(|e| e.at_line(line))?;
        body.push(instr);
    }
    Ok(Program::new(num_qubits, body))
}

// ── Statement parser ──────────────────────────────────────────────────────

fn parse_statement(tokens: &[Spanned], num_qubits: usize) -> Result<Instruction> {
    let (opcode, expected): (&'static str, usize) = match &tokens[0].token {
        Token::Not      => ("not", 1),
        Token::Z        => ("z", 1),
        Token::Hadamard => ("hadamard", 1),
        Token::Cnot     => ("cnot", 2),
        Token::Swap     => ("swap", 2),
        Token::Ccnot    => ("ccnot", 3),
        Token::Cswap    => ("cswap", 3),
        Token::Measure  => ("measure", 0),
        other => return Err(QregError::InvalidOpcode { opcode: other.display() }),
    };

    let operands = &tokens[1..];
    if operands.len() != expected {
        return Err(QregError::MalformedInstruction {
            opcode,
            expected,
            found: operands.len(),
        });
    }

    let qubits = operands
        .iter()
        .map(qubit_arg)
        .collect::<Result<Vec<usize>>>()?;
    validate_qubits(&qubits, num_qubits)?;

    Ok(match (&tokens[0].token, qubits.as_slice()) {
        (Token::Not, &[q])      => Instruction::Gate(Gate::Not(q)),
        (Token::Z, &[q])        => Instruction::Gate(Gate::Z(q)),
        (Token::Hadamard, &[q]) => Instruction::Gate(Gate::Hadamard(q)),
        (Token::Cnot, &[control, target]) => Instruction::Gate(Gate::Cnot { control, target }),
        (Token::Swap, &[a, b])            => Instruction::Gate(Gate::Swap { a, b }),
        (Token::Ccnot, &[control0, control1, target]) => {
            Instruction::Gate(Gate::Ccnot { control0, control1, target })
        }
        (Token::Cswap, &[control, a, b]) => Instruction::Gate(Gate::Cswap { control, a, b }),
        (Token::Measure, &[]) => Instruction::Measure,
        _ => unreachable!("operand count checked above"),
    })
}

// ── Argument extractors ───────────────────────────────────────────────────

fn qubit_arg(s: &Spanned) -> Result<usize> {
    match &s.token {
        Token::Int(n) => Ok(*n),
        other => Err(QregError::not_a_qubit(other.display())),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::lexer::tokenize;

    fn parse_src(src: &str, n: usize) -> Result<Program> {
        parse(tokenize(src), n)
    }

    #[test]
    fn test_parse_every_opcode() {
        let prog = parse_src(
            "not 1\nz 2\nhadamard 3\ncnot 1 2\nswap 2 3\nccnot 1 2 3\ncswap 3 1 2\nmeasure",
            3,
        )
        .unwrap();
        assert_eq!(prog.instructions.len(), 8);
        assert_eq!(prog.instructions[0], Instruction::Gate(Gate::Not(1)));
        assert_eq!(
            prog.instructions[5],
            Instruction::Gate(Gate::Ccnot { control0: 1, control1: 2, target: 3 })
        );
        assert_eq!(
            prog.instructions[6],
            Instruction::Gate(Gate::Cswap { control: 3, a: 1, b: 2 })
        );
        assert_eq!(prog.instructions[7], Instruction::Measure);
        assert_eq!(prog.gate_count, 7);
        assert_eq!(prog.measure_count, 1);
    }

    #[test]
    fn test_empty_source_is_empty_program() {
        let prog = parse_src("\n\n", 5).unwrap();
        assert!(prog.instructions.is_empty());
    }

    #[test]
    fn test_empty_statements_are_skipped() {
        let not_1 = vec![
            Spanned { token: Token::Not, line: 2 },
            Spanned { token: Token::Int(1), line: 2 },
        ];
        let prog = parse(vec![vec![], not_1, vec![]], 2).unwrap();
        assert_eq!(prog.instructions, vec![Instruction::Gate(Gate::Not(1))]);
        assert!(parse(vec![vec![]], 2).unwrap().instructions.is_empty());
    }

    #[test]
    fn test_unknown_opcode() {
        let err = parse_src("not 1\nflib 2", 2).unwrap_err();
        assert!(matches!(err, QregError::AtLine { line: 2, .. }));
        assert!(matches!(err.kind(), QregError::InvalidOpcode { opcode } if opcode == "flib"));
    }

    #[test]
    fn test_operand_as_opcode_rejected() {
        let err = parse_src("1 2", 2).unwrap_err();
        assert!(matches!(err.kind(), QregError::InvalidOpcode { .. }));
    }

    #[test]
    fn test_wrong_operand_count() {
        let err = parse_src("cnot 1", 2).unwrap_err();
        assert!(matches!(
            err.kind(),
            QregError::MalformedInstruction { opcode: "cnot", expected: 2, found: 1 }
        ));

        let err = parse_src("measure 1", 2).unwrap_err();
        assert!(matches!(err.kind(), QregError::MalformedInstruction { expected: 0, .. }));

        let err = parse_src("hadamard 1 2", 2).unwrap_err();
        assert!(matches!(err.kind(), QregError::MalformedInstruction { found: 2, .. }));
    }

    #[test]
    fn test_bad_qubit_operands() {
        for src in ["not 0", "not 6", "not two", "not -1", "cnot 1 1", "ccnot 1 2 z"] {
            let err = parse_src(src, 5).unwrap_err();
            assert!(
                matches!(err.kind(), QregError::InvalidQubitIndex { .. }),
                "{src}: {err}"
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        let src = "hadamard 1\ncnot 1 2\nnot 2\nhadamard 1\nmeasure\n";
        let prog = parse_src(src, 2).unwrap();
        assert_eq!(prog.to_string(), src);
        let again = parse_src(&prog.to_string(), 2).unwrap();
        assert_eq!(again.instructions, prog.instructions);
    }
}
