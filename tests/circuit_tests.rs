//! End-to-end circuit tests: circuit text in, register state and readout out.

use qreg::compiler::{self, ExecutionResult};
use qreg::core::{Register, ERR_THRESH};
use qreg::error::QregError;
use rand::rngs::mock::StepRng;
use std::f64::consts::FRAC_1_SQRT_2;
use std::io::Write;

fn run(source: &str, n: usize) -> ExecutionResult {
    let mut reg = Register::with_seed(n, 1).unwrap();
    compiler::run(source, &mut reg).unwrap()
}

/// An RNG whose every `gen::<f64>()` returns (almost exactly) `draw`.
fn pinned(draw: f64) -> StepRng {
    StepRng::new(((draw * (1u64 << 53) as f64) as u64) << 11, 0)
}

fn assert_one_hot(amplitudes: &[f64], index: usize, value: f64) {
    assert_eq!(amplitudes.len(), 32);
    for (i, a) in amplitudes.iter().enumerate() {
        let expected = if i == index { value } else { 0.0 };
        assert_eq!(*a, expected, "amplitude {i}");
    }
}

// ── Five-qubit simulation ─────────────────────────────────────────────────

#[test]
fn not_flips_most_significant_qubit() {
    assert_one_hot(&run("NOT 1", 5).amplitudes, 16, 1.0);
}

#[test]
fn z_negates_set_qubit() {
    assert_one_hot(&run("NOT 1\nZ 1", 5).amplitudes, 16, -1.0);
}

#[test]
fn hadamard_on_last_qubit() {
    let amps = run("hadamard 5", 5).amplitudes;
    for (i, a) in amps.iter().enumerate() {
        let expected = if i <= 1 { FRAC_1_SQRT_2 } else { 0.0 };
        assert!((a - expected).abs() < ERR_THRESH, "amplitude {i} = {a}");
    }
}

#[test]
fn cnot_is_case_insensitive() {
    assert_one_hot(&run("not 1\ncNot 1 2", 5).amplitudes, 24, 1.0);
}

#[test]
fn swap_moves_excitation() {
    assert_one_hot(&run("not 1\nswap 1 2", 5).amplitudes, 8, 1.0);
}

#[test]
fn ccnot_with_both_controls_set() {
    assert_one_hot(&run("not 1\nnot 2\nccnot 1 2 3", 5).amplitudes, 28, 1.0);
}

#[test]
fn cswap_with_control_set() {
    assert_one_hot(&run("not 1\nnot 2\ncswap 1 2 3", 5).amplitudes, 20, 1.0);
}

// ── Readout ───────────────────────────────────────────────────────────────

#[test]
fn readouts() {
    assert_eq!(run("", 1).readout, "|0>");
    assert_eq!(run("not 1", 1).readout, "|1>");
    assert_eq!(run("", 2).readout, "|00>");
    assert_eq!(run("not 1", 2).readout, "|10>");
    assert_eq!(run("hadamard 1", 1).readout, "1/√2|0> + 1/√2|1>");
}

#[test]
fn lecture_notes_readout() {
    let result = run("hadamard 1\ncnot 1 2\nnot 2\nhadamard 1", 2);
    assert_eq!(result.readout, "1/2|00> + 1/2|01> - 1/2|10> + 1/2|11>");
}

// ── Measurement ───────────────────────────────────────────────────────────

#[test]
fn measurement_collapses_to_drawn_bucket() {
    let src = "hadamard 1\ncnot 1 2\nnot 2\nhadamard 1\nmeasure";
    for (draw, expected) in [(0.2, "|00>"), (0.6, "|10>")] {
        let mut reg = Register::with_rng(2, pinned(draw)).unwrap();
        let result = compiler::run(src, &mut reg).unwrap();
        assert_eq!(result.readout, expected, "draw {draw}");
    }
}

#[test]
fn gates_after_measurement_act_on_collapsed_state() {
    let mut reg = Register::with_rng(2, pinned(0.9)).unwrap();
    let result = compiler::run("hadamard 1\nhadamard 2\nmeasure\nnot 1", &mut reg).unwrap();
    assert_eq!(result.measurements[0].label, "11");
    assert_eq!(result.readout, "|01>");
}

// ── Circuit files ─────────────────────────────────────────────────────────

#[test]
fn load_program_from_file() {
    let path = std::env::temp_dir().join(format!("qreg-circuit-{}", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "# bell pair").unwrap();
    writeln!(file, "hadamard 1").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "cnot 1 2   // entangle").unwrap();
    drop(file);

    let program = compiler::load_program(&path, 2).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(program.instructions.len(), 2);
    let mut reg = Register::with_seed(2, 0).unwrap();
    let result = compiler::execute(&program, &mut reg).unwrap();
    assert_eq!(result.readout, "1/√2|00> + 1/√2|11>");
}

#[test]
fn errors_report_line_and_kind() {
    let mut reg = Register::with_seed(3, 0).unwrap();
    let err = compiler::run("not 1\n\ntoffoli 1 2 3", &mut reg).unwrap_err();
    assert!(matches!(err, QregError::AtLine { line: 3, .. }));
    assert!(matches!(err.kind(), QregError::InvalidOpcode { .. }));

    let err = compiler::run("cswap 1 2 4", &mut reg).unwrap_err();
    assert!(matches!(err.kind(), QregError::InvalidQubitIndex { .. }));

    let err = compiler::run("swap 1", &mut reg).unwrap_err();
    assert!(matches!(err.kind(), QregError::MalformedInstruction { .. }));

    // A failed parse never touches the register
    assert_eq!(reg.gate_count(), 0);
    assert_eq!(reg.to_string(), "|000>");
}
