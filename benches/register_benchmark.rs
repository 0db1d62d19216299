/// qreg Criterion benchmark suite
///
/// Covers:
///   - Operator construction cost (Kronecker lift) per register size
///   - Single-qubit gate throughput (Hadamard across the register)
///   - Controlled gates (CNOT chain, CCNOT, CSWAP)
///   - Measurement + collapse
///   - Circuit pipeline (lex → parse → execute)
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qreg::compiler;
use qreg::core::{gates, operators, Register};

// ── Operator construction ─────────────────────────────────────────────────

fn bench_build_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_operator");
    for n in [2usize, 4, 6, 8] {
        group.bench_with_input(BenchmarkId::new("single", n), &n, |b, &n| {
            let x = gates::pauli_x();
            b.iter(|| operators::build_single(&x, black_box(1), n).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("controlled", n), &n, |b, &n| {
            let x = gates::pauli_x();
            b.iter(|| operators::build_controlled(black_box(1), black_box(n), &x, n).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("cswap", n), &n, |b, &n| {
            b.iter(|| operators::build_cswap(black_box(1), black_box(2), black_box(n), n).unwrap());
        });
    }
    group.finish();
}

// ── Gate throughput ───────────────────────────────────────────────────────

fn bench_hadamard_layer(c: &mut Criterion) {
    let mut group = c.benchmark_group("hadamard_layer");
    for n in [2usize, 4, 6, 8] {
        group.bench_with_input(BenchmarkId::new("H", n), &n, |b, &n| {
            b.iter(|| {
                let mut reg = Register::with_seed(n, 0).unwrap();
                for q in 1..=n {
                    reg.hadamard(black_box(q)).unwrap();
                }
            });
        });
    }
    group.finish();
}

fn bench_cnot_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("cnot_chain");
    for n in [2usize, 4, 6, 8] {
        group.bench_with_input(BenchmarkId::new("CNOT", n), &n, |b, &n| {
            b.iter(|| {
                let mut reg = Register::with_seed(n, 0).unwrap();
                reg.hadamard(1).unwrap();
                for q in 2..=n {
                    reg.cnot(black_box(1), black_box(q)).unwrap();
                }
            });
        });
    }
    group.finish();
}

fn bench_three_qubit_gates(c: &mut Criterion) {
    c.bench_function("ccnot_cswap_5qubits", |b| {
        b.iter(|| {
            let mut reg = Register::with_seed(black_box(5), 0).unwrap();
            reg.not(1).unwrap().not(2).unwrap();
            reg.ccnot(1, 2, 3).unwrap().cswap(1, 3, 5).unwrap();
        })
    });
}

// ── Measurement ───────────────────────────────────────────────────────────

fn bench_measure(c: &mut Criterion) {
    c.bench_function("measure_uniform_5qubits", |b| {
        let mut reg = Register::with_seed(5, 42).unwrap();
        b.iter(|| {
            reg.reset();
            for q in 1..=5 {
                reg.hadamard(q).unwrap();
            }
            black_box(reg.measure().unwrap())
        })
    });
}

// ── Circuit pipeline ──────────────────────────────────────────────────────

fn bench_circuit_pipeline(c: &mut Criterion) {
    let src = "\
# five-qubit workout
hadamard 1
cnot 1 2
not 3
ccnot 1 2 4
cswap 3 4 5
swap 1 5
z 2
measure
";
    c.bench_function("circuit_lex_parse_execute", |b| {
        b.iter(|| {
            let mut reg = Register::with_seed(5, 7).unwrap();
            compiler::run(black_box(src), &mut reg).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_build_operators,
    bench_hadamard_layer,
    bench_cnot_chain,
    bench_three_qubit_gates,
    bench_measure,
    bench_circuit_pipeline,
);
criterion_main!(benches);
