/// Operator builder: lifts 2×2 primitives to the full 2^n × 2^n space.
///
/// Every operator is a Kronecker product taken left to right over qubits
/// 1..n, so qubit 1 ends up as the most significant bit of the basis
/// index. Controlled gates are sums of such products with |0⟩⟨0| or
/// |1⟩⟨1| placed on the control qubits. Operators are built per call and
/// never cached.
use super::gates::{identity, pauli_x, projector_one, projector_zero, Operator};
use crate::error::{QregError, Result};
use ndarray::linalg::kron;

/// Check that every index lies in `[1, num_qubits]` and no index repeats.
pub fn validate_qubits(qubits: &[usize], num_qubits: usize) -> Result<()> {
    for (pos, &q) in qubits.iter().enumerate() {
        if q == 0 || q > num_qubits {
            return Err(QregError::out_of_range(q, num_qubits));
        }
        if qubits[..pos].contains(&q) {
            return Err(QregError::aliased(q));
        }
    }
    Ok(())
}

/// `op` on `target`, identity everywhere else: I⊗…⊗op⊗…⊗I.
///
/// For a one-qubit register this is `op` itself.
pub fn build_single(op: &Operator, target: usize, num_qubits: usize) -> Result<Operator> {
    validate_qubits(&[target], num_qubits)?;
    Ok(tensor_product(&[(target, op)], num_qubits))
}

/// Apply `op` to `target` when `control` is |1⟩.
///
///   P0(control) + P1(control)·op(target)
pub fn build_controlled(
    control: usize,
    target: usize,
    op: &Operator,
    num_qubits: usize,
) -> Result<Operator> {
    validate_qubits(&[control, target], num_qubits)?;
    let (p0, p1) = (projector_zero(), projector_one());

    let off = tensor_product(&[(control, &p0)], num_qubits);
    let on = tensor_product(&[(control, &p1), (target, op)], num_qubits);
    Ok(off + &on)
}

/// Apply `op` to `target` when both controls are |1⟩.
///
///   P0(c0) + P1(c0)·P0(c1) + P1(c0)·P1(c1)·op(target)
///
/// With c0 off the whole operator is identity, so the first term needs no
/// factor on c1 or the target.
pub fn build_double_controlled(
    control0: usize,
    control1: usize,
    target: usize,
    op: &Operator,
    num_qubits: usize,
) -> Result<Operator> {
    validate_qubits(&[control0, control1, target], num_qubits)?;
    let (p0, p1) = (projector_zero(), projector_one());

    let off = tensor_product(&[(control0, &p0)], num_qubits);
    let on_off = tensor_product(&[(control0, &p1), (control1, &p0)], num_qubits);
    let on_on = tensor_product(&[(control0, &p1), (control1, &p1), (target, op)], num_qubits);
    Ok(off + &on_off + &on_on)
}

/// Toffoli: X on `target` when both controls are |1⟩.
pub fn build_ccnot(
    control0: usize,
    control1: usize,
    target: usize,
    num_qubits: usize,
) -> Result<Operator> {
    build_double_controlled(control0, control1, target, &pauli_x(), num_qubits)
}

/// Fredkin: exchange `a` and `b` when `control` is |1⟩.
///
///   P0(control) + F(a→b)·F(b→a)·F(a→b)
///
/// where F(x→y) is a cnot from x to y living only on the control = 1
/// subspace. The product is the three-cnot swap identity.
pub fn build_cswap(control: usize, a: usize, b: usize, num_qubits: usize) -> Result<Operator> {
    validate_qubits(&[control, a, b], num_qubits)?;

    let off = tensor_product(&[(control, &projector_zero())], num_qubits);
    let forward = conditioned_cnot(control, a, b, num_qubits);
    let backward = conditioned_cnot(control, b, a, num_qubits);
    let on = forward.dot(&backward).dot(&forward);
    Ok(off + &on)
}

/// cnot from `from` to `to`, zero outside the subspace where `control` = 1.
///
///   P1(control)·P0(from) + P1(control)·P1(from)·X(to)
fn conditioned_cnot(control: usize, from: usize, to: usize, num_qubits: usize) -> Operator {
    let (p0, p1, x) = (projector_zero(), projector_one(), pauli_x());
    let skip = tensor_product(&[(control, &p1), (from, &p0)], num_qubits);
    let flip = tensor_product(&[(control, &p1), (from, &p1), (to, &x)], num_qubits);
    skip + &flip
}

/// Kronecker product over qubits 1..=n with the given operators placed at
/// their qubits and identity elsewhere. Callers pass distinct positions.
fn tensor_product(placements: &[(usize, &Operator)], num_qubits: usize) -> Operator {
    let id = identity();
    let mut acc = factor_at(1, placements, &id).to_owned();
    for q in 2..=num_qubits {
        acc = kron(&acc, factor_at(q, placements, &id));
    }
    acc
}

#[inline]
fn factor_at<'a>(qubit: usize, placements: &[(usize, &'a Operator)], id: &'a Operator) -> &'a Operator {
    placements
        .iter()
        .find(|(q, _)| *q == qubit)
        .map_or(id, |&(_, op)| op)
}
