//! Ket-expression readout of a state vector.
//!
//! Each basis state with a non-zero amplitude becomes one term
//! `<coefficient>|<bits>>`. Magnitudes matching a few common constants are
//! rendered symbolically, and a magnitude of 1 is omitted entirely.

use crate::core::{StateVector, ERR_THRESH};
use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

/// Magnitudes rendered symbolically, checked in order.
const SYMBOLIC: [(f64, &str); 5] = [
    (FRAC_1_SQRT_2, "1/√2"),
    (1.0 / (2.0 * SQRT_2), "1/2√2"),
    (1.0 / (4.0 * SQRT_2), "1/4√2"),
    (0.5, "1/2"),
    (0.25, "1/4"),
];

/// Render the whole state, e.g. `1/2|00> + 1/2|01> - 1/2|10> + 1/2|11>`.
pub fn format_state(state: &StateVector) -> String {
    let mut out = String::new();
    for (index, &amp) in state.amplitudes().iter().enumerate() {
        if amp.abs() <= ERR_THRESH {
            continue;
        }
        let negative = amp < 0.0;
        if out.is_empty() {
            if negative {
                out.push('-');
            }
        } else {
            out.push_str(if negative { " - " } else { " + " });
        }
        out.push_str(&format_magnitude(amp.abs()));
        out.push('|');
        out.push_str(&state.basis_label(index));
        out.push('>');
    }
    out
}

/// Coefficient text for a non-negative magnitude.
pub fn format_magnitude(a: f64) -> String {
    if let Some((_, symbol)) = SYMBOLIC.iter().find(|(v, _)| (a - v).abs() < ERR_THRESH) {
        return (*symbol).to_string();
    }
    if (a - 1.0).abs() < ERR_THRESH {
        return String::new();
    }
    a.to_string()
}
