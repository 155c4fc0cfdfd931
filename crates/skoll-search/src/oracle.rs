//! The phase oracle marking one basis state.

use skoll_ir::{Circuit, QubitId};

use crate::diffuser::apply_multi_controlled_z;
use crate::error::SearchResult;
use crate::target::TargetState;

/// Build the phase oracle for a marked state.
///
/// Applied to any computational basis state, the fragment multiplies the
/// amplitude of the state matching `target` by −1 and leaves every other
/// amplitude unchanged. Construction: X on each qubit whose target bit is
/// 0 (mapping the marked state onto |1...1⟩), a multi-controlled Z across
/// the register, then the X gates undone. The fragment is self-inverse.
///
/// Target validation happens when the [`TargetState`] is parsed, so a
/// constructed target always yields a well-formed oracle.
pub fn oracle(target: &TargetState) -> SearchResult<Circuit> {
    let n = target.num_qubits();
    let mut circuit = Circuit::with_size(format!("oracle({})", target.as_str()), n as u32, 0);

    for i in 0..n {
        if !target.bit(i) {
            circuit.x(QubitId(i as u32))?;
        }
    }

    apply_multi_controlled_z(&mut circuit)?;

    for i in 0..n {
        if !target.bit(i) {
            circuit.x(QubitId(i as u32))?;
        }
    }

    Ok(circuit)
}
