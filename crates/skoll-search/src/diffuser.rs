//! The diffusion operator (inversion about the mean).

use skoll_ir::{Circuit, IrError, IrResult, QubitId};

use crate::error::{SearchError, SearchResult};
use crate::MAX_QUBITS;

/// Apply a phase flip on the all-ones state of the whole register.
///
/// The multi-controlled Z is decomposed exactly for the supported
/// register sizes: Z for one qubit, CZ for two, and H·CCX·H on the last
/// qubit for three. Any other width is rejected; the decomposition uses
/// no ancilla qubits, so it does not generalize.
pub(crate) fn apply_multi_controlled_z(circuit: &mut Circuit) -> IrResult<()> {
    match circuit.num_qubits() {
        1 => {
            circuit.z(QubitId(0))?;
        }
        2 => {
            circuit.cz(QubitId(0), QubitId(1))?;
        }
        3 => {
            circuit.h(QubitId(2))?;
            circuit.ccx(QubitId(0), QubitId(1), QubitId(2))?;
            circuit.h(QubitId(2))?;
        }
        n => {
            return Err(IrError::InvalidInstruction(format!(
                "multi-controlled Z over {n} qubits requires ancilla qubits"
            )));
        }
    }
    Ok(())
}

/// Build the diffusion operator 2|s⟩⟨s| − I for an `n`-qubit register.
///
/// The fragment is target-independent and identical across runs for a
/// given `n`:
///
/// 1. H on all qubits
/// 2. X on all qubits
/// 3. multi-controlled Z
/// 4. X on all qubits
/// 5. H on all qubits
pub fn diffuser(n: usize) -> SearchResult<Circuit> {
    if n == 0 {
        return Err(SearchError::EmptyTarget);
    }
    if n > MAX_QUBITS {
        return Err(SearchError::TooManyQubits {
            got: n,
            max: MAX_QUBITS,
        });
    }

    let mut circuit = Circuit::with_size("diffuser", n as u32, 0);

    for i in 0..n {
        circuit.h(QubitId(i as u32))?;
    }
    for i in 0..n {
        circuit.x(QubitId(i as u32))?;
    }

    apply_multi_controlled_z(&mut circuit)?;

    for i in 0..n {
        circuit.x(QubitId(i as u32))?;
    }
    for i in 0..n {
        circuit.h(QubitId(i as u32))?;
    }

    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diffuser_has_no_measurements() {
        let circuit = diffuser(3).unwrap();
        assert!(circuit.instructions().all(|i| !i.is_measure()));
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 0);
    }

    #[test]
    fn test_diffuser_is_target_independent() {
        // Same n yields the same fragment every time.
        let a = diffuser(2).unwrap();
        let b = diffuser(2).unwrap();
        let a_insts: Vec<_> = a.instructions().cloned().collect();
        let b_insts: Vec<_> = b.instructions().cloned().collect();
        assert_eq!(a_insts, b_insts);
    }

    #[test]
    fn test_diffuser_rejects_empty_register() {
        assert!(matches!(diffuser(0), Err(SearchError::EmptyTarget)));
    }

    #[test]
    fn test_multi_controlled_z_rejects_unsupported_width() {
        let mut circuit = Circuit::with_size("mcz", 4, 0);
        assert!(matches!(
            apply_multi_controlled_z(&mut circuit),
            Err(skoll_ir::IrError::InvalidInstruction(_))
        ));
        assert_eq!(circuit.num_instructions(), 0);
    }

    #[test]
    fn test_diffuser_rejects_wide_register() {
        assert!(matches!(
            diffuser(4),
            Err(SearchError::TooManyQubits { .. })
        ));
    }
}
