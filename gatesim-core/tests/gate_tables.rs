//! Canonical truth tables for every library gate, plus the default-false
//! lookup convention and construction-time arity checks.

use gatesim_core::error::CircuitError;
use gatesim_core::gate::{BooleanFunction, GateLibrary};

#[test]
fn two_input_gates_match_canonical_tables() {
    let lib = GateLibrary::global();
    let cases: [(&BooleanFunction, fn(bool, bool) -> bool); 6] = [
        (&lib.and2, |a, b| a & b),
        (&lib.or2, |a, b| a | b),
        (&lib.xor2, |a, b| a ^ b),
        (&lib.nor2, |a, b| !(a | b)),
        (&lib.nand2, |a, b| !(a & b)),
        (&lib.xnor2, |a, b| a == b),
    ];

    for (gate, reference) in cases {
        for a in [false, true] {
            for b in [false, true] {
                assert_eq!(
                    gate.evaluate(&[a, b]).expect("2-input evaluation"),
                    reference(a, b),
                    "{} on ({a}, {b})",
                    gate.name()
                );
            }
        }
    }
}

#[test]
fn unary_gates_match_canonical_tables() {
    let lib = GateLibrary::global();
    for v in [false, true] {
        assert_eq!(lib.identity.evaluate(&[v]).expect("identity"), v);
        assert_eq!(lib.not.evaluate(&[v]).expect("not"), !v);
    }
}

#[test]
fn wide_and_is_true_only_on_all_ones() {
    let lib = GateLibrary::global();
    for (gate, arity) in [(&lib.and3, 3usize), (&lib.and4, 4), (&lib.and5, 5)] {
        for pattern in 0u32..(1 << arity) {
            let inputs: Vec<bool> = (0..arity).map(|bit| (pattern >> bit) & 1 == 1).collect();
            let expected = pattern == (1 << arity) - 1;
            assert_eq!(gate.evaluate(&inputs).expect("wide and"), expected);
        }
    }
}

#[test]
fn wide_nor_is_true_only_on_all_zeros() {
    let lib = GateLibrary::global();
    for (gate, arity) in [(&lib.nor3, 3usize), (&lib.nor4, 4)] {
        for pattern in 0u32..(1 << arity) {
            let inputs: Vec<bool> = (0..arity).map(|bit| (pattern >> bit) & 1 == 1).collect();
            assert_eq!(gate.evaluate(&inputs).expect("wide nor"), pattern == 0);
        }
    }
}

#[test]
fn lookup_miss_defaults_to_false() {
    // Only one asserted row; every other pattern is a miss, not an error.
    let partial = BooleanFunction::from_true_rows("PARTIAL", 2, &[&[true, false]])
        .expect("partial table");
    assert!(partial.evaluate(&[true, false]).expect("asserted row"));
    assert!(!partial.evaluate(&[false, true]).expect("missed row"));
    assert!(!partial.evaluate(&[true, true]).expect("missed row"));
}

#[test]
fn evaluate_rejects_wrong_input_count() {
    let lib = GateLibrary::global();
    let err = lib.and2.evaluate(&[true]).expect_err("arity mismatch");
    assert_eq!(
        err,
        CircuitError::ArityMismatch {
            gate: "AND2".to_string(),
            expected: 2,
            got: 1,
        }
    );
}

#[test]
fn construction_rejects_rows_of_wrong_length() {
    let err = BooleanFunction::from_true_rows("BAD", 2, &[&[true, true, true]])
        .expect_err("row length mismatch");
    assert!(matches!(err, CircuitError::ArityMismatch { expected: 2, got: 3, .. }));
}

#[test]
fn library_is_addressable_by_name() {
    let lib = GateLibrary::global();
    for name in [
        "IDENTITY", "NOT", "AND2", "OR2", "XOR2", "NOR2", "NAND2", "XNOR2", "AND3", "AND4",
        "AND5", "NOR3", "NOR4",
    ] {
        let gate = lib.by_name(name).expect("known gate");
        assert_eq!(gate.name(), name);
    }

    let err = lib.by_name("XOR3").expect_err("unknown gate");
    assert_eq!(err, CircuitError::UnknownGate("XOR3".to_string()));
}

#[test]
fn global_library_is_a_single_instance() {
    assert!(std::ptr::eq(GateLibrary::global(), GateLibrary::global()));
}
