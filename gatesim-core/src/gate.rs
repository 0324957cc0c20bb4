//! Truth-table boolean functions and the process-wide gate library.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

use crate::error::CircuitError;

/// A pure, fixed-arity boolean function stored as its asserted true rows.
///
/// An input pattern absent from the table evaluates to `false` by documented
/// convention (a lookup miss, not an error).
#[derive(Debug, Clone)]
pub struct BooleanFunction {
    name: String,
    arity: usize,
    true_rows: HashSet<Vec<bool>>,
}

impl BooleanFunction {
    /// Builds a function from its true rows. Every row must have exactly
    /// `arity` entries.
    pub fn from_true_rows(
        name: &str,
        arity: usize,
        rows: &[&[bool]],
    ) -> Result<Self, CircuitError> {
        for row in rows {
            if row.len() != arity {
                return Err(CircuitError::ArityMismatch {
                    gate: name.to_string(),
                    expected: arity,
                    got: row.len(),
                });
            }
        }
        Ok(Self {
            name: name.to_string(),
            arity,
            true_rows: rows.iter().map(|row| row.to_vec()).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Looks the input pattern up in the truth table. Patterns outside the
    /// asserted true rows yield `false`. The input length must match the
    /// function's arity.
    pub fn evaluate(&self, inputs: &[bool]) -> Result<bool, CircuitError> {
        if inputs.len() != self.arity {
            return Err(CircuitError::ArityMismatch {
                gate: self.name.clone(),
                expected: self.arity,
                got: inputs.len(),
            });
        }
        Ok(self.true_rows.contains(inputs))
    }
}

/// Internal constructor for canonical library tables; rows are given as
/// `'0'`/`'1'` strings in operand order.
fn table(name: &str, arity: usize, rows: &[&str]) -> Arc<BooleanFunction> {
    debug_assert!(rows.iter().all(|row| row.len() == arity));
    Arc::new(BooleanFunction {
        name: name.to_string(),
        arity,
        true_rows: rows
            .iter()
            .map(|row| row.chars().map(|ch| ch == '1').collect())
            .collect(),
    })
}

/// Immutable set of named boolean functions, constructed once per process
/// and never mutated.
///
/// Multi-input AND/NOR variants exist where the hardware equivalent would
/// cascade 2-input gates; their flattened arity and true rows are preserved.
#[derive(Debug)]
pub struct GateLibrary {
    pub identity: Arc<BooleanFunction>,
    pub not: Arc<BooleanFunction>,
    pub and2: Arc<BooleanFunction>,
    pub or2: Arc<BooleanFunction>,
    pub xor2: Arc<BooleanFunction>,
    pub nor2: Arc<BooleanFunction>,
    pub nand2: Arc<BooleanFunction>,
    pub xnor2: Arc<BooleanFunction>,
    pub and3: Arc<BooleanFunction>,
    pub and4: Arc<BooleanFunction>,
    pub and5: Arc<BooleanFunction>,
    pub nor3: Arc<BooleanFunction>,
    pub nor4: Arc<BooleanFunction>,
    by_name: HashMap<&'static str, Arc<BooleanFunction>>,
}

impl GateLibrary {
    fn build() -> Self {
        let identity = table("IDENTITY", 1, &["1"]);
        let not = table("NOT", 1, &["0"]);
        let and2 = table("AND2", 2, &["11"]);
        let or2 = table("OR2", 2, &["01", "10", "11"]);
        let xor2 = table("XOR2", 2, &["01", "10"]);
        let nor2 = table("NOR2", 2, &["00"]);
        let nand2 = table("NAND2", 2, &["00", "01", "10"]);
        let xnor2 = table("XNOR2", 2, &["00", "11"]);
        let and3 = table("AND3", 3, &["111"]);
        let and4 = table("AND4", 4, &["1111"]);
        let and5 = table("AND5", 5, &["11111"]);
        let nor3 = table("NOR3", 3, &["000"]);
        let nor4 = table("NOR4", 4, &["0000"]);

        let by_name: HashMap<&'static str, Arc<BooleanFunction>> = [
            ("IDENTITY", Arc::clone(&identity)),
            ("NOT", Arc::clone(&not)),
            ("AND2", Arc::clone(&and2)),
            ("OR2", Arc::clone(&or2)),
            ("XOR2", Arc::clone(&xor2)),
            ("NOR2", Arc::clone(&nor2)),
            ("NAND2", Arc::clone(&nand2)),
            ("XNOR2", Arc::clone(&xnor2)),
            ("AND3", Arc::clone(&and3)),
            ("AND4", Arc::clone(&and4)),
            ("AND5", Arc::clone(&and5)),
            ("NOR3", Arc::clone(&nor3)),
            ("NOR4", Arc::clone(&nor4)),
        ]
        .into_iter()
        .collect();

        Self {
            identity,
            not,
            and2,
            or2,
            xor2,
            nor2,
            nand2,
            xnor2,
            and3,
            and4,
            and5,
            nor3,
            nor4,
            by_name,
        }
    }

    /// Process-wide library, available before any node is constructed.
    pub fn global() -> &'static GateLibrary {
        static LIBRARY: LazyLock<GateLibrary> = LazyLock::new(GateLibrary::build);
        &LIBRARY
    }

    /// Name lookup for hosts that select gates dynamically.
    pub fn by_name(&self, name: &str) -> Result<&Arc<BooleanFunction>, CircuitError> {
        self.by_name
            .get(name)
            .ok_or_else(|| CircuitError::UnknownGate(name.to_string()))
    }
}
