use thiserror::Error;

/// Errors surfaced by circuit construction and evaluation.
///
/// Configuration problems fail at the offending call site. A combinational
/// cycle is reported during evaluation instead of exhausting the call stack.
/// A truth-table lookup miss is not an error: it evaluates to `false` by
/// convention.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CircuitError {
    #[error("gate `{gate}` expects {expected} operands, got {got}")]
    ArityMismatch {
        gate: String,
        expected: usize,
        got: usize,
    },

    #[error("circuit expects {expected} input values, got {got}")]
    InputWidthMismatch { expected: usize, got: usize },

    #[error("{what} index {index} out of range (valid: 0..{len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("interface wider than node list: {inputs} inputs + {outputs} outputs > {nodes} nodes")]
    InterfaceTooWide {
        inputs: usize,
        outputs: usize,
        nodes: usize,
    },

    #[error("unknown gate: {0}")]
    UnknownGate(String),

    #[error("node id {0} is not part of this netlist")]
    InvalidNode(usize),

    #[error("bit width must be at least 1")]
    ZeroWidth,

    #[error("combinational cycle through node {node}")]
    CombinationalCycle { node: usize },
}
