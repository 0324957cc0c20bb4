//! Fixed-size input/output bundling over a node arena.

use crate::error::CircuitError;
use crate::node::{Netlist, NodeId};

/// A bundle of nodes exposing a fixed-size input/output vector interface.
///
/// The first `nb_inputs` nodes are contractually rebindable sources and the
/// last `nb_outputs` nodes are read as results; nodes strictly between the
/// two ranges are internal wiring, never addressed externally. The circuit
/// holds non-owning handles: the nodes live in the [`Netlist`].
#[derive(Debug, Clone)]
pub struct CompoundCircuit {
    nodes: Vec<NodeId>,
    nb_inputs: usize,
    nb_outputs: usize,
}

impl CompoundCircuit {
    /// Bundles `nodes` behind an interface of `nb_inputs` leading sources
    /// and `nb_outputs` trailing results. The interface may not be wider
    /// than the node list.
    pub fn new(
        nodes: Vec<NodeId>,
        nb_inputs: usize,
        nb_outputs: usize,
    ) -> Result<Self, CircuitError> {
        if nb_inputs + nb_outputs > nodes.len() {
            return Err(CircuitError::InterfaceTooWide {
                inputs: nb_inputs,
                outputs: nb_outputs,
                nodes: nodes.len(),
            });
        }
        Ok(Self {
            nodes,
            nb_inputs,
            nb_outputs,
        })
    }

    pub fn nb_inputs(&self) -> usize {
        self.nb_inputs
    }

    pub fn nb_outputs(&self) -> usize {
        self.nb_outputs
    }

    /// Handle of the `index`-th input node.
    pub fn input(&self, index: usize) -> Result<NodeId, CircuitError> {
        if index >= self.nb_inputs {
            return Err(CircuitError::IndexOutOfRange {
                what: "input",
                index,
                len: self.nb_inputs,
            });
        }
        Ok(self.nodes[index])
    }

    /// Handle of the `index`-th output node. Fails at the call site rather
    /// than silently returning an unrelated node.
    pub fn output(&self, index: usize) -> Result<NodeId, CircuitError> {
        if index >= self.nb_outputs {
            return Err(CircuitError::IndexOutOfRange {
                what: "output",
                index,
                len: self.nb_outputs,
            });
        }
        Ok(self.nodes[self.nodes.len() - self.nb_outputs + index])
    }

    /// Rebinds the input nodes to `inputs` and evaluates every output node
    /// in order. Rebinding is permanent: there is no implicit reset, later
    /// calls simply overwrite the sources again, and composites sharing an
    /// input node observe the new value on their next evaluation.
    pub fn apply(&self, net: &mut Netlist, inputs: &[bool]) -> Result<Vec<bool>, CircuitError> {
        if inputs.len() != self.nb_inputs {
            return Err(CircuitError::InputWidthMismatch {
                expected: self.nb_inputs,
                got: inputs.len(),
            });
        }
        for (node, value) in self.nodes[..self.nb_inputs].iter().zip(inputs) {
            net.rebind_as_source(*node, *value)?;
        }
        self.read_outputs(net)
    }

    /// Re-reads the output nodes of an already-driven circuit without
    /// touching the inputs. Output order mirrors node order.
    pub fn read_outputs(&self, net: &Netlist) -> Result<Vec<bool>, CircuitError> {
        self.nodes[self.nodes.len() - self.nb_outputs..]
            .iter()
            .map(|node| net.evaluate(*node))
            .collect()
    }
}
