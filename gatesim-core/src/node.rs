//! Node graph arena and the recursive pull evaluator.

use std::sync::Arc;

use crate::error::CircuitError;
use crate::gate::BooleanFunction;

/// Copyable index handle to a node inside a [`Netlist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A graph element: a constant source, or a gate applied to ordered
/// operand nodes.
#[derive(Debug, Clone)]
pub enum Node {
    Source {
        value: bool,
    },
    Gate {
        function: Arc<BooleanFunction>,
        operands: Vec<NodeId>,
    },
}

/// Arena owning every node of a circuit graph.
///
/// Composites hold `NodeId` handles rather than the nodes themselves; one
/// node may be shared by several composites (an adder's carry-out feeding
/// the next stage's carry-in), so the arena outlives all of them. Evaluation
/// is single-threaded and fully synchronous.
#[derive(Debug, Default)]
pub struct Netlist {
    nodes: Vec<Node>,
}

impl Netlist {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocates a constant source node.
    pub fn source(&mut self, value: bool) -> NodeId {
        self.nodes.push(Node::Source { value });
        NodeId(self.nodes.len() - 1)
    }

    /// Allocates a gate node over existing operand nodes. The operand count
    /// must match the function's arity.
    pub fn gate(
        &mut self,
        function: &Arc<BooleanFunction>,
        operands: &[NodeId],
    ) -> Result<NodeId, CircuitError> {
        self.check_operands(function, operands)?;
        self.nodes.push(Node::Gate {
            function: Arc::clone(function),
            operands: operands.to_vec(),
        });
        Ok(NodeId(self.nodes.len() - 1))
    }

    /// Unconditionally demotes `node` to a constant source holding `value`,
    /// discarding any prior gate form. This affects every composite that
    /// shares the node, and is how built circuits are re-driven with new
    /// inputs instead of being rebuilt.
    pub fn rebind_as_source(&mut self, node: NodeId, value: bool) -> Result<(), CircuitError> {
        self.check(node)?;
        self.nodes[node.0] = Node::Source { value };
        Ok(())
    }

    /// Retargets `node` to gate form over a new operand list. Retargeting
    /// can make a node depend on itself, directly or transitively; such a
    /// cycle is reported by [`Netlist::evaluate`], not here.
    pub fn rebind_as_gate(
        &mut self,
        node: NodeId,
        function: &Arc<BooleanFunction>,
        operands: &[NodeId],
    ) -> Result<(), CircuitError> {
        self.check(node)?;
        self.check_operands(function, operands)?;
        self.nodes[node.0] = Node::Gate {
            function: Arc::clone(function),
            operands: operands.to_vec(),
        };
        Ok(())
    }

    /// Read access to a node's current form.
    pub fn node(&self, node: NodeId) -> Result<&Node, CircuitError> {
        self.check(node)?;
        Ok(&self.nodes[node.0])
    }

    /// Recursive pull evaluation: a source returns its stored value; a gate
    /// evaluates each operand in order and applies its function to the
    /// collected inputs.
    ///
    /// There is no result caching. A node referenced by several parents is
    /// recomputed once per reference, and every call re-walks the reachable
    /// subgraph, so the result is deterministic given the current source
    /// values. An operand path that re-enters a node currently being
    /// evaluated fails with `CombinationalCycle`.
    pub fn evaluate(&self, node: NodeId) -> Result<bool, CircuitError> {
        self.check(node)?;
        let mut on_path = vec![false; self.nodes.len()];
        self.evaluate_inner(node, &mut on_path)
    }

    fn evaluate_inner(&self, node: NodeId, on_path: &mut [bool]) -> Result<bool, CircuitError> {
        match &self.nodes[node.0] {
            Node::Source { value } => Ok(*value),
            Node::Gate { function, operands } => {
                if on_path[node.0] {
                    return Err(CircuitError::CombinationalCycle { node: node.0 });
                }
                on_path[node.0] = true;
                let mut inputs = Vec::with_capacity(operands.len());
                for operand in operands {
                    inputs.push(self.evaluate_inner(*operand, on_path)?);
                }
                // Clearing the mark keeps shared fan-out legal: only the
                // current walk path counts as a cycle.
                on_path[node.0] = false;
                function.evaluate(&inputs)
            }
        }
    }

    fn check(&self, node: NodeId) -> Result<(), CircuitError> {
        if node.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(CircuitError::InvalidNode(node.0))
        }
    }

    fn check_operands(
        &self,
        function: &Arc<BooleanFunction>,
        operands: &[NodeId],
    ) -> Result<(), CircuitError> {
        if operands.len() != function.arity() {
            return Err(CircuitError::ArityMismatch {
                gate: function.name().to_string(),
                expected: function.arity(),
                got: operands.len(),
            });
        }
        for operand in operands {
            self.check(*operand)?;
        }
        Ok(())
    }
}
