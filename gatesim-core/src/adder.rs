//! Single-bit and ripple-carry adders composed from library gates.

use log::debug;

use crate::bits::{bits_to_u64, u64_to_bits_le};
use crate::circuit::CompoundCircuit;
use crate::error::CircuitError;
use crate::gate::GateLibrary;
use crate::node::{Netlist, NodeId};

/// One-bit full adder wired over caller-supplied operand nodes.
///
/// `sum = a ^ b ^ cin`; `carry = (a & b) | ((a ^ b) & cin)`. The operand
/// nodes stay shared with whatever circuit produced them, so a chain of
/// adders can consume each other's carries directly.
#[derive(Debug, Clone, Copy)]
pub struct FullAdder {
    sum: NodeId,
    carry: NodeId,
}

impl FullAdder {
    /// Wires two XOR2, two AND2 and one OR2 gate over `(a, b, cin)`.
    pub fn wire(
        net: &mut Netlist,
        lib: &GateLibrary,
        a: NodeId,
        b: NodeId,
        cin: NodeId,
    ) -> Result<Self, CircuitError> {
        let a_xor_b = net.gate(&lib.xor2, &[a, b])?;
        let sum = net.gate(&lib.xor2, &[a_xor_b, cin])?;
        let a_and_b = net.gate(&lib.and2, &[a, b])?;
        let prop_and_cin = net.gate(&lib.and2, &[a_xor_b, cin])?;
        let carry = net.gate(&lib.or2, &[a_and_b, prop_and_cin])?;
        Ok(Self { sum, carry })
    }

    pub fn sum(&self) -> NodeId {
        self.sum
    }

    pub fn carry(&self) -> NodeId {
        self.carry
    }

    /// Output 0 is the sum bit, output 1 the carry bit.
    pub fn output(&self, index: usize) -> Result<NodeId, CircuitError> {
        match index {
            0 => Ok(self.sum),
            1 => Ok(self.carry),
            _ => Err(CircuitError::IndexOutOfRange {
                what: "output",
                index,
                len: 2,
            }),
        }
    }
}

/// Carry-chained n-bit adder.
///
/// Interface order (LSB first): inputs `[a0..a(n-1), b0..b(n-1)]`, outputs
/// `[sum0..sum(n-1), carry_out]`. Each stage consumes the previous stage's
/// carry node directly; the carry wiring is shared, never copied.
#[derive(Debug, Clone)]
pub struct RippleCarryAdder {
    width: usize,
    circuit: CompoundCircuit,
    carry_out: NodeId,
}

impl RippleCarryAdder {
    /// Adder whose least significant stage sees a constant-0 carry-in.
    pub fn new(net: &mut Netlist, lib: &GateLibrary, width: usize) -> Result<Self, CircuitError> {
        let cin = net.source(false);
        Self::with_carry_in(net, lib, width, cin)
    }

    /// Adder whose least significant stage consumes `cin`, typically the
    /// carry-out node of another circuit.
    pub fn with_carry_in(
        net: &mut Netlist,
        lib: &GateLibrary,
        width: usize,
        cin: NodeId,
    ) -> Result<Self, CircuitError> {
        if width == 0 {
            return Err(CircuitError::ZeroWidth);
        }
        let a: Vec<NodeId> = (0..width).map(|_| net.source(false)).collect();
        let b: Vec<NodeId> = (0..width).map(|_| net.source(false)).collect();

        let mut sums = Vec::with_capacity(width);
        let mut carry = cin;
        for bit in 0..width {
            let stage = FullAdder::wire(net, lib, a[bit], b[bit], carry)?;
            sums.push(stage.sum());
            carry = stage.carry();
        }

        let mut nodes = Vec::with_capacity(3 * width + 1);
        nodes.extend_from_slice(&a);
        nodes.extend_from_slice(&b);
        nodes.extend_from_slice(&sums);
        nodes.push(carry);
        let circuit = CompoundCircuit::new(nodes, 2 * width, width + 1)?;

        debug!("wired {width}-bit ripple-carry adder ({} nodes total)", net.len());
        Ok(Self {
            width,
            circuit,
            carry_out: carry,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn circuit(&self) -> &CompoundCircuit {
        &self.circuit
    }

    /// Carry-out node, shareable as the carry-in of a wider composition.
    pub fn carry_out(&self) -> NodeId {
        self.carry_out
    }

    /// Drives the A/B inputs and returns `(sum bits LSB-first, carry_out)`.
    pub fn apply(
        &self,
        net: &mut Netlist,
        a_bits: &[bool],
        b_bits: &[bool],
    ) -> Result<(Vec<bool>, bool), CircuitError> {
        if a_bits.len() != self.width {
            return Err(CircuitError::InputWidthMismatch {
                expected: self.width,
                got: a_bits.len(),
            });
        }
        if b_bits.len() != self.width {
            return Err(CircuitError::InputWidthMismatch {
                expected: self.width,
                got: b_bits.len(),
            });
        }
        let mut inputs = Vec::with_capacity(2 * self.width);
        inputs.extend_from_slice(a_bits);
        inputs.extend_from_slice(b_bits);

        let mut outputs = self.circuit.apply(net, &inputs)?;
        let carry = outputs[self.width];
        outputs.truncate(self.width);
        Ok((outputs, carry))
    }

    /// Word-level convenience: adds `a + b` through the gate network and
    /// returns `(sum mod 2^width, carry_out)`.
    pub fn add(&self, net: &mut Netlist, a: u64, b: u64) -> Result<(u64, bool), CircuitError> {
        assert!(self.width <= 64, "word interface supports at most 64 bits");
        let (sums, carry) = self.apply(
            net,
            &u64_to_bits_le(a, self.width),
            &u64_to_bits_le(b, self.width),
        )?;
        Ok((bits_to_u64(&sums), carry))
    }
}
