//! 74181-equivalent 4-bit arithmetic/logic unit.
//!
//! The wiring follows the device's two-level function-select network and
//! carry-lookahead rows for active-high operands: per bit, `e = NOR(A,
//! S0·B, S1·!B)` and `d = NOR(S2·!B·A, S3·A·B)`, then `F = (e ^ d) ^ c`
//! with the internal carries expanded as AND/NOR rows. Correctness is
//! defined by the published 74181 function table, not by any one schematic
//! transcription.
//!
//! Carries cross the cell boundary in logical polarity: `carry_in = true`
//! means an incoming carry and `carry_out = true` means the selected
//! arithmetic operation carried out of bit 3. On the device itself the Cn
//! and Cn+4 pins are active-low for active-high operands, so both are
//! inverted at the boundary. The P and G outputs are the device's
//! active-low group propagate/generate pins, unchanged.

use log::debug;

use crate::bits::{bits4_to_u8, u8_to_bits4};
use crate::circuit::CompoundCircuit;
use crate::error::CircuitError;
use crate::gate::GateLibrary;
use crate::node::{Netlist, NodeId};

/// Decoded outputs of one ALU evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluOutputs {
    /// Result bits, LSB first.
    pub f: [bool; 4],
    /// True iff every F bit is 0 (conjunction of per-bit equality signals).
    pub a_equals_b: bool,
    /// Logical carry-out of bit 3 (Cn+4, inverted from the active-low pin).
    pub carry_out: bool,
    /// Group carry-propagate pin (active low).
    pub propagate: bool,
    /// Group carry-generate pin (active low).
    pub generate: bool,
}

impl AluOutputs {
    /// Result as a value in `0..16`.
    pub fn f_value(&self) -> u8 {
        bits4_to_u8(self.f)
    }
}

/// 74181-equivalent cell over a node arena.
///
/// Inputs, in interface order: A[4] and B[4] operand bits (LSB first),
/// S[4] function select (`s[i]` is the device's Si line), M (true = logic
/// mode), C (logical carry-in). Outputs: F[4], A=B, Cn+4, P, G.
///
/// The topology is wired once; only the input source values change across
/// calls.
#[derive(Debug, Clone)]
pub struct AluCell {
    circuit: CompoundCircuit,
}

impl AluCell {
    pub fn new(net: &mut Netlist, lib: &GateLibrary) -> Result<Self, CircuitError> {
        let a: [NodeId; 4] = std::array::from_fn(|_| net.source(false));
        let b: [NodeId; 4] = std::array::from_fn(|_| net.source(false));
        let s: [NodeId; 4] = std::array::from_fn(|_| net.source(false));
        let m = net.source(false);
        let c = net.source(false);

        // Device carry pin is active low; the cell interface is logical.
        let cn = net.gate(&lib.not, &[c])?;
        let mn = net.gate(&lib.not, &[m])?;

        // Per-bit function-select terms.
        let mut e = Vec::with_capacity(4);
        let mut d = Vec::with_capacity(4);
        for bit in 0..4 {
            let bn = net.gate(&lib.not, &[b[bit]])?;
            let s0_b = net.gate(&lib.and2, &[b[bit], s[0]])?;
            let s1_bn = net.gate(&lib.and2, &[s[1], bn])?;
            e.push(net.gate(&lib.nor3, &[a[bit], s0_b, s1_bn])?);

            let s2_term = net.gate(&lib.and3, &[bn, s[2], a[bit]])?;
            let s3_term = net.gate(&lib.and3, &[a[bit], s[3], b[bit]])?;
            d.push(net.gate(&lib.nor2, &[s2_term, s3_term])?);
        }

        // Internal carry into each stage. In logic mode (mn low) every
        // stage carry is forced high, making F independent of C.
        let c0 = net.gate(&lib.nand2, &[cn, mn])?;

        let c1_kill = net.gate(&lib.and2, &[mn, e[0]])?;
        let c1_ripple = net.gate(&lib.and3, &[mn, d[0], cn])?;
        let c1 = net.gate(&lib.nor2, &[c1_kill, c1_ripple])?;

        let c2_kill = net.gate(&lib.and2, &[mn, e[1]])?;
        let c2_pass = net.gate(&lib.and3, &[mn, e[0], d[1]])?;
        let c2_ripple = net.gate(&lib.and4, &[mn, cn, d[0], d[1]])?;
        let c2 = net.gate(&lib.nor3, &[c2_kill, c2_pass, c2_ripple])?;

        let c3_kill = net.gate(&lib.and2, &[mn, e[2]])?;
        let c3_pass1 = net.gate(&lib.and3, &[mn, e[1], d[2]])?;
        let c3_pass2 = net.gate(&lib.and4, &[mn, e[0], d[1], d[2]])?;
        let c3_ripple = net.gate(&lib.and5, &[mn, cn, d[0], d[1], d[2]])?;
        let c3 = net.gate(&lib.nor4, &[c3_kill, c3_pass1, c3_pass2, c3_ripple])?;

        // Sum stage: F[i] = (e[i] ^ d[i]) ^ carry into stage i.
        let carries = [c0, c1, c2, c3];
        let mut f = Vec::with_capacity(4);
        for bit in 0..4 {
            let half = net.gate(&lib.xor2, &[e[bit], d[bit]])?;
            f.push(net.gate(&lib.xor2, &[carries[bit], half])?);
        }

        // Group propagate pin: NAND over the four d terms.
        let d_all = net.gate(&lib.and4, &[d[0], d[1], d[2], d[3]])?;
        let propagate = net.gate(&lib.not, &[d_all])?;

        // Group generate pin: NOR over the carry-kill rows.
        let g_kill3 = net.gate(&lib.and2, &[e[2], d[3]])?;
        let g_kill2 = net.gate(&lib.and3, &[e[1], d[2], d[3]])?;
        let g_kill1 = net.gate(&lib.and4, &[e[0], d[1], d[2], d[3]])?;
        let generate = net.gate(&lib.nor4, &[e[3], g_kill3, g_kill2, g_kill1])?;

        // Cn+4 pin (active low), then the logical carry-out.
        let ripple_all = net.gate(&lib.and5, &[cn, d[0], d[1], d[2], d[3]])?;
        let killed = net.gate(&lib.not, &[generate])?;
        let cn4_pin = net.gate(&lib.or2, &[ripple_all, killed])?;
        let carry_out = net.gate(&lib.not, &[cn4_pin])?;

        // A=B: every F bit low.
        let nf0 = net.gate(&lib.not, &[f[0]])?;
        let nf1 = net.gate(&lib.not, &[f[1]])?;
        let nf2 = net.gate(&lib.not, &[f[2]])?;
        let nf3 = net.gate(&lib.not, &[f[3]])?;
        let a_equals_b = net.gate(&lib.and4, &[nf0, nf1, nf2, nf3])?;

        let mut nodes = Vec::with_capacity(22);
        nodes.extend_from_slice(&a);
        nodes.extend_from_slice(&b);
        nodes.extend_from_slice(&s);
        nodes.push(m);
        nodes.push(c);
        nodes.extend_from_slice(&f);
        nodes.push(a_equals_b);
        nodes.push(carry_out);
        nodes.push(propagate);
        nodes.push(generate);
        let circuit = CompoundCircuit::new(nodes, 14, 8)?;

        debug!("wired 74181 cell ({} nodes total)", net.len());
        Ok(Self { circuit })
    }

    pub fn circuit(&self) -> &CompoundCircuit {
        &self.circuit
    }

    /// Drives the cell and decodes the outputs. `a` and `b` are LSB-first
    /// bit arrays; `s[i]` is select line Si.
    pub fn apply(
        &self,
        net: &mut Netlist,
        a: [bool; 4],
        b: [bool; 4],
        s: [bool; 4],
        m: bool,
        c: bool,
    ) -> Result<AluOutputs, CircuitError> {
        let mut inputs = Vec::with_capacity(14);
        inputs.extend_from_slice(&a);
        inputs.extend_from_slice(&b);
        inputs.extend_from_slice(&s);
        inputs.push(m);
        inputs.push(c);

        let out = self.circuit.apply(net, &inputs)?;
        Ok(AluOutputs {
            f: [out[0], out[1], out[2], out[3]],
            a_equals_b: out[4],
            carry_out: out[5],
            propagate: out[6],
            generate: out[7],
        })
    }

    /// Word-level convenience: `a`, `b` and `s` are 4-bit values, `s` read
    /// as S3..S0 in its binary form.
    pub fn apply_words(
        &self,
        net: &mut Netlist,
        a: u8,
        b: u8,
        s: u8,
        m: bool,
        c: bool,
    ) -> Result<AluOutputs, CircuitError> {
        self.apply(net, u8_to_bits4(a), u8_to_bits4(b), u8_to_bits4(s), m, c)
    }
}
