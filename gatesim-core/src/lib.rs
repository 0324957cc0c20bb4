//! Combinational gate-level logic simulator: truth-table gates wired into
//! node graphs that are fully re-evaluated on demand by a recursive pull walk.
//! Modules are split by gate library, node arena and evaluator, input/output
//! bundling, and the adder/ALU composites built on top.

pub mod adder;
pub mod alu;
pub mod bits;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod node;
