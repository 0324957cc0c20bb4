//! Drives a ripple-carry adder and a 74181-equivalent ALU cell with
//! literal bit patterns and prints the labeled results. Presentation
//! glue only; any host can substitute its own input source and sink.

use std::error::Error;

use gatesim_core::adder::RippleCarryAdder;
use gatesim_core::alu::AluCell;
use gatesim_core::gate::GateLibrary;
use gatesim_core::node::Netlist;
use log::info;

type AppResult<T> = Result<T, Box<dyn Error>>;

/// Parses `--flag value` or `--flag=value` as a binary bit string
/// (`"1011"`), falling back to `default`.
fn parse_bits_arg(args: &[String], flag: &str, default: u64) -> u64 {
    match raw_flag_value(args, flag) {
        Some(raw) => u64::from_str_radix(&raw, 2).unwrap_or(default),
        None => default,
    }
}

/// Parses `--flag value` or `--flag=value` as `usize`, falling back to
/// `default`.
fn parse_usize_arg(args: &[String], flag: &str, default: usize) -> usize {
    match raw_flag_value(args, flag) {
        Some(raw) => raw.parse::<usize>().unwrap_or(default),
        None => default,
    }
}

fn parse_bool_arg(args: &[String], flag: &str, default: bool) -> bool {
    match raw_flag_value(args, flag) {
        Some(raw) => matches!(raw.as_str(), "1" | "true"),
        None => default,
    }
}

fn raw_flag_value(args: &[String], flag: &str) -> Option<String> {
    let key_eq = format!("{flag}=");
    let mut idx = 0usize;
    while idx < args.len() {
        if args[idx] == flag {
            return args.get(idx + 1).cloned();
        }
        if let Some(raw) = args[idx].strip_prefix(&key_eq) {
            return Some(raw.to_string());
        }
        idx += 1;
    }
    None
}

/// MSB-first bit string for display.
fn bit_string(value: u64, width: usize) -> String {
    format!("{value:0width$b}")
}

fn main() -> AppResult<()> {
    env_logger::init();

    // Defaults mirror the classic demo vector: 1111 + 1011, ALU row 1010.
    let args: Vec<String> = std::env::args().collect();
    let width = parse_usize_arg(&args, "--bits", 4);
    let mask = if width >= 64 { u64::MAX } else { (1u64 << width) - 1 };
    let a = parse_bits_arg(&args, "--a", 0b1111) & mask;
    let b = parse_bits_arg(&args, "--b", 0b1011) & mask;
    let s = parse_bits_arg(&args, "--s", 0b1010);
    let m = parse_bool_arg(&args, "--m", false);
    let c = parse_bool_arg(&args, "--c", false);

    let lib = GateLibrary::global();
    let mut net = Netlist::new();

    let adder = RippleCarryAdder::new(&mut net, lib, width)?;
    info!("netlist holds {} nodes after wiring the adder", net.len());
    let (sum, carry) = adder.add(&mut net, a, b)?;
    println!(
        "adder: {} + {} = {} carry={}",
        bit_string(a, width),
        bit_string(b, width),
        bit_string(sum, width),
        carry as u8
    );

    let alu = AluCell::new(&mut net, lib)?;
    info!("netlist holds {} nodes after wiring the ALU", net.len());
    let out = alu.apply_words(
        &mut net,
        (a & 0xf) as u8,
        (b & 0xf) as u8,
        (s & 0xf) as u8,
        m,
        c,
    )?;
    println!(
        "alu:   A={} B={} S={} M={} C={}",
        bit_string(a & 0xf, 4),
        bit_string(b & 0xf, 4),
        bit_string(s & 0xf, 4),
        m as u8,
        c as u8
    );
    println!("  F    = {}", bit_string(out.f_value() as u64, 4));
    println!("  A=B  = {}", out.a_equals_b as u8);
    println!("  Cn+4 = {}", out.carry_out as u8);
    println!("  P    = {}", out.propagate as u8);
    println!("  G    = {}", out.generate as u8);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_binary_flag_in_both_forms() {
        assert_eq!(parse_bits_arg(&args(&["--a", "1011"]), "--a", 0), 0b1011);
        assert_eq!(parse_bits_arg(&args(&["--a=0110"]), "--a", 0), 0b0110);
        assert_eq!(parse_bits_arg(&args(&[]), "--a", 0b101), 0b101);
        assert_eq!(parse_bits_arg(&args(&["--a", "2"]), "--a", 0b11), 0b11);
    }

    #[test]
    fn parses_bool_flag() {
        assert!(parse_bool_arg(&args(&["--m", "1"]), "--m", false));
        assert!(parse_bool_arg(&args(&["--m=true"]), "--m", false));
        assert!(!parse_bool_arg(&args(&["--m", "0"]), "--m", true));
        assert!(parse_bool_arg(&args(&[]), "--m", true));
    }

    #[test]
    fn formats_bits_msb_first() {
        assert_eq!(bit_string(0b1010, 4), "1010");
        assert_eq!(bit_string(1, 4), "0001");
    }
}
