//! Output formatting helpers for the shell.

use std::io::Write;
use std::time::{Duration, Instant};

use crate::common::Result;
use crate::record::Supplier;

/// ANSI sequence: clear screen, cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Run `f` and measure how long it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// ` (Time: 1.23μs)` suffix, or nothing when latency reporting is off.
pub fn latency_suffix(elapsed: Duration, enabled: bool) -> String {
    if enabled {
        format!(" (Time: {:.2}μs)", elapsed.as_secs_f64() * 1_000_000.0)
    } else {
        String::new()
    }
}

/// A horizontal rule of `width` characters.
pub fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// Detail block for one supplier framed by dashed rules.
pub fn write_supplier_block(out: &mut impl Write, supplier: &Supplier) -> Result<()> {
    writeln!(out, "{}", rule('-', 40))?;
    writeln!(out, "{}", supplier)?;
    writeln!(out, "{}", rule('-', 40))?;
    Ok(())
}

/// Full listing of suppliers in the order given.
pub fn write_supplier_list<'a>(
    out: &mut impl Write,
    suppliers: impl IntoIterator<Item = &'a Supplier>,
) -> Result<()> {
    writeln!(out, "\n{}", rule('=', 50))?;
    writeln!(out, "           ALL SUPPLIERS (SORTED BY ID)")?;
    writeln!(out, "{}", rule('=', 50))?;
    for supplier in suppliers {
        writeln!(out, "{}", supplier)?;
        writeln!(out, "{}", rule('-', 30))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Rating;

    #[test]
    fn test_latency_suffix() {
        let elapsed = Duration::from_nanos(12_500);
        assert_eq!(latency_suffix(elapsed, true), " (Time: 12.50μs)");
        assert_eq!(latency_suffix(elapsed, false), "");
    }

    #[test]
    fn test_timed() {
        let (value, elapsed) = timed(|| 40 + 2);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(1));
    }

    #[test]
    fn test_rule() {
        assert_eq!(rule('-', 3), "---");
        assert_eq!(rule('=', 0), "");
    }

    #[test]
    fn test_supplier_list() {
        let a = Supplier::new("S1", "A", "1", "P", Rating::new(1).unwrap());
        let b = Supplier::new("S2", "B", "2", "Q", Rating::new(2).unwrap());

        let mut out = Vec::new();
        write_supplier_list(&mut out, [&a, &b]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("ALL SUPPLIERS (SORTED BY ID)"));
        let first = text.find("Supplier ID: S1").unwrap();
        let second = text.find("Supplier ID: S2").unwrap();
        assert!(first < second);
    }
}
