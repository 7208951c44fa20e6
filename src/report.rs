//! Human-readable results table.
//!
//! Three 16-character columns on stdout: working-set size in bytes
//! (left-aligned), ticks per hop (right-aligned), and the walk's final index
//! (right-aligned, printed so the walk cannot be dead-code eliminated).
//! Not a machine-parsable format.

use crate::sweep::Measurement;
use std::io::{self, Write};

/// Column width for all three fields.
const COL_WIDTH: usize = 16;

/// Write the column headers and the dashed rule under them.
///
/// # Errors
///
/// Propagates write failures from `w`.
pub fn write_header(w: &mut impl Write) -> io::Result<()> {
    writeln!(
        w,
        "{:<width$}{:>width$}{:>width$}",
        "size_in_bytes",
        "ticks_per_item",
        "result",
        width = COL_WIDTH
    )?;
    writeln!(w, "{:-<width$}", "", width = COL_WIDTH * 3)
}

/// Write one measurement row.
///
/// # Errors
///
/// Propagates write failures from `w`.
pub fn write_row(w: &mut impl Write, m: &Measurement) -> io::Result<()> {
    writeln!(
        w,
        "{:<width$}{:>width$.3}{:>width$}",
        m.size_bytes,
        m.ticks_per_hop,
        m.result,
        width = COL_WIDTH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_header() -> String {
        let mut buf = Vec::new();
        write_header(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_has_three_aligned_columns() {
        let text = render_header();
        let mut lines = text.lines();

        let header = lines.next().unwrap();
        assert_eq!(header.len(), COL_WIDTH * 3);
        assert!(header.starts_with("size_in_bytes"));
        assert!(header.ends_with("result"));

        let rule = lines.next().unwrap();
        assert_eq!(rule, "-".repeat(COL_WIDTH * 3));
        assert!(lines.next().is_none());
    }

    #[test]
    fn row_is_column_aligned() {
        let m = Measurement {
            size_bytes: 1024,
            elems: 128,
            hops: 100_000_000,
            ticks_per_hop: 3.938,
            result: 50,
        };

        let mut buf = Vec::new();
        write_row(&mut buf, &m).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let row = text.lines().next().unwrap();

        assert_eq!(row.len(), COL_WIDTH * 3);
        assert!(row.starts_with("1024 "));
        assert!(row.contains("3.938"));
        assert!(row.ends_with(&format!("{:>COL_WIDTH$}", 50)));
    }
}
