//! Text reports of coefficient sequences
//!
//! Every writer targets any `io::Write` so the binaries print to stdout and
//! tests capture into a buffer.

use crate::app::calculator::Coefficients;
use crate::constants::{INDEX_WIDTH, RATIO_SCALE};
use crate::domain::analysis::{adjacent_ratios, is_unimodal, order_relations, relation_symbol};
use crate::domain::index_set::IndexSet;
use std::io::{self, Write};

/// Which sections `write_report` emits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// Single-line coefficient listing instead of one `C_ii = ...` per line
    pub compact: bool,
    pub ratios: bool,
    pub order: bool,
    pub unimodality: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            compact: false,
            ratios: true,
            order: true,
            unimodality: true,
        }
    }
}

impl ReportOptions {
    /// Coefficient listing only, in compact form
    pub fn compact_only() -> Self {
        Self {
            compact: true,
            ratios: false,
            order: false,
            unimodality: false,
        }
    }
}

/// Coefficient label with a zero-padded index, e.g. `C_07`
pub fn coefficient_label(index: usize) -> String {
    format!("C_{:0width$}", index, width = INDEX_WIDTH)
}

/// `I = [1, 3]`
pub fn write_set_header<W: Write>(out: &mut W, set: &IndexSet) -> io::Result<()> {
    writeln!(out, "I = {}", set)
}

/// `Coefficients: c0 c1 ... ` followed by a blank line
pub fn write_compact<W: Write>(out: &mut W, coefficients: &Coefficients) -> io::Result<()> {
    write!(out, "Coefficients: ")?;
    for value in coefficients.values() {
        write!(out, "{} ", value)?;
    }
    writeln!(out)?;
    writeln!(out)
}

/// One `C_ii = value` line per coefficient, after a blank line
pub fn write_indexed<W: Write>(out: &mut W, coefficients: &Coefficients) -> io::Result<()> {
    writeln!(out)?;
    for (index, value) in coefficients.values().iter().enumerate() {
        writeln!(out, "{} = {}", coefficient_label(index), value)?;
    }
    Ok(())
}

/// `C_ii/C_jj = q` lines; nothing when s = 0
pub fn write_ratios<W: Write>(out: &mut W, coefficients: &Coefficients) -> io::Result<()> {
    if coefficients.last_index() == 0 {
        return Ok(());
    }

    writeln!(out)?;
    for (index, ratio) in adjacent_ratios(coefficients.values(), RATIO_SCALE)
        .into_iter()
        .enumerate()
    {
        let label = format!(
            "{}/{}",
            coefficient_label(index),
            coefficient_label(index + 1)
        );
        match ratio {
            Some(ratio) => writeln!(out, "{} = {}", label, ratio)?,
            None => writeln!(out, "{} = undefined", label)?,
        }
    }
    Ok(())
}

/// `C_00<C_01=C_02>...` chain; nothing when s = 0
pub fn write_order<W: Write>(out: &mut W, coefficients: &Coefficients) -> io::Result<()> {
    if coefficients.last_index() == 0 {
        return Ok(());
    }

    writeln!(out)?;
    write!(out, "{}", coefficient_label(0))?;
    for (index, ordering) in order_relations(coefficients.values()).into_iter().enumerate() {
        write!(
            out,
            "{}{}",
            relation_symbol(ordering),
            coefficient_label(index + 1)
        )?;
    }
    writeln!(out)?;
    writeln!(out)
}

/// Unimodality verdict line
pub fn write_unimodality<W: Write>(out: &mut W, coefficients: &Coefficients) -> io::Result<()> {
    if is_unimodal(coefficients.values()) {
        writeln!(out, "The sequence is unimodal.")
    } else {
        writeln!(out, "The sequence is NOT unimodal.")
    }
}

/// Full report: coefficients, then ratios, order and unimodality as enabled
pub fn write_report<W: Write>(
    out: &mut W,
    coefficients: &Coefficients,
    options: &ReportOptions,
) -> io::Result<()> {
    if options.compact {
        write_compact(out, coefficients)?;
    } else {
        write_indexed(out, coefficients)?;
    }
    if options.ratios {
        write_ratios(out, coefficients)?;
    }
    if options.order {
        write_order(out, coefficients)?;
    }
    if options.unimodality {
        write_unimodality(out, coefficients)?;
    }
    Ok(())
}
