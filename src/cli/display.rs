// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for levtrace.
//!
//! Matrices are printed with the target across the top and the source down
//! the side, one bracketed row per source prefix:
//!
//! ```text
//!    #  f  l  a  w
//! # [0, 1, 2, 3, 4]
//! l [1, 1, 1, 2, 3]
//! ```
//!
//! `#` marks the empty prefix. Blank cells print as a space, so the sparse
//! path and operation matrices keep their columns aligned. On a colour
//! terminal the cells of the selected path are highlighted with the basic
//! 16-colour palette, which reads on dark and light backgrounds alike.
//! `NO_COLOR` or a non-TTY stdout turns colour off.

use std::fmt::Write as _;

use levtrace::{Alignment, EditOp, EditTrace, Grid, Sequence};

use super::Verbosity;

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
/// Path highlight
pub const GREEN: &str = "\x1b[32m";
/// Headings and row/column labels
pub const CYAN: &str = "\x1b[36m";

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Rendering options. Colour is decided once by the caller so the renderers
/// stay pure and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn detect() -> Self {
        if use_colors() {
            Style { color: true }
        } else {
            Style::plain()
        }
    }

    pub fn plain() -> Self {
        Style { color: false }
    }

    fn paint(self, color: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn heading(self, text: &str) -> String {
        if self.color {
            format!("{}{}{}{}", BOLD, CYAN, text, RESET)
        } else {
            text.to_string()
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// MATRICES
// ═══════════════════════════════════════════════════════════════════════════

/// One rendered cell.
struct Cell {
    text: String,
    on_path: bool,
}

/// Render a grid in bracket notation. `cell` turns each position into its
/// text and whether it lies on the selected path. Cells are right-aligned to
/// the widest one so multi-digit costs keep the columns straight.
fn render_grid<T>(
    source: &Sequence,
    target: &Sequence,
    grid: &Grid<T>,
    style: Style,
    cell: impl Fn(usize, usize, &T) -> Cell,
) -> String {
    let cells: Vec<Vec<Cell>> = grid
        .iter_rows()
        .enumerate()
        .map(|(r, row)| row.iter().enumerate().map(|(c, v)| cell(r, c, v)).collect())
        .collect();
    let width = cells
        .iter()
        .flatten()
        .map(|cell| cell.text.chars().count())
        .max()
        .unwrap_or(1);

    let mut out = String::new();

    // Target across the top
    let labels: Vec<String> = std::iter::once('#')
        .chain(target.as_slice().iter().copied())
        .map(|c| format!("{:>width$}", c, width = width))
        .collect();
    let _ = writeln!(out, "   {}", style.paint(CYAN, &labels.join("  ")));

    // Source down the side
    for (r, row) in cells.iter().enumerate() {
        let label = if r == 0 { '#' } else { source.as_slice()[r - 1] };
        let body: Vec<String> = row
            .iter()
            .map(|cell| {
                let padded = format!("{:>width$}", cell.text, width = width);
                if cell.on_path {
                    style.paint(GREEN, &padded)
                } else {
                    padded
                }
            })
            .collect();
        let _ = writeln!(out, "{} [{}]", style.paint(CYAN, &label.to_string()), body.join(", "));
    }

    out
}

/// Final distance matrix, with the selected path highlighted.
pub fn render_distances(alignment: &Alignment, style: Style) -> String {
    render_grid(
        &alignment.source,
        &alignment.target,
        &alignment.distances,
        style,
        |r, c, value| Cell {
            text: value.to_string(),
            on_path: alignment.path.is_marked(r, c),
        },
    )
}

/// Minimum path matrix: costs on the path, blanks elsewhere.
pub fn render_path(alignment: &Alignment, style: Style) -> String {
    render_grid(
        &alignment.source,
        &alignment.target,
        &alignment.path,
        style,
        |_, _, value| match value {
            Some(cost) => Cell {
                text: cost.to_string(),
                on_path: true,
            },
            None => Cell {
                text: " ".to_string(),
                on_path: false,
            },
        },
    )
}

/// Operations matrix: `D`/`I`/`S` on the path, `0` at the origin.
pub fn render_operations(alignment: &Alignment, style: Style) -> String {
    render_grid(
        &alignment.source,
        &alignment.target,
        &alignment.operations,
        style,
        |r, c, op: &Option<EditOp>| {
            let text = match op {
                Some(op) => op.tag().to_string(),
                None if (r, c) == (0, 0) => "0".to_string(),
                None => " ".to_string(),
            };
            Cell {
                on_path: text != " ",
                text,
            }
        },
    )
}

/// One line per trace step: the untouched source, then each edit.
pub fn render_trace(trace: &EditTrace) -> String {
    let mut out = String::new();
    for step in trace.steps() {
        let _ = writeln!(out, "{}", step.description());
    }
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORT
// ═══════════════════════════════════════════════════════════════════════════

/// The full text report for one alignment at the given verbosity.
pub fn render_report(alignment: &Alignment, verbosity: Verbosity, style: Style) -> String {
    let mut out = String::new();

    if alignment.swapped {
        let _ = writeln!(out, "* switching source and target words to maintain matrix shape *");
    }

    if verbosity >= Verbosity::Matrices {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style.heading("***** FINAL RESULTS *****"));
        let _ = writeln!(out);

        if alignment.distances.is_empty() {
            let _ = writeln!(out, "(no matrices: the target word is empty)");
        } else {
            let sections = [
                ("Final Distance Matrix:", render_distances(alignment, style)),
                ("Minimum Path Matrix:", render_path(alignment, style)),
                ("Final Operations Matrix:", render_operations(alignment, style)),
            ];
            for (title, body) in sections {
                let _ = writeln!(out, "{}", style.heading(title));
                let _ = writeln!(out, "{}", body);
            }
        }

        let _ = writeln!(out, "{}", style.heading("Sequential Edits:"));
        out.push_str(&render_trace(&alignment.trace));
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Levenshtein Distance (LD) between '{}' and '{}' is: {}",
        alignment.source, alignment.target, alignment.distance
    );
    match alignment.ratio {
        Some(ratio) => {
            let _ = writeln!(out, "Levenshtein similarity ratio is: {}", ratio);
        }
        None => {
            let _ = writeln!(out, "Levenshtein similarity ratio is undefined for two empty words");
        }
    }

    out
}
