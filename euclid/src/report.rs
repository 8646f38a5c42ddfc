//! Text rendering of derivation traces for human display.
//!
//! Pure formatting over the values produced by [`crate::xgcd`] and
//! [`crate::crt`]; nothing here performs I/O, so the computational core
//! stays free of presentation concerns.

use itertools::Itertools;

use crate::crt::CrtSolution;
use crate::xgcd::{ExtendedGcd, Step};

/// Selects which coefficient columns a [`StepTable`] displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnFilter {
    /// All columns.
    #[default]
    Full,
    /// Drop the `y`, `y2` and `y1` columns.
    XOnly,
    /// Drop the `x`, `x2` and `x1` columns.
    YOnly,
}

impl ColumnFilter {
    fn headers(self) -> &'static [&'static str] {
        match self {
            ColumnFilter::Full => &["", "q", "r", "x", "y", "a", "b", "x2", "x1", "y2", "y1"],
            ColumnFilter::XOnly => &["", "q", "r", "x", "a", "b", "x2", "x1"],
            ColumnFilter::YOnly => &["", "q", "r", "y", "a", "b", "y2", "y1"],
        }
    }

    fn cells(self, step: &Step) -> Vec<String> {
        let values: Vec<i64> = match self {
            ColumnFilter::Full => vec![
                step.q, step.r, step.x, step.y, step.a, step.b, step.x2, step.x1, step.y2, step.y1,
            ],
            ColumnFilter::XOnly => {
                vec![step.q, step.r, step.x, step.a, step.b, step.x2, step.x1]
            }
            ColumnFilter::YOnly => {
                vec![step.q, step.r, step.y, step.a, step.b, step.y2, step.y1]
            }
        };
        let mut cells = vec![format!("{}.", step.step)];
        cells.extend(values.iter().map(i64::to_string));
        cells
    }
}

/// Renders the step sequence of an [`ExtendedGcd`] engine as an aligned
/// text table followed by the solved values.
#[derive(Clone, Copy, Debug)]
pub struct StepTable {
    engine: ExtendedGcd,
    filter: ColumnFilter,
}

impl StepTable {
    /// A table showing all columns.
    pub fn new(engine: ExtendedGcd) -> Self {
        Self::with_filter(engine, ColumnFilter::Full)
    }

    /// A table restricted by `filter`.
    pub fn with_filter(engine: ExtendedGcd, filter: ColumnFilter) -> Self {
        Self { engine, filter }
    }

    /// Renders the derivation table and the result block.
    pub fn render(&self) -> String {
        let steps: Vec<Step> = self.engine.steps().collect();
        let headers = self.filter.headers();
        let rows: Vec<Vec<String>> = steps.iter().map(|step| self.filter.cells(step)).collect();

        let mut widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let format_row = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(widths.iter().copied())
                .map(|(cell, width)| format!("{cell:>width$}"))
                .join(" | ")
        };

        let mut out = String::from(
            "Extended Euclidean algorithm (integer linear combination ax + by = d)\n",
        );
        let header_cells: Vec<String> = headers.iter().map(|header| header.to_string()).collect();
        let header_line = format_row(&header_cells);
        out.push_str(&header_line);
        out.push('\n');
        out.push_str(&"-".repeat(header_line.len()));
        out.push('\n');
        for row in &rows {
            out.push_str(&format_row(row));
            out.push('\n');
        }
        out.push_str(&self.result_block(&steps));
        out
    }

    fn result_block(&self, steps: &[Step]) -> String {
        let Some(output) = steps.last().and_then(|step| step.output()) else {
            return String::new();
        };
        let (a, b) = self.engine.operands();
        let sign = if output.y < 0 { '-' } else { '+' };

        let mut block = format!(
            "Result:   xa + yb = {x}·{a} {sign} {y}·{b} = gcd({a},{b}) = {d}\n",
            x = output.x,
            y = output.y.abs(),
            d = output.d,
        );
        block.push_str(&format!(
            "Solved:   x = {}, y = {}, d = {}\n",
            output.x, output.y, output.d
        ));
        if output.d == 1 {
            block.push_str(&format!("{a} and {b} are coprime\n"));
            block.push_str(&format!(
                "Modular inverse:   {b}⁻¹ (mod {a}) = {y}",
                y = output.y
            ));
            if output.y < 0 {
                block.push_str(&format!(" = {}", a + output.y));
            }
            block.push('\n');
        }
        block
    }
}

/// Renders the derivation of a CRT solve: the common modulus, each term's
/// partial modulus and inverse, and the final congruence.
pub fn render_crt(solution: &CrtSolution) -> String {
    let mut out = format!("Common modulus N = {}\n", solution.modulus);
    for term in &solution.terms {
        out.push_str(&format!("For modulus {}:\n", term.modulus));
        out.push_str(&format!("  partial modulus Ni = {}\n", term.partial_modulus));
        out.push_str(&format!(
            "  inverse ui = {} (mod {})\n",
            term.inverse, term.modulus
        ));
    }
    out.push_str(&format!(
        "Solution: x ≡ {} (mod {})\n",
        solution.solution, solution.modulus
    ));
    out
}
