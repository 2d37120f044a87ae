use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        println!("{}", serde_json::to_string_pretty(data)?);
    } else {
        display_fn(data);
    }
    Ok(())
}

/// Borderless table whose columns are separated by a single space.
///
/// Columns are left aligned unless listed in [`Columns::right`].
pub struct Columns {
    table: Table,
}

impl Columns {
    pub fn new(headers: &[&str]) -> Self {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(headers.to_vec());

        let last = headers.len().saturating_sub(1);
        for (i, column) in table.column_iter_mut().enumerate() {
            column.set_padding((0, u16::from(i != last)));
        }

        Self { table }
    }

    /// Right-align the given column indices (numbers, codes).
    pub fn right(mut self, indices: &[usize]) -> Self {
        for &i in indices {
            if let Some(column) = self.table.column_mut(i) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
        self
    }

    pub fn row(&mut self, values: Vec<String>) {
        self.table.add_row(values);
    }

    pub fn print(&self) {
        for line in self.table.to_string().lines() {
            println!("{}", line.trim_end());
        }
    }
}

/// Print a `label: value` line with the value starting at a fixed column.
pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("{:<18}{value}", format!("{label}:"));
}

/// `yes` / `no` for boolean cells.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
