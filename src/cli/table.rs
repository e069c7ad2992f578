use crate::ledger::Entry;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Header and alignment for a single rendered column.
pub struct TableColumn {
    pub header: &'static str,
    pub alignment: Alignment,
}

const COLUMNS: [TableColumn; 6] = [
    TableColumn {
        header: "#",
        alignment: Alignment::Right,
    },
    TableColumn {
        header: "date",
        alignment: Alignment::Left,
    },
    TableColumn {
        header: "description",
        alignment: Alignment::Left,
    },
    TableColumn {
        header: "deposit",
        alignment: Alignment::Right,
    },
    TableColumn {
        header: "withdrawal",
        alignment: Alignment::Right,
    },
    TableColumn {
        header: "category",
        alignment: Alignment::Left,
    },
];

const PADDING: &str = "  ";

/// Renders entries as a plain-text table. `offset` is the ledger position of
/// the first entry in the slice, so tail views keep their real positions.
pub fn render(offset: usize, entries: &[Entry]) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            vec![
                (offset + idx).to_string(),
                entry.date_label(),
                entry.description.clone(),
                format!("{:.2}", entry.deposit),
                format!("{:.2}", entry.withdrawal),
                entry.category.clone(),
            ]
        })
        .collect();

    let widths = compute_widths(&rows);
    let mut out = String::new();
    let header: Vec<String> = COLUMNS.iter().map(|c| c.header.to_string()).collect();
    out.push_str(&render_row(&header, &widths));
    for row in &rows {
        out.push_str(&render_row(row, &widths));
    }
    out
}

/// Computes content widths from the headers and every row.
fn compute_widths(rows: &[Vec<String>]) -> Vec<usize> {
    COLUMNS
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let mut width = column.header.len();
            for row in rows {
                if let Some(cell) = row.get(idx) {
                    width = width.max(cell.chars().count());
                }
            }
            width
        })
        .collect()
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let rendered: Vec<String> = COLUMNS
        .iter()
        .zip(cells.iter().zip(widths.iter()))
        .map(|(column, (cell, width))| pad(cell, *width, column.alignment))
        .collect();
    let mut line = rendered.join(PADDING);
    while line.ends_with(' ') {
        line.pop();
    }
    line.push('\n');
    line
}

fn pad(cell: &str, width: usize, alignment: Alignment) -> String {
    let len = cell.chars().count();
    let fill = width.saturating_sub(len);
    match alignment {
        Alignment::Left => format!("{cell}{}", " ".repeat(fill)),
        Alignment::Right => format!("{}{cell}", " ".repeat(fill)),
    }
}
