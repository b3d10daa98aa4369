//! Plain-text rendering of the structures the library hands back.

use rmframe::{Element, ElementSet, Quadruple, Relation, RelationTable, SearchOutcome};

/// Labels are concatenated inside a cell as long as each is a single digit.
const MAX_CONCATENATED_SIZE: usize = 10;

pub fn render_elements<'a>(elements: impl IntoIterator<Item = &'a Element>) -> String {
    let inner = elements
        .into_iter()
        .map(|it| it.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", inner)
}

pub fn render_subsets(subsets: &[ElementSet]) -> String {
    let inner = subsets
        .iter()
        .map(|it| render_elements(it))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}

pub fn render_relation(relation: &Relation) -> String {
    let inner = relation
        .iter()
        .map(|(a, b, c)| format!("({}, {}, {})", a, b, c))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", inner)
}

pub fn render_quadruples(quadruples: &[Quadruple]) -> String {
    let inner = quadruples
        .iter()
        .map(|(a, b, c, d)| format!("({}, {}, {}, {})", a, b, c, d))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}

/// P on one line, then R as a grid with a as the row and b as the column;
/// each cell lists the c with Rabc.
pub fn render_table(table: &RelationTable) -> String {
    let separator = if table.size > MAX_CONCATENATED_SIZE {
        ","
    } else {
        ""
    };
    let cells: Vec<Vec<String>> = table
        .cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    cell.iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(separator)
                })
                .collect()
        })
        .collect();
    let label_width = table.size.saturating_sub(1).to_string().len();
    let widths: Vec<usize> = (0..table.size)
        .map(|b| {
            cells
                .iter()
                .map(|row| row[b].len())
                .chain(std::iter::once(b.to_string().len()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let mut out = String::new();
    out.push_str(&format!("P: {}\n", render_elements(&table.distinguished)));
    out.push_str("R:\n");
    let mut header = format!("{:label_width$}", "");
    for (b, &width) in widths.iter().enumerate() {
        header.push_str(&format!("  {:<width$}", b));
    }
    out.push_str(header.trim_end());
    out.push('\n');
    for (a, row) in cells.iter().enumerate() {
        let mut line = format!("{:>label_width$}", a);
        for (cell, &width) in row.iter().zip(widths.iter()) {
            line.push_str(&format!("  {:<width$}", cell));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn render_summary(outcome: &SearchOutcome) -> String {
    match outcome.tries {
        Some(tries) => format!(
            "There are {} frames for n = {} for the first {} tries.",
            outcome.count(),
            outcome.n,
            tries
        ),
        None => format!("There are {} frames for n = {}.", outcome.count(), outcome.n),
    }
}
