//! Human-readable text rendering of a settlement.

use crate::bill::BillOutput;

/// Renders a multi-line text report for a settlement.
///
/// Lists the bill metadata and totals, followed by one line per person.
pub fn render_text(output: &BillOutput) -> String {
    let mut lines = vec![
        format!("Date:     {}", output.date),
        format!("Location: {}", output.location),
        format!("Subtotal: {}", output.sub_total),
        format!("Tip:      {}", output.tip),
        format!("Total:    {}", output.total_amount),
    ];

    if !output.items.is_empty() {
        lines.push(String::new());
        for item in &output.items {
            lines.push(format!("{}: {}", item.name, item.amount));
        }
    }

    lines.join("\n") + "\n"
}
