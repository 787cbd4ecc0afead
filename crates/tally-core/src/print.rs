//! # Print View
//!
//! Simplified single-shift listing handed to the host print facility.
//!
//! ```text
//! Cash Count Report
//! 1st Shift
//! Generated on: 05/03/2024, 14:30:00
//!
//! ₱1k | Qty: 2 | ₱2,000.00
//! ₱100 | Qty: 3 | ₱300.00
//!
//! 1st Shift Total: ₱2,300.00
//! Total Cash Denomination: ₱2,800.00
//! ```
//!
//! Only rows with a non-zero quantity are listed.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::count::{Quantity, Tally};
use crate::money::Money;
use crate::types::{Denomination, Shift};

/// One listed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintLine {
    pub denomination: Denomination,
    pub label: String,
    pub quantity: Quantity,
    pub amount: Money,
    pub amount_text: String,
}

impl PrintLine {
    /// `₱500 | Qty: 3 | ₱1,500.00`
    pub fn text(&self) -> String {
        format!("{} | Qty: {} | {}", self.label, self.quantity, self.amount_text)
    }
}

/// Print-ready snapshot of one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintView {
    pub shift: Shift,
    pub generated_at: NaiveDateTime,
    pub lines: Vec<PrintLine>,
    pub shift_total: String,
    pub grand_total: String,
}

impl PrintView {
    /// Builds the view for `shift`; the grand total still spans every shift.
    pub fn build(tally: &Tally, shift: Shift, generated_at: NaiveDateTime, symbol: &str) -> Self {
        let lines = tally
            .shift(shift)
            .nonzero_lines()
            .map(|line| PrintLine {
                denomination: line.denomination,
                label: line.denomination.label(symbol),
                quantity: line.quantity,
                amount: line.amount,
                amount_text: line.amount.format(symbol),
            })
            .collect();

        PrintView {
            shift,
            generated_at,
            lines,
            shift_total: tally.shift_total(shift).format(symbol),
            grand_total: tally.grand_total().format(symbol),
        }
    }

    /// Document title, e.g. "Cash Count - 1st Shift".
    pub fn title(&self) -> String {
        format!("Cash Count - {} Shift", self.shift.label())
    }

    fn generated_line(&self) -> String {
        format!(
            "Generated on: {}",
            self.generated_at.format("%d/%m/%Y, %H:%M:%S")
        )
    }

    fn shift_total_line(&self) -> String {
        format!("{} Shift Total: {}", self.shift.label(), self.shift_total)
    }

    fn grand_total_line(&self) -> String {
        format!("Total Cash Denomination: {}", self.grand_total)
    }

    /// Plain text for line printers.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Cash Count Report\n");
        out.push_str(&format!("{} Shift\n", self.shift.label()));
        out.push_str(&self.generated_line());
        out.push_str("\n\n");

        for line in &self.lines {
            out.push_str(&line.text());
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&self.shift_total_line());
        out.push('\n');
        out.push_str(&self.grand_total_line());
        out.push('\n');
        out
    }

    /// Minimal styled HTML document.
    pub fn to_html(&self) -> String {
        let mut rows = String::new();
        for line in &self.lines {
            rows.push_str(&format!(
                "    <div class=\"row\">{}</div>\n",
                escape_html(&line.text())
            ));
        }

        format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html>\n",
                "<head>\n",
                "  <meta charset=\"utf-8\">\n",
                "  <title>{title}</title>\n",
                "  <style>\n",
                "    body {{ font-family: Arial, sans-serif; padding: 20px; }}\n",
                "    .header {{ text-align: center; margin-bottom: 20px; }}\n",
                "    .row {{ padding: 4px 0; border-bottom: 1px solid #ddd; }}\n",
                "    .total {{ margin-top: 16px; font-weight: bold; }}\n",
                "  </style>\n",
                "</head>\n",
                "<body>\n",
                "  <div class=\"header\">\n",
                "    <h2>Cash Count Report</h2>\n",
                "    <h3>{shift} Shift</h3>\n",
                "    <p>{generated}</p>\n",
                "  </div>\n",
                "  <div class=\"rows\">\n",
                "{rows}",
                "  </div>\n",
                "  <div class=\"total\">{shift_total}</div>\n",
                "  <div class=\"total\">{grand_total}</div>\n",
                "</body>\n",
                "</html>\n"
            ),
            title = escape_html(&self.title()),
            shift = self.shift.label(),
            generated = escape_html(&self.generated_line()),
            rows = rows,
            shift_total = escape_html(&self.shift_total_line()),
            grand_total = escape_html(&self.grand_total_line()),
        )
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn sample_tally() -> Tally {
        let mut tally = Tally::new();
        tally.set_quantity(Shift::First, Denomination::Thousand, 2);
        tally.set_quantity(Shift::First, Denomination::Hundred, 3);
        tally.set_quantity(Shift::Second, Denomination::FiveHundred, 1);
        tally
    }

    #[test]
    fn test_lists_only_nonzero_rows() {
        let view = PrintView::build(&sample_tally(), Shift::First, at(), "₱");

        let texts: Vec<String> = view.lines.iter().map(PrintLine::text).collect();
        assert_eq!(
            texts,
            vec!["₱1k | Qty: 2 | ₱2,000.00", "₱100 | Qty: 3 | ₱300.00"]
        );
        assert_eq!(view.shift_total, "₱2,300.00");
        assert_eq!(view.grand_total, "₱2,800.00");
    }

    #[test]
    fn test_plain_text_layout() {
        let view = PrintView::build(&sample_tally(), Shift::Second, at(), "₱");
        let text = view.to_text();

        assert!(text.starts_with("Cash Count Report\n2nd Shift\n"));
        assert!(text.contains("Generated on: 05/03/2024, 14:30:00"));
        assert!(text.contains("₱500 | Qty: 1 | ₱500.00"));
        assert!(!text.contains("₱1k"));
        assert!(text.contains("2nd Shift Total: ₱500.00"));
        assert!(text.ends_with("Total Cash Denomination: ₱2,800.00\n"));
    }

    #[test]
    fn test_empty_shift_still_shows_totals() {
        let view = PrintView::build(&sample_tally(), Shift::Third, at(), "₱");

        assert!(view.lines.is_empty());
        assert_eq!(view.shift_total, "₱0.00");
        assert_eq!(view.grand_total, "₱2,800.00");
    }

    #[test]
    fn test_html_document() {
        let view = PrintView::build(&sample_tally(), Shift::First, at(), "₱");
        let html = view.to_html();

        assert!(html.contains("<title>Cash Count - 1st Shift</title>"));
        assert!(html.contains("<h3>1st Shift</h3>"));
        assert_eq!(html.matches("class=\"row\"").count(), 2);
        assert!(html.contains("1st Shift Total: ₱2,300.00"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
    }
}
