//! # Report Module
//!
//! Fixed-geometry cash breakdown layout.
//!
//! The layout is described, not painted: [`BreakdownReport::draw_ops`]
//! returns an ordered list of [`DrawOp`]s in millimetres with the origin at
//! the top-left corner of an A4 landscape page. The `tally-pdf` crate turns
//! that list into a document.
//!
//! ## Page Layout
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                          CASH BREAKDOWN                 y = 20       │
//! │                        DATE: 05/03/2024                 y = 30       │
//! │                                                                      │
//! │        1ST SHIFT(ANA)                     2ND SHIFT                  │
//! │   x=20 ┌────┬───┬─────┬───┬──────┐  x=158.5 ┌────┬───┬─────┬───┬───┐ │
//! │   y=42 │1000│ X │  2  │ = │ 2000 │          │1000│ X │     │ = │   │ │
//! │        │ 500│ X │     │ = │      │          │ 500│ X │  1  │ = │500│ │
//! │        │ ...                     │          │ ...                  │ │
//! │        ├────┴───┴─────┴───┴──────┤          ├──────────────────────┤ │
//! │        │TOTAL        ₱2,300.00   │          │TOTAL       ₱500.00   │ │
//! │        └─────────────────────────┘          └──────────────────────┘ │
//! │        3RD SHIFT                   TOTAL CASH DENOMINATION           │
//! │   y=127 (skipped when empty)        (always drawn)                   │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Slots are fixed per shift: an empty shift leaves its slot blank rather
//! than shifting the other tables around.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::count::{AggregateCount, ShiftCount, Tally};
use crate::money::Money;
use crate::types::{Denomination, Shift};
use crate::DEFAULT_CURRENCY_SYMBOL;

// =============================================================================
// Geometry
// =============================================================================

/// A4 landscape width in millimetres.
pub const PAGE_WIDTH_MM: f32 = 297.0;
/// A4 landscape height in millimetres.
pub const PAGE_HEIGHT_MM: f32 = 210.0;

const TITLE_Y: f32 = 20.0;
const DATE_Y: f32 = 30.0;
const TITLE_SIZE: f32 = 16.0;
const DATE_SIZE: f32 = 12.0;

const TABLE_WIDTH: f32 = 85.0;
const CELL_HEIGHT: f32 = 7.0;
const TABLE_ROWS: usize = Denomination::COUNT + 1;
const TABLE_HEIGHT: f32 = CELL_HEIGHT * TABLE_ROWS as f32;
const HEADING_GAP: f32 = 3.0;
const HEADING_SIZE: f32 = 10.0;
const CELL_SIZE: f32 = 9.0;
const BASELINE_INSET: f32 = 2.0;

const LEFT_X: f32 = 20.0;
const RIGHT_X: f32 = PAGE_WIDTH_MM / 2.0 + 10.0;
const TOP_Y: f32 = 42.0;
const BOTTOM_Y: f32 = TOP_Y + TABLE_HEIGHT + 15.0;

/// Column separator offsets from the table's left edge.
const COLUMN_RULES: [f32; 4] = [20.0, 30.0, 45.0, 55.0];

const DENOMINATION_CENTER: f32 = 10.0;
const TIMES_CENTER: f32 = 25.0;
const QUANTITY_CENTER: f32 = 37.5;
const EQUALS_CENTER: f32 = 50.0;
const AMOUNT_CENTER: f32 = 70.0;
const TOTAL_LABEL_X: f32 = 10.0;

const TITLE: &str = "CASH BREAKDOWN";
const AGGREGATE_HEADING: &str = "TOTAL CASH DENOMINATION";

// =============================================================================
// Drawing Operations
// =============================================================================

/// Horizontal anchor of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// `x` is the left edge of the text.
    Left,
    /// `x` is the horizontal center of the text.
    Center,
}

/// Font weight of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Normal,
    Bold,
}

/// One painting instruction. Coordinates are millimetres from the top-left
/// corner; `y` of a text run is its baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        text: String,
        size: f32,
        weight: Weight,
        align: Align,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl DrawOp {
    fn text(x: f32, y: f32, text: impl Into<String>, size: f32, weight: Weight, align: Align) -> Self {
        DrawOp::Text {
            x,
            y,
            text: text.into(),
            size,
            weight,
            align,
        }
    }

    fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        DrawOp::Line { x1, y1, x2, y2 }
    }
}

// =============================================================================
// Options
// =============================================================================

/// Presentation options for a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOptions {
    /// Symbol placed in front of formatted totals.
    pub currency_symbol: String,

    /// Optional staff name per shift, shown in the table heading.
    pub staff: [Option<String>; Shift::COUNT],
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            staff: [None, None, None],
        }
    }
}

impl ReportOptions {
    /// Staff name for a shift, ignoring blank entries.
    pub fn staff_for(&self, shift: Shift) -> Option<&str> {
        self.staff[shift.index()]
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

// =============================================================================
// Tables
// =============================================================================

/// Which slot a table occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TableKind {
    Shift(Shift),
    Aggregate,
}

impl TableKind {
    /// Top-left corner of this table's fixed slot.
    pub fn origin(self) -> (f32, f32) {
        match self {
            TableKind::Shift(Shift::First) => (LEFT_X, TOP_Y),
            TableKind::Shift(Shift::Second) => (RIGHT_X, TOP_Y),
            TableKind::Shift(Shift::Third) => (LEFT_X, BOTTOM_Y),
            TableKind::Aggregate => (RIGHT_X, BOTTOM_Y),
        }
    }
}

/// One denomination row of a breakdown table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownRow {
    pub denomination: Denomination,
    /// Summed across shifts in the aggregate table.
    pub quantity: u64,
    pub amount: Money,
}

impl BreakdownRow {
    /// Quantity cell text; blank for zero.
    pub fn quantity_cell(&self) -> Option<String> {
        (self.quantity > 0).then(|| self.quantity.to_string())
    }

    /// Amount cell text in whole units; blank for zero.
    pub fn amount_cell(&self) -> Option<String> {
        (!self.amount.is_zero()).then(|| self.amount.major().to_string())
    }
}

/// A sub-table: heading, nine denomination rows and a total row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownTable {
    pub kind: TableKind,
    pub heading: String,
    pub rows: Vec<BreakdownRow>,
    pub total: Money,
    pub total_text: String,
}

impl BreakdownTable {
    fn for_shift(kind: TableKind, heading: String, count: &ShiftCount, symbol: &str) -> Self {
        let rows = count
            .lines()
            .map(|line| BreakdownRow {
                denomination: line.denomination,
                quantity: line.quantity as u64,
                amount: line.amount,
            })
            .collect();
        Self::from_rows(kind, heading, rows, symbol)
    }

    fn for_aggregate(heading: String, combined: &AggregateCount, symbol: &str) -> Self {
        let rows = Denomination::ALL
            .into_iter()
            .map(|d| BreakdownRow {
                denomination: d,
                quantity: combined.quantity(d),
                amount: combined.amount(d),
            })
            .collect();
        Self::from_rows(TableKind::Aggregate, heading, rows, symbol)
    }

    fn from_rows(kind: TableKind, heading: String, rows: Vec<BreakdownRow>, symbol: &str) -> Self {
        let total = rows.iter().map(|row| row.amount).sum::<Money>();

        BreakdownTable {
            kind,
            heading,
            rows,
            total,
            total_text: total.format(symbol),
        }
    }

    /// Appends this table's drawing operations.
    fn draw(&self, ops: &mut Vec<DrawOp>) {
        let (x, y) = self.kind.origin();
        let rows_bottom = y + TABLE_HEIGHT - CELL_HEIGHT;

        ops.push(DrawOp::text(
            x + TABLE_WIDTH / 2.0,
            y - HEADING_GAP,
            self.heading.clone(),
            HEADING_SIZE,
            Weight::Bold,
            Align::Center,
        ));

        ops.push(DrawOp::Rect {
            x,
            y,
            width: TABLE_WIDTH,
            height: TABLE_HEIGHT,
        });

        for offset in COLUMN_RULES {
            ops.push(DrawOp::line(x + offset, y, x + offset, rows_bottom));
        }

        for (i, row) in self.rows.iter().enumerate() {
            let row_bottom = y + CELL_HEIGHT * (i + 1) as f32;
            let baseline = row_bottom - BASELINE_INSET;

            if i + 1 < self.rows.len() {
                ops.push(DrawOp::line(x, row_bottom, x + TABLE_WIDTH, row_bottom));
            }

            let cell = |center: f32, text: String| {
                DrawOp::text(x + center, baseline, text, CELL_SIZE, Weight::Normal, Align::Center)
            };

            ops.push(cell(DENOMINATION_CENTER, row.denomination.value().to_string()));
            ops.push(cell(TIMES_CENTER, "X".to_string()));
            if let Some(quantity) = row.quantity_cell() {
                ops.push(cell(QUANTITY_CENTER, quantity));
            }
            ops.push(cell(EQUALS_CENTER, "=".to_string()));
            if let Some(amount) = row.amount_cell() {
                ops.push(cell(AMOUNT_CENTER, amount));
            }
        }

        // total row
        let total_baseline = y + TABLE_HEIGHT - BASELINE_INSET;
        ops.push(DrawOp::line(x, rows_bottom, x + TABLE_WIDTH, rows_bottom));
        ops.push(DrawOp::text(
            x + TOTAL_LABEL_X,
            total_baseline,
            "TOTAL",
            CELL_SIZE,
            Weight::Bold,
            Align::Left,
        ));
        ops.push(DrawOp::text(
            x + AMOUNT_CENTER,
            total_baseline,
            self.total_text.clone(),
            CELL_SIZE,
            Weight::Bold,
            Align::Center,
        ));
    }
}

// =============================================================================
// Breakdown Report
// =============================================================================

/// Snapshot of a tally laid out for export.
///
/// ## Invariants
/// - One table per populated shift, in shift order, then the aggregate table
/// - Every table has exactly nine rows in descending denomination order
/// - Building twice from the same tally, date and options yields equal reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownReport {
    pub date: NaiveDate,
    pub tables: Vec<BreakdownTable>,
}

impl BreakdownReport {
    /// Lays out a tally snapshot.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use tally_core::{BreakdownReport, Denomination, ReportOptions, Shift, TableKind, Tally};
    ///
    /// let mut tally = Tally::new();
    /// tally.set_quantity(Shift::Second, Denomination::FiveHundred, 1);
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    /// let report = BreakdownReport::build(&tally, date, &ReportOptions::default());
    ///
    /// assert_eq!(report.tables.len(), 2);
    /// assert_eq!(report.tables[0].kind, TableKind::Shift(Shift::Second));
    /// assert_eq!(report.tables[1].kind, TableKind::Aggregate);
    /// assert_eq!(report.file_name(), "cash-breakdown-2024-03-05.pdf");
    /// ```
    pub fn build(tally: &Tally, date: NaiveDate, options: &ReportOptions) -> Self {
        let symbol = options.currency_symbol.as_str();

        let mut tables: Vec<BreakdownTable> = tally
            .populated_shifts()
            .map(|shift| {
                let heading = match options.staff_for(shift) {
                    Some(staff) => format!("{} SHIFT({})", shift.heading(), staff.to_uppercase()),
                    None => format!("{} SHIFT", shift.heading()),
                };
                BreakdownTable::for_shift(TableKind::Shift(shift), heading, tally.shift(shift), symbol)
            })
            .collect();

        tables.push(BreakdownTable::for_aggregate(
            AGGREGATE_HEADING.to_string(),
            &tally.aggregate(),
            symbol,
        ));

        BreakdownReport { date, tables }
    }

    /// Export file name derived from the report date.
    pub fn file_name(&self) -> String {
        file_name_for(self.date)
    }

    /// Header date line in day/month/year order.
    pub fn date_line(&self) -> String {
        format!("DATE: {}", self.date.format("%d/%m/%Y"))
    }

    /// Table for a slot, if it was laid out.
    pub fn table(&self, kind: TableKind) -> Option<&BreakdownTable> {
        self.tables.iter().find(|t| t.kind == kind)
    }

    /// Page size in millimetres (width, height).
    pub fn page_size(&self) -> (f32, f32) {
        (PAGE_WIDTH_MM, PAGE_HEIGHT_MM)
    }

    /// Every painting instruction for the page, in paint order.
    pub fn draw_ops(&self) -> Vec<DrawOp> {
        let mut ops = Vec::with_capacity(2 + self.tables.len() * 64);

        ops.push(DrawOp::text(
            PAGE_WIDTH_MM / 2.0,
            TITLE_Y,
            TITLE,
            TITLE_SIZE,
            Weight::Bold,
            Align::Center,
        ));
        ops.push(DrawOp::text(
            PAGE_WIDTH_MM / 2.0,
            DATE_Y,
            self.date_line(),
            DATE_SIZE,
            Weight::Bold,
            Align::Center,
        ));

        for table in &self.tables {
            table.draw(&mut ops);
        }

        ops
    }
}

/// `cash-breakdown-<YYYY-MM-DD>.pdf`
pub fn file_name_for(date: NaiveDate) -> String {
    format!("cash-breakdown-{}.pdf", date.format("%Y-%m-%d"))
}

// =============================================================================
// Unit Tests
// =============================================================================
