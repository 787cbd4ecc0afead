//! # Painter
//!
//! Executes a [`BreakdownReport`]'s drawing operations on a printpdf page.
//!
//! ## Coordinate Flip
//! ```text
//!   description (mm)              PDF user space (mm)
//!   (0,0) ┌──────────► x          y ▲
//!         │                          │
//!         │                          │
//!       y ▼                    (0,0) └──────────► x
//!
//!   pdf_y = page_height - y
//! ```

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
};
use tracing::debug;

use tally_core::report::{Align, DrawOp, Weight};
use tally_core::{BreakdownReport, DEFAULT_CURRENCY_SYMBOL};

use crate::error::{PdfError, PdfResult};

/// Millimetres per PostScript point.
const MM_PER_PT: f32 = 25.4 / 72.0;

/// Stroke width for table rules, in points.
const RULE_THICKNESS: f32 = 0.3;

/// Paint options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintOptions {
    /// Document title stored in the PDF metadata.
    pub title: String,

    /// Text substituted for the currency symbol, which the builtin fonts
    /// cannot encode.
    pub currency_prefix: String,
}

impl Default for PaintOptions {
    fn default() -> Self {
        PaintOptions {
            title: "Cash Breakdown".to_string(),
            currency_prefix: "PHP ".to_string(),
        }
    }
}

struct Fonts {
    normal: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, weight: Weight) -> &IndirectFontRef {
        match weight {
            Weight::Normal => &self.normal,
            Weight::Bold => &self.bold,
        }
    }
}

/// Renders the report into a single-page A4 landscape PDF.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use tally_core::{BreakdownReport, ReportOptions, Tally};
/// use tally_pdf::{render, PaintOptions};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let report = BreakdownReport::build(&Tally::new(), date, &ReportOptions::default());
///
/// let bytes = render(&report, &PaintOptions::default()).unwrap();
/// assert!(bytes.starts_with(b"%PDF"));
/// ```
pub fn render(report: &BreakdownReport, options: &PaintOptions) -> PdfResult<Vec<u8>> {
    let (width, height) = report.page_size();
    let (doc, page, layer) = PdfDocument::new(&options.title, Mm(width), Mm(height), "Layer 1");

    let fonts = Fonts {
        normal: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| PdfError::Font {
                font: "Helvetica",
                reason: e.to_string(),
            })?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| PdfError::Font {
                font: "Helvetica-Bold",
                reason: e.to_string(),
            })?,
    };

    let layer = doc.get_page(page).get_layer(layer);
    layer.set_outline_thickness(RULE_THICKNESS);

    let ops = report.draw_ops();
    debug!(ops = ops.len(), tables = report.tables.len(), "Painting breakdown");

    for op in &ops {
        paint(&layer, &fonts, op, height, &options.currency_prefix);
    }

    let bytes = doc.save_to_bytes()?;
    debug!(bytes = bytes.len(), "Breakdown document written");
    Ok(bytes)
}

fn paint(layer: &PdfLayerReference, fonts: &Fonts, op: &DrawOp, page_height: f32, prefix: &str) {
    match op {
        DrawOp::Text {
            x,
            y,
            text,
            size,
            weight,
            align,
        } => {
            let text = encodable_text(text, prefix);
            let left = match align {
                Align::Left => *x,
                Align::Center => *x - text_width(&text, *size, *weight) / 2.0,
            };
            layer.use_text(text, *size, Mm(left), Mm(page_height - y), fonts.get(*weight));
        }
        DrawOp::Line { x1, y1, x2, y2 } => {
            layer.add_line(polyline(
                &[(*x1, *y1), (*x2, *y2)],
                page_height,
                false,
            ));
        }
        DrawOp::Rect {
            x,
            y,
            width,
            height,
        } => {
            layer.add_line(polyline(
                &[
                    (*x, *y),
                    (x + width, *y),
                    (x + width, y + height),
                    (*x, y + height),
                ],
                page_height,
                true,
            ));
        }
    }
}

fn polyline(points: &[(f32, f32)], page_height: f32, is_closed: bool) -> Line {
    Line {
        points: points
            .iter()
            .map(|&(x, y)| (Point::new(Mm(x), Mm(page_height - y)), false))
            .collect(),
        is_closed,
    }
}

/// Replaces characters the builtin fonts cannot encode.
///
/// The currency symbol becomes `prefix`; anything else outside printable
/// ASCII becomes `?`.
pub fn encodable_text(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(DEFAULT_CURRENCY_SYMBOL) {
        push_ascii(&mut out, &rest[..pos]);
        out.push_str(prefix);
        rest = &rest[pos + DEFAULT_CURRENCY_SYMBOL.len()..];
    }
    push_ascii(&mut out, rest);
    out
}

fn push_ascii(out: &mut String, text: &str) {
    out.extend(
        text.chars()
            .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' }),
    );
}

/// Approximate rendered width in millimetres.
///
/// Uses Helvetica advance widths for the glyph classes that occur in the
/// report (digits, capitals, punctuation); bold runs about 5% wider.
pub fn text_width(text: &str, size: f32, weight: Weight) -> f32 {
    let em: f32 = text.chars().map(advance).sum();
    let scale = match weight {
        Weight::Normal => 1.0,
        Weight::Bold => 1.05,
    };
    em * scale * size * MM_PER_PT
}

/// Advance width in em units.
fn advance(c: char) -> f32 {
    match c {
        ' ' | ',' | '.' | ':' | '/' => 0.278,
        '0'..='9' => 0.556,
        '=' => 0.584,
        'I' => 0.278,
        'M' | 'W' => 0.833,
        'A'..='Z' => 0.667,
        'a'..='z' => 0.5,
        _ => 0.556,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
