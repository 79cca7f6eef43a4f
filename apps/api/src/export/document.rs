//! Page layout for the exported resume: title, reflowed body, footer, automatic page breaks.
//!
//! All coordinates are in points. `baseline_pt` is measured from the top edge of the
//! page; the PDF writer flips it into PDF user space.

use serde::Serialize;

use crate::export::font_metrics::{get_metrics, PdfFont};
use crate::export::wrap::wrap_text;

pub const TITLE: &str = "Resume Generated by LinkedIn Profile Analyzer";
pub const FOOTER: &str = "Generated by the Profile Analyzer service";

const PT_PER_MM: f32 = 72.0 / 25.4;

const TITLE_SIZE_PT: f32 = 16.0;
const BODY_SIZE_PT: f32 = 12.0;
const FOOTER_SIZE_PT: f32 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Layout parameters for every page of the exported document.
#[derive(Debug, Clone, Serialize)]
pub struct PageConfig {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_left_pt: f32,
    pub margin_right_pt: f32,
    pub margin_top_pt: f32,
    /// A line that would end closer than this to the bottom edge moves to a new page.
    pub break_margin_pt: f32,
    /// Height of every title, body, and footer line.
    pub line_height_pt: f32,
    /// Inner horizontal padding of a text cell.
    pub cell_padding_pt: f32,
    /// Width of the title cell, anchored at the left margin.
    pub title_width_pt: f32,
}

/// A4 portrait, 10 mm margins, 15 mm bottom break margin, 10 mm lines.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        width_pt: 210.0 * PT_PER_MM,
        height_pt: 297.0 * PT_PER_MM,
        margin_left_pt: 10.0 * PT_PER_MM,
        margin_right_pt: 10.0 * PT_PER_MM,
        margin_top_pt: 10.0 * PT_PER_MM,
        break_margin_pt: 15.0 * PT_PER_MM,
        line_height_pt: 10.0 * PT_PER_MM,
        cell_padding_pt: 1.0 * PT_PER_MM,
        title_width_pt: 200.0 * PT_PER_MM,
    }
}

impl PageConfig {
    pub fn text_width_pt(&self) -> f32 {
        self.width_pt - self.margin_left_pt - self.margin_right_pt
    }

    fn page_break_trigger_pt(&self) -> f32 {
        self.height_pt - self.break_margin_pt
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout output
// ────────────────────────────────────────────────────────────────────────────

/// One line of text placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLine {
    pub font: PdfFont,
    pub size_pt: f32,
    pub x_pt: f32,
    pub baseline_pt: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

/// Cursor over the growing list of pages.
struct Layout<'a> {
    config: &'a PageConfig,
    pages: Vec<Page>,
    y_pt: f32,
}

impl<'a> Layout<'a> {
    fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            pages: vec![Page::default()],
            y_pt: config.margin_top_pt,
        }
    }

    /// Places a single-line cell at the cursor, breaking the page first if it would not fit.
    fn cell(&mut self, font: PdfFont, size_pt: f32, x_pt: f32, width_pt: f32, align: Align, text: &str) {
        let h = self.config.line_height_pt;
        if self.y_pt + h > self.config.page_break_trigger_pt() && self.y_pt > self.config.margin_top_pt {
            self.pages.push(Page::default());
            self.y_pt = self.config.margin_top_pt;
        }

        if !text.is_empty() {
            let pad = self.config.cell_padding_pt;
            let text_w = get_metrics(font).measure_pt(text, size_pt);
            let x = match align {
                Align::Left => x_pt + pad,
                Align::Center => x_pt + (width_pt - text_w) / 2.0,
            };
            // Vertically centered in the cell, offset by the typical cap-height ratio.
            let baseline = self.y_pt + h / 2.0 + 0.3 * size_pt;

            if let Some(page) = self.pages.last_mut() {
                page.lines.push(PlacedLine {
                    font,
                    size_pt,
                    x_pt: x,
                    baseline_pt: baseline,
                    text: text.to_string(),
                });
            }
        }
        self.y_pt += h;
    }

    /// Moves the cursor down without placing anything. Never triggers a page break.
    fn gap(&mut self, h: f32) {
        self.y_pt += h;
    }
}

/// Lays out the title, the reflowed profile text, and the footer.
pub fn layout_document(text: &str, config: &PageConfig) -> Vec<Page> {
    let mut layout = Layout::new(config);
    let left = config.margin_left_pt;
    let text_width = config.text_width_pt();

    layout.cell(
        PdfFont::HelveticaBold,
        TITLE_SIZE_PT,
        left,
        config.title_width_pt,
        Align::Center,
        TITLE,
    );
    layout.gap(config.line_height_pt);

    let body_width = text_width - 2.0 * config.cell_padding_pt;
    let body_metrics = get_metrics(PdfFont::Helvetica);
    for line in wrap_text(text, body_metrics, BODY_SIZE_PT, body_width) {
        layout.cell(PdfFont::Helvetica, BODY_SIZE_PT, left, text_width, Align::Left, &line);
    }

    layout.gap(config.line_height_pt);
    layout.cell(
        PdfFont::HelveticaOblique,
        FOOTER_SIZE_PT,
        left,
        text_width,
        Align::Center,
        FOOTER,
    );

    layout.pages
}
