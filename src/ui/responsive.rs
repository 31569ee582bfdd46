//! Terminal size classification.
//!
//! A `LayoutContext` is built once per frame and handed to the scenes so
//! every part of the page agrees on how much room there is.

use crate::landing::Palette;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeTier {
    TooSmall,
    Compact, // 40x16+
    Regular, // 70x24+
    Wide,    // 110x32+
}

const WIDE_MIN_COLS: u16 = 110;
const WIDE_MIN_ROWS: u16 = 32;
const REGULAR_MIN_COLS: u16 = 70;
const REGULAR_MIN_ROWS: u16 = 24;
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 16;

#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width_tier: SizeTier,
    pub height_tier: SizeTier,
    /// The smaller of the two tiers.
    pub tier: SizeTier,
    pub cols: u16,
    pub rows: u16,
}

impl LayoutContext {
    pub fn from_frame(frame: &Frame) -> Self {
        let size = frame.size();
        Self::from_size(size.width, size.height)
    }

    pub fn from_size(cols: u16, rows: u16) -> Self {
        let width_tier = classify(cols, WIDE_MIN_COLS, REGULAR_MIN_COLS, MIN_COLS);
        let height_tier = classify(rows, WIDE_MIN_ROWS, REGULAR_MIN_ROWS, MIN_ROWS);
        LayoutContext {
            width_tier,
            height_tier,
            tier: width_tier.min(height_tier),
            cols,
            rows,
        }
    }

    /// Navbar links and secondary buttons only fit from `Regular` width up.
    pub fn show_secondary(&self) -> bool {
        self.width_tier >= SizeTier::Regular
    }
}

fn classify(val: u16, wide: u16, regular: u16, compact: u16) -> SizeTier {
    if val >= wide {
        SizeTier::Wide
    } else if val >= regular {
        SizeTier::Regular
    } else if val >= compact {
        SizeTier::Compact
    } else {
        SizeTier::TooSmall
    }
}

pub fn render_too_small(frame: &mut Frame, ctx: &LayoutContext, palette: &Palette) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                MIN_COLS, MIN_ROWS, ctx.cols, ctx.rows
            ),
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal.",
            Style::default().fg(palette.text),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_classification() {
        let ctx = LayoutContext::from_size(120, 40);
        assert_eq!(ctx.tier, SizeTier::Wide);
        assert!(ctx.show_secondary());
    }

    #[test]
    fn test_tier_is_min_of_axes() {
        let ctx = LayoutContext::from_size(120, 20);
        assert_eq!(ctx.width_tier, SizeTier::Wide);
        assert_eq!(ctx.height_tier, SizeTier::Compact);
        assert_eq!(ctx.tier, SizeTier::Compact);
        assert!(ctx.show_secondary());
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(LayoutContext::from_size(109, 31).tier, SizeTier::Regular);
        assert_eq!(LayoutContext::from_size(69, 23).tier, SizeTier::Compact);
        assert_eq!(LayoutContext::from_size(39, 40).tier, SizeTier::TooSmall);
        assert_eq!(LayoutContext::from_size(80, 15).tier, SizeTier::TooSmall);
        assert!(!LayoutContext::from_size(60, 30).show_secondary());
    }

    #[test]
    fn test_zero_dimensions() {
        assert_eq!(LayoutContext::from_size(0, 0).tier, SizeTier::TooSmall);
    }
}
