//! Vertical page layout: where each section starts and how tall it is.
//!
//! Heights depend only on the content and the terminal width (which decides
//! how many cards fit per row), so the layout is recomputed on resize and
//! nowhere else.

use super::content::LandingContent;
use super::viewport::Viewport;

pub const HERO_HEIGHT: u16 = 27;
pub const ABOUT_HEIGHT: u16 = 20;
pub const ABOUT_STATS_TOP: u16 = 14;
pub const SECTION_HEADER_HEIGHT: u16 = 3;
pub const CARD_HEIGHT: u16 = 6;
pub const STATS_STRIP_HEIGHT: u16 = 5;
pub const TICKER_HEIGHT: u16 = 3;
pub const CTA_HEIGHT: u16 = 12;
pub const FOOTER_HEIGHT: u16 = 8;
pub const NAVBAR_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    About,
    Agents,
    HowItWorks,
    Testimonials,
    Cta,
    Footer,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Agents,
        SectionKind::HowItWorks,
        SectionKind::Testimonials,
        SectionKind::Cta,
        SectionKind::Footer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Agents => "agents",
            SectionKind::HowItWorks => "how-it-works",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Cta => "cta",
            SectionKind::Footer => "footer",
        }
    }
}

/// Cards per row for a given terminal width.
pub fn grid_columns(width: u16) -> u16 {
    if width >= 110 {
        3
    } else if width >= 70 {
        2
    } else {
        1
    }
}

fn grid_rows(items: usize, columns: u16) -> u16 {
    let columns = columns.max(1) as usize;
    items.div_ceil(columns) as u16
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSlot {
    pub kind: SectionKind,
    /// First page row of the section.
    pub top: u16,
    pub height: u16,
    /// Row of the stats strip relative to `top`, for sections with counters.
    pub stats_top: Option<u16>,
}

impl SectionSlot {
    /// Absolute page row on which this section's counter values render.
    pub fn counter_row(&self) -> Option<u16> {
        self.stats_top.map(|s| self.top + s + 1)
    }

    pub fn bottom(&self) -> u16 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    pub columns: u16,
    pub slots: Vec<SectionSlot>,
    pub total_height: u16,
}

impl PageLayout {
    pub fn new(content: &LandingContent, width: u16) -> Self {
        let columns = grid_columns(width);
        let mut slots = Vec::with_capacity(SectionKind::ALL.len());
        let mut top = 0u16;

        for kind in SectionKind::ALL {
            let (height, stats_top) = match kind {
                SectionKind::Hero => (HERO_HEIGHT, None),
                SectionKind::About => (ABOUT_HEIGHT, Some(ABOUT_STATS_TOP)),
                SectionKind::Agents => {
                    let cards = grid_rows(content.agents.agents.len(), columns) * CARD_HEIGHT;
                    (SECTION_HEADER_HEIGHT + 1 + cards + 1 + TICKER_HEIGHT + 1, None)
                }
                SectionKind::HowItWorks => {
                    let steps = grid_rows(content.how_it_works.steps.len(), columns) * CARD_HEIGHT;
                    let stats_top = SECTION_HEADER_HEIGHT + steps + 1;
                    (stats_top + STATS_STRIP_HEIGHT + 1, Some(stats_top))
                }
                SectionKind::Testimonials => {
                    let cards = grid_rows(content.testimonials.reviews.len(), columns) * CARD_HEIGHT;
                    (SECTION_HEADER_HEIGHT + cards + 1, None)
                }
                SectionKind::Cta => (CTA_HEIGHT, None),
                SectionKind::Footer => (FOOTER_HEIGHT, None),
            };
            slots.push(SectionSlot {
                kind,
                top,
                height,
                stats_top,
            });
            top = top.saturating_add(height);
        }

        Self {
            width,
            columns,
            slots,
            total_height: top,
        }
    }

    pub fn slot(&self, kind: SectionKind) -> Option<&SectionSlot> {
        self.slots.iter().find(|s| s.kind == kind)
    }

    /// Sections with at least one row inside `viewport`.
    pub fn visible_slots<'a>(
        &'a self,
        viewport: &'a Viewport,
    ) -> impl Iterator<Item = &'a SectionSlot> + 'a {
        self.slots
            .iter()
            .filter(move |s| viewport.intersects(s.top, s.height))
    }

    /// Largest scroll offset that still fills a viewport of `height` rows.
    pub fn max_offset(&self, height: u16) -> u16 {
        self.total_height.saturating_sub(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_stack_without_gaps() {
        let layout = PageLayout::new(&LandingContent::labelx(), 120);
        let mut expected_top = 0;
        for slot in &layout.slots {
            assert_eq!(slot.top, expected_top, "{} misplaced", slot.kind.name());
            expected_top = slot.bottom();
        }
        assert_eq!(layout.total_height, expected_top);
    }

    #[test]
    fn test_narrow_layout_is_taller() {
        let content = LandingContent::labelx();
        let wide = PageLayout::new(&content, 120);
        let narrow = PageLayout::new(&content, 50);
        assert_eq!(wide.columns, 3);
        assert_eq!(narrow.columns, 1);
        assert!(narrow.total_height > wide.total_height);
    }

    #[test]
    fn test_counter_rows() {
        let layout = PageLayout::new(&LandingContent::labelx(), 120);
        let about = layout.slot(SectionKind::About).unwrap();
        assert_eq!(about.counter_row(), Some(HERO_HEIGHT + ABOUT_STATS_TOP + 1));
        assert!(layout.slot(SectionKind::Hero).unwrap().counter_row().is_none());
        let how = layout.slot(SectionKind::HowItWorks).unwrap();
        assert!(how.counter_row().unwrap() < how.bottom());
    }

    #[test]
    fn test_visible_slots_at_top_of_page() {
        let layout = PageLayout::new(&LandingContent::labelx(), 120);
        let vp = Viewport::new(0, 30);
        let kinds: Vec<_> = layout.visible_slots(&vp).map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SectionKind::Hero, SectionKind::About]);
    }

    #[test]
    fn test_grid_columns_thresholds() {
        assert_eq!(grid_columns(40), 1);
        assert_eq!(grid_columns(70), 2);
        assert_eq!(grid_columns(110), 3);
    }
}
