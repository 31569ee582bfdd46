//! The scrollable landing page model.
//!
//! Owns every animated piece on the page and wires them to the viewport:
//! each frame the smooth scroll settles, the viewport is recomputed, every
//! counter is told whether its row is on screen, and the simulators tick.

use super::content::{CounterSpec, LandingContent};
use super::layout::{PageLayout, SectionKind, SectionSlot};
use super::viewport::Viewport;
use crate::core::VIEWPORT_MARGIN_ROWS;
use crate::motion::{AnimatedCounter, LiveMetricSimulator, SimulatorError, SmoothScroll};
use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PlacedCounter {
    pub section: SectionKind,
    pub spec: CounterSpec,
    pub counter: AnimatedCounter,
}

#[derive(Debug)]
pub struct LandingPage {
    content: LandingContent,
    layout: PageLayout,
    viewport_height: u16,
    scroll: SmoothScroll,
    counters: Vec<PlacedCounter>,
    hero_network: LiveMetricSimulator,
    agent_ticker: LiveMetricSimulator,
    elapsed: Duration,
}

fn place_counters(
    section: SectionKind,
    specs: &[CounterSpec],
    default_duration: Duration,
) -> impl Iterator<Item = PlacedCounter> + '_ {
    specs.iter().map(move |spec| PlacedCounter {
        section,
        spec: spec.clone(),
        counter: AnimatedCounter::new(spec.from, spec.to, spec.suffix.clone())
            .with_prefix(spec.prefix.clone())
            .with_duration(spec.duration.unwrap_or(default_duration)),
    })
}

impl LandingPage {
    /// Builds the page. Nothing is visible until the first [`resize`](Self::resize).
    pub fn new(
        content: LandingContent,
        scroll: SmoothScroll,
        counter_duration: Duration,
    ) -> Result<Self, SimulatorError> {
        let hero_network = LiveMetricSimulator::new(content.hero.network.clone())?;
        let agent_ticker = LiveMetricSimulator::new(content.agents.ticker.clone())?;

        let counters = place_counters(SectionKind::About, &content.about.stats, counter_duration)
            .chain(place_counters(
                SectionKind::HowItWorks,
                &content.how_it_works.stats,
                counter_duration,
            ))
            .collect();

        let layout = PageLayout::new(&content, 0);

        Ok(Self {
            content,
            layout,
            viewport_height: 0,
            scroll,
            counters,
            hero_network,
            agent_ticker,
            elapsed: Duration::ZERO,
        })
    }

    /// Recomputes the layout for a new terminal size. `height` is the number
    /// of rows available to the scrolling page.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width != self.layout.width {
            self.layout = PageLayout::new(&self.content, width);
            tracing::debug!(
                width,
                columns = self.layout.columns,
                total_height = self.layout.total_height,
                "landing layout recomputed"
            );
        }
        self.viewport_height = height;
        self.scroll
            .set_max_offset(self.layout.max_offset(height) as f64);
    }

    /// One frame: settle scrolling, trigger counters that came into view,
    /// then step every animation.
    pub fn advance<R: Rng>(&mut self, dt: Duration, rng: &mut R) {
        self.elapsed += dt;
        self.scroll.advance(dt);
        for placed in &mut self.counters {
            placed.counter.advance(dt);
        }
        // Counters triggered by this frame's scroll position start from zero
        // elapsed on the next frame.
        self.observe_counters();
        self.hero_network.advance(dt, rng);
        self.agent_ticker.advance(dt, rng);
    }

    fn observe_counters(&mut self) {
        let trigger = self.viewport().with_margin(VIEWPORT_MARGIN_ROWS);
        for placed in &mut self.counters {
            let row = self
                .layout
                .slot(placed.section)
                .and_then(SectionSlot::counter_row);
            let visible = row.is_some_and(|row| trigger.intersects(row, 1));
            if placed.counter.observe(visible) {
                tracing::debug!(
                    section = placed.section.name(),
                    label = %placed.spec.label,
                    "counter started"
                );
            }
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll.offset(), self.viewport_height)
    }

    pub fn scroll_lines(&mut self, lines: i32) {
        self.scroll.scroll_lines(lines);
    }

    pub fn page_down(&mut self) {
        self.scroll
            .scroll_by(self.viewport_height.saturating_sub(2) as f64);
    }

    pub fn page_up(&mut self) {
        self.scroll
            .scroll_by(-(self.viewport_height.saturating_sub(2) as f64));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.scroll_to(0.0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.scroll_to(self.scroll.max_offset());
    }

    /// Scrolls so `kind` starts at the top of the viewport.
    pub fn scroll_to_section(&mut self, kind: SectionKind) {
        if let Some(slot) = self.layout.slot(kind) {
            self.scroll.scroll_to(slot.top as f64);
        }
    }

    pub fn counters(&self, section: SectionKind) -> impl Iterator<Item = &PlacedCounter> + '_ {
        self.counters.iter().filter(move |c| c.section == section)
    }

    pub fn all_counters(&self) -> &[PlacedCounter] {
        &self.counters
    }

    pub fn content(&self) -> &LandingContent {
        &self.content
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn scroll(&self) -> &SmoothScroll {
        &self.scroll
    }

    pub fn hero_network(&self) -> &LiveMetricSimulator {
        &self.hero_network
    }

    pub fn agent_ticker(&self) -> &LiveMetricSimulator {
        &self.agent_ticker
    }

    /// Time since the page was mounted; drives decorative spinners.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
