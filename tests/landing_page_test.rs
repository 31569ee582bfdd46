//! Integration tests for the scrolling landing page model.
//!
//! Scroll physics is process-wide, so every test here shares one installed
//! guard. Uses seeded ChaCha8Rng for deterministic behavior.

use labelx::landing::layout::{ABOUT_STATS_TOP, HERO_HEIGHT};
use labelx::landing::{LandingContent, LandingPage, SectionKind};
use labelx::motion::{CounterPhase, ScrollConfig, ScrollPhysics};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::OnceLock;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);
const WIDTH: u16 = 120;
const PAGE_ROWS: u16 = 27;

fn physics() -> &'static ScrollPhysics {
    static PHYSICS: OnceLock<ScrollPhysics> = OnceLock::new();
    PHYSICS.get_or_init(|| ScrollPhysics::install(ScrollConfig::default()).unwrap())
}

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn new_page(rows: u16) -> LandingPage {
    let mut page = LandingPage::new(
        LandingContent::labelx(),
        physics().smooth_scroll(),
        Duration::from_millis(2500),
    )
    .unwrap();
    page.resize(WIDTH, rows);
    page
}

/// Steps the page frame by frame for `total`.
fn run_for(page: &mut LandingPage, rng: &mut ChaCha8Rng, total: Duration) {
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        page.advance(FRAME, rng);
        elapsed += FRAME;
    }
}

fn started(page: &LandingPage, section: SectionKind) -> Vec<bool> {
    page.counters(section)
        .map(|c| c.counter.has_animated())
        .collect()
}

#[test]
fn test_counters_below_the_fold_wait() {
    let mut page = new_page(PAGE_ROWS);
    let mut rng = test_rng();
    run_for(&mut page, &mut rng, Duration::from_secs(3));

    assert_eq!(started(&page, SectionKind::About), vec![false; 3]);
    assert_eq!(started(&page, SectionKind::HowItWorks), vec![false; 3]);
    let texts: Vec<String> = page
        .counters(SectionKind::About)
        .map(|c| c.counter.text())
        .collect();
    assert_eq!(texts, vec!["0+", "0K+", "$0M"]);
}

#[test]
fn test_scrolling_into_view_starts_only_that_section() {
    let mut page = new_page(PAGE_ROWS);
    let mut rng = test_rng();
    page.scroll_to_section(SectionKind::About);
    run_for(&mut page, &mut rng, Duration::from_millis(1300));

    assert_eq!(page.viewport().offset, HERO_HEIGHT);
    assert_eq!(started(&page, SectionKind::About), vec![true; 3]);
    assert_eq!(started(&page, SectionKind::HowItWorks), vec![false; 3]);

    run_for(&mut page, &mut rng, Duration::from_secs(3));
    let texts: Vec<String> = page
        .counters(SectionKind::About)
        .map(|c| c.counter.text())
        .collect();
    assert_eq!(texts, vec!["2,400,000+", "12.5K+", "$1.2M"]);
}

#[test]
fn test_counters_on_screen_at_load_start_immediately() {
    let rows = HERO_HEIGHT + ABOUT_STATS_TOP + 4;
    let mut page = new_page(rows);
    let mut rng = test_rng();
    page.advance(FRAME, &mut rng);
    assert_eq!(started(&page, SectionKind::About), vec![true; 3]);
}

#[test]
fn test_triggering_frame_does_not_count_toward_the_animation() {
    let rows = HERO_HEIGHT + ABOUT_STATS_TOP + 4;
    let mut page = new_page(rows);
    let mut rng = test_rng();

    page.advance(FRAME, &mut rng);
    for placed in page.counters(SectionKind::About) {
        assert_eq!(
            placed.counter.phase(),
            CounterPhase::Running {
                elapsed: Duration::ZERO
            }
        );
        assert_eq!(placed.counter.value(), placed.spec.from);
    }

    page.advance(FRAME, &mut rng);
    for placed in page.counters(SectionKind::About) {
        assert_eq!(
            placed.counter.phase(),
            CounterPhase::Running { elapsed: FRAME }
        );
    }
}

#[test]
fn test_sections_skipped_in_one_frame_stay_idle() {
    let mut page = new_page(PAGE_ROWS);
    let mut rng = test_rng();
    page.scroll_to_bottom();
    // One long frame finishes the glide without rendering anything between.
    page.advance(Duration::from_secs(2), &mut rng);

    assert_eq!(page.viewport().offset, page.layout().max_offset(PAGE_ROWS));
    assert_eq!(started(&page, SectionKind::About), vec![false; 3]);
    assert_eq!(started(&page, SectionKind::HowItWorks), vec![false; 3]);
}

#[test]
fn test_returning_to_a_section_does_not_replay() {
    let mut page = new_page(PAGE_ROWS);
    let mut rng = test_rng();
    page.scroll_to_section(SectionKind::About);
    run_for(&mut page, &mut rng, Duration::from_secs(4));

    page.scroll_to_top();
    run_for(&mut page, &mut rng, Duration::from_secs(2));
    page.scroll_to_section(SectionKind::About);
    run_for(&mut page, &mut rng, Duration::from_millis(100));

    for placed in page.counters(SectionKind::About) {
        assert!(placed.counter.is_finished());
        assert_eq!(placed.counter.value(), placed.spec.to);
    }
}

#[test]
fn test_line_scrolling_is_clamped() {
    let mut page = new_page(PAGE_ROWS);
    let mut rng = test_rng();
    page.scroll_lines(-5);
    run_for(&mut page, &mut rng, Duration::from_millis(1300));
    assert_eq!(page.viewport().offset, 0);

    for _ in 0..200 {
        page.scroll_lines(1);
    }
    run_for(&mut page, &mut rng, Duration::from_millis(1300));
    assert_eq!(page.viewport().offset, page.layout().max_offset(PAGE_ROWS));
}

#[test]
fn test_resize_relayouts_and_clamps_scroll() {
    let mut page = new_page(PAGE_ROWS);
    let mut rng = test_rng();
    page.scroll_to_bottom();
    run_for(&mut page, &mut rng, Duration::from_millis(1300));
    let wide_total = page.layout().total_height;

    page.resize(50, PAGE_ROWS);
    assert_eq!(page.layout().columns, 1);
    assert!(page.layout().total_height > wide_total);

    page.resize(WIDTH, 100);
    assert_eq!(page.layout().total_height, wide_total);
    assert!(page.viewport().offset <= page.layout().max_offset(100));
}

#[test]
fn test_live_panels_tick_with_the_page() {
    let mut page = new_page(PAGE_ROWS);
    let mut rng = test_rng();
    page.advance(Duration::from_millis(2500), &mut rng);
    assert_eq!(page.hero_network().tick_count(), 1);
    assert_eq!(page.agent_ticker().tick_count(), 1);
    assert!(page.hero_network().active_node().is_some());
    assert_eq!(page.elapsed(), Duration::from_millis(2500));
}
