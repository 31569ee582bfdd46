//! End-to-end tests: loader splash, hand-off to the landing page, key
//! handling and rendering into a test backend.
//!
//! Each test installs scroll physics for the lifetime of its `App`, so the
//! tests in this file run one at a time.

use crossterm::event::KeyCode;
use labelx::app::App;
use labelx::config::AppConfig;
use labelx::landing::SectionKind;
use labelx::motion::ScrollPhysics;
use labelx::ui;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn serial() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn new_app(config: AppConfig) -> App {
    let physics = ScrollPhysics::install(config.scroll_config()).unwrap();
    let mut app = App::new(config, physics).unwrap();
    app.resize(120, 40);
    app
}

fn seeded(show_loader: bool) -> AppConfig {
    AppConfig {
        show_loader,
        seed: Some(7),
        ..AppConfig::default()
    }
}

fn render(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn run_for(app: &mut App, total: Duration) {
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        app.advance(FRAME).unwrap();
        elapsed += FRAME;
    }
}

#[test]
fn test_loader_hands_off_to_landing_page() {
    let _serial = serial();
    let mut app = new_app(seeded(true));
    assert!(app.is_loading());

    let splash = render(&app, 120, 40);
    assert!(splash.contains("INITIALIZING NEURAL NET"));
    assert!(splash.contains("System v"));

    run_for(&mut app, Duration::from_millis(3900));
    assert!(app.is_loading());
    run_for(&mut app, Duration::from_millis(200));
    assert!(!app.is_loading());
    assert!(app.landing().is_some());

    let page = render(&app, 120, 40);
    assert!(page.contains("LabelX"));
    assert!(page.contains("Unlock the Value of"));
}

#[test]
fn test_any_key_skips_the_loader() {
    let _serial = serial();
    let mut app = new_app(seeded(true));
    app.advance(Duration::from_millis(300)).unwrap();
    app.handle_key(KeyCode::Enter).unwrap();
    assert!(!app.is_loading());
    assert!(!app.should_quit());
}

#[test]
fn test_quit_keys() {
    let _serial = serial();
    let mut app = new_app(seeded(true));
    app.handle_key(KeyCode::Char('q')).unwrap();
    assert!(app.should_quit());
    assert!(app.is_loading());

    drop(app);

    let mut app = new_app(seeded(false));
    app.handle_key(KeyCode::Esc).unwrap();
    assert!(app.should_quit());
}

#[test]
fn test_section_jump_reveals_counters() {
    let _serial = serial();
    let mut app = new_app(seeded(false));
    assert!(!app.is_loading());

    app.handle_key(KeyCode::Char('2')).unwrap();
    run_for(&mut app, Duration::from_secs(4));

    let page = app.landing().unwrap();
    let about = page.layout().slot(SectionKind::About).unwrap();
    assert_eq!(page.viewport().offset, about.top);
    assert!(page
        .counters(SectionKind::About)
        .all(|c| c.counter.is_finished()));

    let screen = render(&app, 120, 40);
    assert!(screen.contains("2,400,000+"));
    assert!(screen.contains("12.5K+"));
    assert!(screen.contains("$1.2M"));
}

#[test]
fn test_scroll_keys_move_the_page() {
    let _serial = serial();
    let mut app = new_app(seeded(false));

    app.handle_key(KeyCode::Char('j')).unwrap();
    app.handle_key(KeyCode::PageDown).unwrap();
    run_for(&mut app, Duration::from_millis(1300));
    let after_down = app.landing().unwrap().viewport().offset;
    assert!(after_down > 0);

    app.handle_key(KeyCode::Char('G')).unwrap();
    run_for(&mut app, Duration::from_millis(1300));
    let page = app.landing().unwrap();
    assert_eq!(page.viewport().offset, page.layout().max_offset(37));

    app.handle_key(KeyCode::Char('g')).unwrap();
    run_for(&mut app, Duration::from_millis(1300));
    assert_eq!(app.landing().unwrap().viewport().offset, 0);
}

#[test]
fn test_tiny_terminal_shows_resize_hint() {
    let _serial = serial();
    let app = new_app(seeded(false));
    let screen = render(&app, 30, 10);
    assert!(screen.contains("Terminal too small"));
}

#[test]
fn test_hero_panel_shows_connection_pulses() {
    let _serial = serial();
    let mut app = new_app(seeded(false));
    assert!(!render(&app, 120, 40).contains('⇢'));

    run_for(&mut app, Duration::from_millis(1600));
    let network = app.landing().unwrap().hero_network();
    let link = network.connections().next().unwrap();
    let screen = render(&app, 120, 40);
    assert!(screen.contains(&format!("{} ⇢ {}", link.from, link.to)));
}
