//! Application state machine.
//!
//! The app starts on the loading splash (unless disabled) and swaps to the
//! landing page once the sequencer signals completion. Swapping drops the
//! sequencer, which is the splash's unmount.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::landing::layout::NAVBAR_HEIGHT;
use crate::landing::{LandingContent, LandingPage, SectionKind};
use crate::motion::{ProgressSequencer, ScrollPhysics};
use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub enum Screen {
    Loading(ProgressSequencer),
    Landing(LandingPage),
}

pub struct App {
    config: AppConfig,
    content: LandingContent,
    physics: ScrollPhysics,
    screen: Screen,
    loader_done: Rc<Cell<bool>>,
    rng: StdRng,
    width: u16,
    height: u16,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, physics: ScrollPhysics) -> Result<Self, AppError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let content = config.landing_content();
        let loader_done = Rc::new(Cell::new(false));

        let screen = if config.show_loader {
            let done = Rc::clone(&loader_done);
            let sequencer =
                ProgressSequencer::new(config.sequencer_config(), move || done.set(true))?;
            Screen::Loading(sequencer)
        } else {
            Screen::Landing(LandingPage::new(
                content.clone(),
                physics.smooth_scroll(),
                config.counter_duration(),
            )?)
        };

        Ok(Self {
            config,
            content,
            physics,
            screen,
            loader_done,
            rng,
            width: 0,
            height: 0,
            should_quit: false,
        })
    }

    fn page_height(&self) -> u16 {
        self.height.saturating_sub(NAVBAR_HEIGHT)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let page_height = self.page_height();
        if let Screen::Landing(page) = &mut self.screen {
            page.resize(width, page_height);
        }
    }

    /// Steps whichever screen is active by `dt`.
    pub fn advance(&mut self, dt: Duration) -> Result<(), AppError> {
        match &mut self.screen {
            Screen::Loading(sequencer) => {
                sequencer.advance(dt);
            }
            Screen::Landing(page) => page.advance(dt, &mut self.rng),
        }
        self.mount_landing_if_done()
    }

    fn mount_landing_if_done(&mut self) -> Result<(), AppError> {
        if !self.loader_done.get() || !matches!(self.screen, Screen::Loading(_)) {
            return Ok(());
        }
        let mut page = LandingPage::new(
            self.content.clone(),
            self.physics.smooth_scroll(),
            self.config.counter_duration(),
        )?;
        page.resize(self.width, self.page_height());
        self.screen = Screen::Landing(page);
        tracing::info!("landing page mounted");
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<(), AppError> {
        if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return Ok(());
        }

        match &mut self.screen {
            Screen::Loading(sequencer) => {
                sequencer.skip();
                return self.mount_landing_if_done();
            }
            Screen::Landing(page) => match code {
                KeyCode::Down | KeyCode::Char('j') => page.scroll_lines(1),
                KeyCode::Up | KeyCode::Char('k') => page.scroll_lines(-1),
                KeyCode::PageDown | KeyCode::Char(' ') => page.page_down(),
                KeyCode::PageUp => page.page_up(),
                KeyCode::Home | KeyCode::Char('g') => page.scroll_to_top(),
                KeyCode::End | KeyCode::Char('G') => page.scroll_to_bottom(),
                KeyCode::Char(c @ '1'..='7') => {
                    let index = c as usize - '1' as usize;
                    page.scroll_to_section(SectionKind::ALL[index]);
                }
                _ => {}
            },
        }
        Ok(())
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.screen, Screen::Loading(_))
    }

    pub fn landing(&self) -> Option<&LandingPage> {
        match &self.screen {
            Screen::Landing(page) => Some(page),
            Screen::Loading(_) => None,
        }
    }

    pub fn content(&self) -> &LandingContent {
        &self.content
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
