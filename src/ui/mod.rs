mod landing_scene;
mod loader_scene;
pub mod responsive;
mod sections;
mod throbber;

use crate::app::{App, Screen};
use ratatui::Frame;
use responsive::{render_too_small, LayoutContext, SizeTier};

/// Draws whichever screen the app is on.
pub fn draw(frame: &mut Frame, app: &App) {
    let ctx = LayoutContext::from_frame(frame);
    let palette = app.content().palette;
    if ctx.tier == SizeTier::TooSmall {
        render_too_small(frame, &ctx, &palette);
        return;
    }

    match app.screen() {
        Screen::Loading(sequencer) => loader_scene::draw(frame, sequencer, &palette),
        Screen::Landing(page) => landing_scene::draw(frame, page, &ctx),
    }
}
