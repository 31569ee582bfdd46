//! Full-screen loading splash.

use super::throbber::{blink_on, spinner_char};
use crate::build_info::system_tag;
use crate::landing::Palette;
use crate::motion::{ProgressSequencer, SequencerState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph},
    Frame,
};

const LOGO: [&str; 3] = [
    "╦  ╔═╗╔╗ ╔═╗╦  ═╗ ╦",
    "║  ╠═╣╠╩╗║╣ ║  ╔╩╦╝",
    "╩═╝╩ ╩╚═╝╚═╝╩═╝╩ ╚═",
];

const CONTENT_WIDTH: u16 = 48;

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

pub fn draw(frame: &mut Frame, sequencer: &ProgressSequencer, palette: &Palette) {
    let area = frame.size();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let view = sequencer.view();
    let elapsed = sequencer.elapsed();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(LOGO.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1), // percent
            Constraint::Length(1),
            Constraint::Length(1), // gauge
            Constraint::Length(1),
            Constraint::Length(1), // status
            Constraint::Min(0),
            Constraint::Length(1), // footer
        ])
        .split(area);

    let logo: Vec<Line> = LOGO
        .iter()
        .map(|row| {
            Line::from(Span::styled(
                *row,
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(logo).alignment(Alignment::Center), rows[1]);

    let percent = Line::from(vec![
        Span::styled(
            format!("{} ", spinner_char(elapsed)),
            Style::default().fg(palette.accent),
        ),
        Span::styled(
            format!("{:>3}%", view.progress.round() as u32),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(percent).alignment(Alignment::Center),
        rows[3],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.primary).bg(palette.border))
        .label("")
        .ratio((view.progress / 100.0).clamp(0.0, 1.0));
    frame.render_widget(gauge, centered(rows[5], CONTENT_WIDTH));

    let cursor = if view.state == SequencerState::Running && blink_on(elapsed) {
        "_"
    } else {
        " "
    };
    let status = Line::from(vec![
        Span::styled("> ", Style::default().fg(palette.muted)),
        Span::styled(view.status_text, Style::default().fg(palette.accent)),
        Span::styled(cursor, Style::default().fg(palette.accent)),
    ]);
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), rows[7]);

    let footer = Line::from(vec![
        Span::styled(system_tag(), Style::default().fg(palette.muted)),
        Span::styled("  ·  press any key to skip", Style::default().fg(palette.border)),
    ]);
    frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), rows[9]);
}
