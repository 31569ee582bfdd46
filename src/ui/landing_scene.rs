//! Landing page scene: a fixed navbar over the scrolling sections.

use super::responsive::LayoutContext;
use super::sections;
use crate::landing::layout::NAVBAR_HEIGHT;
use crate::landing::{LandingPage, Palette, Viewport};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, page: &LandingPage, ctx: &LayoutContext) {
    let palette = page.content().palette;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(NAVBAR_HEIGHT), Constraint::Min(0)])
        .split(frame.size());

    draw_navbar(frame, page, ctx, &palette, chunks[0]);
    draw_sections(page, chunks[1], frame.buffer_mut());
}

fn draw_navbar(
    frame: &mut Frame,
    page: &LandingPage,
    ctx: &LayoutContext,
    palette: &Palette,
    area: Rect,
) {
    let navbar = &page.content().navbar;
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let row = Rect::new(inner.x + 1, inner.y + inner.height / 2, inner.width.saturating_sub(2), 1);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(0),
            Constraint::Length(22),
        ])
        .split(row);

    let brand = Line::from(vec![
        Span::styled("◎ ", Style::default().fg(palette.primary)),
        Span::styled(
            navbar.brand.as_str(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(brand), cols[0]);

    if ctx.show_secondary() {
        let links: Vec<Span> = navbar
            .links
            .iter()
            .map(|link| Span::styled(format!("  {link}  "), Style::default().fg(palette.muted)))
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(links)).alignment(Alignment::Center),
            cols[1],
        );
    }

    let max = page.scroll().max_offset();
    let percent = if max > 0.0 {
        (page.scroll().offset() as f64 / max * 100.0).round() as u32
    } else {
        0
    };
    let mut right: Vec<Span> = navbar
        .socials
        .iter()
        .map(|token| {
            Span::styled(
                format!("{} ", token.icon.glyph()),
                Style::default().fg(palette.color(token.role)),
            )
        })
        .collect();
    right.push(Span::styled(
        format!(" {percent:>3}% "),
        Style::default().fg(palette.muted),
    ));
    right.push(Span::styled(
        " Launch App ",
        Style::default()
            .fg(palette.background)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        cols[2],
    );
}

/// Renders every section that overlaps the visible window and copies its
/// on-screen rows into `buf`.
fn draw_sections(page: &LandingPage, area: Rect, buf: &mut Buffer) {
    let offset = page.scroll().offset();
    let viewport = Viewport::new(offset, area.height);

    for slot in page.layout().visible_slots(&viewport) {
        let mut section = Buffer::empty(Rect::new(0, 0, area.width, slot.height));
        sections::render(page, slot, &mut section);
        blit(&section, slot.top, offset, area, buf);
    }
}

fn blit(section: &Buffer, top: u16, offset: u16, area: Rect, buf: &mut Buffer) {
    let src = section.area;
    for y in 0..src.height {
        let page_row = top as u32 + y as u32;
        let Some(screen_row) = page_row.checked_sub(offset as u32) else {
            continue;
        };
        if screen_row >= area.height as u32 {
            break;
        }
        let screen_y = area.y + screen_row as u16;
        for x in 0..src.width.min(area.width) {
            *buf.get_mut(area.x + x, screen_y) = section.get(x, y).clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Cell;

    #[test]
    fn test_blit_skips_rows_above_the_viewport() {
        let mut section = Buffer::empty(Rect::new(0, 0, 4, 3));
        for y in 0..3 {
            section.get_mut(0, y).set_symbol(&y.to_string());
        }
        let mut screen = Buffer::empty(Rect::new(0, 0, 4, 2));

        // Section starts at page row 5, viewport starts at row 6.
        blit(&section, 5, 6, screen.area, &mut screen);

        assert_eq!(screen.get(0, 0).symbol(), "1");
        assert_eq!(screen.get(0, 1).symbol(), "2");
    }

    #[test]
    fn test_blit_clips_at_viewport_bottom() {
        let mut section = Buffer::empty(Rect::new(0, 0, 2, 5));
        for y in 0..5 {
            section.get_mut(1, y).set_symbol("x");
        }
        let mut screen = Buffer::empty(Rect::new(0, 0, 2, 3));

        // Section starts on the last visible row.
        blit(&section, 12, 10, screen.area, &mut screen);

        assert_eq!(screen.get(1, 0), &Cell::default());
        assert_eq!(screen.get(1, 1), &Cell::default());
        assert_eq!(screen.get(1, 2).symbol(), "x");
    }
}
