//! Section renderers.
//!
//! Each section draws into its own buffer whose origin is the section's
//! first page row, so the renderers never think about scrolling. The
//! landing scene copies whatever rows of that buffer are on screen.

use super::throbber::pulse_glyph;
use crate::landing::layout::{CARD_HEIGHT, STATS_STRIP_HEIGHT, TICKER_HEIGHT};
use crate::landing::{LandingPage, Palette, PlacedCounter, SectionKind, SectionSlot, VisualToken};
use crate::motion::number_format::format_metric;
use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Draws `slot`'s section into `buf`, which covers exactly the section.
pub fn render(page: &LandingPage, slot: &SectionSlot, buf: &mut Buffer) {
    let area = buf.area;
    let palette = page.content().palette;
    Block::default()
        .style(Style::default().bg(palette.background))
        .render(area, buf);

    match slot.kind {
        SectionKind::Hero => render_hero(page, &palette, area, buf),
        SectionKind::About => render_about(page, slot, &palette, area, buf),
        SectionKind::Agents => render_agents(page, &palette, area, buf),
        SectionKind::HowItWorks => render_how_it_works(page, slot, &palette, area, buf),
        SectionKind::Testimonials => render_testimonials(page, &palette, area, buf),
        SectionKind::Cta => render_cta(page, &palette, area, buf),
        SectionKind::Footer => render_footer(page, &palette, area, buf),
    }
}

fn band(area: Rect, y: u16, height: u16) -> Rect {
    Rect::new(area.x, area.y.saturating_add(y), area.width, height).intersection(area)
}

fn token_style(palette: &Palette, token: VisualToken) -> Style {
    Style::default().fg(palette.color(token.role))
}

fn bold(style: Style) -> Style {
    style.add_modifier(Modifier::BOLD)
}

fn centered_line(line: Line<'_>, area: Rect, buf: &mut Buffer) {
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn heading(text: &str, palette: &Palette, area: Rect, buf: &mut Buffer) {
    centered_line(
        Line::from(Span::styled(text, bold(Style::default().fg(palette.text)))),
        area,
        buf,
    );
}

/// Cell `index` of a card grid whose first row starts `top` rows into `area`.
fn grid_cell(area: Rect, top: u16, index: usize, columns: u16) -> Rect {
    let columns = columns.max(1);
    let col = index as u16 % columns;
    let row = index as u16 / columns;
    let width = area.width / columns;
    let gap = u16::from(col + 1 < columns);
    Rect::new(
        area.x + col * width,
        area.y.saturating_add(top + row * CARD_HEIGHT),
        width.saturating_sub(gap),
        CARD_HEIGHT,
    )
    .intersection(area)
}

fn card_block(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
}

fn render_card(lines: Vec<Line<'_>>, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let block = card_block(palette);
    let inner = block.inner(area);
    block.render(area, buf);
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

fn render_stats_strip(
    counters: &[&PlacedCounter],
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    if counters.is_empty() {
        return;
    }
    let width = area.width / counters.len() as u16;
    for (i, placed) in counters.iter().enumerate() {
        let gap = u16::from(i + 1 < counters.len());
        let cell = Rect::new(
            area.x + i as u16 * width,
            area.y,
            width.saturating_sub(gap),
            STATS_STRIP_HEIGHT,
        )
        .intersection(area);
        let style = token_style(palette, placed.spec.token);
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", placed.spec.token.icon.glyph()), style),
                Span::styled(placed.counter.text(), bold(style)),
            ]),
            Line::from(Span::styled(
                placed.spec.label.as_str(),
                Style::default().fg(palette.text),
            )),
            Line::from(Span::styled(
                placed.spec.sub.as_str(),
                Style::default().fg(palette.muted),
            )),
        ];
        let block = card_block(palette);
        let inner = block.inner(cell);
        block.render(cell, buf);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

fn render_hero(page: &LandingPage, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let hero = &page.content().hero;

    centered_line(
        Line::from(Span::styled(
            format!("✦ {}", hero.badge),
            Style::default().fg(palette.accent),
        )),
        band(area, 1, 1),
        buf,
    );

    for (i, text) in hero.headline.iter().enumerate().take(2) {
        let color = if i == 0 { palette.text } else { palette.primary };
        centered_line(
            Line::from(Span::styled(text.as_str(), bold(Style::default().fg(color)))),
            band(area, 3 + i as u16, 1),
            buf,
        );
    }

    Paragraph::new(Span::styled(
        hero.tagline.as_str(),
        Style::default().fg(palette.muted),
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .render(band(area, 6, 1), buf);

    centered_line(
        Line::from(vec![
            Span::styled(
                format!(" {} → ", hero.primary_cta),
                bold(Style::default().fg(palette.background).bg(palette.primary)),
            ),
            Span::raw("   "),
            Span::styled(
                format!("[ {} ]", hero.secondary_cta),
                Style::default().fg(palette.text),
            ),
        ]),
        band(area, 8, 1),
        buf,
    );

    let boxes = band(area, 9, 4);
    let count = hero.stat_boxes.len().max(1) as u16;
    let width = boxes.width / count;
    for (i, stat) in hero.stat_boxes.iter().enumerate() {
        let gap = u16::from((i as u16) + 1 < count);
        let cell = Rect::new(
            boxes.x + i as u16 * width,
            boxes.y,
            width.saturating_sub(gap),
            boxes.height,
        );
        let style = token_style(palette, stat.token);
        let block = card_block(palette);
        let inner = block.inner(cell);
        block.render(cell, buf);
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("{} ", stat.token.icon.glyph()), style),
                Span::styled(stat.value.as_str(), bold(Style::default().fg(palette.text))),
            ]),
            Line::from(Span::styled(
                stat.label.as_str(),
                Style::default().fg(palette.muted),
            )),
        ])
        .alignment(Alignment::Center)
        .render(inner, buf);
    }

    render_network(page, palette, band(area, 14, 13), buf);
}

fn render_network(page: &LandingPage, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let hero = &page.content().hero;
    let network = page.hero_network();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", pulse_glyph(page.elapsed())),
                Style::default().fg(palette.success),
            ),
            Span::styled(
                format!("{} ", hero.network_title),
                bold(Style::default().fg(palette.text)),
            ),
        ]));
    let inner = block.inner(area);
    block.render(area, buf);

    let link_rows = hero
        .network
        .pulse
        .as_ref()
        .and_then(|pulse| pulse.connections.as_ref())
        .map_or(0, |connections| connections.keep as u16 + 1)
        .min(inner.height / 2);
    let grid_height = inner.height - link_rows;
    let half = inner.width / 2;
    let left = Rect::new(inner.x + 1, inner.y, half.saturating_sub(1), grid_height);
    let right = Rect::new(inner.x + half, inner.y, inner.width - half, grid_height);
    if link_rows > 0 {
        let links = Rect::new(
            inner.x + 1,
            inner.y + grid_height,
            inner.width.saturating_sub(2),
            link_rows,
        );
        render_links(page, palette, links, buf);
    }

    let mut metric_lines: Vec<Line> = network
        .metrics()
        .map(|(spec, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<20}", spec.label),
                    Style::default().fg(palette.muted),
                ),
                Span::styled(
                    format_metric(value, spec.precision),
                    bold(Style::default().fg(palette.primary)),
                ),
            ])
        })
        .collect();
    metric_lines.push(Line::from(Span::styled(
        format!("tick #{}", network.tick_count()),
        Style::default().fg(palette.border),
    )));
    Paragraph::new(metric_lines).render(left, buf);

    let Some(pulse) = hero.network.pulse.as_ref() else {
        return;
    };
    let active = network.active_node();
    let rows = right.height.saturating_sub(1).max(1) as usize;
    let columns = pulse.nodes.len().div_ceil(rows).max(1);
    let cell_width = (right.width as usize / columns).max(1);

    let mut lines = vec![Line::from(Span::styled(
        match active {
            Some(node) => format!("pulse ▸ {node}"),
            None => "pulse ▸ idle".to_string(),
        },
        Style::default().fg(palette.accent),
    ))];
    for row in 0..rows {
        let spans: Vec<Span> = (0..columns)
            .filter_map(|col| pulse.nodes.get(col * rows + row))
            .map(|node| {
                let is_active = active == Some(node.as_str());
                let is_linked = network
                    .connections()
                    .any(|link| link.from == node.as_str() || link.to == node.as_str());
                let (marker, style) = if is_active {
                    ("◉", bold(Style::default().fg(palette.primary)))
                } else if is_linked {
                    ("◌", Style::default().fg(palette.accent))
                } else {
                    ("·", Style::default().fg(palette.muted))
                };
                let text = format!("{marker} {node}");
                Span::styled(
                    format!("{:<width$}", text, width = cell_width),
                    style,
                )
            })
            .collect();
        lines.push(Line::from(spans));
    }
    Paragraph::new(lines).render(right, buf);
}

/// Newest connection pulses, newest last, under the metrics grid.
fn render_links(page: &LandingPage, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let mut lines = vec![Line::from(Span::styled(
        "links",
        Style::default().fg(palette.muted),
    ))];
    lines.extend(page.hero_network().connections().map(|link| {
        Line::from(vec![
            Span::styled(link.from, Style::default().fg(palette.text)),
            Span::styled(" ⇢ ", Style::default().fg(palette.accent)),
            Span::styled(link.to, Style::default().fg(palette.text)),
        ])
    }));
    Paragraph::new(lines).render(area, buf);
}

fn render_about(
    page: &LandingPage,
    slot: &SectionSlot,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let about = &page.content().about;
    let text_area = area.inner(&Margin {
        horizontal: 2,
        vertical: 0,
    });

    heading(&about.heading, palette, band(area, 1, 1), buf);
    Paragraph::new(Span::styled(
        about.body.as_str(),
        Style::default().fg(palette.text),
    ))
    .wrap(Wrap { trim: true })
    .render(band(text_area, 3, 5), buf);

    Paragraph::new(Span::styled(
        about.why_heading.as_str(),
        bold(Style::default().fg(palette.primary)),
    ))
    .render(band(text_area, 9, 1), buf);
    Paragraph::new(Span::styled(
        about.why_body.as_str(),
        Style::default().fg(palette.muted),
    ))
    .wrap(Wrap { trim: true })
    .render(band(text_area, 10, 3), buf);

    if let Some(stats_top) = slot.stats_top {
        let counters: Vec<&PlacedCounter> = page.counters(SectionKind::About).collect();
        render_stats_strip(
            &counters,
            palette,
            band(text_area, stats_top, STATS_STRIP_HEIGHT),
            buf,
        );
    }
}

fn render_agents(page: &LandingPage, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let agents = &page.content().agents;
    let columns = page.layout().columns;

    heading(&agents.heading, palette, band(area, 1, 1), buf);
    centered_line(
        Line::from(Span::styled(
            agents.subheading.as_str(),
            Style::default().fg(palette.muted),
        )),
        band(area, 2, 1),
        buf,
    );

    let grid = area.inner(&Margin {
        horizontal: 1,
        vertical: 0,
    });
    for (i, agent) in agents.agents.iter().enumerate() {
        let style = token_style(palette, agent.token);
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", agent.token.icon.glyph()), style),
                Span::styled(agent.title.as_str(), bold(Style::default().fg(palette.text))),
            ]),
            Line::from(Span::styled(agent.role.to_uppercase(), style)),
            Line::from(Span::styled(
                agent.description.as_str(),
                Style::default().fg(palette.muted),
            )),
        ];
        render_card(lines, palette, grid_cell(grid, 4, i, columns), buf);
    }

    let ticker_top = area.height.saturating_sub(TICKER_HEIGHT + 1);
    render_ticker(page, palette, band(grid, ticker_top, TICKER_HEIGHT), buf);
}

fn render_ticker(page: &LandingPage, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let ticker = page.agent_ticker();
    let block = card_block(palette).title(Line::from(vec![
        Span::styled(
            format!(" {} ", pulse_glyph(page.elapsed())),
            Style::default().fg(palette.success),
        ),
        Span::styled("LIVE AGENT ACTIVITY ", Style::default().fg(palette.muted)),
    ]));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut spans = Vec::new();
    for (i, (spec, value)) in ticker.metrics().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(palette.border)));
        }
        spans.push(Span::styled(
            format!("{} ", spec.label),
            Style::default().fg(palette.muted),
        ));
        spans.push(Span::styled(
            format_metric(value, spec.precision),
            bold(Style::default().fg(palette.accent)),
        ));
    }
    centered_line(Line::from(spans), inner, buf);
}

fn render_how_it_works(
    page: &LandingPage,
    slot: &SectionSlot,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let how = &page.content().how_it_works;
    let columns = page.layout().columns;
    let grid = area.inner(&Margin {
        horizontal: 1,
        vertical: 0,
    });

    heading(&how.heading, palette, band(area, 1, 1), buf);
    for (i, step) in how.steps.iter().enumerate() {
        let style = token_style(palette, step.token);
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{:02} ", i + 1), Style::default().fg(palette.border)),
                Span::styled(format!("{} ", step.token.icon.glyph()), style),
                Span::styled(step.title.as_str(), bold(Style::default().fg(palette.text))),
            ]),
            Line::from(Span::styled(
                step.body.as_str(),
                Style::default().fg(palette.muted),
            )),
        ];
        render_card(lines, palette, grid_cell(grid, 3, i, columns), buf);
    }

    if let Some(stats_top) = slot.stats_top {
        let counters: Vec<&PlacedCounter> = page.counters(SectionKind::HowItWorks).collect();
        render_stats_strip(
            &counters,
            palette,
            band(grid, stats_top, STATS_STRIP_HEIGHT),
            buf,
        );
    }
}

fn render_testimonials(page: &LandingPage, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let testimonials = &page.content().testimonials;
    let columns = page.layout().columns;
    let grid = area.inner(&Margin {
        horizontal: 1,
        vertical: 0,
    });

    heading(&testimonials.heading, palette, band(area, 1, 1), buf);
    for (i, review) in testimonials.reviews.iter().enumerate() {
        let lines = vec![
            Line::from(vec![
                Span::styled("❝ ", Style::default().fg(palette.primary)),
                Span::styled(review.name.as_str(), bold(Style::default().fg(palette.text))),
                Span::styled(
                    format!("  {}", review.handle),
                    Style::default().fg(palette.muted),
                ),
            ]),
            Line::from(Span::styled(
                review.role.as_str(),
                Style::default().fg(palette.accent),
            )),
            Line::from(Span::styled(
                review.text.as_str(),
                Style::default().fg(palette.muted),
            )),
        ];
        render_card(lines, palette, grid_cell(grid, 3, i, columns), buf);
    }
}

fn render_cta(page: &LandingPage, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let cta = &page.content().cta;
    let panel = band(
        area.inner(&Margin {
            horizontal: 2,
            vertical: 0,
        }),
        1,
        area.height.saturating_sub(2),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(palette.primary));
    let inner = block.inner(panel);
    block.render(panel, buf);

    heading(&cta.heading, palette, band(inner, 0, 1), buf);
    Paragraph::new(Span::styled(
        cta.body.as_str(),
        Style::default().fg(palette.muted),
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .render(band(inner, 2, 2), buf);

    centered_line(
        Line::from(vec![
            Span::styled(
                format!(" {} → ", cta.primary),
                bold(Style::default().fg(palette.background).bg(palette.primary)),
            ),
            Span::raw("   "),
            Span::styled(
                format!("[ {} ]", cta.secondary),
                Style::default().fg(palette.text),
            ),
        ]),
        band(inner, 5, 1),
        buf,
    );
    centered_line(
        Line::from(Span::styled(
            format!("☷ {}", cta.social_proof),
            Style::default().fg(palette.reward),
        )),
        band(inner, 6, 1),
        buf,
    );
    centered_line(
        Line::from(Span::styled(
            cta.app_url.as_str(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::UNDERLINED),
        )),
        band(inner, 7, 1),
        buf,
    );
}

fn render_footer(page: &LandingPage, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let content = page.content();
    let footer = &content.footer;

    Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.border))
        .render(band(area, 0, 1), buf);

    let body = area.inner(&Margin {
        horizontal: 2,
        vertical: 0,
    });
    Paragraph::new(Line::from(vec![
        Span::styled(
            content.navbar.brand.as_str(),
            bold(Style::default().fg(palette.primary)),
        ),
        Span::styled(
            format!("  {}", footer.tagline),
            Style::default().fg(palette.muted),
        ),
    ]))
    .render(band(body, 1, 1), buf);

    let columns = band(body, 2, 4);
    let count = footer.columns.len().max(1) as u16;
    let width = columns.width / count;
    for (i, column) in footer.columns.iter().enumerate() {
        let mut lines = vec![Line::from(Span::styled(
            column.title.as_str(),
            bold(Style::default().fg(palette.text)),
        ))];
        lines.extend(column.links.iter().map(|link| {
            Line::from(Span::styled(link.as_str(), Style::default().fg(palette.muted)))
        }));
        let cell = Rect::new(columns.x + i as u16 * width, columns.y, width, columns.height);
        Paragraph::new(lines).render(cell, buf);
    }

    let socials: Vec<Span> = footer
        .socials
        .iter()
        .map(|token| Span::styled(format!("{}  ", token.icon.glyph()), token_style(palette, *token)))
        .collect();
    Paragraph::new(Line::from(socials)).render(band(body, 6, 1), buf);

    let year = chrono::Local::now().year();
    Paragraph::new(Span::styled(
        format!("© {year} {}. All rights reserved.", footer.owner),
        Style::default().fg(palette.border),
    ))
    .render(band(body, 7, 1), buf);
}
