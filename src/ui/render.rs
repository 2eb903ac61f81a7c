use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::search::{SearchOutcome, SearchResultItem};
use crate::ui::screen::SearchScreenState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BORDER, MUTED, STATUS_ERROR, STATUS_OK, TEXT, WARNING,
};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const INPUT_PLACEHOLDER: &str = "Search users";

const FOOTER_HINTS: &str = " Enter search · Esc clear · ↑/↓ select · Ctrl-C quit ";

pub fn draw(frame: &mut Frame<'_>, state: &SearchScreenState) {
    let [bar, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_search_bar(frame, bar, state);
    draw_body(frame, body, state);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(FOOTER_HINTS, Style::default().fg(MUTED)))),
        footer,
    );
}

fn draw_search_bar(frame: &mut Frame<'_>, area: Rect, state: &SearchScreenState) {
    let block = Block::default()
        .title(" GitHub Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER));

    let text = if state.input.is_empty() {
        Span::styled(INPUT_PLACEHOLDER, Style::default().fg(MUTED))
    } else {
        Span::styled(state.input.as_str(), Style::default().fg(TEXT))
    };
    let line = Line::from(vec![Span::styled("> ", Style::default().fg(ACCENT)), text]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if area.width > 4 && area.height > 2 {
        let typed = state.input.chars().count() as u16;
        let x = (area.x + 3 + typed).min(area.x + area.width - 2);
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_body(frame: &mut Frame<'_>, area: Rect, state: &SearchScreenState) {
    if let Some(hint) = state.placeholder() {
        draw_centered(frame, area, Line::from(Span::styled(hint, Style::default().fg(MUTED))));
        return;
    }

    match &state.outcome {
        SearchOutcome::Loading => {
            let spinner = SPINNER_FRAMES[(state.spinner_tick as usize) % SPINNER_FRAMES.len()];
            draw_centered(
                frame,
                area,
                Line::from(vec![
                    Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
                    Span::styled("Searching...", Style::default().fg(TEXT)),
                ]),
            );
        }
        SearchOutcome::Failed { message } => {
            draw_centered(
                frame,
                area,
                Line::from(vec![
                    Span::styled("! ", Style::default().fg(WARNING)),
                    Span::styled(message.as_str(), Style::default().fg(STATUS_ERROR)),
                ]),
            );
        }
        SearchOutcome::Success { items } => draw_results(frame, area, items, state.selected),
        SearchOutcome::Idle => {}
    }
}

fn draw_results(frame: &mut Frame<'_>, area: Rect, items: &[SearchResultItem], selected: usize) {
    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    item.handle(),
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(item.avatar_image_url(), Style::default().fg(MUTED)),
            ]))
        })
        .collect();

    let list = List::new(rows)
        .block(
            Block::default()
                .title(format!(" {} users ", items.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).fg(ACCENT))
        .highlight_symbol("› ");

    let mut list_state = ListState::default().with_selected(Some(selected.min(items.len().saturating_sub(1))));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_centered(frame: &mut Frame<'_>, area: Rect, line: Line<'_>) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        middle,
    );
}
