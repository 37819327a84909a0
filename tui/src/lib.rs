//! TUI rendering and input handling for Lookout.
//!
//! The dashboard is a fixed 4x2 grid of panels, one per registered
//! operation, plus a one-line footer of key hints. Each frame fully
//! redraws every panel from its current state.

pub mod panels;
pub mod theme;

pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame};

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use lookout_engine::{App, Panel};
use lookout_types::PanelState;

use panels::panel_lines;

/// Drain pending key events. Returns true when the user asked to quit.
pub fn handle_events(app: &mut App) -> Result<bool> {
    while event::poll(Duration::ZERO)? {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(true);
            }
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char(c) => {
                app.on_key(c.to_ascii_lowercase());
            }
            _ => {}
        }
    }
    Ok(false)
}

/// Render the whole dashboard.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = theme::palette(app.ui_options());

    let [grid_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let rows = Layout::vertical([Constraint::Ratio(1, 4); 4]).split(grid_area);
    for (row_idx, row) in rows.iter().enumerate() {
        let cols = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(*row);
        for (col_idx, cell) in cols.iter().enumerate() {
            let panel = &app.panels()[row_idx * 2 + col_idx];
            render_panel(frame, *cell, panel, app, &palette);
        }
    }

    render_footer(frame, footer_area, &palette);
}

fn render_panel(frame: &mut Frame, area: Rect, panel: &Panel, app: &App, palette: &Palette) {
    let descriptor = panel.descriptor();
    let border_color = match panel.state() {
        PanelState::Idle => palette.bg_border,
        PanelState::Loading => palette.accent,
        PanelState::Ready(_) => palette.success,
        PanelState::Failed(_) => palette.error,
    };

    let title = format!(" [{}] {} ", descriptor.hotkey, descriptor.title);
    let block = Block::bordered()
        .title(Span::styled(title, Style::default().fg(palette.text_primary)))
        .border_style(Style::default().fg(border_color));

    let lines = panel_lines(panel, app.tick_count(), app.ui_options(), palette);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let hints = Line::from(vec![
        Span::styled(" d c j p w a s r ", Style::default().fg(palette.warning)),
        Span::styled("fetch panel", Style::default().fg(palette.text_muted)),
        Span::styled("  q ", Style::default().fg(palette.warning)),
        Span::styled("quit", Style::default().fg(palette.text_muted)),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}
