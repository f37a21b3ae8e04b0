//! Rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};
use tenkey::prelude::format_result;

use crate::app::App;
use crate::keypad::KeypadWidget;

/// Renders the calculator UI to the frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let ui = CalculatorUi::new(app);
    frame.render_widget(ui, area);
}

/// The rectangle the keypad occupies, for mouse hit testing.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    split_columns(area)[1]
}

fn split_columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(30),    // display panels
            Constraint::Length(22), // keypad
        ])
        .split(area)
        .to_vec()
}

/// Calculator UI widget.
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a App,
}

impl<'a> CalculatorUi<'a> {
    /// Creates the UI widget over the app state.
    #[must_use]
    pub const fn new(app: &'a App) -> Self {
        Self { app }
    }

    fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // expression
                Constraint::Length(3), // result
                Constraint::Min(4),    // history
                Constraint::Length(3), // notice / help
            ])
            .split(area)
            .to_vec()
    }

    fn render_expression(&self, area: Rect, buf: &mut Buffer) {
        // the buffer stores '*'; the display uses the keypad glyph
        let text = self.app.expression().replace('*', "×");
        let paragraph = Paragraph::new(Span::styled(
            text,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .block(
            Block::default()
                .title(" Expression ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        paragraph.render(area, buf);
    }

    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        let (text, border) = match self.app.result() {
            Some(result) => (
                Span::styled(
                    result.to_owned(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Style::default().fg(Color::Yellow),
            ),
            // panel stays in place but visually recedes when hidden
            None => (Span::raw(""), Style::default().fg(Color::DarkGray)),
        };

        let paragraph = Paragraph::new(text).block(
            Block::default()
                .title(" Result ")
                .borders(Borders::ALL)
                .border_style(border),
        );
        paragraph.render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .app
            .history()
            .iter_rev()
            .take(10)
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        entry.expression.replace('*', "×"),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::raw(" = "),
                    Span::styled(
                        format_result(entry.result),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" History (newest first) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        list.render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let (text, style) = match self.app.notice() {
            Some(notice) => (
                format!("✗ {notice}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            None => (
                "Enter/= evaluate | Esc/c clear | Bksp delete | n ± | q quit".to_owned(),
                Style::default().fg(Color::DarkGray),
            ),
        };

        let paragraph = Paragraph::new(Span::styled(text, style)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        paragraph.render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = split_columns(area);
        let chunks = Self::main_layout(columns[0]);

        self.render_expression(chunks[0], buf);
        self.render_result(chunks[1], buf);
        self.render_history(chunks[2], buf);
        self.render_footer(chunks[3], buf);

        KeypadWidget::new(self.app.keypad()).render(columns[1], buf);
    }
}
