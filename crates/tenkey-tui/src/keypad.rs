//! The on-screen keypad.
//!
//! A 5x4 grid of buttons mirroring the calculator face. Buttons can be
//! clicked with the mouse or highlighted when the matching key is
//! pressed on the keyboard.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};
use tenkey::prelude::{Key, Operator};

/// A single keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The glyph shown on the button.
    pub label: char,
    /// Whether the button is currently highlighted.
    pub pressed: bool,
    /// The key this button activates.
    pub key: Key,
}

impl KeypadButton {
    fn digit(d: u8) -> Self {
        Self {
            label: char::from(b'0' + d.min(9)),
            pressed: false,
            key: Key::Digit(d),
        }
    }

    fn operator(op: Operator) -> Self {
        Self {
            label: op.glyph(),
            pressed: false,
            key: Key::Op(op),
        }
    }

    const fn control(label: char, key: Key) -> Self {
        Self {
            label,
            pressed: false,
            key,
        }
    }
}

/// The keypad layout, row-major:
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ / ]
/// [ 4 ] [ 5 ] [ 6 ] [ × ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ 0 ] [ . ] [ = ] [ + ]
/// [ C ] [ ← ] [ ± ] [ % ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: 7 8 9 /
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(Operator::Divide),
            // Row 2: 4 5 6 ×
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(Operator::Multiply),
            // Row 3: 1 2 3 -
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(Operator::Subtract),
            // Row 4: 0 . = +
            KeypadButton::digit(0),
            KeypadButton::control('.', Key::Dot),
            KeypadButton::control('=', Key::Equals),
            KeypadButton::operator(Operator::Add),
            // Row 5: C ← ± %
            KeypadButton::control('C', Key::Clear),
            KeypadButton::control('←', Key::Backspace),
            KeypadButton::control('±', Key::ToggleSign),
            KeypadButton::operator(Operator::Modulo),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Number of buttons on the keypad.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions as `(rows, cols)`.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The button at `index`, row-major.
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// The button at `(row, col)`.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Index of the button activating `key`.
    #[must_use]
    pub fn find_button(&self, key: Key) -> Option<usize> {
        self.buttons.iter().position(|b| b.key == key)
    }

    /// Highlights the button for `key`, releasing all others.
    pub fn highlight(&mut self, key: Key) {
        self.release_all();
        if let Some(idx) = self.find_button(key) {
            if let Some(btn) = self.buttons.get_mut(idx) {
                btn.pressed = true;
            }
        }
    }

    /// Releases all buttons.
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Iterates over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Iterates over buttons with their `(row, col)` positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(|(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Maps a click inside `area` to the key of the button under it.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Key> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // the border eats one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        self.get_button_at(row, col).map(|b| b.key)
    }
}

/// Keypad widget for rendering.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget over `keypad`.
    #[must_use]
    pub const fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 5 {
            return; // too small to render the grid
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.key {
                    Key::Digit(_) | Key::Dot => Style::default().fg(Color::White),
                    Key::Op(_) => Style::default().fg(Color::Yellow),
                    Key::Equals => Style::default().fg(Color::Green),
                    Key::Clear => Style::default().fg(Color::Red),
                    Key::Backspace | Key::ToggleSign => Style::default().fg(Color::Cyan),
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_x = x + (btn_width.saturating_sub(3)) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
