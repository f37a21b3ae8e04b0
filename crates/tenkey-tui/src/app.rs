//! Application state: the accumulator plus everything the UI shows.

use tenkey::prelude::{Accumulator, History, Key, UiEvent};

use crate::keypad::Keypad;

/// Calculator application state.
#[derive(Debug)]
pub struct App {
    /// The expression accumulator.
    accumulator: Accumulator,
    /// Successful calculations, newest last.
    history: History,
    /// The on-screen keypad.
    keypad: Keypad,
    /// Expression text currently on display.
    expression: String,
    /// Formatted result, when the result panel is visible.
    result: Option<String>,
    /// Non-blocking error notice, cleared on the next key press.
    notice: Option<String>,
    /// Whether the app should quit.
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a fresh application showing `0`.
    #[must_use]
    pub fn new() -> Self {
        let accumulator = Accumulator::new();
        let expression = accumulator.buffer().to_owned();
        Self {
            accumulator,
            history: History::new(),
            keypad: Keypad::new(),
            expression,
            result: None,
            notice: None,
            should_quit: false,
        }
    }

    /// Expression text for the display panel.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Formatted result, when one is on display.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// The current error notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The calculation history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// The keypad, for rendering and hit testing.
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Whether the app should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Forwards one keypad key to the accumulator and applies the
    /// notifications it produced.
    pub fn press(&mut self, key: Key) {
        self.notice = None;
        self.keypad.highlight(key);

        // the expression on display when `=` was pressed, for history
        let evaluated = self.expression.clone();

        for event in self.accumulator.press(key) {
            match event {
                UiEvent::ExpressionChanged(text) => self.expression = text,
                UiEvent::ResultReady(text) => {
                    self.history
                        .record(&evaluated, self.accumulator.last_result());
                    self.result = Some(text);
                }
                UiEvent::ResultHidden => self.result = None,
                UiEvent::InvalidExpression => {
                    self.notice = Some("Invalid expression".to_owned());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenkey::prelude::Operator;

    fn type_labels(app: &mut App, labels: &str) {
        for label in labels.chars() {
            app.press(Key::from_label(label).expect("unknown key label"));
        }
    }

    #[test]
    fn new_app_shows_zero() {
        let app = App::new();
        assert_eq!(app.expression(), "0");
        assert!(app.result().is_none());
        assert!(app.notice().is_none());
        assert!(app.history().is_empty());
        assert!(!app.should_quit());
    }

    #[test]
    fn typing_updates_expression() {
        let mut app = App::new();
        type_labels(&mut app, "12+3");
        assert_eq!(app.expression(), "12+3");
    }

    #[test]
    fn equals_shows_result_and_records_history() {
        let mut app = App::new();
        type_labels(&mut app, "2+3*4=");
        assert_eq!(app.result(), Some("14"));
        assert_eq!(app.history().len(), 1);
        let entry = app.history().last().unwrap();
        assert_eq!(entry.expression, "2+3*4");
        assert_eq!(entry.result, 14.0);
    }

    #[test]
    fn invalid_expression_sets_notice_and_resets() {
        let mut app = App::new();
        type_labels(&mut app, "10/0=");
        assert_eq!(app.notice(), Some("Invalid expression"));
        assert_eq!(app.expression(), "0");
        assert!(app.result().is_none());
        assert!(app.history().is_empty());
    }

    #[test]
    fn notice_clears_on_next_key() {
        let mut app = App::new();
        type_labels(&mut app, "10/0=");
        assert!(app.notice().is_some());
        app.press(Key::Digit(5));
        assert!(app.notice().is_none());
    }

    #[test]
    fn result_panel_hides_when_new_input_starts() {
        let mut app = App::new();
        type_labels(&mut app, "2+2=");
        assert_eq!(app.result(), Some("4"));
        app.press(Key::Digit(9));
        assert!(app.result().is_none());
        assert_eq!(app.expression(), "9");
    }

    #[test]
    fn operator_after_result_continues() {
        let mut app = App::new();
        type_labels(&mut app, "2+3=");
        app.press(Key::Op(Operator::Multiply));
        assert_eq!(app.expression(), "5*");
        assert!(app.result().is_none());
    }

    #[test]
    fn clear_hides_result() {
        let mut app = App::new();
        type_labels(&mut app, "2+2=");
        app.press(Key::Clear);
        assert!(app.result().is_none());
        assert_eq!(app.expression(), "0");
        // history is not part of the accumulator reset
        assert_eq!(app.history().len(), 1);
    }

    #[test]
    fn press_highlights_keypad_button() {
        let mut app = App::new();
        app.press(Key::Digit(7));
        let pressed: Vec<char> = app
            .keypad()
            .buttons()
            .filter(|b| b.pressed)
            .map(|b| b.label)
            .collect();
        assert_eq!(pressed, vec!['7']);
    }

    #[test]
    fn chained_evaluations_accumulate_history() {
        let mut app = App::new();
        type_labels(&mut app, "2+3=");
        type_labels(&mut app, "*4=");
        assert_eq!(app.history().len(), 2);
        assert_eq!(app.history().last().unwrap().result, 20.0);
        assert_eq!(app.result(), Some("20"));
    }

    #[test]
    fn quit_flag() {
        let mut app = App::new();
        app.quit();
        assert!(app.should_quit());
    }
}
