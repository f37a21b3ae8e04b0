//! Terminal keypad calculator.
//!
//! Runs an interactive ratatui session by default, or evaluates a
//! single expression with `--expr` and prints the formatted result.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tenkey::prelude::{evaluate_str, format_result};

mod app;
mod input;
mod keypad;
mod ui;

use app::App;
use input::{Action, InputHandler};

#[derive(Parser, Debug)]
#[command(name = "tenkey", version, about = "Keypad calculator for the terminal")]
struct Cli {
    /// Evaluate a single expression and exit
    #[arg(short, long, value_name = "EXPR")]
    expr: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.expr {
        Some(expr) => evaluate_once(&expr),
        None => match run_tui() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {err}");
                ExitCode::FAILURE
            }
        },
    }
}

/// One-shot mode: evaluate, print, exit.
fn evaluate_once(expr: &str) -> ExitCode {
    match evaluate_str(expr) {
        Ok(value) => {
            println!("{}", format_result(value));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| ui::render(&app, f))?;

        match event::read()? {
            Event::Key(key) => match input_handler.handle_key(key) {
                Action::Press(key) => app.press(key),
                Action::Quit => app.quit(),
                Action::None => {}
            },
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let area = ui::keypad_area(terminal.get_frame().area());
                    if let Some(key) = app.keypad().hit_test(area, mouse.column, mouse.row) {
                        app.press(key);
                    }
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
