//! Terminal user interface (TUI) for shopfront.
//!
//! Provides interactive full-screen views over the host payload.
//!
//! ## Entry points
//!
//! - [`run_orders_tui`] — order history browser with expandable detail.
//! - [`run_login_tui`] — sign-in screen; returns the filled submission.

pub mod login;
pub mod orders;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use shopfront_core::login::FormSubmission;
use shopfront_core::payload::{LoginPayload, OrdersPayload};

use self::login::{LoginAction, LoginView};
use self::orders::OrdersView;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn setup_terminal() -> Result<Term> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("create terminal")
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}

/// Open the order history browser. Returns when the user quits.
///
/// # Errors
/// Returns an error if the terminal can't be set up, drawn to, or restored.
pub fn run_orders_tui(payload: OrdersPayload) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let mut view = OrdersView::new(payload);
    let run = orders_loop(&mut terminal, &mut view);
    let restore = restore_terminal(&mut terminal);
    run.and(restore)
}

fn orders_loop(terminal: &mut Term, view: &mut OrdersView) -> Result<()> {
    loop {
        terminal
            .draw(|frame| view.render(frame, frame.area()))
            .context("draw frame")?;

        if !event::poll(POLL_INTERVAL).context("poll event")? {
            continue;
        }
        if let Event::Key(key) = event::read().context("read event")? {
            view.handle_key(key)?;
        }
        if view.should_quit() {
            return Ok(());
        }
    }
}

/// Open the sign-in screen. Returns the filled submission if the user
/// signs in, `None` if they cancel.
///
/// # Errors
/// Returns an error if the terminal can't be set up, drawn to, or restored.
pub fn run_login_tui(payload: &LoginPayload) -> Result<Option<FormSubmission>> {
    let mut terminal = setup_terminal()?;
    let mut view = LoginView::new(payload);
    let run = login_loop(&mut terminal, &mut view);
    let restore = restore_terminal(&mut terminal);
    let action = run?;
    restore?;
    Ok(match action {
        LoginAction::Submit(submission) => Some(submission),
        LoginAction::Cancel => None,
    })
}

fn login_loop(terminal: &mut Term, view: &mut LoginView) -> Result<LoginAction> {
    loop {
        terminal
            .draw(|frame| view.render(frame, frame.area()))
            .context("draw frame")?;

        if !event::poll(POLL_INTERVAL).context("poll event")? {
            continue;
        }
        if let Event::Key(key) = event::read().context("read event")? {
            if let Some(action) = view.handle_key(key)? {
                return Ok(action);
            }
        }
    }
}
