//! TUI sign-in screen.
//!
//! Collects a username and password and returns the filled submission for
//! the caller to post. Hidden fields pass through untouched; nothing here
//! verifies credentials.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use shopfront_core::login::{FormSubmission, LoginForm};
use shopfront_core::payload::LoginPayload;

/// Outcome of a key event on the sign-in screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    /// Post this submission.
    Submit(FormSubmission),
    /// Leave without signing in.
    Cancel,
}

/// Which input currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginField {
    Username,
    Password,
}

impl LoginField {
    fn next(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }
}

/// The sign-in screen.
pub struct LoginView {
    form: LoginForm,
    username: String,
    password: String,
    focus: LoginField,
    status: Option<String>,
}

impl LoginView {
    /// Build the screen from the host payload.
    #[must_use]
    pub fn new(payload: &LoginPayload) -> Self {
        Self {
            form: LoginForm::from_payload(payload),
            username: String::new(),
            password: String::new(),
            focus: LoginField::Username,
            status: None,
        }
    }

    /// Process one key event, returning an action once the screen is done.
    ///
    /// # Errors
    /// Never returns an error; the signature matches the event loop.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<LoginAction>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return Ok(Some(LoginAction::Cancel));
        }

        match key.code {
            KeyCode::Esc => return Ok(Some(LoginAction::Cancel)),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => {
                if self.username.is_empty() || self.password.is_empty() {
                    self.status = Some("Username and password are required".to_string());
                } else {
                    let submission = self.form.submission(&self.username, &self.password);
                    return Ok(Some(LoginAction::Submit(submission)));
                }
            }
            KeyCode::Backspace => {
                self.focused_buf_mut().pop();
            }
            KeyCode::Char(c) if !ctrl => {
                self.focused_buf_mut().push(c);
                self.status = None;
            }
            _ => {}
        }
        Ok(None)
    }

    fn focused_buf_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    /// Render the screen into `area` within the given frame.
    pub fn render(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        render_into(frame, self, area);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn render_input(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    title: &str,
    content: String,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(border_style)
        .title(title.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(content), inner);
}

fn render_into(frame: &mut ratatui::Frame<'_>, view: &LoginView, area: Rect) {
    let card = centered_rect(44, 14, area);
    frame.render_widget(Clear, card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Green))
        .title(" Sign In ")
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(vec![Span::styled(
            "Shopfront Dealer",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::styled(
            "Sign in to continue",
            Style::default().fg(Color::DarkGray),
        )]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let username_focused = view.focus == LoginField::Username;
    let username_shown = if username_focused {
        format!("{}_", view.username)
    } else {
        view.username.clone()
    };
    render_input(
        frame,
        chunks[1],
        " Username or Email ",
        username_shown,
        username_focused,
    );

    let password_focused = view.focus == LoginField::Password;
    let password_masked: String = "•".repeat(view.password.chars().count());
    let password_shown = if password_focused {
        format!("{password_masked}_")
    } else {
        password_masked
    };
    render_input(frame, chunks[2], " Password ", password_shown, password_focused);

    if let Some(ref status) = view.status {
        frame.render_widget(
            Paragraph::new(Line::from(vec![Span::styled(
                status.clone(),
                Style::default().fg(Color::Red),
            )]))
            .alignment(Alignment::Center),
            chunks[3],
        );
    }

    let key_style = Style::default().fg(Color::Cyan);
    let dim_style = Style::default().fg(Color::DarkGray);
    let hints = Line::from(vec![
        Span::styled("tab", key_style),
        Span::styled(" next field  ", dim_style),
        Span::styled("enter", key_style),
        Span::styled(" sign in  ", dim_style),
        Span::styled("esc", key_style),
        Span::styled(" cancel", dim_style),
    ]);
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        chunks[4],
    );

    let footer = Line::from(vec![Span::styled(
        "Dealer Stock Management",
        Style::default().fg(Color::DarkGray),
    )]);
    frame.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        chunks[6],
    );
}
