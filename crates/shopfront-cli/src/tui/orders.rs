//! TUI order history browser.
//!
//! Provides a full-screen terminal UI with:
//! - The account's orders listed exactly in payload order
//! - Right-side detail pane for the expanded order's line items
//! - Key bindings: j/k navigate, g/G jump, enter/space expand or collapse, q quit

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};
use std::time::{Duration, Instant};

use shopfront_core::expand::ExpansionState;
use shopfront_core::model::{Order, StatusCategory};
use shopfront_core::payload::OrdersPayload;

/// Share of the content width given to the list while the detail pane is open.
const SPLIT_PERCENT: u16 = 60;

/// The order history browser.
pub struct OrdersView {
    orders: Vec<Order>,
    expansion: ExpansionState,
    table_state: TableState,
    should_quit: bool,
    status_msg: Option<(String, Instant)>,
    list_area: Rect,
}

impl OrdersView {
    /// Build the view from the host payload. Selects the first row when
    /// there is one.
    #[must_use]
    pub fn new(payload: OrdersPayload) -> Self {
        let mut table_state = TableState::default();
        if !payload.orders.is_empty() {
            table_state.select(Some(0));
        }
        Self {
            orders: payload.orders,
            expansion: ExpansionState::new(),
            table_state,
            should_quit: false,
            status_msg: None,
            list_area: Rect::default(),
        }
    }

    /// Process one key event.
    ///
    /// # Errors
    /// Never returns an error; the signature matches the event loop.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char('g') | KeyCode::Home => self.select_first(),
            KeyCode::Char('G') | KeyCode::End => self.select_last(),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('l') | KeyCode::Right => {
                self.toggle_selected();
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Esc => self.collapse(),
            _ => {}
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    fn select_next(&mut self) {
        let len = self.orders.len();
        if len == 0 {
            return;
        }
        let i = self
            .table_state
            .selected()
            .map_or(0, |i| if i + 1 >= len { len - 1 } else { i + 1 });
        self.table_state.select(Some(i));
    }

    fn select_prev(&mut self) {
        let len = self.orders.len();
        if len == 0 {
            return;
        }
        let i = self
            .table_state
            .selected()
            .map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(i));
    }

    fn select_first(&mut self) {
        if !self.orders.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn select_last(&mut self) {
        let len = self.orders.len();
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    /// Currently selected order (if any).
    #[must_use]
    pub fn selected_order(&self) -> Option<&Order> {
        self.table_state
            .selected()
            .and_then(|i| self.orders.get(i))
    }

    // -----------------------------------------------------------------------
    // Expansion
    // -----------------------------------------------------------------------

    fn toggle_selected(&mut self) {
        let Some(order) = self.selected_order() else {
            return;
        };
        let id = order.id;
        let number = order.number.clone();
        self.expansion.toggle(id);
        if self.expansion.is_expanded(id) {
            self.set_status(format!("Expanded #{number}"));
        } else {
            self.set_status(format!("Collapsed #{number}"));
        }
    }

    fn collapse(&mut self) {
        self.expansion.collapse();
    }

    /// The expanded order, if its id still matches one in the list. An id
    /// with no match renders no detail.
    fn expanded_order(&self) -> Option<&Order> {
        self.expansion
            .expanded()
            .and_then(|id| self.orders.iter().find(|order| order.id == id))
    }

    fn detail_open(&self) -> bool {
        self.expanded_order().is_some()
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_msg = Some((msg, Instant::now()));
    }

    /// Returns true if the view has been asked to quit (e.g. 'q' key).
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Render the view into `area` within the given frame.
    pub fn render(&mut self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        render_into(frame, self, area);
    }
}

// ---------------------------------------------------------------------------
// Style helpers
// ---------------------------------------------------------------------------

fn category_color(category: StatusCategory) -> Color {
    match category {
        StatusCategory::Success => Color::Green,
        StatusCategory::Info => Color::Cyan,
        StatusCategory::Warning => Color::Yellow,
        StatusCategory::Caution => Color::Magenta,
        StatusCategory::Error => Color::Red,
        StatusCategory::Neutral => Color::White,
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_chars {
        s.to_string()
    } else if max_chars == 0 {
        String::new()
    } else {
        let truncated: String = chars[..max_chars.saturating_sub(1)].iter().collect();
        format!("{truncated}…")
    }
}

/// Build one table `Row` from an `Order`.
fn build_order_row(order: &Order, expanded: bool, width: u16) -> Row<'static> {
    let marker = if expanded { "▾ " } else { "▸ " };
    let number = format!("#{}", order.number);
    let total = order.total_display();
    let used = marker.chars().count()
        + number.chars().count()
        + order.date.chars().count()
        + total.chars().count()
        + 6;
    let status_budget = (width as usize).saturating_sub(used).max(4);
    let status = truncate(&order.status, status_budget);

    let cell = Cell::from(Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::DarkGray)),
        Span::styled(
            number,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(order.date.clone(), Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(
            status,
            Style::default().fg(category_color(order.status_category())),
        ),
        Span::raw("  "),
        Span::styled(total, Style::default().fg(Color::White)),
    ]));
    Row::new([cell])
}

fn detail_lines(order: &Order) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.push(Line::from(vec![Span::styled(
        format!("Order #{}", order.number),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Date: ", Style::default().fg(Color::DarkGray)),
        Span::raw(order.date.clone()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            order.status.clone(),
            Style::default().fg(category_color(order.status_category())),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        format!("{:<24} {:>4} {:>10}", "Product", "Qty", "Total"),
        Style::default().fg(Color::DarkGray),
    )]));
    if order.items.is_empty() {
        lines.push(Line::from(vec![Span::styled(
            "(no items)",
            Style::default().fg(Color::DarkGray),
        )]));
    }
    for item in &order.items {
        lines.push(Line::from(vec![
            Span::raw(format!("{:<24} ", truncate(&item.name, 24))),
            Span::raw(format!("{:>4} ", item.quantity)),
            Span::raw(format!("{:>10}", item.total_display())),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:<24} {:>4} ", "Order Total", ""),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>10}", order.total_display()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines
}

fn render_detail_panel(frame: &mut ratatui::Frame<'_>, order: &Order, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Green))
        .title(format!(" Order #{} ", order.number))
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(detail_lines(order)).wrap(Wrap { trim: false }),
        inner,
    );
}

fn empty_state_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(vec![Span::styled(
            "No orders yet",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Your order history will appear here",
            Style::default().fg(Color::DarkGray),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Browse the storefront inventory to place your first order",
            Style::default().fg(Color::Cyan),
        )]),
    ]
}

fn render_empty_state(frame: &mut ratatui::Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Green))
        .title(" My Orders ")
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = empty_state_lines();
    let top_pad = inner.height.saturating_sub(lines.len() as u16) / 2;
    let mut padded: Vec<Line<'static>> = Vec::new();
    for _ in 0..top_pad {
        padded.push(Line::from(""));
    }
    padded.extend(lines);
    frame.render_widget(Paragraph::new(padded).alignment(Alignment::Center), inner);
}

fn render_into(frame: &mut ratatui::Frame<'_>, app: &mut OrdersView, area: Rect) {
    // Layout: content + status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let content_area = chunks[0];
    let status_area = chunks[1];

    let expanded = app.expanded_order().cloned();
    let show_detail = expanded.is_some();

    let content_chunks = if show_detail {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(SPLIT_PERCENT),
                Constraint::Percentage(100 - SPLIT_PERCENT),
            ])
            .split(content_area)
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(100), Constraint::Percentage(0)])
            .split(content_area)
    };

    let table_area = content_chunks[0];
    let detail_area = content_chunks[1];
    app.list_area = table_area;

    if app.orders.is_empty() {
        render_empty_state(frame, table_area);
    } else {
        let body_width = table_area.width.saturating_sub(4).max(10);
        let widths = [Constraint::Min(10)];
        let rows: Vec<Row<'static>> = app
            .orders
            .iter()
            .map(|order| {
                build_order_row(order, app.expansion.is_expanded(order.id), body_width)
            })
            .collect();

        let block_title = format!(" My Orders — {} orders ", app.orders.len());
        let list_border_style = if show_detail {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };
        let list_title_style = if show_detail {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let table = Table::new(rows, widths)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(list_border_style)
                    .title(block_title)
                    .title_style(list_title_style),
            )
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(" ");

        frame.render_stateful_widget(table, table_area, &mut app.table_state);
    }

    if let Some(ref order) = expanded {
        if detail_area.width > 0 {
            render_detail_panel(frame, order, detail_area);
        }
    }

    let status_text = build_status_bar(app, status_area.width);
    let status_paragraph = Paragraph::new(status_text).alignment(Alignment::Left);
    frame.render_widget(status_paragraph, status_area);
}

/// Build the status bar line.
fn build_status_bar(app: &OrdersView, width: u16) -> Line<'static> {
    // Show a transient status message if recent (< 3 seconds).
    if let Some((ref msg, at)) = app.status_msg {
        if at.elapsed() < Duration::from_secs(3) {
            return Line::from(vec![Span::styled(
                msg.clone(),
                Style::default().fg(Color::Cyan),
            )]);
        }
    }

    let key_style = Style::default().fg(Color::Cyan);
    let dim_style = Style::default().fg(Color::DarkGray);

    let hints = if app.detail_open() {
        vec![
            ("j/k", "nav"),
            ("enter", "collapse"),
            ("h/esc", "close"),
            ("q", "quit"),
        ]
    } else {
        vec![
            ("j/k", "nav"),
            ("g/G", "top/bottom"),
            ("enter", "expand"),
            ("q", "quit"),
        ]
    };

    let mut spans: Vec<Span<'static>> = Vec::new();
    for (key, desc) in &hints {
        spans.push(Span::styled((*key).to_string(), key_style));
        spans.push(Span::styled(format!(" {desc}  "), dim_style));
    }

    let version = format!("shopfront {}", env!("CARGO_PKG_VERSION"));
    let left_len: usize = spans.iter().map(|span| span.content.chars().count()).sum();
    let right_len = version.chars().count();
    if (width as usize) > left_len + right_len + 1 {
        spans.push(Span::raw(" ".repeat(width as usize - left_len - right_len)));
    } else {
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(version, dim_style));

    Line::from(spans)
}
