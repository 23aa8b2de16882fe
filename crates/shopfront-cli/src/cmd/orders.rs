//! `sf orders` — render the account's order history.
//!
//! Rows come out in exactly the order the payload supplied them. `--open`
//! is the non-interactive projection of the expansion machine: the matching
//! order also emits its line items, any other id is a no-op.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use shopfront_core::expand::ExpansionState;
use shopfront_core::model::{Order, OrderId};
use shopfront_core::payload::OrdersPayload;

use crate::output::{self, OutputMode, Renderable};

/// Arguments for `sf orders`.
#[derive(Args, Debug)]
pub struct OrdersArgs {
    /// Render with this order expanded to show its line items
    #[arg(long, value_name = "ID")]
    pub open: Option<OrderId>,
}

/// One order as emitted by `sf orders`.
#[derive(Debug, Serialize)]
struct OrderRow {
    id: OrderId,
    number: String,
    date: String,
    status: String,
    status_category: String,
    total: f64,
    total_display: String,
    expanded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Vec<ItemRow>>,
}

/// One line item, present only on the expanded order.
#[derive(Debug, Serialize)]
struct ItemRow {
    name: String,
    quantity: u32,
    total: f64,
    total_display: String,
}

/// Run `sf orders`.
///
/// # Errors
/// Returns an error only if writing to stdout fails.
pub fn run_orders(args: &OrdersArgs, output: OutputMode, payload: &OrdersPayload) -> Result<()> {
    let mut expansion = ExpansionState::new();
    if let Some(id) = args.open {
        expansion.toggle(id);
    }
    let rows = build_rows(&payload.orders, &expansion);
    match output {
        OutputMode::Pretty => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            render_orders_pretty(&rows, &mut out)?;
        }
        OutputMode::Text | OutputMode::Json => output::render_list(&rows, output)?,
    }
    Ok(())
}

fn build_rows(orders: &[Order], expansion: &ExpansionState) -> Vec<OrderRow> {
    orders
        .iter()
        .map(|order| {
            let expanded = expansion.is_expanded(order.id);
            OrderRow {
                id: order.id,
                number: order.number.clone(),
                date: order.date.clone(),
                status: order.status.clone(),
                status_category: order.status_category().to_string(),
                total: order.total,
                total_display: order.total_display(),
                expanded,
                items: expanded.then(|| {
                    order
                        .items
                        .iter()
                        .map(|item| ItemRow {
                            name: item.name.clone(),
                            quantity: item.quantity,
                            total: item.total,
                            total_display: item.total_display(),
                        })
                        .collect()
                }),
            }
        })
        .collect()
}

fn render_orders_pretty(rows: &[OrderRow], w: &mut dyn Write) -> io::Result<()> {
    output::pretty_section(w, "My Orders")?;
    writeln!(w, "View your order history")?;
    writeln!(w)?;
    if rows.is_empty() {
        writeln!(w, "No orders yet")?;
        writeln!(w, "Your order history will appear here")?;
        writeln!(w)?;
        writeln!(w, "Browse the storefront inventory to place your first order")?;
        return Ok(());
    }
    for row in rows {
        row.render_human(w)?;
    }
    Ok(())
}

impl Renderable for OrderRow {
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
        let marker = if self.expanded { "▾" } else { "▸" };
        writeln!(
            w,
            "{marker} #{}  {}  {}  {}",
            self.number, self.date, self.status, self.total_display
        )?;
        if let Some(ref items) = self.items {
            writeln!(w)?;
            writeln!(w, "  {:<30} {:>5} {:>10}", "Product", "Qty", "Total")?;
            for item in items {
                writeln!(
                    w,
                    "  {:<30} {:>5} {:>10}",
                    item.name, item.quantity, item.total_display
                )?;
            }
            writeln!(w, "  {:<30} {:>5} {:>10}", "Order Total", "", self.total_display)?;
            writeln!(w)?;
        }
        Ok(())
    }

    fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer(&mut *w, self).map_err(io::Error::from)?;
        writeln!(w)
    }

    fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(
            w,
            "{}\t#{}\t{}\t{}\t{}\t{}",
            self.id, self.number, self.date, self.status, self.status_category, self.total_display
        )
    }

    fn table_headers() -> &'static [&'static str] {
        &["ID", "NUMBER", "DATE", "STATUS", "CATEGORY", "TOTAL"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use shopfront_core::model::OrderItem;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: OrdersArgs,
    }

    fn make_orders() -> Vec<Order> {
        vec![
            Order {
                id: 1,
                number: "1001".to_string(),
                date: "July 14, 2025".to_string(),
                status: "Processing".to_string(),
                total: 129.5,
                items: vec![OrderItem {
                    name: "Widget".to_string(),
                    quantity: 2,
                    total: 129.5,
                }],
            },
            Order {
                id: 2,
                number: "1002".to_string(),
                date: "July 20, 2025".to_string(),
                status: "completed".to_string(),
                total: 45.0,
                items: vec![],
            },
        ]
    }

    #[test]
    fn args_parse_without_open() {
        let wrapper = Wrapper::parse_from(["test"]);
        assert_eq!(wrapper.args.open, None);
    }

    #[test]
    fn args_parse_open_id() {
        let wrapper = Wrapper::parse_from(["test", "--open", "7"]);
        assert_eq!(wrapper.args.open, Some(7));
    }

    #[test]
    fn rows_preserve_payload_order() {
        let rows = build_rows(&make_orders(), &ExpansionState::new());
        let numbers: Vec<&str> = rows.iter().map(|r| r.number.as_str()).collect();
        assert_eq!(numbers, vec!["1001", "1002"]);
    }

    #[test]
    fn open_marks_exactly_one_row_expanded() {
        let mut expansion = ExpansionState::new();
        expansion.toggle(1);
        let rows = build_rows(&make_orders(), &expansion);
        assert!(rows[0].expanded);
        assert!(!rows[1].expanded);
        assert_eq!(rows[0].items.as_ref().map(Vec::len), Some(1));
        assert!(rows[1].items.is_none());
    }

    #[test]
    fn open_with_unknown_id_is_vacuous() {
        let mut expansion = ExpansionState::new();
        expansion.toggle(404);
        let rows = build_rows(&make_orders(), &expansion);
        assert!(rows.iter().all(|r| !r.expanded && r.items.is_none()));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn pretty_output_lists_orders() {
        let rows = build_rows(&make_orders(), &ExpansionState::new());
        let mut buf = Vec::new();
        render_orders_pretty(&rows, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("My Orders"), "missing header");
        assert!(out.contains("View your order history"), "missing subtitle");
        assert!(out.contains("#1001"), "missing order number");
        assert!(out.contains("$129.50"), "missing formatted total");
        assert!(out.contains("Processing"), "missing raw status");
    }

    #[test]
    fn pretty_empty_state_has_call_to_action() {
        let mut buf = Vec::new();
        render_orders_pretty(&[], &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("No orders yet"), "missing empty headline");
        assert!(
            out.contains("Your order history will appear here"),
            "missing empty body"
        );
        assert!(out.contains("Browse the storefront"), "missing call to action");
    }

    #[test]
    fn expanded_pretty_shows_item_table() {
        let mut expansion = ExpansionState::new();
        expansion.toggle(1);
        let rows = build_rows(&make_orders(), &expansion);
        let mut buf = Vec::new();
        render_orders_pretty(&rows, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Product"), "missing item header");
        assert!(out.contains("Qty"), "missing qty header");
        assert!(out.contains("Widget"), "missing item name");
        assert!(out.contains("Order Total"), "missing total footer");
    }

    #[test]
    fn json_row_carries_category_and_display_total() {
        let mut expansion = ExpansionState::new();
        expansion.toggle(1);
        let rows = build_rows(&make_orders(), &expansion);
        let mut buf = Vec::new();
        rows[0].render_json(&mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["status_category"], "info");
        assert_eq!(value["total_display"], "$129.50");
        assert_eq!(value["items"][0]["name"], "Widget");
        assert_eq!(value["items"][0]["quantity"], 2);
    }

    #[test]
    fn collapsed_json_row_omits_items() {
        let rows = build_rows(&make_orders(), &ExpansionState::new());
        let mut buf = Vec::new();
        rows[0].render_json(&mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(value.get("items").is_none());
        assert_eq!(value["expanded"], false);
    }

    #[test]
    fn table_row_matches_header_order() {
        let rows = build_rows(&make_orders(), &ExpansionState::new());
        let mut buf = Vec::new();
        rows[1].render_table(&mut buf).unwrap();
        let line = String::from_utf8(buf).unwrap();
        let fields: Vec<&str> = line.trim_end().split('\t').collect();
        assert_eq!(fields.len(), OrderRow::table_headers().len());
        assert_eq!(fields[1], "#1002");
        assert_eq!(fields[4], "success");
        assert_eq!(fields[5], "$45.00");
    }
}
