//! Order records as supplied by the host payload.
//!
//! Orders arrive fully formed: the client renders them and never mutates,
//! revalidates, or persists them. Dates are opaque display strings and
//! totals are trusted upstream.

use serde::{Deserialize, Serialize};

use crate::model::status::StatusCategory;
use crate::money;

/// Host-assigned order identifier, unique within one payload.
pub type OrderId = u64;

/// A single line item within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product name as it should appear in the item table.
    pub name: String,
    /// Units ordered.
    pub quantity: u32,
    /// Line total for this item.
    pub total: f64,
}

impl OrderItem {
    /// Line total formatted for display.
    #[must_use]
    pub fn total_display(&self) -> String {
        money::format_amount(self.total)
    }
}

/// One order in the account's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Identifier used for expansion tracking.
    pub id: OrderId,
    /// Customer-facing order number, shown as `#number`.
    pub number: String,
    /// Placement date, displayed verbatim.
    pub date: String,
    /// Raw status string; interpreted only through classification.
    pub status: String,
    /// Order total.
    pub total: f64,
    /// Line items, shown when the order is expanded.
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Visual category for this order's status string.
    #[must_use]
    pub fn status_category(&self) -> StatusCategory {
        StatusCategory::classify(&self.status)
    }

    /// Order total formatted for display.
    #[must_use]
    pub fn total_display(&self) -> String {
        money::format_amount(self.total)
    }

    /// Number of line items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_order() -> Order {
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
        }
    }

    #[test]
    fn order_json_roundtrips() {
        let order = make_order();
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn missing_items_parses_as_empty() {
        let json = r#"{"id":7,"number":"1007","date":"Aug 1","status":"pending","total":0.0}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.item_count(), 0);
        assert!(order.items.is_empty());
    }

    #[test]
    fn status_category_follows_status() {
        let mut order = make_order();
        assert_eq!(order.status_category(), StatusCategory::Info);
        order.status = "Completed".to_string();
        assert_eq!(order.status_category(), StatusCategory::Success);
        order.status = "something-else".to_string();
        assert_eq!(order.status_category(), StatusCategory::Neutral);
    }

    #[test]
    fn totals_format_with_two_decimals() {
        let order = make_order();
        assert_eq!(order.total_display(), "$129.50");
        assert_eq!(order.items[0].total_display(), "$129.50");
    }

    #[test]
    fn date_is_preserved_verbatim() {
        let order = make_order();
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back.date, "July 14, 2025");
    }
}
