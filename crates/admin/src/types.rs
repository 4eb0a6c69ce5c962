//! Back-office wire types.

use chrono::{DateTime, Utc};
use rigstore_core::{OrderId, OrderStatus, PaymentStatus, UserId, UserRole};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An order as listed in the back office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id")]
    pub id: OrderId,
    /// Customer reference: an id string or an embedded user document.
    #[serde(default)]
    pub user: Option<serde_json::Value>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    #[serde(default)]
    pub order_status: OrderStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product reference: an id string or an embedded product document.
    #[serde(default)]
    pub product: Option<serde_json::Value>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// Body of `PATCH /orders/admin/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub order_status: OrderStatus,
    /// Left unchanged when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
}

impl StatusUpdate {
    #[must_use]
    pub const fn new(order_status: OrderStatus) -> Self {
        Self {
            order_status,
            payment_status: None,
        }
    }

    #[must_use]
    pub const fn with_payment(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = Some(payment_status);
        self
    }

    /// Apply this update to a local copy of an order.
    pub const fn apply(&self, order: &mut Order) {
        order.order_status = self.order_status;
        if let Some(payment_status) = self.payment_status {
            order.payment_status = payment_status;
        }
    }
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `PUT /products/{id}`; only the fields that are set are sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Body of `PATCH /products/{id}/discount`.
///
/// With a price the discount is applied; without one it is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Decimal>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_status_update_omits_missing_payment() {
        let update = StatusUpdate::new(OrderStatus::Shipped);
        assert_eq!(serde_json::to_value(update).unwrap(), json!({"orderStatus": "shipped"}));

        let update = update.with_payment(PaymentStatus::Paid);
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            json!({"orderStatus": "shipped", "paymentStatus": "paid"})
        );
    }

    #[test]
    fn test_status_update_apply_keeps_payment_when_absent() {
        let mut order: Order = serde_json::from_value(json!({
            "_id": "o1",
            "orderStatus": "pending",
            "paymentStatus": "paid"
        }))
        .unwrap();

        StatusUpdate::new(OrderStatus::Processing).apply(&mut order);
        assert_eq!(order.order_status, OrderStatus::Processing);
        assert_eq!(order.payment_status, PaymentStatus::Paid);

        StatusUpdate::new(OrderStatus::Cancelled)
            .with_payment(PaymentStatus::Refunded)
            .apply(&mut order);
        assert_eq!(order.payment_status, PaymentStatus::Refunded);
    }

    #[test]
    fn test_order_accepts_embedded_references() {
        let order: Order = serde_json::from_value(json!({
            "_id": "o2",
            "user": {"_id": "u1", "name": "Sam"},
            "items": [{"product": "p1", "quantity": 2, "price": 49.5}],
            "totalAmount": 99,
            "createdAt": "2024-03-02T08:00:00Z"
        }))
        .unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.order_status, OrderStatus::Pending);
    }

    #[test]
    fn test_discount_update_body() {
        assert_eq!(serde_json::to_value(DiscountUpdate::default()).unwrap(), json!({}));
        let body = DiscountUpdate {
            discount_price: Some(Decimal::from(199)),
        };
        assert_eq!(serde_json::to_value(body).unwrap(), json!({"discountPrice": "199"}));
    }
}
