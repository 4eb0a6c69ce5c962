//! Back-office commands.
//!
//! # Usage
//!
//! ```bash
//! # List every order
//! rigstore admin orders
//!
//! # Show one order
//! rigstore admin orders --id 65b0c2f1a9
//!
//! # Mark an order shipped and paid
//! rigstore admin order-status --id 65b0c2f1a9 --status shipped --payment paid
//!
//! # List registered users
//! rigstore admin users
//! ```

use rigstore_admin::types::{Order, StatusUpdate};
use rigstore_admin::{OrderStore, UserList};
use rigstore_core::{OrderId, OrderStatus, PaymentStatus, format_price};

use super::{CommandError, connect};

/// List all orders, or show one.
pub async fn orders(id: Option<&str>) -> Result<(), CommandError> {
    let client = connect()?;
    let mut store = OrderStore::new();

    if let Some(id) = id {
        let order = store.fetch_order_details(&client, &OrderId::new(id)).await?;
        print_orders(std::slice::from_ref(order));
    } else {
        let orders = store.fetch_all_orders(&client).await?;
        print_orders(orders);
    }
    Ok(())
}

/// Change an order's status.
pub async fn order_status(id: &str, status: &str, payment: Option<&str>) -> Result<(), CommandError> {
    let update = parse_update(status, payment)?;
    let client = connect()?;
    let mut store = OrderStore::new();

    let order = store
        .update_order_status(&client, &OrderId::new(id), update)
        .await?;
    tracing::info!(
        order_id = %order.id,
        status = %order.order_status,
        payment = %order.payment_status,
        "Order status updated successfully!"
    );
    Ok(())
}

/// List registered users.
#[allow(clippy::print_stdout)]
pub async fn users() -> Result<(), CommandError> {
    let client = connect()?;
    let mut list = UserList::new();
    let users = list.fetch_all_users(&client).await?;

    for user in users {
        println!(
            "{:<26} {:<24} {:<32} {}",
            user.id,
            user.name.as_deref().unwrap_or("-"),
            user.email.as_deref().unwrap_or("-"),
            user.role
        );
    }
    Ok(())
}

fn parse_update(status: &str, payment: Option<&str>) -> Result<StatusUpdate, CommandError> {
    let order_status = status.parse::<OrderStatus>().map_err(CommandError::InvalidStatus)?;
    let mut update = StatusUpdate::new(order_status);
    if let Some(payment) = payment {
        update = update.with_payment(payment.parse::<PaymentStatus>().map_err(CommandError::InvalidStatus)?);
    }
    Ok(update)
}

#[allow(clippy::print_stdout)]
fn print_orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("No orders found.");
    }
    for order in orders {
        let total = order.total_amount.map_or_else(|| "-".to_string(), format_price);
        let placed = order
            .created_at
            .map_or_else(|| "-".to_string(), |at| at.format("%Y-%m-%d").to_string());
        println!(
            "{:<26} {placed:<10} {:<10} {:<9} {:>3} items {total}",
            order.id,
            order.order_status,
            order.payment_status,
            order.items.len()
        );
    }
}
