//! PC-build command.
//!
//! # Usage
//!
//! ```bash
//! # Price a build
//! rigstore build --file build.json
//!
//! # Price it and add every component to the cart
//! rigstore build --file build.json --commit
//! ```
//!
//! The build file maps slot names to product ids:
//!
//! ```json
//! { "processor": "65a1f0c3b2", "motherboard": "65a1f0d9e7", "ram1": "65a1f11a04" }
//! ```

use std::collections::BTreeMap;

use rigstore_core::build::Slot;
use rigstore_core::{Product, format_price};
use rigstore_storefront::StoreError;
use rigstore_storefront::services::BuildSession;
use rigstore_storefront::source::CatalogSource;

use super::{CommandError, connect};

/// Parse a build file into slot and product-id pairs.
fn parse_build_file(contents: &str) -> Result<Vec<(Slot, String)>, CommandError> {
    let raw: BTreeMap<String, String> = serde_json::from_str(contents)?;
    let mut entries = raw
        .into_iter()
        .map(|(slot, id)| Ok((slot.parse::<Slot>()?, id)))
        .collect::<Result<Vec<_>, CommandError>>()?;
    entries.sort_by_key(|(slot, _)| *slot);
    Ok(entries)
}

/// Fill a session from build-file entries using the loaded catalog.
fn fill_session(session: &mut BuildSession, entries: Vec<(Slot, String)>) -> Result<(), CommandError> {
    for (slot, id) in entries {
        let product = session
            .products()
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
            .ok_or_else(|| CommandError::UnknownProduct {
                slot: slot.to_string(),
                id,
            })?;
        session.select(slot, product);
    }
    Ok(())
}

/// Price a build and optionally commit it to the cart.
pub async fn run(path: &str, commit: bool) -> Result<(), CommandError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CommandError::Io {
        path: path.to_string(),
        source,
    })?;
    let entries = parse_build_file(&contents)?;

    let client = connect()?;
    let mut session = BuildSession::with_products(client.fetch_products().await?);
    fill_session(&mut session, entries)?;

    print_build(&session);

    if !commit {
        return Ok(());
    }

    // Ctrl-C stops the commit before the next component
    let token = session.cancellation_token().clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, stopping build commit");
            token.cancel();
        }
    });

    match session.commit(&client).await {
        Ok(report) => {
            tracing::info!(components = report.committed.len(), "PC Build added to cart!");
            Ok(())
        }
        Err(StoreError::Commit(err)) => {
            let added: Vec<&str> = err.committed.iter().map(Slot::label).collect();
            tracing::error!(
                failed = ?err.failed_slot(),
                added = %added.join(", "),
                "Build was only partly added to the cart"
            );
            Err(StoreError::Commit(err).into())
        }
        Err(other) => Err(other.into()),
    }
}

#[allow(clippy::print_stdout)]
fn print_build(session: &BuildSession) {
    for line in build_lines(session) {
        println!("{line}");
    }
    println!("Total: {}", format_price(session.total()));
    if session.is_valid() {
        println!("Build is complete.");
    } else if let Err(e) = session.selection().validate() {
        println!("{e}.");
    }
}

/// Slot lines grouped under their section headings.
fn build_lines(session: &BuildSession) -> Vec<String> {
    let mut lines = Vec::new();
    let mut section = None;
    for (slot, product) in session.slot_lines() {
        if section != Some(slot.section()) {
            section = Some(slot.section());
            lines.push(format!("== {} ==", slot.section().title()));
        }
        let marker = if slot.is_required() { "*" } else { " " };
        lines.push(format!("{marker} {:<14} {}", slot.label(), describe(product)));
    }
    lines
}

fn describe(product: Option<&Product>) -> String {
    product.map_or_else(
        || "-".to_string(),
        |p| {
            let price = p.effective_price().map_or_else(|| "-".to_string(), format_price);
            format!("{} ({price})", p.display_name())
        },
    )
}
