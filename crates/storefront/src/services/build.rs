//! PC-build session.
//!
//! A [`BuildSession`] owns the shopper's [`BuildSelection`], the product list
//! the component picker draws from, the picker state, and the cancellation
//! scope for committing the build to the cart.
//!
//! Committing adds one unit per filled slot, strictly one request at a time
//! in slot order. It is not atomic: if the third add fails, the first two
//! stay in the cart and the error says so.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use rigstore_core::build::{BuildSelection, Slot, component_candidates};
use rigstore_core::{Product, ProductId};
use rust_decimal::Decimal;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use crate::api::ApiError;
use crate::error::{Result, StoreError};
use crate::source::{CartSink, CatalogSource};

// =============================================================================
// Commit outcome
// =============================================================================

/// Why a build commit stopped early.
#[derive(Debug, Error)]
pub enum CommitFailure {
    /// The cart rejected one component.
    #[error("failed to add {slot} to cart: {source}")]
    Sink {
        /// Slot whose product could not be added.
        slot: Slot,
        #[source]
        source: ApiError,
    },

    /// The commit was cancelled before every component was added.
    #[error("build commit cancelled")]
    Cancelled,
}

/// A build commit that stopped part way.
///
/// `committed` lists the slots whose products already reached the cart; they
/// are not rolled back.
#[derive(Debug, Error)]
#[error("Failed to add all components to cart ({} added): {failure}", .committed.len())]
pub struct CommitError {
    /// Slots added before the failure, in commit order.
    pub committed: Vec<Slot>,
    /// What stopped the commit.
    #[source]
    pub failure: CommitFailure,
}

impl CommitError {
    /// The slot that failed, if the cart rejected one.
    #[must_use]
    pub const fn failed_slot(&self) -> Option<Slot> {
        match &self.failure {
            CommitFailure::Sink { slot, .. } => Some(*slot),
            CommitFailure::Cancelled => None,
        }
    }

    /// Whether the commit was cancelled rather than rejected.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self.failure, CommitFailure::Cancelled)
    }
}

/// A build that reached the cart in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReport {
    /// Slots added, in commit order.
    pub committed: Vec<Slot>,
    /// Build total at the time of the commit.
    pub total: Decimal,
}

/// Add every selected component to the cart, one at a time in slot order.
///
/// `cancel` is checked before each request; once it fires no further
/// requests are issued. A request already in flight is allowed to finish.
///
/// # Errors
///
/// Returns `StoreError::Validation` if processor or motherboard is missing
/// (nothing is sent), and `StoreError::Commit` if a request fails or the
/// commit is cancelled.
#[instrument(skip_all, fields(components = selection.len()))]
pub async fn commit_build_to_cart<S>(
    selection: &BuildSelection,
    sink: &S,
    cancel: &CancellationToken,
) -> Result<CommitReport>
where
    S: CartSink + ?Sized,
{
    selection.validate()?;

    let mut committed = Vec::with_capacity(selection.len());
    for (slot, product) in selection.selected() {
        if cancel.is_cancelled() {
            warn!(committed = committed.len(), "Build commit cancelled");
            return Err(CommitError {
                committed,
                failure: CommitFailure::Cancelled,
            }
            .into());
        }

        if let Err(source) = sink.add_to_cart(&product.id, 1).await {
            error!(
                %slot,
                product_id = %product.id,
                committed = committed.len(),
                error = %source,
                "Failed to add build component to cart"
            );
            return Err(CommitError {
                committed,
                failure: CommitFailure::Sink { slot, source },
            }
            .into());
        }
        debug!(%slot, product_id = %product.id, "Build component added to cart");
        committed.push(slot);
    }

    let total = selection.compute_total();
    info!(components = committed.len(), %total, "PC build added to cart");
    Ok(CommitReport { committed, total })
}

// =============================================================================
// BuildSession
// =============================================================================

/// Clears the in-flight flag when the commit future finishes or is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One shopper's PC-build configurator state.
///
/// Each commit runs under its own child of the session token, so
/// [`cancel`](Self::cancel) stops only the running commit. Dropping the
/// session cancels the session token and with it any commit still running.
#[derive(Debug, Default)]
pub struct BuildSession {
    selection: BuildSelection,
    products: Vec<Product>,
    active_picker: Option<Slot>,
    picker_search: String,
    adding_to_cart: AtomicBool,
    cancel: CancellationToken,
    running_commit: Mutex<Option<CancellationToken>>,
}

impl BuildSession {
    /// An empty session with no products loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty session whose picker draws from `products`.
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        let mut session = Self::default();
        session.products = products;
        session
    }

    /// Load the picker's product list from `source`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fetch` if the source fails; the previous list is
    /// kept.
    #[instrument(skip_all)]
    pub async fn load_products<S>(&mut self, source: &S) -> Result<()>
    where
        S: CatalogSource + ?Sized,
    {
        self.products = source.fetch_products().await?;
        debug!(count = self.products.len(), "Loaded products for build picker");
        Ok(())
    }

    /// Products available to the picker.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &BuildSelection {
        &self.selection
    }

    /// Total of the current selection, recomputed on every call.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.selection.compute_total()
    }

    /// Whether processor and motherboard are both selected.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.selection.is_valid()
    }

    /// Every slot in order with its selection, for rendering.
    pub fn slot_lines(&self) -> impl Iterator<Item = (Slot, Option<&Product>)> {
        Slot::ALL.into_iter().map(|slot| (slot, self.selection.get(slot)))
    }

    // -------------------------------------------------------------------------
    // Component picker
    // -------------------------------------------------------------------------

    /// Open the picker for `slot`, clearing any previous search term.
    pub fn open_picker(&mut self, slot: Slot) {
        self.picker_search.clear();
        self.active_picker = Some(slot);
    }

    /// Close the picker and clear its search term.
    pub fn close_picker(&mut self) {
        self.active_picker = None;
        self.picker_search.clear();
    }

    /// Slot the picker is open for.
    #[must_use]
    pub const fn active_picker(&self) -> Option<Slot> {
        self.active_picker
    }

    /// Narrow the open picker's candidates to `term`.
    pub fn set_picker_search(&mut self, term: impl Into<String>) {
        self.picker_search = term.into();
    }

    /// Current picker search term.
    #[must_use]
    pub fn picker_search(&self) -> &str {
        &self.picker_search
    }

    /// Products the open picker offers; empty when no picker is open.
    #[must_use]
    pub fn candidates(&self) -> Vec<&Product> {
        self.active_picker.map_or_else(Vec::new, |slot| {
            component_candidates(&self.products, slot, &self.picker_search)
        })
    }

    /// Put `product` in `slot` and close the picker.
    pub fn select(&mut self, slot: Slot, product: Product) {
        self.selection.add_selection(slot, product);
        self.close_picker();
    }

    /// Select a loaded product by id for the open picker's slot.
    ///
    /// Returns the slot that was filled, or `None` if no picker is open or
    /// the id is not among the picker's candidates.
    pub fn select_candidate(&mut self, product_id: &ProductId) -> Option<Slot> {
        let slot = self.active_picker?;
        let product = self
            .candidates()
            .into_iter()
            .find(|p| &p.id == product_id)
            .cloned()?;
        self.select(slot, product);
        Some(slot)
    }

    /// Clear `slot`, returning what it held.
    pub fn remove(&mut self, slot: Slot) -> Option<Product> {
        self.selection.remove_selection(slot)
    }

    // -------------------------------------------------------------------------
    // Cart commit
    // -------------------------------------------------------------------------

    /// Whether a commit is running.
    #[must_use]
    pub fn is_adding_to_cart(&self) -> bool {
        self.adding_to_cart.load(Ordering::Acquire)
    }

    /// Token cancelled when this session is torn down. Commits run under a
    /// child of it.
    #[must_use]
    pub const fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Cancel the running commit, if any.
    ///
    /// Returns whether a commit was running. Later commits are unaffected.
    pub fn cancel(&self) -> bool {
        let running = self.running_commit();
        if let Some(token) = running.as_ref() {
            debug!("Cancelling build commit");
            token.cancel();
            return true;
        }
        false
    }

    fn running_commit(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.running_commit.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Commit the current selection to the cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CommitInProgress` if another commit is running
    /// for this session, and otherwise whatever
    /// [`commit_build_to_cart`] returns.
    pub async fn commit<S>(&self, sink: &S) -> Result<CommitReport>
    where
        S: CartSink + ?Sized,
    {
        let Some(_guard) = InFlight::acquire(&self.adding_to_cart) else {
            warn!("Build commit already in progress");
            return Err(StoreError::CommitInProgress);
        };
        let token = self.cancel.child_token();
        *self.running_commit() = Some(token.clone());
        let result = commit_build_to_cart(&self.selection, sink, &token).await;
        *self.running_commit() = None;
        result
    }
}

impl Drop for BuildSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
