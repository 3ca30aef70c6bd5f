//! Selection controller.
//!
//! Owns every user choice plus the fetched catalog and the derived list of
//! available skips. Each mutation is followed by [`SelectionController::reconcile`],
//! which re-establishes the invariants views rely on:
//!
//! 1. the band is `none` whenever no waste type is selected,
//! 2. the available list matches the current waste types and catalog,
//! 3. a selected skip is always a member (by id) of the available list.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::action::SelectionAction;
use crate::band::PercentageBand;
use crate::error::CatalogError;
use crate::filter::available_skips;
use crate::skip::SkipOption;
use crate::waste::WasteType;

/// User choices. Reset to [`Default`] when the popup closes.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub waste_types: BTreeSet<WasteType>,
    pub percentage: PercentageBand,
    pub skip: Option<SkipOption>,
    pub popup_open: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            waste_types: BTreeSet::new(),
            percentage: PercentageBand::None,
            skip: None,
            popup_open: true,
        }
    }
}

/// Progress of the catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Holds selection state, the cached catalog and its derived view.
#[derive(Debug, Clone)]
pub struct SelectionController {
    state: SelectionState,
    catalog: Vec<SkipOption>,
    status: CatalogStatus,
    /// Identifies the latest fetch; older results are dropped.
    generation: u64,
    available: Vec<SkipOption>,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    /// Create a controller with an open popup and a pending catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SelectionState::default(),
            catalog: Vec::new(),
            status: CatalogStatus::Loading,
            generation: 0,
            available: Vec::new(),
        }
    }

    /// Create a controller whose catalog is already loaded.
    #[must_use]
    pub fn with_catalog(catalog: Vec<SkipOption>) -> Self {
        let mut controller = Self::new();
        controller.catalog = catalog;
        controller.status = CatalogStatus::Ready;
        controller.reconcile();
        controller
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub fn waste_types(&self) -> &BTreeSet<WasteType> {
        &self.state.waste_types
    }

    #[must_use]
    pub fn percentage(&self) -> PercentageBand {
        self.state.percentage
    }

    #[must_use]
    pub fn selected_skip(&self) -> Option<&SkipOption> {
        self.state.skip.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.popup_open
    }

    #[must_use]
    pub fn catalog(&self) -> &[SkipOption] {
        &self.catalog
    }

    #[must_use]
    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }

    /// Error message to show in place of the skip grid, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            CatalogStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Skips offered for the current selection, smallest first.
    #[must_use]
    pub fn available_skips(&self) -> &[SkipOption] {
        &self.available
    }

    /// Apply a user action.
    pub fn apply(&mut self, action: SelectionAction) {
        match action {
            SelectionAction::ToggleWasteType(waste) => self.toggle_waste_type(waste),
            SelectionAction::SelectPercentage(band) => self.select_percentage(band),
            SelectionAction::SelectSkip(skip) => self.select_skip(skip),
            SelectionAction::ClosePopup => self.close_popup(),
            SelectionAction::ReopenPopup => self.reopen_popup(),
        }
    }

    /// Add the waste type if absent, remove it if present.
    ///
    /// Declaring a waste type while the band is `none` moves the band to
    /// `low`.
    pub fn toggle_waste_type(&mut self, waste: WasteType) {
        if !self.state.waste_types.remove(&waste) {
            debug!(%waste, "waste type added");
            self.state.waste_types.insert(waste);
        }
        self.reconcile();
    }

    /// Set the band. Bands other than `none` are ignored until a waste type
    /// is selected, and `none` falls back to `low` while one is.
    pub fn select_percentage(&mut self, band: PercentageBand) {
        if !self.band_enabled(band) {
            debug!(%band, "band ignored, no heavy waste type selected");
            return;
        }
        self.state.percentage = band;
        self.reconcile();
    }

    /// Select a skip. A skip outside the available list does not stick.
    pub fn select_skip(&mut self, skip: SkipOption) {
        self.state.skip = Some(skip);
        self.reconcile();
    }

    /// Select the available skip with the given id. Returns whether one matched.
    pub fn select_skip_by_id(&mut self, id: u64) -> bool {
        match self.available.iter().find(|s| s.id == id).cloned() {
            Some(skip) => {
                self.select_skip(skip);
                true
            }
            None => false,
        }
    }

    /// Hide the popup and discard every choice.
    pub fn close_popup(&mut self) {
        self.state = SelectionState {
            popup_open: false,
            ..SelectionState::default()
        };
        self.reconcile();
    }

    /// Show the popup again. Choices stay at their defaults.
    pub fn reopen_popup(&mut self) {
        self.state.popup_open = true;
        self.reconcile();
    }

    /// Whether a fresh fetch should be started, i.e. the last one failed.
    #[must_use]
    pub fn needs_fetch(&self) -> bool {
        matches!(self.status, CatalogStatus::Failed(_))
    }

    /// Mark a new fetch as in flight and return its generation.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.status = CatalogStatus::Loading;
        self.catalog.clear();
        self.reconcile();
        info!(generation = self.generation, "skip catalog fetch started");
        self.generation
    }

    /// Record the outcome of fetch `generation`.
    ///
    /// Returns `false` when the result belongs to a superseded fetch and was
    /// dropped.
    pub fn apply_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<SkipOption>, CatalogError>,
    ) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "dropping stale catalog result"
            );
            return false;
        }
        match result {
            Ok(catalog) => {
                info!(count = catalog.len(), "skip catalog loaded");
                self.catalog = catalog;
                self.status = CatalogStatus::Ready;
            }
            Err(err) => {
                warn!(error = %err, "skip catalog fetch failed");
                self.catalog.clear();
                self.status = CatalogStatus::Failed(err.user_message().to_string());
            }
        }
        self.reconcile();
        true
    }

    /// Re-establish the selection invariants after a mutation.
    pub fn reconcile(&mut self) {
        if self.state.waste_types.is_empty() {
            if !self.state.percentage.is_none() {
                debug!("no heavy waste type selected, band reset to none");
                self.state.percentage = PercentageBand::None;
            }
        } else if self.state.percentage.is_none() {
            debug!("heavy waste type selected, band set to low");
            self.state.percentage = PercentageBand::Low;
        }

        self.available = available_skips(&self.catalog, !self.state.waste_types.is_empty());

        if let Some(skip) = &self.state.skip {
            if !self.available.iter().any(|s| s.id == skip.id) {
                debug!(skip_id = skip.id, "selected skip no longer available");
                self.state.skip = None;
            }
        }
    }

    /// Whether the skip grid is shown at all.
    #[must_use]
    pub fn show_skip_sizes(&self) -> bool {
        !self.state.percentage.is_none()
    }

    /// Whether `band` can be picked right now.
    #[must_use]
    pub fn band_enabled(&self, band: PercentageBand) -> bool {
        band.is_none() || !self.state.waste_types.is_empty()
    }

    /// Whether the Continue action is available.
    #[must_use]
    pub fn continue_enabled(&self) -> bool {
        self.state.skip.is_some() && self.status == CatalogStatus::Ready
    }

    /// Price including VAT of the selected skip.
    #[must_use]
    pub fn total_price(&self) -> Option<f64> {
        self.state.skip.as_ref().map(SkipOption::total_price)
    }
}
