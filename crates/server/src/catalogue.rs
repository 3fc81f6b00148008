//! # Catalogue Session
//!
//! This module coordinates one catalogue view mount:
//! 1. Fetch the profile collection (single outstanding fetch, no retry)
//! 2. Hold the loading / failed / loaded tri-state
//! 3. Receive discrete filter, search, and reset events
//! 4. Recompute the visible listing through the listing engine on demand
//!
//! The session is the sole recovery point for a failed fetch: `reload`
//! is the manual retry affordance the view exposes. Filter criteria and
//! the search term live here, survive a reload, and reset together.

use listing::{compute_visible_list, CriteriaUpdate, FilterCriteria};
use directory::LawyerProfile;
use sources::{FetchError, ProfileSource};
use tracing::{info, warn};

/// Where one mount's single fetch currently stands.
#[derive(Debug)]
pub enum CatalogueState {
    /// The fetch is outstanding
    Loading,
    /// The fetch failed; terminal until the user asks for a reload
    Failed(FetchError),
    /// The collection arrived and is immutable for this mount
    Loaded(Vec<LawyerProfile>),
}

/// What the presentation layer should render right now.
///
/// The three variants are deliberately distinguishable: zero visible
/// matches renders as an empty `Listing`, never as `LoadFailed`.
#[derive(Debug)]
pub enum CatalogueView<'a> {
    Loading,
    LoadFailed { error: &'a FetchError },
    Listing {
        visible: Vec<LawyerProfile>,
        total: usize,
    },
}

/// One catalogue view mount: the fetched collection plus the
/// user-adjustable criteria and search term.
#[derive(Debug)]
pub struct CatalogueSession {
    state: CatalogueState,
    criteria: FilterCriteria,
    search_term: String,
}

impl CatalogueSession {
    /// A session that has not fetched yet.
    pub fn new() -> Self {
        Self {
            state: CatalogueState::Loading,
            criteria: FilterCriteria::default(),
            search_term: String::new(),
        }
    }

    /// Mount the catalogue: create a session and perform its single fetch.
    pub async fn mount(source: &dyn ProfileSource) -> Self {
        let mut session = Self::new();
        session.load(source).await;
        session
    }

    /// The manual retry affordance. Re-enters `Loading`, fetches again,
    /// and keeps the user's criteria and search term intact.
    pub async fn reload(&mut self, source: &dyn ProfileSource) {
        self.load(source).await;
    }

    async fn load(&mut self, source: &dyn ProfileSource) {
        self.state = CatalogueState::Loading;
        match source.fetch_profiles().await {
            Ok(profiles) => {
                info!(
                    "Loaded {} profiles from {}",
                    profiles.len(),
                    source.name()
                );
                self.state = CatalogueState::Loaded(profiles);
            }
            Err(error) => {
                warn!("Profile fetch from {} failed: {}", source.name(), error);
                self.state = CatalogueState::Failed(error);
            }
        }
    }

    /// Apply one discrete filter edit.
    pub fn set_filter(&mut self, update: CriteriaUpdate) {
        self.criteria.apply(update);
    }

    /// Replace the free-text search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Restore default criteria and clear the search term.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.search_term.clear();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn state(&self) -> &CatalogueState {
        &self.state
    }

    /// Render the tri-state. In the loaded state this runs a full
    /// filter/sort pass over the original collection — edits never mutate
    /// it, so every call starts from the same base.
    pub fn view(&self) -> CatalogueView<'_> {
        match &self.state {
            CatalogueState::Loading => CatalogueView::Loading,
            CatalogueState::Failed(error) => CatalogueView::LoadFailed { error },
            CatalogueState::Loaded(profiles) => CatalogueView::Listing {
                visible: compute_visible_list(profiles, &self.criteria, &self.search_term),
                total: profiles.len(),
            },
        }
    }
}

impl Default for CatalogueSession {
    fn default() -> Self {
        Self::new()
    }
}
