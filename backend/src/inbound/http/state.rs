//! Shared state for HTTP handlers.

use std::sync::Arc;

use crate::store::{DocumentStore, GalleryStore, PlanStore};

/// Store handles shared across HTTP workers.
///
/// Each accessor hands out an owned [`Arc`] so handlers can move the store
/// into a blocking closure without borrowing the request state.
#[derive(Clone)]
pub struct HttpState {
    documents: Arc<DocumentStore>,
    plan: Arc<PlanStore>,
    gallery: Arc<GalleryStore>,
}

impl HttpState {
    /// Bundle the three stores into shared request state.
    #[must_use]
    pub fn new(documents: DocumentStore, plan: PlanStore, gallery: GalleryStore) -> Self {
        Self {
            documents: Arc::new(documents),
            plan: Arc::new(plan),
            gallery: Arc::new(gallery),
        }
    }

    /// Handle on the PDF document store.
    #[must_use]
    pub fn documents(&self) -> Arc<DocumentStore> {
        Arc::clone(&self.documents)
    }

    /// Handle on the action plan store.
    #[must_use]
    pub fn plan(&self) -> Arc<PlanStore> {
        Arc::clone(&self.plan)
    }

    /// Handle on the photo gallery store.
    #[must_use]
    pub fn gallery(&self) -> Arc<GalleryStore> {
        Arc::clone(&self.gallery)
    }
}
