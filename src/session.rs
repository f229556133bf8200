use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::DraftOrder;

/// Holds each user's Open order between workflow steps. The draft is confined
/// to a single user's session, so there is no cross-session contention to
/// worry about; the workflow loads the value, mutates it, and stores it back.
#[derive(Clone, Default)]
pub struct SessionStore {
    drafts: Arc<RwLock<HashMap<Uuid, DraftOrder>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the user's current draft, or a fresh empty one if this is the
    /// session's first design interaction.
    pub async fn load(&self, user_id: Uuid) -> DraftOrder {
        self.drafts
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn store(&self, user_id: Uuid, draft: DraftOrder) {
        self.drafts.write().await.insert(user_id, draft);
    }

    /// Drops the draft after a successful checkout; the next interaction gets
    /// a fresh Open order from `load`.
    pub async fn discard(&self, user_id: Uuid) {
        self.drafts.write().await.remove(&user_id);
    }
}
