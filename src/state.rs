use crate::repository::Repositories;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub repos: Repositories,
    pub sessions: SessionStore,
    pub orders_page_size: i64,
}

impl AppState {
    pub fn new(repos: Repositories, orders_page_size: i64) -> Self {
        Self {
            repos,
            sessions: SessionStore::new(),
            orders_page_size,
        }
    }
}
