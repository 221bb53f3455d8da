use std::sync::Arc;

use crate::chain::oracle::LedgerOracle;
use crate::config::ActionConfig;
use crate::store::GameStore;

/// Application state containing shared resources.
///
/// Everything in here is immutable or internally synchronized; request
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: ActionConfig,
    pub store: Arc<dyn GameStore>,
    pub oracle: Arc<dyn LedgerOracle>,
}

impl AppState {
    pub fn new(
        config: ActionConfig,
        store: Arc<dyn GameStore>,
        oracle: Arc<dyn LedgerOracle>,
    ) -> Self {
        Self {
            config,
            store,
            oracle,
        }
    }
}
