#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error as ActixError};
use async_trait::async_trait;
use backend::chain::oracle::{CommitmentTier, LedgerOracle, SignatureStatus};
use backend::config::ActionConfig;
use backend::domain::GameRecord;
use backend::error::AppError;
use backend::state::AppState;
use backend::store::MemoryGameStore;
use solana_sdk::hash::Hash;

// Logging is auto-installed for test binaries
#[ctor::ctor]
fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(tracing_subscriber::EnvFilter::new)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// Ledger oracle stub with canned signature statuses.
///
/// Counts blockhash requests so tests can assert that every build
/// fetches a fresh reference blockhash.
pub struct StubOracle {
    pub blockhash: Hash,
    pub statuses: HashMap<String, SignatureStatus>,
    pub blockhash_calls: AtomicUsize,
}

impl StubOracle {
    pub fn empty() -> Self {
        Self {
            blockhash: Hash::new_unique(),
            statuses: HashMap::new(),
            blockhash_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_status(signature: &str, tier: CommitmentTier) -> Self {
        let mut oracle = Self::empty();
        oracle
            .statuses
            .insert(signature.to_string(), status(tier));
        oracle
    }
}

#[async_trait]
impl LedgerOracle for StubOracle {
    async fn latest_blockhash(&self) -> Result<Hash, AppError> {
        self.blockhash_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.blockhash)
    }

    async fn signature_status(
        &self,
        signature: &str,
    ) -> Result<Option<SignatureStatus>, AppError> {
        Ok(self.statuses.get(signature).cloned())
    }
}

pub fn status(tier: CommitmentTier) -> SignatureStatus {
    SignatureStatus {
        confirmation_status: Some(tier),
        err: None,
    }
}

pub fn test_state(store: Arc<MemoryGameStore>, oracle: Arc<StubOracle>) -> AppState {
    AppState::new(ActionConfig::for_tests(), store, oracle)
}

pub async fn test_app(
    state: AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(backend::routes::configure),
    )
    .await
}

pub fn sample_record(id: &str) -> GameRecord {
    GameRecord {
        id: id.to_string(),
        author: "Ann".to_string(),
        truth1: "I can swim".to_string(),
        truth2: "I own a cat".to_string(),
        lie: "I hate coffee".to_string(),
    }
}

/// Query string for the sample record's creation parameters.
pub fn sample_query() -> &'static str {
    "username=Ann&truth1=I+can+swim&truth2=I+own+a+cat&lie=I+hate+coffee"
}
