//! Action flow services.
//!
//! Each flow is a two-phase protocol: discovery describes the action,
//! build turns validated parameters into an unsigned transaction
//! envelope, and confirm gates the domain effect on ledger commitment.

pub mod create_game;
pub mod play_game;

use crate::error::AppError;
use crate::protocol::actions::ActionPostRequest;

pub(crate) fn required_account(body: &ActionPostRequest) -> Result<&str, AppError> {
    body.account
        .as_deref()
        .map(str::trim)
        .filter(|account| !account.is_empty())
        .ok_or_else(|| AppError::validation("`account` field is required"))
}
