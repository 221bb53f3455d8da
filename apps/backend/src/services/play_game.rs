//! Play-game flow: spot the lie, pay the processing fee, learn the truth.

use rand::Rng;
use serde::Deserialize;

use crate::chain::confirm::confirm_signature;
use crate::chain::tx;
use crate::config::{ACTIONS_API_PATH, ICON_PATH};
use crate::domain::shuffle::shuffle3;
use crate::domain::GameRecord;
use crate::error::AppError;
use crate::protocol::actions::{
    ActionGetResponse, ActionLinks, ActionPostRequest, ActionPostResponse, CompletedAction,
    LinkedAction, NextActionPostRequest,
};
use crate::services::required_account;
use crate::state::AppState;

/// The accused statement, carried on the query string through build
/// and confirm. The accused text itself travels, not its display slot,
/// so re-randomized discovery orderings stay consistent.
#[derive(Debug, Deserialize)]
pub struct PlayParams {
    pub choice: Option<String>,
}

impl PlayParams {
    fn accused(&self) -> Result<&str, AppError> {
        self.choice
            .as_deref()
            .map(str::trim)
            .filter(|choice| !choice.is_empty())
            .ok_or_else(|| AppError::validation("`choice` field is required"))
    }
}

/// Discovery: present the three statements in random order as A/B/C.
///
/// The entropy source is injected so the displayed ordering itself is
/// testable, not just the shuffle primitive.
pub async fn discover<R: Rng + ?Sized>(
    state: &AppState,
    id: &str,
    origin: &str,
    rng: &mut R,
) -> Result<ActionGetResponse, AppError> {
    let record = fetch_record(state, id).await?.ok_or_else(|| AppError::game_not_found(id))?;

    let [a, b, c] = shuffle3(
        [
            record.truth1.clone(),
            record.truth2.clone(),
            record.lie.clone(),
        ],
        rng,
    );

    let actions = vec![
        LinkedAction::transaction(choice_href(id, &a)?, "A is the lie"),
        LinkedAction::transaction(choice_href(id, &b)?, "B is the lie"),
        LinkedAction::transaction(choice_href(id, &c)?, "C is the lie"),
    ];

    Ok(ActionGetResponse {
        title: "Two Truths and One Lie".to_string(),
        icon: format!("{origin}{ICON_PATH}"),
        description: format!(
            "How well do you know {}?\nSpot the lie from these three statements.\n\n\
             A. {a}\nB. {b}\nC. {c}",
            record.author
        ),
        label: "Choose The Lie".to_string(),
        links: Some(ActionLinks { actions }),
    })
}

/// Build: validate the payer and return the processing-fee envelope.
pub async fn build(
    state: &AppState,
    id: &str,
    params: &PlayParams,
    body: &ActionPostRequest,
) -> Result<ActionPostResponse, AppError> {
    let accused = params.accused()?;
    let payer = tx::parse_pubkey(required_account(body)?)?;

    let blockhash = state.oracle.latest_blockhash().await?;
    let envelope = tx::build_fee_transfer(
        &payer,
        &state.config.fee_collector,
        state.config.processing_fee_lamports,
        blockhash,
    )?;

    let next = format!(
        "{ACTIONS_API_PATH}/play/{id}/confirm?{}",
        encode_choice(accused)?
    );
    Ok(ActionPostResponse::transaction(
        tx::encode_transaction(&envelope)?,
        next,
    ))
}

/// Confirm: gate on ledger commitment, then reveal whether the accused
/// statement was the lie.
pub async fn confirm(
    state: &AppState,
    id: &str,
    params: &PlayParams,
    body: &NextActionPostRequest,
    origin: &str,
) -> Result<CompletedAction, AppError> {
    let signature = body.signature.as_deref().unwrap_or_default();
    confirm_signature(state.oracle.as_ref(), signature).await?;

    // A record that vanished between build and confirm is a resolution
    // failure, not a routing miss.
    let record = fetch_record(state, id)
        .await?
        .ok_or_else(|| AppError::validation(format!("no game found for id `{id}`")))?;
    let accused = params.accused()?;

    let icon = format!("{origin}{ICON_PATH}");
    if accused == record.lie {
        Ok(CompletedAction::new(
            "Correct!",
            icon,
            "Correct!",
            format!(
                "You got the lie correctly.\n\nScreenshot and send to {} to prove yourself.",
                record.author
            ),
        ))
    } else {
        Ok(CompletedAction::new(
            "Wrong!",
            icon,
            "Failed!",
            format!("Doesn't seem like you know {} so well.", record.author),
        ))
    }
}

async fn fetch_record(state: &AppState, id: &str) -> Result<Option<GameRecord>, AppError> {
    state.store.fetch(id).await
}

fn choice_href(id: &str, accused: &str) -> Result<String, AppError> {
    Ok(format!(
        "{ACTIONS_API_PATH}/play/{id}?{}",
        encode_choice(accused)?
    ))
}

fn encode_choice(accused: &str) -> Result<String, AppError> {
    let pairs: &[(&str, &str)] = &[("choice", accused)];
    serde_urlencoded::to_string(pairs)
        .map_err(|e| AppError::internal(format!("failed to encode choice link: {e}")))
}
