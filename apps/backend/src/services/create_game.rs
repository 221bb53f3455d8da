//! Create-game flow: collect statements, charge the mint fee, persist.

use serde::Deserialize;

use crate::chain::confirm::confirm_signature;
use crate::chain::tx;
use crate::config::{ACTIONS_API_PATH, ICON_PATH};
use crate::domain::NewGame;
use crate::error::AppError;
use crate::protocol::actions::{
    ActionGetResponse, ActionLinks, ActionParameter, ActionPostRequest, ActionPostResponse,
    CompletedAction, LinkedAction, NextActionPostRequest,
};
use crate::services::required_account;
use crate::state::AppState;

/// The four free-text creation parameters, carried on the query string
/// through build and confirm.
#[derive(Debug, Deserialize)]
pub struct NewGameParams {
    pub username: Option<String>,
    pub truth1: Option<String>,
    pub truth2: Option<String>,
    pub lie: Option<String>,
}

impl NewGameParams {
    fn parse(&self) -> Result<NewGame, AppError> {
        Ok(NewGame::parse(
            self.username.as_deref(),
            self.truth1.as_deref(),
            self.truth2.as_deref(),
            self.lie.as_deref(),
        )?)
    }
}

/// Discovery: describe the create action and its four required inputs.
pub fn discover(origin: &str) -> ActionGetResponse {
    let href = format!(
        "{ACTIONS_API_PATH}/new?username={{username}}&truth1={{truth1}}&truth2={{truth2}}&lie={{lie}}"
    );

    ActionGetResponse {
        title: "Two Truths and One Lie".to_string(),
        icon: format!("{origin}{ICON_PATH}"),
        description: "Find out how well your friends know you. Enter two truths and one lie \
                      about yourself and see if they can spot the lie."
            .to_string(),
        label: "Create".to_string(),
        links: Some(ActionLinks {
            actions: vec![LinkedAction {
                kind: "transaction",
                href,
                label: "Create".to_string(),
                parameters: Some(vec![
                    ActionParameter {
                        name: "username",
                        label: "Enter your name or what your friends know you as",
                        required: true,
                    },
                    ActionParameter {
                        name: "truth1",
                        label: "Enter the first truth about yourself. An usual character, \
                                maybe, to deceive them",
                        required: true,
                    },
                    ActionParameter {
                        name: "truth2",
                        label: "Enter another truth about yourself. Try to trick them with \
                                this one",
                        required: true,
                    },
                    ActionParameter {
                        name: "lie",
                        label: "Now, drop this lie. Make it as convincing as possible",
                        required: true,
                    },
                ]),
            }],
        }),
    }
}

/// Build: validate the inputs and return the mint-fee envelope.
pub async fn build(
    state: &AppState,
    params: &NewGameParams,
    body: &ActionPostRequest,
) -> Result<ActionPostResponse, AppError> {
    let game = params.parse()?;
    let payer = tx::parse_pubkey(required_account(body)?)?;

    let blockhash = state.oracle.latest_blockhash().await?;
    let envelope = tx::build_fee_transfer(
        &payer,
        &state.config.fee_collector,
        state.config.mint_fee_lamports,
        blockhash,
    )?;

    let next = format!(
        "{ACTIONS_API_PATH}/new/confirm?{}",
        forward_query(&game)?
    );
    Ok(ActionPostResponse::transaction(
        tx::encode_transaction(&envelope)?,
        next,
    ))
}

/// Confirm: gate on ledger commitment, then persist the game.
pub async fn confirm(
    state: &AppState,
    params: &NewGameParams,
    body: &NextActionPostRequest,
    origin: &str,
) -> Result<CompletedAction, AppError> {
    let signature = body.signature.as_deref().unwrap_or_default();
    confirm_signature(state.oracle.as_ref(), signature).await?;

    let game = params.parse()?;
    let id = state.store.create(&game).await?;
    tracing::info!(game_id = %id, author = %game.author, "created game record");

    Ok(CompletedAction::new(
        "New game created successfully!",
        format!("{origin}{ICON_PATH}"),
        "Created!",
        format!(
            "Here is your game url:\n{origin}/play/{id}\n\n\
             Share and find out how much your friends know you."
        ),
    ))
}

fn forward_query(game: &NewGame) -> Result<String, AppError> {
    let pairs: &[(&str, &str)] = &[
        ("username", &game.author),
        ("truth1", &game.truth1),
        ("truth2", &game.truth2),
        ("lie", &game.lie),
    ];
    serde_urlencoded::to_string(pairs)
        .map_err(|e| AppError::internal(format!("failed to encode confirm link: {e}")))
}
