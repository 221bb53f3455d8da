//! Play-game action routes.

use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::protocol::actions::{ActionPostRequest, NextActionPostRequest};
use crate::routes::{action_response, confirm_preflight, method_not_supported, request_origin};
use crate::services::play_game::{self, PlayParams};
use crate::state::AppState;

/// GET /api/actions/play/{id}
async fn discover(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let payload =
        play_game::discover(&state, &id, &request_origin(&req), &mut rand::rng()).await?;
    Ok(action_response(StatusCode::OK, &state.config).json(payload))
}

/// POST /api/actions/play/{id}?choice=..
async fn build(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PlayParams>,
    body: web::Json<ActionPostRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let payload = play_game::build(&state, &id, &query, &body).await?;
    Ok(action_response(StatusCode::OK, &state.config).json(payload))
}

/// POST /api/actions/play/{id}/confirm?choice=..
async fn confirm(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PlayParams>,
    body: web::Json<NextActionPostRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let payload = play_game::confirm(&state, &id, &query, &body, &request_origin(&req)).await?;
    Ok(action_response(StatusCode::CREATED, &state.config).json(payload))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/play/{id}")
            .route(web::get().to(discover))
            .route(web::method(Method::OPTIONS).to(discover))
            .route(web::post().to(build)),
    );
    cfg.service(
        web::resource("/play/{id}/confirm")
            .route(web::post().to(confirm))
            .route(web::get().to(method_not_supported))
            .route(web::method(Method::OPTIONS).to(confirm_preflight)),
    );
}
