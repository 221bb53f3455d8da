//! Create-game action routes.

use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::protocol::actions::{ActionPostRequest, NextActionPostRequest};
use crate::routes::{action_response, confirm_preflight, method_not_supported, request_origin};
use crate::services::create_game::{self, NewGameParams};
use crate::state::AppState;

/// GET /api/actions/new
async fn discover(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = create_game::discover(&request_origin(&req));
    Ok(action_response(StatusCode::OK, &state.config).json(payload))
}

/// POST /api/actions/new?username=..&truth1=..&truth2=..&lie=..
async fn build(
    state: web::Data<AppState>,
    query: web::Query<NewGameParams>,
    body: web::Json<ActionPostRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = create_game::build(&state, &query, &body).await?;
    Ok(action_response(StatusCode::OK, &state.config).json(payload))
}

/// POST /api/actions/new/confirm?username=..&truth1=..&truth2=..&lie=..
async fn confirm(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<NewGameParams>,
    body: web::Json<NextActionPostRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = create_game::confirm(&state, &query, &body, &request_origin(&req)).await?;
    Ok(action_response(StatusCode::CREATED, &state.config).json(payload))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/new")
            .route(web::get().to(discover))
            .route(web::method(Method::OPTIONS).to(discover))
            .route(web::post().to(build)),
    );
    cfg.service(
        web::resource("/new/confirm")
            .route(web::post().to(confirm))
            .route(web::get().to(method_not_supported))
            .route(web::method(Method::OPTIONS).to(confirm_preflight)),
    );
}
