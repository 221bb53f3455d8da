use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, HttpResponseBuilder, ResponseError as _};

pub mod actions_json;
pub mod health;
pub mod new_game;
pub mod play_game;
pub mod redirects;

use crate::config::ActionConfig;
use crate::error::AppError;
use crate::protocol::actions::ActionError;
use crate::protocol::{ACTION_VERSION, HEADER_ACTION_VERSION, HEADER_BLOCKCHAIN_IDS};
use crate::state::AppState;

/// Configure application routes for the server and for tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Extractor failures (malformed JSON body, bad query string) must
    // surface the same `{message}` error body as everything else.
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler));

    // Action discovery manifest: /actions.json
    cfg.configure(actions_json::configure_routes);

    // Action API: /api/actions/**
    cfg.service(
        web::scope("/api/actions")
            .configure(new_game::configure_routes)
            .configure(play_game::configure_routes),
    );

    // Human-facing redirects: /new, /play/{id}
    cfg.configure(redirects::configure_routes);

    // Health check: /health
    cfg.configure(health::configure_routes);
}

/// Response builder carrying the action protocol headers.
pub(crate) fn action_response(status: StatusCode, config: &ActionConfig) -> HttpResponseBuilder {
    let mut builder = HttpResponse::build(status);
    builder.insert_header((HEADER_ACTION_VERSION, ACTION_VERSION));
    builder.insert_header((HEADER_BLOCKCHAIN_IDS, config.blockchain_id.clone()));
    builder
}

/// Scheme and host of the inbound request, for absolute links.
pub(crate) fn request_origin(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

/// Confirm endpoints only accept POST; anything else gets a 403.
pub(crate) async fn method_not_supported(state: web::Data<AppState>) -> HttpResponse {
    action_response(StatusCode::FORBIDDEN, &state.config).json(ActionError {
        message: "Method not supported".to_string(),
    })
}

/// Bare OPTIONS (non-preflight) on confirm endpoints.
pub(crate) async fn confirm_preflight(state: web::Data<AppState>) -> HttpResponse {
    action_response(StatusCode::OK, &state.config).finish()
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    extractor_error(format!("invalid request body: {err}"))
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    extractor_error(format!("invalid query string: {err}"))
}

fn extractor_error(message: String) -> actix_web::Error {
    let response = AppError::validation(message.clone()).error_response();
    InternalError::from_response(message, response).into()
}
