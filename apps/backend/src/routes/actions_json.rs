//! Action discovery manifest.

use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpResponse};

use crate::protocol::actions::{ActionRule, ActionsJson};
use crate::routes::action_response;
use crate::state::AppState;

/// GET /actions.json
///
/// Static mapping of human paths to machine action-API paths: the two
/// flow prefixes plus an identity fallback.
async fn manifest(state: web::Data<AppState>) -> HttpResponse {
    let payload = ActionsJson {
        rules: vec![
            ActionRule {
                path_pattern: "/new/**".to_string(),
                api_path: "/api/actions/new/**".to_string(),
            },
            ActionRule {
                path_pattern: "/play/**".to_string(),
                api_path: "/api/actions/play/**".to_string(),
            },
            ActionRule {
                path_pattern: "/api/actions/**".to_string(),
                api_path: "/api/actions/**".to_string(),
            },
        ],
    };
    action_response(StatusCode::OK, &state.config).json(payload)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/actions.json")
            .route(web::get().to(manifest))
            .route(web::method(Method::OPTIONS).to(manifest)),
    );
}
