//! Human-facing redirect facades.
//!
//! Pure glue: 302 to the universal action launcher with the machine
//! action path embedded.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::config::ACTIONS_API_PATH;
use crate::routes::request_origin;
use crate::state::AppState;

const LAUNCHER_PREFIX: &str = "https://dial.to/?action=solana-action:";

/// GET /new
async fn new_game(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let origin = request_origin(&req);
    let target = format!(
        "{LAUNCHER_PREFIX}{origin}{ACTIONS_API_PATH}/new&cluster={}",
        state.config.cluster
    );
    HttpResponse::Found()
        .insert_header((header::LOCATION, target))
        .finish()
}

/// GET /play/{id}
async fn play(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let origin = request_origin(&req);
    let id = path.into_inner();
    let target = format!(
        "{LAUNCHER_PREFIX}{origin}{ACTIONS_API_PATH}/play/{id}&cluster={}",
        state.config.cluster
    );
    HttpResponse::Found()
        .insert_header((header::LOCATION, target))
        .finish()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/new", web::get().to(new_game));
    cfg.route("/play/{id}", web::get().to(play));
}
