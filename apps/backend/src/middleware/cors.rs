use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware for the action API.
///
/// Action clients (wallets, dial.to, chat embeds) call from arbitrary
/// origins, so the policy is deliberately open:
/// - Any origin, GET/POST/OPTIONS only
/// - Request headers from the Actions spec (content negotiation plus
///   the client's accepted action version and chain ids)
/// - Expose the protocol headers so browsers can read them
pub fn cors_middleware() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::CONTENT_ENCODING,
            header::ACCEPT_ENCODING,
        ])
        .allowed_header(header::HeaderName::from_static("x-accept-action-version"))
        .allowed_header(header::HeaderName::from_static("x-accept-blockchain-ids"))
        .expose_headers(vec![
            header::HeaderName::from_static("x-action-version"),
            header::HeaderName::from_static("x-blockchain-ids"),
        ])
        .max_age(3600)
}
