pub mod handler;
pub mod response;

use crate::infrastructure::config::DEFAULT_MAX_BODY_BYTES;
use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use actix_web::{middleware::DefaultHeaders, web};

pub use handler::process_handler;

pub const PROCESS_PATH: &str = "/api/process";

/// Mount the translator with the default body limit.
pub fn configure(cfg: &mut web::ServiceConfig) {
    mount(cfg, DEFAULT_MAX_BODY_BYTES);
}

/// Mount the translator. Every method reaches the handler, which dispatches itself.
pub fn mount(cfg: &mut web::ServiceConfig, max_body_bytes: usize) {
    cfg.service(
        web::resource(PROCESS_PATH)
            .app_data(web::PayloadConfig::new(max_body_bytes))
            .to(process_handler),
    );
}

/// Permissive CORS headers, attached to every response including errors
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
        .add((ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}
