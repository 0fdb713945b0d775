pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

/// Registers every route of the API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health_handler::configure(cfg);
    quiz_handler::configure(cfg);
}
