use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    models::dto::response::{MessageResponse, StatusResponse},
};

#[get("/")]
async fn root() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: "AI Wiki Quiz Generator API is running! Use /generate_quiz or /history endpoints.",
    })
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse { status: "ok" })
}

#[get("/health/ready")]
async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    match state.quiz_service.storage_ready().await {
        Ok(()) => HttpResponse::Ok().json(StatusResponse { status: "ready" }),
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(StatusResponse { status: "not_ready" })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root)
        .service(health_check)
        .service(health_check_ready);
}
