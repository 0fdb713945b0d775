use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::GenerateQuizRequest,
};

#[post("/generate_quiz")]
async fn generate_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    log::info!(
        "[{}] Generating quiz for {}",
        get_request_id(&req).unwrap_or_default(),
        request.url
    );
    let response = state.quiz_service.generate_quiz(&request.url).await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/history")]
async fn get_history(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let history = state.quiz_service.history().await?;
    Ok(HttpResponse::Ok().json(history))
}

#[get("/quiz/{id}")]
async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

/// Maps malformed JSON bodies onto the same error shape as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::Validation(format!("Invalid request body: {}", err)).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(generate_quiz)
        .service(get_history)
        .service(get_quiz);
}
