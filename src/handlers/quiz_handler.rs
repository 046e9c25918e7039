use actix_web::{get, post, put, web, HttpResponse};
use chrono::Utc;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::domain::{ItemAnswer, SubmissionResponse},
    models::dto::request::{GenerateQuizRequest, PaginationParams, SubmitResponseRequest},
    models::dto::response::GradingResponse,
};

#[post("/api/quizzes")]
async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.generate_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[put("/api/quizzes/{id}")]
async fn regenerate_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .quiz_service
        .regenerate_quiz(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/quizzes")]
async fn list_quizzes(
    state: web::Data<AppState>,
    params: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;
    let (quizzes, total) = state
        .quiz_service
        .list_quizzes(params.offset(), params.limit())
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "quizzes": quizzes, "total": total })))
}

#[post("/api/quizzes/{id}/submissions")]
async fn submit_response(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitResponseRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let submission = SubmissionResponse {
        quiz_id: id.into_inner(),
        respondent_id: request.respondent_id,
        timestamp: request.timestamp.unwrap_or_else(Utc::now),
        item_answers: request
            .answers
            .into_iter()
            .map(|a| ItemAnswer {
                item_id: a.item_id,
                answer: a.answer,
            })
            .collect(),
    };

    let result = state.grading_service.grade_submission(&submission).await?;
    Ok(HttpResponse::Ok().json(GradingResponse::from_result(&submission.quiz_id, result)))
}

#[get("/api/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
