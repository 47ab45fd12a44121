use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{StartExamRequest, SubmitExamRequest},
    models::dto::response::ExamStartedResponse,
};

#[post("/api/exams")]
pub async fn start_exam(
    state: web::Data<AppState>,
    request: web::Json<StartExamRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let session = state
        .exam_service
        .start_exam(request.user_id, request.quiz_id, request.question_count)
        .await?;

    Ok(HttpResponse::Created().json(ExamStartedResponse {
        session_id: session.id,
        quiz_id: session.quiz_id,
        question_count: session.question_ids.len(),
    }))
}

#[get("/api/exams/{session_id}")]
pub async fn get_exam_view(
    state: web::Data<AppState>,
    session_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let view = state.exam_service.exam_view(*session_id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/exams/{session_id}/submit")]
pub async fn submit_exam(
    state: web::Data<AppState>,
    session_id: web::Path<Uuid>,
    request: web::Json<SubmitExamRequest>,
) -> Result<HttpResponse, AppError> {
    let summary = state
        .exam_service
        .submit_exam(*session_id, request.into_inner().answers)
        .await?;
    Ok(HttpResponse::Ok().json(summary))
}

#[get("/api/exams/{session_id}/results")]
pub async fn get_exam_results(
    state: web::Data<AppState>,
    session_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let summary = state.exam_service.exam_results(*session_id).await?;
    Ok(HttpResponse::Ok().json(summary))
}
