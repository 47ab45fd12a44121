use actix_web::{delete, get, post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState, errors::AppError, models::dto::request::CreateQuestionRequest,
};

/// Admin endpoints. These return the full question record, answer key
/// included; the student-facing exam view goes through `exam_handler`.
#[post("/api/questions")]
pub async fn create_question(
    state: web::Data<AppState>,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .question_service
        .create_question(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(question))
}

#[get("/api/questions/{id}")]
pub async fn get_question(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let question = state.question_service.get_question(&id).await?;
    Ok(HttpResponse::Ok().json(question))
}

#[get("/api/quizzes/{quiz_id}/questions")]
pub async fn list_questions_by_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let questions = state
        .question_service
        .list_questions_by_quiz(&quiz_id)
        .await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[delete("/api/questions/{id}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.question_service.delete_question(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
