use actix_web::{delete, get, post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState, errors::AppError, models::dto::request::CreateSubjectRequest,
};

#[post("/api/subjects")]
pub async fn create_subject(
    state: web::Data<AppState>,
    request: web::Json<CreateSubjectRequest>,
) -> Result<HttpResponse, AppError> {
    let subject = state
        .subject_service
        .create_subject(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(subject))
}

#[get("/api/subjects")]
pub async fn list_subjects(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let subjects = state.subject_service.list_subjects().await?;
    Ok(HttpResponse::Ok().json(subjects))
}

#[get("/api/subjects/{id}")]
pub async fn get_subject(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let subject = state.subject_service.get_subject(&id).await?;
    Ok(HttpResponse::Ok().json(subject))
}

/// Student-facing listing; fails with 403 once the access window has ended.
#[get("/api/students/{user_id}/subjects")]
pub async fn list_subjects_for_student(
    state: web::Data<AppState>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let subjects = state.subject_service.list_subjects_for(&user_id).await?;
    Ok(HttpResponse::Ok().json(subjects))
}

#[delete("/api/subjects/{id}")]
pub async fn delete_subject(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.subject_service.delete_subject(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
