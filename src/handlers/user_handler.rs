use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateUserRequest, ExtendAccessRequest},
    models::dto::response::AccessExtendedResponse,
};

#[post("/api/users")]
pub async fn create_user(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.create_user(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

#[get("/api/users/{id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get_user(&id).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[post("/api/users/{id}/extend-access")]
pub async fn extend_access(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<ExtendAccessRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = id.into_inner();
    let expires_at = state
        .user_service
        .extend_access(&user_id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(AccessExtendedResponse {
        user_id,
        expires_at,
    }))
}

#[get("/api/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{assert_error_status, assert_success_status};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check_endpoint() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_success_status(resp.status());
    }

    #[actix_web::test]
    async fn test_create_user_rejects_malformed_body() {
        let state = crate::app_state::AppState::new(crate::config::Config::test_config());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_user),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({ "not_a_username": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_status(resp.status());
    }
}
