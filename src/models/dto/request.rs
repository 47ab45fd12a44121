use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::domain::question::OptionKey;
use crate::models::domain::user::UserRole;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubjectRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    pub subject_id: Uuid,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    pub quiz_id: Uuid,

    #[validate(length(min = 1, max = 1000))]
    pub text: String,

    #[validate(length(min = 1, max = 500))]
    pub option1: String,

    #[validate(length(min = 1, max = 500))]
    pub option2: String,

    #[validate(length(min = 1, max = 500))]
    pub option3: String,

    #[validate(length(min = 1, max = 500))]
    pub option4: String,

    /// Options are required non-empty above, so the key always points at a
    /// present option.
    pub correct: OptionKey,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[serde(default)]
    pub role: UserRole,

    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExtendAccessRequest {
    #[validate(range(min = 1, message = "hours must be a positive integer"))]
    pub hours: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartExamRequest {
    pub user_id: Uuid,
    pub quiz_id: Uuid,
    pub question_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionAnswerInput {
    pub question_id: Uuid,
    /// `None` marks a question the student left unanswered.
    pub answer: Option<OptionKey>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitExamRequest {
    pub answers: Vec<QuestionAnswerInput>,
}
