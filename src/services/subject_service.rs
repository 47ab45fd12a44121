use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Subject,
    models::dto::request::CreateSubjectRequest,
    repositories::{QuestionRepository, QuizRepository, SubjectRepository, UserRepository},
    services::access_window::AccessWindow,
};

pub struct SubjectService {
    subjects: Arc<dyn SubjectRepository>,
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
    users: Arc<dyn UserRepository>,
}

impl SubjectService {
    pub fn new(
        subjects: Arc<dyn SubjectRepository>,
        quizzes: Arc<dyn QuizRepository>,
        questions: Arc<dyn QuestionRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            subjects,
            quizzes,
            questions,
            users,
        }
    }

    pub async fn create_subject(&self, request: CreateSubjectRequest) -> AppResult<Subject> {
        request.validate()?;
        let subject = Subject::new(&request.name, request.description.as_deref());
        self.subjects.create(subject).await
    }

    pub async fn get_subject(&self, id: &Uuid) -> AppResult<Subject> {
        self.subjects
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Subject with id '{}' not found", id)))
    }

    /// Student-facing listing, gated on the caller's access window.
    pub async fn list_subjects_for(&self, user_id: &Uuid) -> AppResult<Vec<Subject>> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", user_id)))?;

        if !AccessWindow::is_active(&user) {
            return Err(AppError::AccessExpired(format!(
                "access window for user '{}' has ended",
                user.username
            )));
        }

        self.subjects.find_all().await
    }

    pub async fn list_subjects(&self) -> AppResult<Vec<Subject>> {
        self.subjects.find_all().await
    }

    /// Deletes a subject together with its quizzes and their questions.
    pub async fn delete_subject(&self, id: &Uuid) -> AppResult<()> {
        self.subjects.delete(id).await?;

        let quiz_ids = self.quizzes.delete_by_subject(id).await?;
        for quiz_id in &quiz_ids {
            self.questions.delete_by_quiz(quiz_id).await?;
        }

        log::info!(
            "deleted subject {} and {} quizzes with their questions",
            id,
            quiz_ids.len()
        );
        Ok(())
    }
}
