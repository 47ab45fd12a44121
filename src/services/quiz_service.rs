use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Quiz,
    models::dto::request::CreateQuizRequest,
    repositories::{QuestionRepository, QuizRepository, SubjectRepository},
};

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    subjects: Arc<dyn SubjectRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl QuizService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        subjects: Arc<dyn SubjectRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            quizzes,
            subjects,
            questions,
        }
    }

    /// The owning subject must exist at creation time; it is not
    /// re-validated afterwards.
    pub async fn create_quiz(&self, request: CreateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        self.subjects
            .find_by_id(&request.subject_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Subject with id '{}' not found",
                    request.subject_id
                ))
            })?;

        let quiz = Quiz::new(
            request.subject_id,
            &request.name,
            request.description.as_deref(),
        );
        self.quizzes.create(quiz).await
    }

    pub async fn get_quiz(&self, id: &Uuid) -> AppResult<Quiz> {
        self.quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    pub async fn list_quizzes_by_subject(&self, subject_id: &Uuid) -> AppResult<Vec<Quiz>> {
        self.quizzes.find_by_subject(subject_id).await
    }

    /// Deletes a quiz together with all its questions.
    pub async fn delete_quiz(&self, id: &Uuid) -> AppResult<()> {
        self.quizzes.delete(id).await?;
        let removed = self.questions.delete_by_quiz(id).await?;
        log::info!("deleted quiz {} and {} questions", id, removed);
        Ok(())
    }
}
