use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
    models::dto::request::CreateQuestionRequest,
    repositories::{QuestionRepository, QuizRepository},
};

pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    quizzes: Arc<dyn QuizRepository>,
}

impl QuestionService {
    pub fn new(questions: Arc<dyn QuestionRepository>, quizzes: Arc<dyn QuizRepository>) -> Self {
        Self { questions, quizzes }
    }

    pub async fn create_question(&self, request: CreateQuestionRequest) -> AppResult<Question> {
        request.validate()?;

        self.quizzes
            .find_by_id(&request.quiz_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Quiz with id '{}' not found", request.quiz_id))
            })?;

        let question = Question::new(
            request.quiz_id,
            &request.text,
            &request.option1,
            &request.option2,
            &request.option3,
            &request.option4,
            request.correct,
        );
        self.questions.create(question).await
    }

    pub async fn get_question(&self, id: &Uuid) -> AppResult<Question> {
        self.questions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }

    pub async fn list_questions_by_quiz(&self, quiz_id: &Uuid) -> AppResult<Vec<Question>> {
        self.questions.find_by_quiz(quiz_id).await
    }

    pub async fn delete_question(&self, id: &Uuid) -> AppResult<()> {
        self.questions.delete(id).await
    }
}
