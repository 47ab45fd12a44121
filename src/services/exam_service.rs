use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ExamSession, ExamState, ExamSummary, OptionKey},
    models::dto::request::QuestionAnswerInput,
    models::dto::response::{ExamQuestionView, ExamView},
    repositories::{ExamSessionRepository, QuestionRepository, QuizRepository, UserRepository},
    services::access_window::AccessWindow,
    services::sampler::QuestionSampler,
    services::scoring_service::ScoringService,
};

/// Question counts an exam can be started with.
pub const QUESTION_COUNT_BUCKETS: [usize; 3] = [20, 25, 50];

pub struct ExamService {
    users: Arc<dyn UserRepository>,
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
    sessions: Arc<dyn ExamSessionRepository>,
}

impl ExamService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        quizzes: Arc<dyn QuizRepository>,
        questions: Arc<dyn QuestionRepository>,
        sessions: Arc<dyn ExamSessionRepository>,
    ) -> Self {
        Self {
            users,
            quizzes,
            questions,
            sessions,
        }
    }

    /// Samples a question set and opens a new session for it.
    pub async fn start_exam(
        &self,
        user_id: Uuid,
        quiz_id: Uuid,
        question_count: usize,
    ) -> AppResult<ExamSession> {
        if !QUESTION_COUNT_BUCKETS.contains(&question_count) {
            return Err(AppError::ValidationError(format!(
                "question_count must be one of {:?}, got {}",
                QUESTION_COUNT_BUCKETS, question_count
            )));
        }

        let user = self
            .users
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", user_id)))?;

        if !AccessWindow::is_active(&user) {
            return Err(AppError::AccessExpired(format!(
                "access window for user '{}' has ended",
                user.username
            )));
        }

        let quiz = self
            .quizzes
            .find_by_id(&quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        let pool = self.questions.find_by_quiz(&quiz.id).await?;
        if question_count > pool.len() {
            return Err(AppError::InsufficientPool {
                available: pool.len(),
                requested: question_count,
            });
        }

        let question_ids = QuestionSampler::sample(&pool, question_count);
        let session = ExamSession::new(user.id, quiz.id, question_ids);

        log::info!(
            "user '{}' started exam session {} on quiz '{}' ({} questions)",
            user.username,
            session.id,
            quiz.name,
            question_count
        );

        self.sessions.create(session).await
    }

    /// The student-facing view of an open session: question and option texts
    /// only, never the answer key. A closed session answers exactly like a
    /// missing one, so a client probing after submission learns nothing.
    pub async fn exam_view(&self, session_id: Uuid) -> AppResult<ExamView> {
        let session = self.find_open_session(&session_id).await?;

        let quiz = self
            .quizzes
            .find_by_id(&session.quiz_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Quiz with id '{}' not found", session.quiz_id))
            })?;

        let mut questions = Vec::with_capacity(session.question_ids.len());
        for question_id in &session.question_ids {
            if let Some(question) = self.questions.find_by_id(question_id).await? {
                questions.push(ExamQuestionView::from(&question));
            }
        }

        Ok(ExamView {
            quiz_name: quiz.name,
            questions,
        })
    }

    /// Scores the submission and closes the session. The Open -> Closed
    /// transition is a check-and-set inside the session store, so a
    /// double-click or a retry after timeout gets `AlreadySubmitted` instead
    /// of a second scoring.
    pub async fn submit_exam(
        &self,
        session_id: Uuid,
        answers: Vec<QuestionAnswerInput>,
    ) -> AppResult<ExamSummary> {
        let session = self
            .sessions
            .find_by_id(&session_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Exam session '{}' not found", session_id))
            })?;

        if session.is_submitted() {
            return Err(AppError::AlreadySubmitted(format!(
                "Exam session '{}' has already been submitted",
                session_id
            )));
        }

        let answer_map: HashMap<Uuid, Option<OptionKey>> = answers
            .into_iter()
            .map(|input| (input.question_id, input.answer))
            .collect();

        let questions = self.questions.find_by_quiz(&session.quiz_id).await?;
        let summary = ScoringService::score(&session, &questions, &answer_map);

        let closed = self.sessions.close(&session_id, answer_map, summary).await?;

        log::info!(
            "exam session {} submitted: {}/{} correct",
            session_id,
            closed.summary().map(|s| s.correct_answers).unwrap_or(0),
            closed.summary().map(|s| s.total_questions).unwrap_or(0),
        );

        match closed.state {
            ExamState::Closed(summary) => Ok(summary),
            ExamState::Open => Err(AppError::InternalError(format!(
                "exam session '{}' still open after close",
                session_id
            ))),
        }
    }

    /// The stored summary of a closed session. An open session has no
    /// results yet and reports `NotFound`.
    pub async fn exam_results(&self, session_id: Uuid) -> AppResult<ExamSummary> {
        let session = self
            .sessions
            .find_by_id(&session_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Exam session '{}' not found", session_id))
            })?;

        match session.state {
            ExamState::Closed(summary) => Ok(summary),
            ExamState::Open => Err(AppError::NotFound(format!(
                "Results for exam session '{}' not found",
                session_id
            ))),
        }
    }

    async fn find_open_session(&self, session_id: &Uuid) -> AppResult<ExamSession> {
        let session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Exam session '{}' not found", session_id))
            })?;

        // A submitted session must answer exactly like a missing one.
        if session.is_submitted() {
            return Err(AppError::NotFound(format!(
                "Exam session '{}' not found",
                session_id
            )));
        }
        Ok(session)
    }
}
