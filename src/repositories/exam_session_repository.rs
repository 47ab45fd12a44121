use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ExamSession, ExamState, ExamSummary, OptionKey},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExamSessionRepository: Send + Sync {
    async fn create(&self, session: ExamSession) -> AppResult<ExamSession>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<ExamSession>>;
    async fn find_by_user(&self, user_id: &Uuid) -> AppResult<Vec<ExamSession>>;
    /// Atomic Open -> Closed transition. The state check and the summary
    /// store happen under a single write-lock hold, so of two racing callers
    /// exactly one wins; the other gets `AlreadySubmitted`.
    async fn close(
        &self,
        id: &Uuid,
        answers: HashMap<Uuid, Option<OptionKey>>,
        summary: ExamSummary,
    ) -> AppResult<ExamSession>;
}

pub struct InMemoryExamSessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, ExamSession>>>,
}

impl InMemoryExamSessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryExamSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExamSessionRepository for InMemoryExamSessionRepository {
    async fn create(&self, session: ExamSession) -> AppResult<ExamSession> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id) {
            return Err(AppError::AlreadyExists(format!(
                "Exam session with id '{}' already exists",
                session.id
            )));
        }
        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<ExamSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn find_by_user(&self, user_id: &Uuid) -> AppResult<Vec<ExamSession>> {
        let sessions = self.sessions.read().await;
        let mut items: Vec<_> = sessions
            .values()
            .filter(|s| s.user_id == *user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(items)
    }

    async fn close(
        &self,
        id: &Uuid,
        answers: HashMap<Uuid, Option<OptionKey>>,
        summary: ExamSummary,
    ) -> AppResult<ExamSession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Exam session '{}' not found", id)))?;

        if session.is_submitted() {
            return Err(AppError::AlreadySubmitted(format!(
                "Exam session '{}' has already been submitted",
                id
            )));
        }

        session.answers = answers;
        session.state = ExamState::Closed(summary);
        Ok(session.clone())
    }
}
