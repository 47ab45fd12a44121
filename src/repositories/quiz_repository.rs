use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Quiz,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Quiz>>;
    async fn find_by_subject(&self, subject_id: &Uuid) -> AppResult<Vec<Quiz>>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
    /// Removes every quiz of a subject and returns the removed ids, so the
    /// caller can cascade into their questions.
    async fn delete_by_subject(&self, subject_id: &Uuid) -> AppResult<Vec<Uuid>>;
}

pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<Uuid, Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryQuizRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.contains_key(&quiz.id) {
            return Err(AppError::AlreadyExists(format!(
                "Quiz with id '{}' already exists",
                quiz.id
            )));
        }
        quizzes.insert(quiz.id, quiz.clone());
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }

    async fn find_by_subject(&self, subject_id: &Uuid) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<_> = quizzes
            .values()
            .filter(|q| q.subject_id == *subject_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.remove(id).is_none() {
            return Err(AppError::NotFound(format!("Quiz with id '{}' not found", id)));
        }
        Ok(())
    }

    async fn delete_by_subject(&self, subject_id: &Uuid) -> AppResult<Vec<Uuid>> {
        let mut quizzes = self.quizzes.write().await;
        let removed: Vec<Uuid> = quizzes
            .values()
            .filter(|q| q.subject_id == *subject_id)
            .map(|q| q.id)
            .collect();
        for id in &removed {
            quizzes.remove(id);
        }
        Ok(removed)
    }
}
