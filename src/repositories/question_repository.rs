use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, question: Question) -> AppResult<Question>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Question>>;
    async fn find_by_quiz(&self, quiz_id: &Uuid) -> AppResult<Vec<Question>>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
    async fn delete_by_quiz(&self, quiz_id: &Uuid) -> AppResult<usize>;
}

pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<HashMap<Uuid, Question>>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryQuestionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        if questions.contains_key(&question.id) {
            return Err(AppError::AlreadyExists(format!(
                "Question with id '{}' already exists",
                question.id
            )));
        }
        questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.get(id).cloned())
    }

    async fn find_by_quiz(&self, quiz_id: &Uuid) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        let mut items: Vec<_> = questions
            .values()
            .filter(|q| q.quiz_id == *quiz_id)
            .cloned()
            .collect();
        items.sort_by_key(|q| q.created_at);
        Ok(items)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let mut questions = self.questions.write().await;
        if questions.remove(id).is_none() {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }
        Ok(())
    }

    async fn delete_by_quiz(&self, quiz_id: &Uuid) -> AppResult<usize> {
        let mut questions = self.questions.write().await;
        let before = questions.len();
        questions.retain(|_, q| q.quiz_id != *quiz_id);
        Ok(before - questions.len())
    }
}
