use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Subject,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    async fn create(&self, subject: Subject) -> AppResult<Subject>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Subject>>;
    async fn find_all(&self) -> AppResult<Vec<Subject>>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}

pub struct InMemorySubjectRepository {
    subjects: Arc<RwLock<HashMap<Uuid, Subject>>>,
}

impl InMemorySubjectRepository {
    pub fn new() -> Self {
        Self {
            subjects: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemorySubjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubjectRepository for InMemorySubjectRepository {
    async fn create(&self, subject: Subject) -> AppResult<Subject> {
        let mut subjects = self.subjects.write().await;
        if subjects.contains_key(&subject.id) {
            return Err(AppError::AlreadyExists(format!(
                "Subject with id '{}' already exists",
                subject.id
            )));
        }
        subjects.insert(subject.id, subject.clone());
        Ok(subject)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Subject>> {
        let subjects = self.subjects.read().await;
        Ok(subjects.get(id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Subject>> {
        let subjects = self.subjects.read().await;
        let mut items: Vec<_> = subjects.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let mut subjects = self.subjects.write().await;
        if subjects.remove(id).is_none() {
            return Err(AppError::NotFound(format!(
                "Subject with id '{}' not found",
                id
            )));
        }
        Ok(())
    }
}
