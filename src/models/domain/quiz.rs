use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(subject_id: Uuid, name: &str, description: Option<&str>) -> Self {
        Quiz {
            id: Uuid::new_v4(),
            subject_id,
            name: name.to_string(),
            description: description.map(|d| d.to_string()),
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_quiz() {
        let subject_id = Uuid::new_v4();
        let quiz = Quiz::new(subject_id, "Midterm", None);
        assert_eq!(quiz.subject_id, subject_id);
        assert_eq!(quiz.name, "Midterm");
        assert!(quiz.description.is_none());
    }
}
