use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Subject {
    pub fn new(name: &str, description: Option<&str>) -> Self {
        Subject {
            id: Uuid::new_v4(),
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
    fn test_new_subject() {
        let subject = Subject::new("Mathematics", Some("Algebra and geometry"));
        assert_eq!(subject.name, "Mathematics");
        assert_eq!(subject.description.as_deref(), Some("Algebra and geometry"));
        assert!(subject.created_at.is_some());
    }
}
