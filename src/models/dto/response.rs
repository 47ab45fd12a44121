use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::question::Question;

#[derive(Debug, Clone, Serialize)]
pub struct ExamStartedResponse {
    pub session_id: Uuid,
    pub quiz_id: Uuid,
    pub question_count: usize,
}

/// A question as the student sees it during an open exam. Deliberately has
/// no field for the answer key; the conversion below is the only way to
/// build one.
#[derive(Debug, Clone, Serialize)]
pub struct ExamQuestionView {
    pub id: Uuid,
    pub text: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
}

impl From<&Question> for ExamQuestionView {
    fn from(question: &Question) -> Self {
        ExamQuestionView {
            id: question.id,
            text: question.text.clone(),
            option1: question.option1.clone(),
            option2: question.option2.clone(),
            option3: question.option3.clone(),
            option4: question.option4.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExamView {
    pub quiz_name: String,
    pub questions: Vec<ExamQuestionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccessExtendedResponse {
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::question::OptionKey;

    #[test]
    fn test_view_carries_no_answer_key() {
        let question = Question::new(
            Uuid::new_v4(),
            "Capital of France?",
            "Paris",
            "Lyon",
            "Nice",
            "Lille",
            OptionKey::Option1,
        );
        let view = ExamQuestionView::from(&question);
        let json = serde_json::to_value(&view).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 6);
        for key in ["id", "text", "option1", "option2", "option3", "option4"] {
            assert!(object.contains_key(key), "missing field {}", key);
        }
        assert!(!json.to_string().contains("correct"));
    }
}
