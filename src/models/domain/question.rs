use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the four answer slots a question offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKey {
    Option1,
    Option2,
    Option3,
    Option4,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub text: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    /// The answer key. Must never reach the exam view payload.
    pub correct: OptionKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Question {
    pub fn new(
        quiz_id: Uuid,
        text: &str,
        option1: &str,
        option2: &str,
        option3: &str,
        option4: &str,
        correct: OptionKey,
    ) -> Self {
        Question {
            id: Uuid::new_v4(),
            quiz_id,
            text: text.to_string(),
            option1: option1.to_string(),
            option2: option2.to_string(),
            option3: option3.to_string(),
            option4: option4.to_string(),
            correct,
            created_at: Some(Utc::now()),
        }
    }

    /// Resolves an option key to its human-readable text.
    pub fn option_text(&self, key: OptionKey) -> &str {
        match key {
            OptionKey::Option1 => &self.option1,
            OptionKey::Option2 => &self.option2,
            OptionKey::Option3 => &self.option3,
            OptionKey::Option4 => &self.option4,
        }
    }
}
