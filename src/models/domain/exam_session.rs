use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::OptionKey;

/// Lifecycle of an exam session. A summary exists exactly when the session
/// is closed; an open session has nothing to read.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "status", content = "summary", rename_all = "lowercase")]
pub enum ExamState {
    Open,
    Closed(ExamSummary),
}

/// One student's attempt at a sampled set of questions from a quiz.
///
/// `question_ids` is fixed at creation and never resampled; its order is the
/// presentation order for the whole life of the session.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ExamSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub quiz_id: Uuid,
    pub question_ids: Vec<Uuid>,
    /// Submitted answers, keyed by question id. Empty until submission;
    /// `None` marks a question the student left unanswered.
    pub answers: HashMap<Uuid, Option<OptionKey>>,
    pub state: ExamState,
    pub started_at: DateTime<Utc>,
}

impl ExamSession {
    pub fn new(user_id: Uuid, quiz_id: Uuid, question_ids: Vec<Uuid>) -> Self {
        ExamSession {
            id: Uuid::new_v4(),
            user_id,
            quiz_id,
            question_ids,
            answers: HashMap::new(),
            state: ExamState::Open,
            started_at: Utc::now(),
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, ExamState::Closed(_))
    }

    pub fn summary(&self) -> Option<&ExamSummary> {
        match &self.state {
            ExamState::Open => None,
            ExamState::Closed(summary) => Some(summary),
        }
    }
}

/// Scoring outcome of a closed session. Immutable once computed.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ExamSummary {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub percentage: f64,
    /// Per-question results in the session's fixed presentation order.
    pub results: Vec<ExamResult>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ExamResult {
    pub question_id: Uuid,
    pub question_text: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> ExamSummary {
        ExamSummary {
            total_questions: 1,
            correct_answers: 1,
            percentage: 100.0,
            results: vec![ExamResult {
                question_id: Uuid::new_v4(),
                question_text: "q".to_string(),
                user_answer: Some("a".to_string()),
                correct_answer: "a".to_string(),
                is_correct: true,
            }],
        }
    }

    #[test]
    fn test_new_session_is_open() {
        let session = ExamSession::new(Uuid::new_v4(), Uuid::new_v4(), vec![Uuid::new_v4()]);
        assert!(!session.is_submitted());
        assert!(session.summary().is_none());
        assert!(session.answers.is_empty());
    }

    #[test]
    fn test_closed_session_exposes_summary() {
        let mut session = ExamSession::new(Uuid::new_v4(), Uuid::new_v4(), vec![Uuid::new_v4()]);
        session.state = ExamState::Closed(sample_summary());
        assert!(session.is_submitted());
        assert_eq!(session.summary().unwrap().correct_answers, 1);
    }

    #[test]
    fn test_question_order_is_preserved() {
        let ids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let session = ExamSession::new(Uuid::new_v4(), Uuid::new_v4(), ids.clone());
        assert_eq!(session.question_ids, ids);
    }
}
