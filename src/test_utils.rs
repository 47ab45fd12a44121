use crate::models::domain::{OptionKey, Question, Quiz, Subject, User, UserRole};

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use uuid::Uuid;

    /// Creates a standard student without an access limit
    pub fn test_student() -> User {
        User::new("teststudent", UserRole::Student, None)
    }

    /// Creates a subject with a quiz attached
    pub fn test_subject_with_quiz() -> (Subject, Quiz) {
        let subject = Subject::new("Mathematics", Some("Algebra and geometry"));
        let quiz = Quiz::new(subject.id, "Midterm", None);
        (subject, quiz)
    }

    /// Creates `count` questions for a quiz, all keyed on option1
    pub fn test_questions(quiz_id: Uuid, count: usize) -> Vec<Question> {
        (0..count)
            .map(|i| {
                Question::new(
                    quiz_id,
                    &format!("Question {}", i),
                    "Answer A",
                    "Answer B",
                    "Answer C",
                    "Answer D",
                    OptionKey::Option1,
                )
            })
            .collect()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_test_student() {
        let user = test_student();
        assert_eq!(user.username, "teststudent");
        assert!(user.expires_at.is_none());
    }

    #[test]
    fn test_fixtures_subject_with_quiz() {
        let (subject, quiz) = test_subject_with_quiz();
        assert_eq!(quiz.subject_id, subject.id);
    }

    #[test]
    fn test_fixtures_test_questions() {
        let quiz_id = uuid::Uuid::new_v4();
        let questions = test_questions(quiz_id, 3);
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.quiz_id == quiz_id));
    }
}
