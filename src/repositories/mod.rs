pub mod exam_session_repository;
pub mod question_repository;
pub mod quiz_repository;
pub mod subject_repository;
pub mod user_repository;

pub use exam_session_repository::{ExamSessionRepository, InMemoryExamSessionRepository};
pub use question_repository::{InMemoryQuestionRepository, QuestionRepository};
pub use quiz_repository::{InMemoryQuizRepository, QuizRepository};
pub use subject_repository::{InMemorySubjectRepository, SubjectRepository};
pub use user_repository::{InMemoryUserRepository, UserRepository};

#[cfg(test)]
pub use exam_session_repository::MockExamSessionRepository;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
#[cfg(test)]
pub use quiz_repository::MockQuizRepository;
#[cfg(test)]
pub use subject_repository::MockSubjectRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
