pub mod exam_handler;
pub mod question_handler;
pub mod quiz_handler;
pub mod subject_handler;
pub mod user_handler;

pub use exam_handler::{get_exam_results, get_exam_view, start_exam, submit_exam};
pub use question_handler::{
    create_question, delete_question, get_question, list_questions_by_quiz,
};
pub use quiz_handler::{create_quiz, delete_quiz, get_quiz, list_quizzes_by_subject};
pub use subject_handler::{
    create_subject, delete_subject, get_subject, list_subjects, list_subjects_for_student,
};
pub use user_handler::{create_user, extend_access, get_user, health_check};
