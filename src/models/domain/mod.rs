pub mod exam_session;
pub mod question;
pub mod quiz;
pub mod subject;
pub mod user;

pub use exam_session::{ExamResult, ExamSession, ExamState, ExamSummary};
pub use question::{OptionKey, Question};
pub use quiz::Quiz;
pub use subject::Subject;
pub use user::{User, UserRole};
