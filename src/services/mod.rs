pub mod access_window;
pub mod exam_service;
pub mod question_service;
pub mod quiz_service;
pub mod sampler;
pub mod scoring_service;
pub mod subject_service;
pub mod user_service;

pub use access_window::AccessWindow;
pub use exam_service::ExamService;
pub use question_service::QuestionService;
pub use quiz_service::QuizService;
pub use sampler::QuestionSampler;
pub use scoring_service::ScoringService;
pub use subject_service::SubjectService;
pub use user_service::UserService;
