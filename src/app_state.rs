use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{
        InMemoryExamSessionRepository, InMemoryQuestionRepository, InMemoryQuizRepository,
        InMemorySubjectRepository, InMemoryUserRepository,
    },
    services::{ExamService, QuestionService, QuizService, SubjectService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub subject_service: Arc<SubjectService>,
    pub quiz_service: Arc<QuizService>,
    pub question_service: Arc<QuestionService>,
    pub user_service: Arc<UserService>,
    pub exam_service: Arc<ExamService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let subjects = Arc::new(InMemorySubjectRepository::new());
        let quizzes = Arc::new(InMemoryQuizRepository::new());
        let questions = Arc::new(InMemoryQuestionRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let sessions = Arc::new(InMemoryExamSessionRepository::new());

        let subject_service = Arc::new(SubjectService::new(
            subjects.clone(),
            quizzes.clone(),
            questions.clone(),
            users.clone(),
        ));
        let quiz_service = Arc::new(QuizService::new(
            quizzes.clone(),
            subjects.clone(),
            questions.clone(),
        ));
        let question_service = Arc::new(QuestionService::new(questions.clone(), quizzes.clone()));
        let user_service = Arc::new(UserService::new(users.clone()));
        let exam_service = Arc::new(ExamService::new(users, quizzes, questions, sessions));

        Self {
            subject_service,
            quiz_service,
            question_service,
            user_service,
            exam_service,
            config: Arc::new(config),
        }
    }
}
