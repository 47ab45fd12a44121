use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use prova_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    let state = AppState::new(config);

    log::info!(
        "starting HTTP server on {}:{}",
        bind_addr.0,
        bind_addr.1
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::start_exam)
            .service(handlers::get_exam_view)
            .service(handlers::submit_exam)
            .service(handlers::get_exam_results)
            .service(handlers::create_subject)
            .service(handlers::list_subjects)
            .service(handlers::get_subject)
            .service(handlers::list_subjects_for_student)
            .service(handlers::delete_subject)
            .service(handlers::create_quiz)
            .service(handlers::get_quiz)
            .service(handlers::list_quizzes_by_subject)
            .service(handlers::delete_quiz)
            .service(handlers::create_question)
            .service(handlers::get_question)
            .service(handlers::list_questions_by_quiz)
            .service(handlers::delete_question)
            .service(handlers::create_user)
            .service(handlers::get_user)
            .service(handlers::extend_access)
    })
    .bind(bind_addr)?
    .run()
    .await
}
