use actix_web::{middleware::Logger, web, App, HttpServer};

use saiten_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let state = AppState::new(config.clone())
        .await
        .expect("failed to initialize application state");

    log::info!(
        "starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .service(handlers::create_quiz)
            .service(handlers::regenerate_quiz)
            .service(handlers::list_quizzes)
            .service(handlers::submit_response)
            .service(handlers::health_check)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
