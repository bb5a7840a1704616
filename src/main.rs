use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use orbitrum_match::config::Settings;
use orbitrum_match::core::Matcher;
use orbitrum_match::routes::{self, matches::AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &Settings) {
    // LOG_LEVEL / LOG_FORMAT override the configured values
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format =
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings);

    info!("Starting Orbitrum matching service...");

    let rules = settings.scoring_rules().map_err(|e| {
        error!("Invalid scoring configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let matcher = Matcher::new(rules)
        .with_parallel_threshold(settings.matching.parallel_threshold);

    info!("Matcher initialized with weights: {:?}", rules.weights);

    let app_state = AppState {
        matcher,
        matching: settings.matching.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
