use std::env;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

pub(crate) mod middleware;
pub(crate) mod router;

use crate::middleware::admin_auth::AdminAuth;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Logger initialized at log level: {}", log_level);

    if let Err(e) = portal_database::setup().await {
        panic!("Failed to setup database connection: {}", e);
    }

    HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();
        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .service(router::health)
            .service(router::search::search)
            .service(router::search::load_more)
            .service(router::opportunity::all_opportunities)
            .service(router::opportunity::single)
            .service(router::opportunity::create)
            .service(router::opportunity::update_status)
            .service(
                web::scope("/admin")
                    .wrap(AdminAuth) // Every lookup-scaffold route is admin-only
                    .service(router::lookup::list)
                    .service(router::lookup::add)
                    .service(router::lookup::toggle_status),
            )
    })
    .bind(("0.0.0.0", 8080))?
    .run()
    .await
}
