use actix_files::Files;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

use backend::config::AppConfig;
use backend::db::{init, Db};
use backend::services;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    let db = Db::new(&config.db);

    {
        let conn = db.open().map_err(std::io::Error::other)?;
        init::initialize(&conn, &config.admin_username, &config.admin_password)
            .map_err(std::io::Error::other)?;
    }

    // Hourly cleanup of auth tokens past their expiry.
    tokio::spawn(services::session::sweep::run(db.clone()));

    info!("listening on {}:{}", config.ip, config.port);

    let data = web::Data::new(db);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .service(services::session::configure_routes())
            .service(services::criteria::configure_routes())
            .service(services::members::configure_routes())
            .service(Files::new("/", "./static").index_file("index.html"))
    })
    .bind((config.ip.as_str(), config.port))?
    .run()
    .await
}
