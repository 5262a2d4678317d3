use std::error::Error;
use std::sync::Arc;

use autometrics::prometheus_exporter;
use rocket::{get, routes};

use webstore_be::config::AppConfig;
use webstore_be::product_catalog::controller;
use webstore_be::product_catalog::repository::{SharedSource, TableClient};

#[get("/metrics")]
fn metrics() -> String {
    prometheus_exporter::encode_to_string().unwrap_or_else(|e| {
        log::error!("failed to encode metrics: {}", e);
        String::new()
    })
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();
    prometheus_exporter::init();

    let config = AppConfig::from_env()?;
    let source: SharedSource = Arc::new(TableClient::new(&config)?);

    let _rocket = rocket::build()
        .manage(source)
        .mount("/", controller::page::routes())
        .mount("/", routes![metrics])
        .mount("/api", controller::read::routes())
        .register("/", controller::catchers::catchers())
        .launch()
        .await?;

    Ok(())
}
