mod config;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;
use std::path::Path;

use crate::config::SiteConfig;

/// Multi-page site: every page is a real file, so no SPA fallback.
fn static_site(root: &Path) -> Files {
    Files::new("/", root).index_file("index.html")
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SiteConfig::from_env()?;
    log::info!(
        "serving {} on http://{}:{}",
        config.root.display(),
        config.addr,
        config.port
    );

    let root = config.root.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(static_site(&root))
    })
    .bind((config.addr.as_str(), config.port))
    .with_context(|| format!("could not bind {}:{}", config.addr, config.port))?
    .run()
    .await?;

    Ok(())
}
