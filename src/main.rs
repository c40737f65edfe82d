use crate::api::ApiClient;
use crate::app::App;
use crate::config::SiteConfig;
use crate::router::handle;
use astra::Server;

mod api;
mod app;
mod config;
mod contact;
mod domain;
mod errors;
mod logging;
mod render;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    logging::init();

    // 1️⃣ Load configuration
    let config = match SiteConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the listings API client
    let client = match ApiClient::new(config.api_url.clone(), config.request_timeout) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ API client setup failed: {e}");
            std::process::exit(1);
        }
    };
    if config.request_timeout.is_none() {
        tracing::warn!("no request timeout configured; a hung API call blocks its worker");
    }

    // 3️⃣ Start the server
    let addr = config.bind_addr;
    let workers = config.max_workers;
    tracing::info!(endpoint = %client.endpoint(), "Starting server at http://{addr}");

    let app = App::new(config, Box::new(client));
    let server = Server::bind(&addr).max_workers(workers);

    // 4️⃣ Serve requests, passing the app into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
