//! Command handlers: translate CLI invocations into the service or a
//! one-shot discovery, returning process exit codes.

use super::commands::{DiscoverArgs, ServeArgs};
use crate::cloud::CfRestClient;
use crate::config::{AppConfig, CloudConfig};
use crate::server::{self, AppState};
use std::sync::Arc;
use tracing::error;

pub async fn handle_serve(args: &ServeArgs) -> i32 {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            return 2;
        }
    };
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return 2;
    }

    let client = CfRestClient::with_timeout(
        config.cloud.api_url.clone(),
        config.cloud.api_token.clone(),
        config.cloud.request_timeout,
    );

    let host = args.host.clone().unwrap_or(config.http.host);
    let port = args.port.unwrap_or(config.http.port);
    let state = Arc::new(AppState {
        client: Arc::new(client),
        auth_user: config.http.auth_user,
        auth_pass: config.http.auth_pass,
    });

    match server::serve(&format!("{}:{}", host, port), state).await {
        Ok(()) => 0,
        Err(e) => {
            error!("Server error: {:#}", e);
            1
        }
    }
}

pub async fn handle_discover(args: &DiscoverArgs) -> i32 {
    let config = match CloudConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            return 2;
        }
    };
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return 2;
    }

    let client = CfRestClient::with_timeout(
        config.api_url.clone(),
        config.api_token.clone(),
        config.request_timeout,
    );

    let components = match crate::graph::discover(&client, &args.root_id).await {
        Ok(components) => components,
        Err(e) => {
            error!("Discovery failed: {}", e);
            return 1;
        }
    };

    let rendered = if args.compact {
        serde_json::to_string(&components)
    } else {
        serde_json::to_string_pretty(&components)
    };
    match rendered {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            error!("Failed to encode result: {}", e);
            1
        }
    }
}
