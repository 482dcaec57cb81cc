use std::time::Duration;

use ais_dashboard::error::{DashboardError, Result};
use ais_dashboard::{Backend, HttpReply};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder, RequestBuilder};

const USER_AGENT: &str = concat!("ais-dashboard/", env!("CARGO_PKG_VERSION"));

/// [`Backend`] over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
}

impl HttpBackend {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self { client })
    }

    async fn send(request: RequestBuilder) -> Result<HttpReply> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;
        Ok(HttpReply::new(status, body))
    }
}

impl Backend for HttpBackend {
    async fn get(&self, url: &str) -> Result<HttpReply> {
        log::debug!("GET {url}");
        Self::send(self.client.get(url)).await
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<HttpReply> {
        log::debug!("POST {url} {body}");
        Self::send(
            self.client
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string()),
        )
        .await
    }
}

#[allow(clippy::needless_pass_by_value)]
fn transport(error: reqwest::Error) -> DashboardError {
    let message = if error.is_timeout() {
        "Request timed out".to_string()
    } else if error.is_connect() {
        "Could not connect to the analytics backend".to_string()
    } else {
        error.to_string()
    };
    DashboardError::Transport(message)
}
