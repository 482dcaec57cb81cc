use ais_dashboard::error::{DashboardError, Result};
use ais_dashboard::{Backend, HttpReply};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// [`Backend`] over `window.fetch`, same-origin only.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchBackend;

impl FetchBackend {
    async fn send(method: &str, url: &str, body: Option<&str>) -> Result<HttpReply> {
        let window = web_sys::window().ok_or_else(|| transport("no window"))?;

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::SameOrigin);
        if let Some(body) = body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_transport)?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(js_transport)?;
        }

        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_transport)?;
        let response: Response = value.dyn_into().map_err(js_transport)?;

        let text = JsFuture::from(response.text().map_err(js_transport)?)
            .await
            .map_err(js_transport)?;
        let body = text.as_string().unwrap_or_default();

        log::debug!("{method} {url} -> {}", response.status());
        Ok(HttpReply::new(response.status(), body))
    }
}

impl Backend for FetchBackend {
    async fn get(&self, url: &str) -> Result<HttpReply> {
        Self::send("GET", url, None).await
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<HttpReply> {
        Self::send("POST", url, Some(body)).await
    }
}

fn transport(message: &str) -> DashboardError {
    DashboardError::Transport(message.to_string())
}

/// Rejected fetches carry a `TypeError`; keep its message for the banner.
fn js_transport(value: JsValue) -> DashboardError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Failed to fetch".to_string());
    DashboardError::Transport(message)
}
