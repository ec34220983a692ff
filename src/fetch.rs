use popup_core::constants::{AJAX_HEADER_NAME, AJAX_HEADER_VALUE};
use popup_core::{FetchError, FetchFuture, FetchResponse, Fetcher};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// GET through `window.fetch`.
pub struct WebFetcher {
    ajax_header: bool,
}

impl WebFetcher {
    pub fn new(ajax_header: bool) -> Self {
        Self { ajax_header }
    }
}

impl Fetcher for WebFetcher {
    fn get(&self, url: &str) -> FetchFuture<'_> {
        let url = url.to_owned();
        let ajax_header = self.ajax_header;
        Box::pin(async move { fetch_text(&url, ajax_header).await })
    }
}

fn describe(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

async fn fetch_text(url: &str, ajax_header: bool) -> Result<FetchResponse, FetchError> {
    let window = web::window().ok_or_else(|| FetchError::Unavailable("no window".into()))?;

    let init = web::RequestInit::new();
    init.set_method("GET");
    if ajax_header {
        let headers = web::Headers::new().map_err(|e| FetchError::Unavailable(describe(e)))?;
        headers
            .set(AJAX_HEADER_NAME, AJAX_HEADER_VALUE)
            .map_err(|e| FetchError::Unavailable(describe(e)))?;
        init.set_headers(&headers);
    }
    let request = web::Request::new_with_str_and_init(url, &init)
        .map_err(|e| FetchError::Network(describe(e)))?;

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::Network(describe(e)))?;
    let response: web::Response = value
        .dyn_into()
        .map_err(|e| FetchError::Network(describe(e)))?;
    let status = response.status();

    let text = response.text().map_err(|e| FetchError::Body(describe(e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| FetchError::Body(describe(e)))?
        .as_string()
        .unwrap_or_default();

    log::debug!("[fetch] GET {} -> {} ({} bytes)", url, status, body.len());
    Ok(FetchResponse::new(status, body))
}
