//! Fetches the shared header/footer snippets and injects them into their
//! placeholders.
//!
//! Failures are logged and swallowed: no retry, and the continuation of a
//! failed load never runs.

use anyhow::Result;
use anyhow::anyhow;
use anyhow::bail;
use gloo_net::http::Request;
use leptos::leptos_dom::logging::console_error;
use wasm_bindgen_futures::spawn_local;

use crate::dom;

pub async fn fetch_fragment(url: &str) -> Result<String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| anyhow!("request for {url} failed: {e}"))?;

    if !response.ok() {
        bail!("failed to load {url}: HTTP {}", response.status());
    }

    response
        .text()
        .await
        .map_err(|e| anyhow!("could not read body of {url}: {e}"))
}

async fn inject(container_id: &str, url: &str) -> Result<()> {
    let html = fetch_fragment(url).await?;
    let container = dom::by_id(container_id)
        .ok_or_else(|| anyhow!("placeholder #{container_id} not found for {url}"))?;
    container.set_inner_html(&html);
    Ok(())
}

pub fn load_fragment(container_id: &'static str, url: String) {
    spawn_local(async move {
        if let Err(e) = inject(container_id, &url).await {
            console_error(&format!("{e:#}"));
        }
    });
}

/// Like [`load_fragment`], running `then` right after a successful injection.
pub fn load_fragment_then<F>(container_id: &'static str, url: String, then: F)
where
    F: FnOnce() + 'static,
{
    spawn_local(async move {
        match inject(container_id, &url).await {
            Ok(()) => then(),
            Err(e) => console_error(&format!("{e:#}")),
        }
    });
}
