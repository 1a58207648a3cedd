//! The `chatshell://` scheme the window loads its content through.
//!
//! Packaged builds are served straight from the build directory; in
//! development every request is forwarded to the local dev server. Either
//! way the response passes through the policy gate before it reaches the
//! webview.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tauri::http::{
    header::{self, HeaderName},
    HeaderMap, HeaderValue, Request, Response, StatusCode, Uri,
};
use url::Url;

use crate::{content_policy, ContentTarget, ShellError, CONTENT_SCHEME, PACKAGED_INDEX_FILE};

const HOP_BY_HOP_HEADERS: [HeaderName; 6] = [
    header::CONNECTION,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::TE,
    header::TRAILER,
    header::CONTENT_LENGTH,
];

/// Base URL the window navigates to. Webviews on Windows and Android only
/// accept custom schemes in their `http://<scheme>.localhost` form.
pub(crate) fn protocol_base_url() -> Result<Url, url::ParseError> {
    if cfg!(any(windows, target_os = "android")) {
        Url::parse(&format!("http://{CONTENT_SCHEME}.localhost/"))
    } else {
        Url::parse(&format!("{CONTENT_SCHEME}://localhost/"))
    }
}

pub(crate) fn is_content_url(url: &Url) -> bool {
    match protocol_base_url() {
        Ok(base) => url.scheme() == base.scheme() && url.host_str() == base.host_str(),
        Err(_) => false,
    }
}

pub(crate) struct ContentPipeline {
    target: ContentTarget,
    client: reqwest::Client,
}

impl ContentPipeline {
    pub(crate) fn new(target: ContentTarget) -> Self {
        Self {
            target,
            client: reqwest::Client::new(),
        }
    }

    pub(crate) fn is_development(&self) -> bool {
        self.target.is_development()
    }

    pub(crate) async fn respond(&self, request: Request<Vec<u8>>) -> Response<Vec<u8>> {
        let response = match self.target.content_root() {
            Some(root) => serve_packaged_asset(root, request.uri().path()),
            None => match self.forward_to_dev_server(request).await {
                Ok(response) => response,
                Err(error) => {
                    tracing::warn!(%error, "dev server request failed");
                    status_response(StatusCode::BAD_GATEWAY)
                }
            },
        };
        govern(response, self.is_development())
    }

    async fn forward_to_dev_server(
        &self,
        request: Request<Vec<u8>>,
    ) -> Result<Response<Vec<u8>>, ShellError> {
        let endpoint = self.target.dev_endpoint()?.ok_or_else(|| {
            ShellError::content_unavailable(self.target.location(), "not a development target")
        })?;
        let upstream = dev_upstream_url(&endpoint, request.uri());

        let (parts, body) = request.into_parts();
        let mut headers = parts.headers;
        strip_hop_by_hop(&mut headers);
        headers.remove(header::HOST);

        let upstream_response = self
            .client
            .request(parts.method, upstream)
            .headers(headers)
            .body(body)
            .send()
            .await?;
        let status = upstream_response.status();
        let mut headers = upstream_response.headers().clone();
        strip_hop_by_hop(&mut headers);
        let body = upstream_response.bytes().await?.to_vec();

        let mut response = Response::new(body);
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

/// The dev endpoint with the request's path and query. Scheme, host and
/// port always come from the endpoint, so `//host/...` paths stay local.
pub(crate) fn dev_upstream_url(endpoint: &Url, uri: &Uri) -> Url {
    let mut upstream = endpoint.clone();
    upstream.set_path(uri.path());
    upstream.set_query(uri.query());
    upstream.set_fragment(None);
    upstream
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in HOP_BY_HOP_HEADERS.iter() {
        headers.remove(name);
    }
}

pub(crate) fn govern(mut response: Response<Vec<u8>>, is_development: bool) -> Response<Vec<u8>> {
    content_policy::apply_content_security_policy(response.headers_mut(), is_development);
    response
}

/// Answer for requests that arrive before the pipeline is registered.
pub(crate) fn unavailable_response() -> Response<Vec<u8>> {
    govern(status_response(StatusCode::SERVICE_UNAVAILABLE), false)
}

fn status_response(status: StatusCode) -> Response<Vec<u8>> {
    let reason = status.canonical_reason().unwrap_or("Error");
    let mut response = Response::new(reason.as_bytes().to_vec());
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

pub(crate) fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") | Some("map") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("txt") => "text/plain; charset=utf-8",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}

/// Maps a request path onto the build directory, rejecting anything that
/// could escape it.
pub(crate) fn resolve_asset_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(request_path).ok()?;
    let mut path = root.to_path_buf();
    let mut has_segment = false;
    for segment in decoded.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." || segment.contains(['\\', ':', '\0']) {
            return None;
        }
        path.push(segment);
        has_segment = true;
    }
    if !has_segment {
        path.push(PACKAGED_INDEX_FILE);
    }
    Some(path)
}

pub(crate) fn serve_packaged_asset(root: &Path, request_path: &str) -> Response<Vec<u8>> {
    let Some(mut path) = resolve_asset_path(root, request_path) else {
        return status_response(StatusCode::FORBIDDEN);
    };
    if path.is_dir() {
        path.push(PACKAGED_INDEX_FILE);
    }
    // Client-side routes have no extension and no file behind them.
    if !path.is_file() && path.extension().is_none() {
        path = root.join(PACKAGED_INDEX_FILE);
    }

    match fs::read(&path) {
        Ok(bytes) => {
            let mut response = Response::new(bytes);
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(mime_for(&path)),
            );
            response
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            status_response(StatusCode::NOT_FOUND)
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to read packaged asset");
            status_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
