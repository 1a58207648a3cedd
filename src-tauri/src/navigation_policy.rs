use url::Url;

use crate::content_protocol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NavigationDecision {
    Allow,
    /// Leave the window alone and hand the URL to the OS handler.
    OpenExternally(Url),
    Block,
}

/// Top-level navigations stay inside the content scheme. Web and mail links
/// go to the OS; everything else is dropped.
pub(crate) fn decide_navigation(url: &Url) -> NavigationDecision {
    if content_protocol::is_content_url(url) || url.scheme() == "about" {
        return NavigationDecision::Allow;
    }

    match url.scheme() {
        "http" | "https" | "mailto" => NavigationDecision::OpenExternally(url.clone()),
        _ => NavigationDecision::Block,
    }
}
