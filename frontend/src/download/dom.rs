use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlAnchorElement, Window};

use super::{BrowsingContext, DownloadError, DownloadMode, DownloadRequest};

fn dom_error(op: &'static str) -> impl FnOnce(JsValue) -> DownloadError {
    move |e| DownloadError::Dom {
        op,
        detail: format!("{:?}", e),
    }
}

/// The current page's window and document.
pub struct WebContext {
    window: Window,
    document: Document,
}

impl WebContext {
    pub fn current() -> Result<Self, DownloadError> {
        let window = web_sys::window().ok_or(DownloadError::Unavailable("window"))?;
        let document = window
            .document()
            .ok_or(DownloadError::Unavailable("document"))?;
        Ok(Self { window, document })
    }
}

impl BrowsingContext for WebContext {
    type Link = HtmlAnchorElement;

    fn open_new_context(&self, url: &str) -> Result<(), DownloadError> {
        match self
            .window
            .open_with_url_and_target(url, "_blank")
            .map_err(dom_error("window.open"))?
        {
            Some(_) => Ok(()),
            None => Err(DownloadError::Blocked),
        }
    }

    fn create_link(&self, href: &str, filename: &str) -> Result<HtmlAnchorElement, DownloadError> {
        let link = self
            .document
            .create_element("a")
            .map_err(dom_error("createElement"))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|el| DownloadError::Dom {
                op: "createElement",
                detail: format!("<{}> is not an anchor", el.tag_name()),
            })?;
        link.set_href(href);
        link.set_download(filename);
        link.set_rel("noopener");
        link.set_hidden(true);
        Ok(link)
    }

    fn attach(&self, link: &HtmlAnchorElement) -> Result<(), DownloadError> {
        let body = self
            .document
            .body()
            .ok_or(DownloadError::Unavailable("document body"))?;
        body.append_child(link).map_err(dom_error("appendChild"))?;
        Ok(())
    }

    fn activate(&self, link: &HtmlAnchorElement) -> Result<(), DownloadError> {
        link.click();
        Ok(())
    }

    fn detach(&self, link: &HtmlAnchorElement) {
        link.remove();
    }
}

/// Dispatch against the live page, logging when there is no page to act on.
pub fn dispatch_in_browser(request: &DownloadRequest, mode: DownloadMode) {
    match WebContext::current() {
        Ok(context) => super::dispatch(&context, request, mode),
        Err(e) => log::error!("Cannot start download of {}: {}", request.source_url(), e),
    }
}
