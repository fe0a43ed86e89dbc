//! Starts retrieval of the distributable artifact from a click.
//!
//! Two strategies are offered, picked explicitly by [`DownloadMode`]:
//! open the URL in a new browsing context, or insert a hidden anchor carrying
//! a `download` hint, click it, and take it out again. Failures are logged
//! and never reach the caller.

pub mod dom;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq)]
pub enum DownloadError {
    #[error("Invalid download URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Download URL scheme {0} is not http(s)")]
    UnsupportedScheme(String),
    #[error("No filename could be derived for a download link to {0}")]
    MissingFilename(String),
    #[error("Unknown download mode: {0}")]
    UnknownMode(String),
    #[error("Browser {0} is unavailable")]
    Unavailable(&'static str),
    #[error("DOM operation {op} failed: {detail}")]
    Dom { op: &'static str, detail: String },
    #[error("Opening a new browsing context was blocked")]
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadMode {
    /// Open the artifact URL in a new tab and let the browser decide.
    Navigate,
    /// Click a transient `<a download>` to force a save.
    SynthesizeLink,
}

impl DownloadMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DownloadMode::Navigate => "navigate",
            DownloadMode::SynthesizeLink => "synthesize-link",
        }
    }
}

impl fmt::Display for DownloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DownloadMode {
    type Err = DownloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "navigate" => Ok(DownloadMode::Navigate),
            "synthesize-link" | "link" => Ok(DownloadMode::SynthesizeLink),
            other => Err(DownloadError::UnknownMode(other.to_string())),
        }
    }
}

/// One artifact to fetch. Built per click and dropped after dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRequest {
    source_url: Url,
    suggested_filename: Option<String>,
}

impl DownloadRequest {
    pub fn new(source_url: &str, suggested_filename: Option<&str>) -> Result<Self, DownloadError> {
        let source_url = Url::parse(source_url)?;
        if !matches!(source_url.scheme(), "http" | "https") {
            return Err(DownloadError::UnsupportedScheme(source_url.scheme().to_string()));
        }
        Ok(Self {
            source_url,
            suggested_filename: suggested_filename.map(str::to_string),
        })
    }

    pub fn source_url(&self) -> &str {
        self.source_url.as_str()
    }

    pub fn suggested_filename(&self) -> Option<&str> {
        self.suggested_filename.as_deref()
    }

    /// Name for the anchor's `download` attribute: the hint when non-blank,
    /// else the last non-empty path segment of the URL.
    pub fn link_filename(&self) -> Result<String, DownloadError> {
        let hint = self
            .suggested_filename
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());
        if let Some(name) = hint {
            return Ok(name.to_string());
        }
        self.source_url
            .path_segments()
            .and_then(|segments| segments.rev().find(|s| !s.is_empty()))
            .map(str::to_string)
            .ok_or_else(|| DownloadError::MissingFilename(self.source_url.to_string()))
    }
}

/// The browsing environment a dispatch acts on.
pub trait BrowsingContext {
    type Link;

    fn open_new_context(&self, url: &str) -> Result<(), DownloadError>;
    fn create_link(&self, href: &str, filename: &str) -> Result<Self::Link, DownloadError>;
    fn attach(&self, link: &Self::Link) -> Result<(), DownloadError>;
    fn activate(&self, link: &Self::Link) -> Result<(), DownloadError>;
    /// Take the link out of the document. Must tolerate a link never attached.
    fn detach(&self, link: &Self::Link);
}

/// A link that lives in the document only as long as this guard.
struct TransientLink<'a, C: BrowsingContext> {
    context: &'a C,
    link: C::Link,
}

impl<'a, C: BrowsingContext> TransientLink<'a, C> {
    fn insert(context: &'a C, href: &str, filename: &str) -> Result<Self, DownloadError> {
        let guard = Self {
            context,
            link: context.create_link(href, filename)?,
        };
        context.attach(&guard.link)?;
        Ok(guard)
    }

    fn activate(&self) -> Result<(), DownloadError> {
        self.context.activate(&self.link)
    }
}

impl<C: BrowsingContext> Drop for TransientLink<'_, C> {
    fn drop(&mut self) {
        self.context.detach(&self.link);
    }
}

/// Dispatch and report the outcome instead of logging it.
pub fn try_dispatch<C: BrowsingContext>(
    context: &C,
    request: &DownloadRequest,
    mode: DownloadMode,
) -> Result<(), DownloadError> {
    match mode {
        DownloadMode::Navigate => context.open_new_context(request.source_url()),
        DownloadMode::SynthesizeLink => {
            let filename = request.link_filename()?;
            let link = TransientLink::insert(context, request.source_url(), &filename)?;
            link.activate()
        }
    }
}

/// Fire-and-forget download. Errors go to the log only.
pub fn dispatch<C: BrowsingContext>(context: &C, request: &DownloadRequest, mode: DownloadMode) {
    match try_dispatch(context, request, mode) {
        Ok(()) => log::info!("Started {} download of {}", mode, request.source_url()),
        Err(e) => log::error!("Download of {} via {} failed: {}", request.source_url(), mode, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Stage {
        Open,
        Create,
        Attach,
        Activate,
    }

    #[derive(Debug, PartialEq)]
    struct FakeLink {
        id: usize,
        href: String,
        filename: String,
    }

    #[derive(Default)]
    struct FakeContext {
        document: RefCell<Vec<usize>>,
        created: Cell<usize>,
        opened: RefCell<Vec<String>>,
        clicked: RefCell<Vec<(String, String)>>,
        fail_at: Option<Stage>,
    }

    impl FakeContext {
        fn failing_at(stage: Stage) -> Self {
            Self {
                fail_at: Some(stage),
                ..Self::default()
            }
        }

        fn check(&self, stage: Stage) -> Result<(), DownloadError> {
            if self.fail_at == Some(stage) {
                Err(DownloadError::Dom {
                    op: "simulated",
                    detail: format!("{:?}", stage),
                })
            } else {
                Ok(())
            }
        }
    }

    impl BrowsingContext for FakeContext {
        type Link = FakeLink;

        fn open_new_context(&self, url: &str) -> Result<(), DownloadError> {
            if self.fail_at == Some(Stage::Open) {
                return Err(DownloadError::Blocked);
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }

        fn create_link(&self, href: &str, filename: &str) -> Result<FakeLink, DownloadError> {
            self.check(Stage::Create)?;
            let id = self.created.get() + 1;
            self.created.set(id);
            Ok(FakeLink {
                id,
                href: href.to_string(),
                filename: filename.to_string(),
            })
        }

        fn attach(&self, link: &FakeLink) -> Result<(), DownloadError> {
            // Inserted, then the failure surfaces: cleanup must still happen.
            self.document.borrow_mut().push(link.id);
            self.check(Stage::Attach)
        }

        fn activate(&self, link: &FakeLink) -> Result<(), DownloadError> {
            self.check(Stage::Activate)?;
            assert!(self.document.borrow().contains(&link.id));
            self.clicked
                .borrow_mut()
                .push((link.href.clone(), link.filename.clone()));
            Ok(())
        }

        fn detach(&self, link: &FakeLink) {
            self.document.borrow_mut().retain(|id| *id != link.id);
        }
    }

    fn app_zip() -> DownloadRequest {
        DownloadRequest::new("https://example.com/app.zip", Some("App.zip")).expect("valid request")
    }

    #[test]
    fn synthesized_link_is_created_clicked_and_removed() {
        let ctx = FakeContext::default();
        assert!(ctx.document.borrow().is_empty());

        dispatch(&ctx, &app_zip(), DownloadMode::SynthesizeLink);

        assert_eq!(ctx.created.get(), 1);
        assert!(ctx.document.borrow().is_empty());
        assert_eq!(
            *ctx.clicked.borrow(),
            vec![("https://example.com/app.zip".to_string(), "App.zip".to_string())]
        );
        assert!(ctx.opened.borrow().is_empty());
    }

    #[test]
    fn link_is_removed_on_every_failure() {
        for stage in [Stage::Create, Stage::Attach, Stage::Activate] {
            let ctx = FakeContext::failing_at(stage);
            let result = try_dispatch(&ctx, &app_zip(), DownloadMode::SynthesizeLink);

            assert!(matches!(result, Err(DownloadError::Dom { .. })), "{:?}", stage);
            assert!(ctx.document.borrow().is_empty(), "dangling link after {:?}", stage);
            assert!(ctx.clicked.borrow().is_empty());
            assert!(ctx.opened.borrow().is_empty());
        }
    }

    #[test]
    fn failures_do_not_escape_dispatch() {
        let ctx = FakeContext::failing_at(Stage::Activate);
        dispatch(&ctx, &app_zip(), DownloadMode::SynthesizeLink);
        assert!(ctx.document.borrow().is_empty());

        let ctx = FakeContext::failing_at(Stage::Open);
        dispatch(&ctx, &app_zip(), DownloadMode::Navigate);
        assert!(ctx.opened.borrow().is_empty());
    }

    #[test]
    fn navigate_never_touches_the_document() {
        let ctx = FakeContext::default();
        dispatch(&ctx, &app_zip(), DownloadMode::Navigate);

        assert_eq!(*ctx.opened.borrow(), vec!["https://example.com/app.zip".to_string()]);
        assert_eq!(ctx.created.get(), 0);
        assert!(ctx.document.borrow().is_empty());
    }

    #[test]
    fn blocked_navigation_is_reported() {
        let ctx = FakeContext::failing_at(Stage::Open);
        assert_eq!(
            try_dispatch(&ctx, &app_zip(), DownloadMode::Navigate),
            Err(DownloadError::Blocked)
        );
    }

    #[test]
    fn repeated_clicks_use_fresh_links() {
        let ctx = FakeContext::default();
        for _ in 0..3 {
            dispatch(&ctx, &app_zip(), DownloadMode::SynthesizeLink);
        }
        assert_eq!(ctx.created.get(), 3);
        assert_eq!(ctx.clicked.borrow().len(), 3);
        assert!(ctx.document.borrow().is_empty());
    }

    #[test]
    fn filename_falls_back_to_url_path() {
        let req = DownloadRequest::new("https://example.com/releases/win-unpacked.zip", None)
            .expect("valid request");
        assert_eq!(req.link_filename(), Ok("win-unpacked.zip".to_string()));

        let blank = DownloadRequest::new("https://example.com/dl/app.zip/", Some("  "))
            .expect("valid request");
        assert_eq!(blank.link_filename(), Ok("app.zip".to_string()));
    }

    #[test]
    fn no_filename_means_no_link() {
        let ctx = FakeContext::default();
        let req = DownloadRequest::new("https://example.com/", None).expect("valid request");
        assert!(matches!(
            try_dispatch(&ctx, &req, DownloadMode::SynthesizeLink),
            Err(DownloadError::MissingFilename(_))
        ));
        assert_eq!(ctx.created.get(), 0);

        // The hint is irrelevant when navigating.
        assert_eq!(try_dispatch(&ctx, &req, DownloadMode::Navigate), Ok(()));
    }

    #[test]
    fn request_requires_absolute_http_url() {
        assert!(matches!(
            DownloadRequest::new("app.zip", Some("App.zip")),
            Err(DownloadError::InvalidUrl(_))
        ));
        assert_eq!(
            DownloadRequest::new("javascript:alert(1)", None),
            Err(DownloadError::UnsupportedScheme("javascript".to_string()))
        );
        assert_eq!(app_zip().suggested_filename(), Some("App.zip"));
    }

    #[test]
    fn mode_names() {
        assert_eq!("navigate".parse::<DownloadMode>(), Ok(DownloadMode::Navigate));
        assert_eq!(" Synthesize-Link ".parse::<DownloadMode>(), Ok(DownloadMode::SynthesizeLink));
        assert_eq!(DownloadMode::SynthesizeLink.to_string(), "synthesize-link");
        assert_eq!(
            "torrent".parse::<DownloadMode>(),
            Err(DownloadError::UnknownMode("torrent".to_string()))
        );
    }
}
