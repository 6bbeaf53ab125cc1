//! Documentation links attached to catalog descriptions.
//!
//! Link verification is a capability handed to the catalog builder rather
//! than something the builder does on its own: library consumers and tests
//! use `NoopLinkChecker`, while `doc-lint` and `catalog-export --verify-docs`
//! pass an `HttpLinkChecker` that fetches every URL.

use crate::error::CatalogError;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// Description excerpt length used when reporting a malformed URL.
const EXCERPT_CHARS: usize = 30;

/// Decides whether a documentation URL is reachable.
pub trait LinkChecker {
    /// `Err` carries a short human-readable reason.
    fn check(&self, url: &Url) -> std::result::Result<(), String>;
}

/// Accepts every well-formed URL without touching the network.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLinkChecker;

impl LinkChecker for NoopLinkChecker {
    fn check(&self, _url: &Url) -> std::result::Result<(), String> {
        Ok(())
    }
}

/// Blocking GET per URL; any 2xx status counts as reachable.
#[derive(Debug, Clone)]
pub struct HttpLinkChecker {
    client: Client,
}

impl HttpLinkChecker {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("building documentation link client")?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (proxy settings, custom roots).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl LinkChecker for HttpLinkChecker {
    fn check(&self, url: &Url) -> std::result::Result<(), String> {
        debug!(%url, "fetching documentation link");
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|err| format!("request failed: {err}"))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(format!("status {}", status.as_u16()))
        }
    }
}

/// Parse and verify `url`, then append the "See:" footer to `description`.
pub fn annotate(
    description: &str,
    url: &str,
    checker: &dyn LinkChecker,
) -> std::result::Result<String, CatalogError> {
    let parsed = parse_doc_url(description, url)?;
    checker
        .check(&parsed)
        .map_err(|reason| CatalogError::UnreachableDocumentation {
            url: parsed.to_string(),
            reason,
        })?;
    Ok(format!("{description}\n\nSee: {parsed}"))
}

fn parse_doc_url(description: &str, url: &str) -> std::result::Result<Url, CatalogError> {
    let unreachable = |reason: String| CatalogError::UnreachableDocumentation {
        url: url.to_string(),
        reason,
    };
    let parsed = Url::parse(url).map_err(|err| {
        unreachable(format!(
            "invalid URL ({err}) for \"{}\"",
            excerpt(description)
        ))
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(unreachable(format!(
            "unsupported scheme '{}' for \"{}\"",
            parsed.scheme(),
            excerpt(description)
        )));
    }
    Ok(parsed)
}

fn excerpt(description: &str) -> String {
    let mut chars = description.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recording {
        seen: RefCell<Vec<String>>,
        fail: bool,
    }

    impl LinkChecker for Recording {
        fn check(&self, url: &Url) -> std::result::Result<(), String> {
            self.seen.borrow_mut().push(url.to_string());
            if self.fail {
                Err("status 404".into())
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn annotate_appends_see_footer() {
        let out = annotate(
            "Binds the text content of an element to an expression.",
            "https://data-star.dev/reference/attributes#data-text",
            &NoopLinkChecker,
        )
        .unwrap();
        assert_eq!(
            out,
            "Binds the text content of an element to an expression.\n\nSee: https://data-star.dev/reference/attributes#data-text"
        );
    }

    #[test]
    fn annotate_reports_checker_failure() {
        let checker = Recording {
            seen: RefCell::new(Vec::new()),
            fail: true,
        };
        let err = annotate("Shows things.", "https://example.invalid/docs", &checker).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnreachableDocumentation {
                url: "https://example.invalid/docs".into(),
                reason: "status 404".into(),
            }
        );
        assert_eq!(*checker.seen.borrow(), ["https://example.invalid/docs"]);
    }

    #[test]
    fn malformed_url_never_reaches_checker() {
        let checker = Recording {
            seen: RefCell::new(Vec::new()),
            fail: false,
        };
        let err = annotate(
            "Creates a signal that is computed based on an expression.",
            "data-star.dev/reference",
            &checker,
        )
        .unwrap_err();
        match err {
            CatalogError::UnreachableDocumentation { reason, .. } => {
                assert!(reason.contains("Creates a signal that is compu..."), "{reason}");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(checker.seen.borrow().is_empty());

        let err = annotate("Short.", "ftp://data-star.dev/", &checker).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }
}
