//! Checks every documentation link in the catalog over HTTP.
//!
//! Unlike `catalog-export --verify-docs`, which stops at the first
//! unreachable link, this reports all failures before exiting non-zero.

use anyhow::{Result, anyhow, bail};
use datastar_catalog::config::parse_timeout;
use datastar_catalog::{CatalogConfig, HttpLinkChecker, LinkChecker, build_catalog, logging};
use std::env;
use tracing::info;
use url::Url;

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut config = CatalogConfig::from_env()?;
    if let Some(timeout) = parse_args()? {
        config.doc_timeout = timeout;
    }

    let catalog = build_catalog()?;
    let checker = HttpLinkChecker::new(config.doc_timeout)?;

    let urls = catalog.doc_urls();
    let mut errors: Vec<String> = Vec::new();
    for raw in &urls {
        let outcome = Url::parse(raw)
            .map_err(|err| format!("invalid URL: {err}"))
            .and_then(|url| checker.check(&url));
        match outcome {
            Ok(()) => info!(url = %raw, "documentation link ok"),
            Err(reason) => {
                let message = format!("{raw}: {reason}");
                eprintln!("doc-lint: {message}");
                errors.push(message);
            }
        }
    }

    if errors.is_empty() {
        println!("{} documentation link(s) reachable", urls.len());
        Ok(())
    } else {
        bail!(
            "{} of {} documentation link(s) failed:\n{}",
            errors.len(),
            urls.len(),
            errors.join("\n")
        )
    }
}

fn parse_args() -> Result<Option<std::time::Duration>> {
    let mut args = env::args_os();
    let _program = args.next();
    let mut timeout = None;
    while let Some(arg) = args.next() {
        let arg_str = arg
            .to_str()
            .ok_or_else(|| anyhow!("invalid UTF-8 in argument"))?;
        match arg_str {
            "--timeout" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("--timeout requires a value"))?
                    .into_string()
                    .map_err(|_| anyhow!("--timeout must be valid UTF-8"))?;
                timeout = Some(parse_timeout(&value)?);
            }
            "--help" | "-h" => usage(0),
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(timeout)
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: doc-lint [--timeout SECS]\n\nOptions:\n  --timeout SECS   Per-request timeout (or set DATASTAR_DOC_TIMEOUT_SECS). Default 10.\n  --help           Show this help text."
    );
    std::process::exit(code);
}
