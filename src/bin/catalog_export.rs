//! Builds the Datastar catalog and writes its JSON export.
//!
//! Environment (`DATASTAR_VERIFY_DOCS`, `DATASTAR_DOC_TIMEOUT_SECS`,
//! `DATASTAR_CATALOG_OUT`) supplies defaults; flags override them. Without an
//! output path the export goes to stdout.

use anyhow::{Context, Result, anyhow, bail};
use datastar_catalog::config::parse_timeout;
use datastar_catalog::{
    CatalogConfig, HttpLinkChecker, build_catalog, build_catalog_with, logging,
};
use std::env;
use std::path::PathBuf;

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut config = CatalogConfig::from_env()?;
    Cli::parse()?.apply(&mut config);

    let catalog = if config.verify_docs {
        let checker = HttpLinkChecker::new(config.doc_timeout)?;
        build_catalog_with(&checker)
    } else {
        build_catalog()
    }
    .context("building catalog")?;

    match config.output {
        Some(path) => catalog.write_to_path(&path)?,
        None => println!("{}", catalog.to_json_pretty()?),
    }
    Ok(())
}

#[derive(Default)]
struct Cli {
    output: Option<PathBuf>,
    verify_docs: bool,
    timeout: Option<std::time::Duration>,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args_os();
        let _program = args.next();
        let mut cli = Cli::default();

        while let Some(arg) = args.next() {
            let arg_str = arg
                .to_str()
                .ok_or_else(|| anyhow!("invalid UTF-8 in argument"))?;
            match arg_str {
                "--output" | "-o" => {
                    let value = next_value("--output", &mut args)?;
                    cli.output = Some(PathBuf::from(value));
                }
                "--verify-docs" => cli.verify_docs = true,
                "--timeout" => {
                    let value = next_value("--timeout", &mut args)?;
                    cli.timeout = Some(parse_timeout(&value)?);
                }
                "--help" | "-h" => usage(0),
                other => bail!("unknown argument: {other}"),
            }
        }
        Ok(cli)
    }

    fn apply(self, config: &mut CatalogConfig) {
        if self.output.is_some() {
            config.output = self.output;
        }
        if self.verify_docs {
            config.verify_docs = true;
        }
        if let Some(timeout) = self.timeout {
            config.doc_timeout = timeout;
        }
    }
}

fn next_value(flag: &str, args: &mut env::ArgsOs) -> Result<String> {
    let value = args
        .next()
        .ok_or_else(|| anyhow!("{flag} requires a value"))?
        .into_string()
        .map_err(|_| anyhow!("{flag} must be valid UTF-8"))?;
    if value.is_empty() {
        bail!("{flag} must not be empty");
    }
    Ok(value)
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: catalog-export [--output PATH] [--verify-docs] [--timeout SECS]\n\nOptions:\n  --output, -o PATH   Write the export to PATH (or set DATASTAR_CATALOG_OUT). Defaults to stdout.\n  --verify-docs       Fetch every documentation URL while building (or set DATASTAR_VERIFY_DOCS=1).\n  --timeout SECS      Per-request timeout for --verify-docs (or set DATASTAR_DOC_TIMEOUT_SECS). Default 10.\n  --help              Show this help text."
    );
    std::process::exit(code);
}
