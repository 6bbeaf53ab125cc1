#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use datastar_catalog::{AttributeDefinition, Catalog, Element, build_catalog};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;
use std::thread::{self, JoinHandle};

pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| build_catalog().expect("datastar catalog builds"))
}

pub fn attribute(name: &str) -> &'static AttributeDefinition {
    catalog()
        .attribute(name)
        .unwrap_or_else(|| panic!("catalog is missing {name}"))
}

pub fn el(tag: &str) -> Element {
    Element::new(tag)
}

/// Path of a binary built alongside the integration tests.
pub fn helper_binary(name: &str) -> PathBuf {
    let path = match name {
        "catalog-export" => env!("CARGO_BIN_EXE_catalog-export"),
        "doc-lint" => env!("CARGO_BIN_EXE_doc-lint"),
        other => panic!("unknown helper binary {other}"),
    };
    PathBuf::from(path)
}

/// Command for `name` with the crate's environment knobs cleared.
pub fn helper_command(name: &str) -> Command {
    let mut cmd = Command::new(helper_binary(name));
    for var in [
        "DATASTAR_VERIFY_DOCS",
        "DATASTAR_DOC_TIMEOUT_SECS",
        "DATASTAR_CATALOG_OUT",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Compare each rendered element with its expected HTML.
pub fn run(cases: Vec<(&str, Element)>) {
    for (expected, element) in cases {
        let mut buf = String::new();
        element.render_to(&mut buf).expect("render into String");
        assert_eq!(buf, expected);
    }
}

/// Minimal HTTP server answering `count` requests with `status`.
pub struct StubServer {
    pub url: String,
    handle: JoinHandle<Vec<String>>,
}

impl StubServer {
    pub fn start(status: u16, count: usize) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let handle = thread::spawn(move || {
            let mut request_lines = Vec::new();
            for _ in 0..count {
                let Ok((stream, _)) = listener.accept() else {
                    break;
                };
                let mut reader = BufReader::new(stream);
                let mut first = String::new();
                let _ = reader.read_line(&mut first);
                request_lines.push(first.trim_end().to_string());
                loop {
                    let mut line = String::new();
                    match reader.read_line(&mut line) {
                        Ok(0) => break,
                        Ok(_) if line == "\r\n" => break,
                        Ok(_) => continue,
                        Err(_) => break,
                    }
                }
                let mut stream = reader.into_inner();
                let _ = write!(
                    stream,
                    "HTTP/1.1 {status} Stub\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                );
                let _ = stream.flush();
            }
            request_lines
        });
        Self {
            url: format!("http://{addr}/reference/attributes"),
            handle,
        }
    }

    /// Request lines seen by the server.
    pub fn finish(self) -> Vec<String> {
        self.handle.join().expect("stub server thread")
    }
}
