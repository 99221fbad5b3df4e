#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

const ISOLATED_VARS: &[&str] = &[
    "HTML_GRADER_CHECKS",
    "HTML_GRADER_FILE",
    "HTML_GRADER_URL",
    "HTML_GRADER_DOWNLOAD",
    "HTML_GRADER_TIMEOUT_MS",
    "RUST_LOG",
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// Working directory fixture: every command runs inside `dir`.
pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        Self { _tmp: tmp, dir }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("html-grader");
        cmd.current_dir(&self.dir);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let p = self.dir.join(name);
        fs::write(&p, contents).expect("write fixture");
        p
    }

    pub fn write_checks(&self, name: &str, selectors: &[&str]) -> PathBuf {
        self.write(
            name,
            &serde_json::to_string(selectors).expect("serialize checks"),
        )
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.join(name)).expect("read file")
    }

    pub fn run_report(&self, args: &[&str]) -> serde_json::Value {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// One-shot HTTP responder on an ephemeral localhost port.
pub struct OneShotServer {
    pub url: String,
    handle: JoinHandle<()>,
}

impl OneShotServer {
    pub fn serve(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
        let addr = listener.local_addr().expect("listener addr");
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let handle = thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        });
        Self {
            url: format!("http://{addr}/index.html"),
            handle,
        }
    }

    pub fn join(self) {
        self.handle.join().expect("server thread");
    }
}

/// A localhost URL nothing is listening on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("listener addr");
    drop(listener);
    format!("http://{addr}/")
}
