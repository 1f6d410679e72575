//! Minimal HTTP/1.1 server for the page.
//!
//! One route: `GET`/`HEAD /` returns the pre-rendered document. Query strings
//! are ignored. Every response closes the connection.

use std::io::{self, BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::ServerConfig;

const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Bound listener plus the document it serves.
pub struct PageServer {
    listener: TcpListener,
    page: Vec<u8>,
}

impl PageServer {
    /// Binds `config.addr`. The page is rendered by the caller once and reused.
    pub fn bind(config: &ServerConfig, page: String) -> Result<Self> {
        let listener = TcpListener::bind(config.addr)
            .with_context(|| format!("failed to bind {}", config.addr))?;
        Ok(Self {
            listener,
            page: page.into_bytes(),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .context("listener has no local address")
    }

    /// Serves connections one at a time until the listener fails.
    pub fn run(self) -> Result<()> {
        info!("Listening on http://{}/", self.local_addr()?);

        for stream in self.listener.incoming() {
            match stream {
                Ok(mut stream) => {
                    if let Err(err) = handle_connection(&mut stream, &self.page) {
                        warn!("connection error: {err}");
                    }
                }
                Err(err) => warn!("accept failed: {err}"),
            }
        }
        Ok(())
    }
}

/// What to send back for one request line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Response {
    pub status: &'static str,
    pub content_type: &'static str,
    pub body: Body,
    pub include_body: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Body {
    Page,
    Text(&'static str),
}

/// Maps a request line (`GET /path HTTP/1.1`) to a response.
pub(crate) fn route(request_line: &str) -> Response {
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");
    let is_head = method.eq_ignore_ascii_case("head");

    if !(method.eq_ignore_ascii_case("get") || is_head) {
        return Response {
            status: "HTTP/1.1 405 Method Not Allowed",
            content_type: "text/plain",
            body: Body::Text("method not allowed"),
            include_body: true,
        };
    }

    let (path_only, _) = target.split_once('?').unwrap_or((target, ""));
    if path_only == "/" {
        return Response {
            status: "HTTP/1.1 200 OK",
            content_type: "text/html; charset=utf-8",
            body: Body::Page,
            include_body: !is_head,
        };
    }

    Response {
        status: "HTTP/1.1 404 Not Found",
        content_type: "text/plain",
        body: Body::Text("not found"),
        include_body: !is_head,
    }
}

fn handle_connection(stream: &mut TcpStream, page: &[u8]) -> io::Result<()> {
    stream.set_read_timeout(Some(READ_TIMEOUT))?;

    let mut request_line = String::new();
    {
        let mut reader = BufReader::new(&*stream);
        reader.read_line(&mut request_line)?;

        // Drain headers so the client sees a clean close.
        let mut header = String::new();
        while reader.read_line(&mut header)? > 0 && !header.trim_end().is_empty() {
            header.clear();
        }
    }

    let request_line = request_line.trim();
    let response = route(request_line);
    debug!(request = request_line, status = response.status, "request");

    let body = match response.body {
        Body::Page => page,
        Body::Text(text) => text.as_bytes(),
    };
    write_response(
        stream,
        response.status,
        response.content_type,
        body,
        response.include_body,
    )
}

fn write_response(
    stream: &mut TcpStream,
    status: &str,
    content_type: &str,
    body: &[u8],
    include_body: bool,
) -> io::Result<()> {
    let header = format!(
        "{status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    stream.write_all(header.as_bytes())?;
    if include_body {
        stream.write_all(body)?;
    }
    stream.flush()
}
