//! Minimal synchronous hosting adapter for the screening page.
//!
//! The app is a stateless request-per-render-cycle flow over a couple of
//! dozen scalar inputs, so one connection at a time is the intended
//! service model: no keep-alive, no TLS, `Connection: close` on every
//! response.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};

use anyhow::{Context, Result};

use vitalscreen_app::app::{self, AppRequest};
use vitalscreen_app::models::store::AppContext;
use vitalscreen_app::predictor::FormValues;
use vitalscreen_app::render;
use vitalscreen_app::schema::Disease;

const MAX_BODY_BYTES: usize = 64 * 1024;

/// Accept and answer connections until the process is terminated.
pub fn run(ctx: &AppContext, listen: &str) -> Result<()> {
    let listener =
        TcpListener::bind(listen).with_context(|| format!("Failed to bind {}", listen))?;
    log::info!("[VitalScreen] Serving on http://{}", listener.local_addr()?);

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                if let Err(e) = handle_connection(ctx, stream) {
                    log::warn!("Request failed: {:#}", e);
                }
            }
            Err(e) => log::warn!("Accept failed: {}", e),
        }
    }

    Ok(())
}

struct HttpRequest {
    method: String,
    target: String,
    body: String,
}

fn handle_connection(ctx: &AppContext, stream: TcpStream) -> Result<()> {
    let mut reader = BufReader::new(stream);
    let request = read_request(&mut reader)?;
    log::debug!("{} {}", request.method, request.target);

    let (status, page) = route(ctx, &request);
    let mut stream = reader.into_inner();
    write_response(&mut stream, status, &page)
}

fn read_request(reader: &mut BufReader<TcpStream>) -> Result<HttpRequest> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read request line")?;

    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        let n = reader
            .read_line(&mut header)
            .context("Failed to read header")?;
        if n == 0 || header.trim().is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    anyhow::ensure!(
        content_length <= MAX_BODY_BYTES,
        "Request body too large: {} bytes",
        content_length
    );

    let mut body = vec![0u8; content_length];
    reader
        .read_exact(&mut body)
        .context("Failed to read request body")?;

    Ok(HttpRequest {
        method,
        target,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

fn route(ctx: &AppContext, request: &HttpRequest) -> (&'static str, String) {
    let (path, query) = request
        .target
        .split_once('?')
        .unwrap_or((request.target.as_str(), ""));

    match (request.method.as_str(), path) {
        ("GET", "/") => {
            let tab = form_pairs(query)
                .into_iter()
                .find(|(key, _)| key == "tab")
                .and_then(|(_, value)| Disease::from_slug(&value))
                .unwrap_or(Disease::Parkinson);
            (
                "200 OK",
                app::handle(ctx, AppRequest::Show { tab }).into_string(),
            )
        }
        ("POST", "/predict") => {
            let pairs = form_pairs(&request.body);
            let tab = pairs
                .iter()
                .find(|(key, _)| key == "tab")
                .and_then(|(_, value)| Disease::from_slug(value));

            match tab {
                Some(tab) => {
                    let values = FormValues::from_pairs(pairs);
                    (
                        "200 OK",
                        app::handle(ctx, AppRequest::Submit { tab, values }).into_string(),
                    )
                }
                None => (
                    "400 Bad Request",
                    render::error_page("The submission named no screening tab.").into_string(),
                ),
            }
        }
        _ => (
            "404 Not Found",
            render::error_page("Page not found.").into_string(),
        ),
    }
}

fn write_response(stream: &mut TcpStream, status: &str, body: &str) -> Result<()> {
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream
        .write_all(response.as_bytes())
        .context("Failed to write response")?;
    stream.flush().context("Failed to flush response")?;
    Ok(())
}

/// Split a urlencoded query string or body into decoded key/value pairs.
fn form_pairs(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            (percent_decode(key), percent_decode(value))
        })
        .collect()
}

fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi * 16 + lo) as u8);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}
