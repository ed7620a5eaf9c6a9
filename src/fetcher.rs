use anyhow::{Context, Result};
use reqwest::blocking::Client;
use scraper::Html;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Retrieves a page and hands it back parsed.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Html>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        // reqwest sends `Accept-Encoding: gzip, deflate` and decodes the body itself
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .deflate(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Html> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch URL: {}", url))?
            .error_for_status()
            .with_context(|| format!("Unexpected HTTP status from URL: {}", url))?;

        let body = response
            .text()
            .with_context(|| format!("Failed to read response body from URL: {}", url))?;

        log::debug!("Fetched {} ({} bytes)", url, body.len());
        Ok(Html::parse_document(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answers a single request on a local port with `response`, returning the page URL.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{}/wiki/Somewhere", addr)
    }

    #[test]
    fn not_found_status_is_an_error() {
        let url = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let err = HttpFetcher::new().unwrap().fetch(&url).unwrap_err();

        assert!(err.to_string().contains(&url));
        assert!(err.to_string().starts_with("Unexpected HTTP status"));
    }

    #[test]
    fn success_body_is_parsed() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 35\r\nConnection: close\r\n\r\n<html><body><p>ok</p></body></html>",
        );
        let document = HttpFetcher::new().unwrap().fetch(&url).unwrap();
        let selector = scraper::Selector::parse("p").unwrap();

        assert_eq!(document.select(&selector).count(), 1);
    }

    #[test]
    fn unreachable_host_is_an_error() {
        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch("http://127.0.0.1:1/wiki/Nowhere").unwrap_err();
        assert!(err.to_string().contains("127.0.0.1:1"));
    }
}
