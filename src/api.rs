use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::Error;
use crate::oembed::OEmbed;

/// Minimal HTTP client for the one endpoint this crate calls itself. All
/// other payloads are expected to be fetched by the surrounding application
/// and handed to the model types as decoded JSON.
pub struct ApiClient {
    client: Client,
    base_url: Url,
    bearer_token: Option<String>,
}

impl ApiClient {
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(&config.base_url)?,
            bearer_token: config.bearer_token,
        })
    }

    /// Calls `statuses/oembed.json` for the given status id and deserializes
    /// the oEmbed rendition. Repeated calls re-issue the request; nothing is
    /// cached.
    pub async fn oembed(&self, id: u64) -> Result<OEmbed, Error> {
        let endpoint = self.oembed_url(id)?;
        let mut request = self
            .client
            .get(endpoint)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await?;
        let status = resp.status();
        let json = resp.text().await?;
        match status {
            x if x.is_success() => {
                let oembed: OEmbed =
                    serde_json::from_str(&json).map_err(Error::ResponseParse)?;
                debug!("{:?}", oembed);
                Ok(oembed)
            }
            x => Err(Error::ResponseStatus(x.as_u16(), json)),
        }
    }

    fn oembed_url(&self, id: u64) -> Result<Url, Error> {
        let mut url = self.base_url.join("statuses/oembed.json")?;
        url.query_pairs_mut().append_pair("id", &id.to_string());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oembed_url_is_keyed_by_the_status_id() {
        let client = ApiClient::new(Config::default()).unwrap();
        let url = client.oembed_url(25938088801).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.twitter.com/1.1/statuses/oembed.json?id=25938088801"
        );
    }

    #[test]
    fn oembed_url_respects_a_configured_base() {
        let config = Config {
            base_url: "http://localhost:4567/1.1/".to_owned(),
            bearer_token: None,
        };
        let client = ApiClient::new(config).unwrap();
        let url = client.oembed_url(1).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4567/1.1/statuses/oembed.json?id=1");
    }

    #[tokio::test]
    async fn oembed_requests_the_endpoint_and_decodes_the_rendition() {
        use std::io::{Read as _, Write as _};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let body = r#"{"type":"rich","author_name":"Twitter API","width":550}"#;
            let resp = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            stream.write_all(resp.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        let config = Config {
            base_url: format!("http://{}/1.1/", addr),
            bearer_token: None,
        };
        let client = ApiClient::new(config).unwrap();
        let oembed = client.oembed(25938088801).await.unwrap();
        assert_eq!(oembed.kind.as_deref(), Some("rich"));
        assert_eq!(oembed.author_name.as_deref(), Some("Twitter API"));

        let request = server.join().unwrap();
        assert!(
            request.starts_with("GET /1.1/statuses/oembed.json?id=25938088801 HTTP/1.1\r\n"),
            "unexpected request line: {request}"
        );
    }
}
