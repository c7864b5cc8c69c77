use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::constants::{SEARCH_PATH, SHODAN_API_SERVER};

/// Parameters of one search request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestParams<'a> {
    pub api_key: &'a str,
    pub query: &'a str,
    pub page: u64,
}

/// Backend that executes a search and returns the raw response body
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, params: RequestParams<'_>) -> Result<String>;
}

/// Build the search URL for the given API server
pub fn build_search_url(server: &str, params: RequestParams<'_>) -> Result<Url> {
    let page = params.page.to_string();
    let url = Url::parse_with_params(
        &format!("{}{}", server.trim_end_matches('/'), SEARCH_PATH),
        &[
            ("key", params.api_key),
            ("query", params.query),
            ("page", page.as_str()),
        ],
    )?;
    Ok(url)
}

/// Search client backed by the Shodan REST API
#[derive(Debug, Clone)]
pub struct ShodanClient {
    client: Client,
    server: String,
}

impl ShodanClient {
    pub fn new(client: Client) -> Self {
        Self::with_server(client, SHODAN_API_SERVER)
    }

    pub fn with_server(client: Client, server: impl Into<String>) -> Self {
        Self {
            client,
            server: server.into(),
        }
    }
}

#[async_trait]
impl SearchClient for ShodanClient {
    async fn search(&self, params: RequestParams<'_>) -> Result<String> {
        let url = build_search_url(&self.server, params)?;
        let resp = self.client.get(url).send().await?;
        log::debug!("[{}] -> {}", params.query, resp.status());
        // Error statuses still carry a JSON body worth printing
        Ok(resp.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer a single HTTP request and hand back its request line
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });
        (format!("http://{}", addr), handle)
    }

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    fn params<'a>(query: &'a str) -> RequestParams<'a> {
        RequestParams {
            api_key: "secret",
            query,
            page: 100,
        }
    }

    #[test]
    fn test_build_search_url() {
        let url = build_search_url(SHODAN_API_SERVER, params("port:22")).unwrap();
        assert_eq!(url.host_str(), Some("api.shodan.io"));
        assert_eq!(url.path(), "/shodan/query/search");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("key".to_string(), "secret".to_string()),
                ("query".to_string(), "port:22".to_string()),
                ("page".to_string(), "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_search_url_keeps_query_text() {
        let query = "org:\"A&B\" country:US";
        let url = build_search_url("http://localhost:8080/", params(query)).unwrap();
        assert!(url.as_str().starts_with("http://localhost:8080/shodan/query/search?"));
        let decoded = url
            .query_pairs()
            .find(|(k, _)| k == "query")
            .map(|(_, v)| v.into_owned());
        assert_eq!(decoded.as_deref(), Some(query));
    }

    #[test]
    fn test_build_search_url_invalid_server() {
        assert!(build_search_url("not a url", params("port:22")).is_err());
    }

    #[tokio::test]
    async fn test_search_returns_error_status_body_verbatim() {
        let body = "{\"error\": \"Invalid API key\"}";
        let (server, handle) = serve_once("401 Unauthorized", body).await;
        let client = ShodanClient::with_server(local_client(), server);

        let result = client
            .search(RequestParams {
                api_key: "k",
                query: "org:\"A&B\" country:US",
                page: 2,
            })
            .await
            .unwrap();

        assert_eq!(result, body);
        assert_eq!(
            handle.await.unwrap(),
            "GET /shodan/query/search?key=k&query=org%3A%22A%26B%22+country%3AUS&page=2 HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_search_unreachable_server_is_error() {
        let client = ShodanClient::with_server(local_client(), "http://127.0.0.1:1");
        assert!(client.search(params("port:22")).await.is_err());
    }
}
