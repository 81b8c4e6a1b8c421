//! Mock HTTP server for remote image sources.

use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use super::fixtures::png_bytes;

/// Wrapper around wiremock MockServer with convenience methods
pub struct MockImageServer {
    pub server: MockServer,
}

impl MockImageServer {
    /// Start a new mock HTTP server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get URL for a specific path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }

    /// Serve an RGBA fixture as PNG at `endpoint`
    pub async fn mock_png(&self, endpoint: &str, width: u32, height: u32, data: &[u8]) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(png_bytes(width, height, data))
                    .insert_header("content-type", "image/png"),
            )
            .mount(&self.server)
            .await;
    }

    /// Serve arbitrary bytes at `endpoint`
    pub async fn mock_bytes(&self, endpoint: &str, body: &[u8], content_type: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(body.to_vec())
                    .insert_header("content-type", content_type),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock an endpoint returning an error status
    pub async fn mock_error(&self, endpoint: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_string("error"))
            .mount(&self.server)
            .await;
    }

    /// Mock a redirect from `from` to `location`
    pub async fn mock_redirect(&self, from: &str, location: &str) {
        Mock::given(method("GET"))
            .and(path(from))
            .respond_with(ResponseTemplate::new(302).insert_header("location", location))
            .mount(&self.server)
            .await;
    }
}
