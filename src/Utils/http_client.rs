use reqwest::blocking::Client;
use thiserror::Error;

/// transport-level errors of the HTTP seam
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Transport failure: {0}")]
    Transport(String),
}

/// raw reply: status code plus body text, status checks are left to the caller
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client trait for dependency injection
pub trait HttpClient {
    fn get_text(&self, url: &str) -> Result<HttpReply, HttpError>;
    fn post_json(&self, url: &str, body: &str) -> Result<HttpReply, HttpError>;
}

// Implementation for the real reqwest client
impl HttpClient for Client {
    fn get_text(&self, url: &str) -> Result<HttpReply, HttpError> {
        let response = self.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpReply { status, body })
    }

    fn post_json(&self, url: &str, body: &str) -> Result<HttpReply, HttpError> {
        let response = self
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpReply { status, body })
    }
}

/// Scripted client for tests: canned replies keyed by exact URL, every request
/// is recorded. A request for an URL with no scripted reply panics, so tests
/// can prove that a code path performs no network call at all.
#[cfg(test)]
pub struct MockHttpClient {
    responses: std::collections::HashMap<String, Result<HttpReply, String>>,
    calls: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: std::collections::HashMap::new(),
            calls: std::cell::RefCell::new(Vec::new()),
        }
    }

    pub fn mock_response(&mut self, url: &str, status: u16, body: &str) {
        self.responses.insert(
            url.to_string(),
            Ok(HttpReply {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn mock_failure(&mut self, url: &str, message: &str) {
        self.responses
            .insert(url.to_string(), Err(message.to_string()));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn reply_for(&self, url: &str) -> Result<HttpReply, HttpError> {
        self.calls.borrow_mut().push(url.to_string());
        match self.responses.get(url) {
            Some(Ok(reply)) => Ok(reply.clone()),
            Some(Err(message)) => Err(HttpError::Transport(message.clone())),
            None => panic!("unexpected request: {}", url),
        }
    }
}

#[cfg(test)]
impl HttpClient for MockHttpClient {
    fn get_text(&self, url: &str) -> Result<HttpReply, HttpError> {
        self.reply_for(url)
    }

    fn post_json(&self, url: &str, _body: &str) -> Result<HttpReply, HttpError> {
        self.reply_for(url)
    }
}

// A borrowed mock works too, so a test can hand the client a reference and
// keep inspecting the request log afterwards.
#[cfg(test)]
impl HttpClient for &MockHttpClient {
    fn get_text(&self, url: &str) -> Result<HttpReply, HttpError> {
        (*self).reply_for(url)
    }

    fn post_json(&self, url: &str, _body: &str) -> Result<HttpReply, HttpError> {
        (*self).reply_for(url)
    }
}
