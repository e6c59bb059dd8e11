//! Client side of the guide chat: a stateless request/response exchange
//! keyed by a session identifier.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::consts::CHAT_ERROR_REPLY;
use crate::error::{HeritageError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// `session_<unix millis>`.
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        Self(format!("session_{millis}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: SessionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monastery_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: SessionId,
}

/// Sends one question to the guide and returns its answer. No retry.
pub trait GuideChat {
    fn send_message(&self, text: &str, session_id: &SessionId, site_id: Option<&str>)
        -> Result<String>;

    fn send_request(&self, request: &ChatRequest) -> Result<String> {
        self.send_message(
            &request.message,
            &request.session_id,
            request.monastery_id.as_deref(),
        )
    }
}

/// Guide chat over HTTP: `POST {endpoint}/chat` with a JSON body.
pub struct HttpGuideChat {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpGuideChat {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: format!("{}/chat", endpoint.trim_end_matches('/')),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl GuideChat for HttpGuideChat {
    fn send_message(
        &self,
        text: &str,
        session_id: &SessionId,
        site_id: Option<&str>,
    ) -> Result<String> {
        let request = ChatRequest {
            message: text.to_string(),
            session_id: session_id.clone(),
            monastery_id: site_id.map(str::to_string),
        };
        debug!(url = %self.url, session = %session_id, "sending guide chat request");

        let response = self.client.post(&self.url).json(&request).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), "guide chat request rejected");
            return Err(HeritageError::ChatStatus {
                status: status.as_u16(),
                body,
            });
        }
        let reply: ChatResponse = response.json()?;
        Ok(reply.response)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Guide,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
}

/// Transcript and in-flight flag of one detail page's conversation.
#[derive(Debug)]
pub struct ChatSession {
    session_id: SessionId,
    site_id: Option<String>,
    entries: Vec<ChatEntry>,
    pending: bool,
}

impl ChatSession {
    pub fn new(session_id: SessionId, site_id: Option<String>) -> Self {
        Self {
            session_id,
            site_id,
            entries: Vec::new(),
            pending: false,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record the user's message and build the request for it.
    ///
    /// Returns `None` for blank input or while a previous request is pending.
    pub fn begin_send(&mut self, text: &str) -> Option<ChatRequest> {
        if self.pending || text.trim().is_empty() {
            return None;
        }
        self.pending = true;
        self.entries.push(ChatEntry {
            role: ChatRole::User,
            text: text.to_string(),
        });
        Some(ChatRequest {
            message: text.to_string(),
            session_id: self.session_id.clone(),
            monastery_id: self.site_id.clone(),
        })
    }

    /// Append the guide's reply, or the inline apology when the request failed.
    pub fn complete(&mut self, reply: Result<String>) {
        self.pending = false;
        let text = match reply {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, session = %self.session_id, "guide chat failed");
                CHAT_ERROR_REPLY.to_string()
            }
        };
        self.entries.push(ChatEntry {
            role: ChatRole::Guide,
            text,
        });
    }

    /// Blocking convenience: send `text` through `chat` and record the outcome.
    pub fn ask(&mut self, chat: &dyn GuideChat, text: &str) -> Option<&ChatEntry> {
        let request = self.begin_send(text)?;
        let reply = chat.send_request(&request);
        self.complete(reply);
        self.entries.last()
    }
}
