//! Telegram chat transport
//!
//! Implements [`ChatTransport`] over the Bot HTTP API with long polling
//! (`getUpdates`) and `sendMessage`.

use std::time::Duration;

use anyhow::{Context, bail};
use log::debug;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::http;
use crate::config::TelegramConfig;
use crate::core::ports::{ChatTransport, IncomingMessage, TextFormat};
use crate::error::FetchError;

/// Slack added to the long-poll timeout for the HTTP request itself
const POLL_SLACK: Duration = Duration::from_secs(10);

/// Telegram Bot API transport
pub struct TelegramTransport {
    http: Client,
    base_url: String,
    token: String,
    poll_timeout_secs: u64,
    offset: i64,
}

impl std::fmt::Debug for TelegramTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramTransport")
            .field("base_url", &self.base_url)
            .field("poll_timeout_secs", &self.poll_timeout_secs)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    result: Option<T>,
}

#[derive(Deserialize)]
struct Update {
    update_id: i64,
    #[serde(default)]
    message: Option<Message>,
}

#[derive(Deserialize)]
struct Message {
    chat: Chat,
    #[serde(default)]
    from: Option<User>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct Chat {
    id: i64,
}

#[derive(Deserialize)]
struct User {
    #[serde(default)]
    username: Option<String>,
}

impl TelegramTransport {
    /// Create a transport for the configured bot
    pub fn new(config: &TelegramConfig) -> anyhow::Result<Self> {
        if config.bot_token.trim().is_empty() {
            bail!("no Telegram bot token configured");
        }
        let timeout = Duration::from_secs(config.poll_timeout_secs) + POLL_SLACK;
        Ok(Self {
            http: http::client(timeout)?,
            base_url: config.base_url.clone(),
            token: config.bot_token.clone(),
            poll_timeout_secs: config.poll_timeout_secs,
            offset: 0,
        })
    }

    fn method_url(&self, method: &str) -> String {
        http::join(&self.base_url, &format!("bot{}/{method}", self.token))
    }

    /// Send a Bot API request; the URL embeds the token, so errors never carry it
    fn call(&self, builder: RequestBuilder) -> Result<(u16, String), FetchError> {
        http::send(&self.http, builder).map_err(FetchError::without_url)
    }
}

fn decode<T: DeserializeOwned>(method: &str, status: u16, body: &str) -> anyhow::Result<T> {
    let response: ApiResponse<T> =
        serde_json::from_str(body).with_context(|| format!("{method}: unexpected response (HTTP {status})"))?;
    if !response.ok {
        bail!(
            "{method} failed (HTTP {status}): {}",
            response.description.as_deref().unwrap_or("no description")
        );
    }
    response.result.with_context(|| format!("{method}: response has no result"))
}

impl ChatTransport for TelegramTransport {
    fn poll(&mut self) -> anyhow::Result<Vec<IncomingMessage>> {
        let url = format!(
            "{}?offset={}&timeout={}",
            self.method_url("getUpdates"),
            self.offset,
            self.poll_timeout_secs
        );
        let (status, body) = self.call(self.http.get(&url))?;
        let updates: Vec<Update> = decode("getUpdates", status, &body)?;

        if let Some(last) = updates.iter().map(|u| u.update_id).max() {
            self.offset = last + 1;
        }
        debug!("received {} update(s)", updates.len());

        Ok(updates
            .into_iter()
            .filter_map(|u| u.message)
            .filter_map(|m| {
                Some(IncomingMessage {
                    chat_id: m.chat.id,
                    sender: m.from.and_then(|u| u.username),
                    text: m.text?,
                })
            })
            .collect())
    }

    fn send(&self, chat_id: i64, text: &str, format: TextFormat) -> anyhow::Result<()> {
        let mut payload = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });
        if format == TextFormat::Markdown {
            payload["parse_mode"] = serde_json::Value::from("Markdown");
        }

        let builder = self.http.post(self.method_url("sendMessage")).json(&payload);
        let (status, body) = self.call(builder)?;
        let _: serde_json::Value = decode("sendMessage", status, &body)?;
        Ok(())
    }
}
