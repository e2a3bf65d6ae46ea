use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{ApiError, SportsApi};
use crate::model::sport_event::SportEvent;

pub struct HttpSportsApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSportsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatReply {
    response: String,
}

#[async_trait]
impl SportsApi for HttpSportsApi {
    async fn chat(&self, message: &str) -> Result<String> {
        let resp = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(ApiError::Transport)?;

        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()).into());
        }

        let reply: ChatReply = resp.json().await.map_err(ApiError::Decode)?;
        Ok(reply.response)
    }

    async fn events(&self, filter: &str) -> Result<Vec<SportEvent>> {
        let resp = self
            .client
            .get(format!("{}/api/sports/events", self.base_url))
            .query(&[("type", filter)])
            .send()
            .await
            .map_err(ApiError::Transport)?;

        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()).into());
        }

        let events: Vec<SportEvent> = resp.json().await.map_err(ApiError::Decode)?;
        Ok(events)
    }
}
