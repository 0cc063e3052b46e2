//! Guestbook API
//!
//! The five REST calls the front end makes. `HttpGuestbookApi` talks to the
//! server through reqwest (browser fetch on wasm32); tests swap in an
//! in-memory implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{ApiReply, Entry, EntryUpdate, NewEntry, PasswordCheck, VerifyReply};

/// Remote guestbook operations.
///
/// Futures are not `Send`: on wasm32 they wrap JS promises.
#[async_trait(?Send)]
pub trait GuestbookApi {
    /// `GET /guestbook/`. A non-OK status is an error.
    async fn list(&self) -> ClientResult<Vec<Entry>>;

    /// `POST /guestbook/`
    async fn create(&self, entry: &NewEntry) -> ClientResult<ApiReply>;

    /// `POST /guestbook/{id}/verify/`, returns whether the password matched
    async fn verify(&self, id: u32, password: &str) -> ClientResult<bool>;

    /// `DELETE /guestbook/{id}` with the verified password
    async fn delete(&self, id: u32, password: &str) -> ClientResult<ApiReply>;

    /// `PUT /guestbook/{id}`
    async fn update(&self, id: u32, update: &EntryUpdate) -> ClientResult<ApiReply>;
}

/// reqwest-backed API client
#[derive(Debug, Clone)]
pub struct HttpGuestbookApi {
    client: Client,
    config: ClientConfig,
}

impl HttpGuestbookApi {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Use a preconfigured reqwest client
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Mutation replies are judged by their body only, whatever the status.
    async fn read_reply(response: reqwest::Response) -> ClientResult<ApiReply> {
        let status = response.status();
        let text = response.text().await?;
        let value: Value = serde_json::from_str(&text)?;
        let reply = ApiReply::from_json(&value);
        log::debug!("reply status={} -> {:?}", status.as_u16(), reply);
        Ok(reply)
    }
}

#[async_trait(?Send)]
impl GuestbookApi for HttpGuestbookApi {
    async fn list(&self) -> ClientResult<Vec<Entry>> {
        let response = self.client.get(self.config.list_url()).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn create(&self, entry: &NewEntry) -> ClientResult<ApiReply> {
        let response = self.client.post(self.config.list_url()).json(entry).send().await?;
        Self::read_reply(response).await
    }

    async fn verify(&self, id: u32, password: &str) -> ClientResult<bool> {
        let response = self
            .client
            .post(self.config.verify_url(id))
            .json(&PasswordCheck { password })
            .send()
            .await?;
        let text = response.text().await?;
        let reply: VerifyReply = serde_json::from_str(&text)?;
        Ok(reply.valid)
    }

    async fn delete(&self, id: u32, password: &str) -> ClientResult<ApiReply> {
        let response = self
            .client
            .delete(self.config.entry_url(id))
            .json(&PasswordCheck { password })
            .send()
            .await?;
        Self::read_reply(response).await
    }

    async fn update(&self, id: u32, update: &EntryUpdate) -> ClientResult<ApiReply> {
        let response = self.client.put(self.config.entry_url(id)).json(update).send().await?;
        Self::read_reply(response).await
    }
}
