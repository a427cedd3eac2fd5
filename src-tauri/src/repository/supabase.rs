//! Supabase Repository Implementation
//!
//! PostgREST-backed implementation of Repository<T> for one hosted table.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;

use crate::config::GroceryConfig;
use crate::domain::{DomainError, DomainResult, Entity};
use super::traits::Repository;

/// Single-object responses from PostgREST
const ACCEPT_SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// PostgREST implementation of a table repository
pub struct SupabaseRepository<T> {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T> SupabaseRepository<T> {
    pub fn new(client: Client, base_url: &str, api_key: &str, table: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: table.to_string(),
            _entity: PhantomData,
        }
    }

    pub fn from_config(client: Client, config: &GroceryConfig) -> Self {
        Self::new(client, &config.supabase_url, &config.supabase_key, &config.table)
    }

    /// REST endpoint of the table
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }
}

/// Send a request, passing any transport error through as a remote failure
async fn send(request: RequestBuilder) -> DomainResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| DomainError::RemoteOperationFailed(e.to_string()))?;
    check_status(response).await
}

/// Non-2xx responses fail with the raw body the backend sent
async fn check_status(response: Response) -> DomainResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let payload = if body.trim().is_empty() { status.to_string() } else { body };
    Err(DomainError::RemoteOperationFailed(payload))
}

async fn decode<V: DeserializeOwned>(response: Response) -> DomainResult<V> {
    response
        .json()
        .await
        .map_err(|e| DomainError::RemoteOperationFailed(e.to_string()))
}

#[async_trait]
impl<T> Repository<T> for SupabaseRepository<T>
where
    T: Entity + DeserializeOwned + 'static,
    T::Draft: Serialize,
{
    async fn list(&self) -> DomainResult<Vec<T>> {
        let request = self
            .authorized(self.client.get(self.table_url()))
            .query(&[("select", "*")]);
        let response = send(request).await?;
        decode(response).await
    }

    async fn create(&self, draft: &T::Draft) -> DomainResult<T> {
        let request = self
            .authorized(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .header("Accept", ACCEPT_SINGLE_OBJECT)
            .json(draft);
        let response = send(request).await?;
        decode(response).await
    }

    async fn delete(&self, id: T::Id) -> DomainResult<()> {
        let filter = format!("eq.{}", id);
        let request = self
            .authorized(self.client.delete(self.table_url()))
            .query(&[("id", filter.as_str())]);
        send(request).await?;
        Ok(())
    }
}
