//! Item data client.

use reqwest::Method;
use serde::Serialize;

use inventory_core::{ItemDto, ItemId};

use crate::api::{ApiClient, check};
use crate::error::ClientError;

/// Request body for create and update; the id travels in the path, if at all.
#[derive(Debug, Serialize)]
struct ItemFields<'a> {
    name: &'a str,
    description: &'a str,
}

/// Item operations.
pub struct ItemClient<'a> {
    api: &'a ApiClient,
}

impl<'a> ItemClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// `GET /items`
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the request fails or the server answers with an error.
    pub async fn list(&self) -> Result<Vec<ItemDto>, ClientError> {
        let response = self.api.request(Method::GET, "items").await?.send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// `GET /items/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the item does not exist.
    pub async fn get(&self, id: ItemId) -> Result<ItemDto, ClientError> {
        let response = self
            .api
            .request(Method::GET, &format!("items/{id}"))
            .await?
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `POST /items`
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the request fails or the server answers with an error.
    pub async fn create(&self, name: &str, description: &str) -> Result<ItemDto, ClientError> {
        let response = self
            .api
            .request(Method::POST, "items")
            .await?
            .json(&ItemFields { name, description })
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `PUT /items/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the item does not exist.
    pub async fn update(
        &self,
        id: ItemId,
        name: &str,
        description: &str,
    ) -> Result<ItemDto, ClientError> {
        let response = self
            .api
            .request(Method::PUT, &format!("items/{id}"))
            .await?
            .json(&ItemFields { name, description })
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `DELETE /items/{id}`. Deleting a missing item succeeds.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the request fails or the server answers with an error.
    pub async fn delete(&self, id: ItemId) -> Result<(), ClientError> {
        let response = self
            .api
            .request(Method::DELETE, &format!("items/{id}"))
            .await?
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}
