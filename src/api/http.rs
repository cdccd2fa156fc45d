//! HTTP backend over browser fetch

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::Serialize;

use super::{AddToCartArgs, CartBackend, RemoveFromCartArgs, UpdateQuantityArgs};
use crate::config::{CsrfConfig, Endpoints};
use crate::csrf;
use crate::error::{CartError, CartResult};
use crate::models::CartResponse;

#[derive(Serialize)]
struct EmptyArgs {}

/// Talks to the shop's cart endpoints with same-origin fetch
#[derive(Debug, Clone)]
pub struct HttpCartBackend {
    endpoints: Endpoints,
    csrf: CsrfConfig,
}

impl HttpCartBackend {
    pub fn new(endpoints: Endpoints, csrf: CsrfConfig) -> Self {
        Self { endpoints, csrf }
    }

    async fn post<T: Serialize>(&self, url: &str, body: &T) -> CartResult<CartResponse> {
        let token = csrf::current_token(&self.csrf);
        log::debug!("[API] POST {}", url);
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .header(&self.csrf.header, &token)
            .json(body)?
            .send()
            .await?;
        read_envelope(response).await
    }
}

async fn read_envelope(response: Response) -> CartResult<CartResponse> {
    if !response.ok() {
        return Err(CartError::Status(response.status()));
    }
    Ok(response.json::<CartResponse>().await?)
}

#[async_trait(?Send)]
impl CartBackend for HttpCartBackend {
    async fn add(&self, args: &AddToCartArgs) -> CartResult<CartResponse> {
        self.post(&self.endpoints.add, args).await
    }

    async fn update(&self, args: &UpdateQuantityArgs) -> CartResult<CartResponse> {
        self.post(&self.endpoints.update, args).await
    }

    async fn remove(&self, args: &RemoveFromCartArgs) -> CartResult<CartResponse> {
        self.post(&self.endpoints.remove, args).await
    }

    async fn clear(&self) -> CartResult<CartResponse> {
        self.post(&self.endpoints.clear, &EmptyArgs {}).await
    }

    async fn summary(&self) -> CartResult<CartResponse> {
        log::debug!("[API] GET {}", self.endpoints.summary);
        let response = Request::get(&self.endpoints.summary).send().await?;
        read_envelope(response).await
    }
}
