use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Customer, CustomerId},
    protocol::{
        delete_customer_path, update_customer_path, CREATE_CUSTOMER_PATH, LIST_CUSTOMERS_PATH,
    },
};
use tracing::debug;

use crate::{
    config::Settings,
    error::{GatewayError, GatewayOperation},
};

/// The four REST calls the customers backend exposes. Each is a single round
/// trip with no retry.
#[async_trait]
pub trait CustomerGateway: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Customer>, GatewayError>;
    async fn create(&self, customer: &Customer) -> Result<Customer, GatewayError>;
    async fn update(&self, id: CustomerId, customer: &Customer) -> Result<(), GatewayError>;
    async fn delete(&self, id: CustomerId) -> Result<(), GatewayError>;
}

#[derive(Debug, Clone)]
pub struct HttpCustomerGateway {
    http: Client,
    base_url: String,
}

impl HttpCustomerGateway {
    /// `base_url` must already be normalized (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let http = Client::builder()
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .build()?;
        Ok(Self::with_client(http, settings.api_base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        operation: GatewayOperation,
        request: RequestBuilder,
    ) -> Result<Response, GatewayError> {
        let fail = |err: reqwest::Error| GatewayError::new(operation, err.to_string());
        let response = request.send().await.map_err(fail)?;
        let status = response.status();
        debug!(%operation, %status, "customers backend responded");
        response.error_for_status().map_err(fail)
    }

    async fn decode<T: DeserializeOwned>(
        operation: GatewayOperation,
        response: Response,
    ) -> Result<T, GatewayError> {
        response
            .json::<T>()
            .await
            .map_err(|err| GatewayError::new(operation, format!("unexpected payload: {err}")))
    }
}

#[async_trait]
impl CustomerGateway for HttpCustomerGateway {
    async fn list_all(&self) -> Result<Vec<Customer>, GatewayError> {
        let operation = GatewayOperation::List;
        let response = self
            .send(operation, self.http.get(self.url(LIST_CUSTOMERS_PATH)))
            .await?;
        Self::decode(operation, response).await
    }

    async fn create(&self, customer: &Customer) -> Result<Customer, GatewayError> {
        let operation = GatewayOperation::Create;
        let response = self
            .send(
                operation,
                self.http.post(self.url(CREATE_CUSTOMER_PATH)).json(customer),
            )
            .await?;
        Self::decode(operation, response).await
    }

    async fn update(&self, id: CustomerId, customer: &Customer) -> Result<(), GatewayError> {
        self.send(
            GatewayOperation::Update,
            self.http.put(self.url(&update_customer_path(id))).json(customer),
        )
        .await?;
        Ok(())
    }

    async fn delete(&self, id: CustomerId) -> Result<(), GatewayError> {
        self.send(
            GatewayOperation::Delete,
            self.http.delete(self.url(&delete_customer_path(id))),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/gateway_tests.rs"]
mod tests;
