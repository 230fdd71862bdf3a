//! HTTP client for network-based API calls

use crate::checkout::BillingService;
use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::checkout::{
    PaymentRequest, PaymentResponse, ScanRequest, ScanResponse, StaffAuthRequest,
    StaffAuthResponse,
};
use shared::error::ErrorDetail;
use shared::models::{Customer, Invoice};

/// HTTP client for making network requests to the billing service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Error statuses carry a `{ "detail": ... }` body; the detail string
    /// is preserved so it can be surfaced to the operator verbatim.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let detail = serde_json::from_str::<ErrorDetail>(&text)
                .map(|body| body.detail)
                .unwrap_or(text);
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(detail)),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(detail)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(detail)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(detail)),
                _ => Err(ClientError::Internal(detail)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Kiosk Entry API ==========

    /// Resolve a scanned customer card to the page the kiosk should show next
    pub async fn scan_card(&self, rfid: &str) -> ClientResult<ScanResponse> {
        let request = ScanRequest {
            rfid: rfid.to_string(),
        };
        self.post("/api/v1/payment/scan", &request).await
    }

    // ========== Customer API ==========

    /// Search customers by name fragment
    pub async fn search_customers(&self, query: &str) -> ClientResult<Vec<Customer>> {
        self.get("/api/customers/search", &[("q", query)]).await
    }

    /// Fetch the outstanding invoices for a customer, for seeding a
    /// checkout session
    pub async fn customer_invoices(&self, customer_name: &str) -> ClientResult<Vec<Invoice>> {
        let path = format!("/api/v1/billing/customer/{}/invoices", customer_name);
        self.get(&path, &[]).await
    }
}

#[async_trait]
impl BillingService for HttpClient {
    async fn authorize_staff(&self, request: StaffAuthRequest) -> ClientResult<StaffAuthResponse> {
        tracing::debug!(invoices = request.invoices.len(), "authorizing staff");
        self.post("/api/v1/payment/authorize-staff", &request).await
    }

    async fn submit_payment(&self, request: PaymentRequest) -> ClientResult<PaymentResponse> {
        tracing::debug!(
            invoices = request.invoices.len(),
            total = %request.total_amount,
            "submitting payment"
        );
        self.post("/api/v1/payment/process-payment", &request).await
    }
}
