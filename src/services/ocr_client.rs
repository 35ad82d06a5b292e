//! Outbound client for the invoice OCR vendor API.

use base64::{engine::general_purpose, Engine as _};
use reqwest::{header, Client, StatusCode};
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

use crate::{
    config::OcrConfig,
    error::{AppError, Result},
    models::invoice::{VendorInvoice, VendorResponse},
};

#[derive(Debug, Clone)]
pub struct OcrClient {
    client: Client,
    api_url: String,
    appcode: String,
}

impl OcrClient {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            appcode: config.appcode.clone(),
        })
    }

    /// Send one image to the vendor and return its parsed `data` object.
    ///
    /// A non-200 vendor status fails the call with the raw response body as
    /// the message.
    pub async fn recognize(&self, image: &[u8]) -> Result<VendorInvoice> {
        let encoded = general_purpose::STANDARD.encode(image);

        let response = self
            .client
            .post(&self.api_url)
            .header(header::AUTHORIZATION, format!("APPCODE {}", self.appcode))
            .json(&json!({ "img": encoded }))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("OCR vendor returned {}: {}", status, body);
            return Err(AppError::external_service("invoice-ocr", body));
        }

        let envelope: VendorResponse = response.json().await?;
        info!(
            "OCR vendor call succeeded ({} detail lines)",
            envelope.data.items.len()
        );
        Ok(envelope.data)
    }
}
