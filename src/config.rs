//! Configuration management

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub max_upload_size_mb: u64,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Vendor endpoint for invoice recognition.
    pub api_url: String,
    /// Static APPCODE credential sent on every vendor request.
    pub appcode: String,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8888".to_string())
                    .parse()?,
                max_upload_size_mb: env::var("MAX_UPLOAD_SIZE_MB")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
                request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()?,
            },
            ocr: OcrConfig {
                api_url: env::var("OCR_API_URL").unwrap_or_else(|_| {
                    "https://ocrapi-invoice.taobao.com/ocrservice/invoice".to_string()
                }),
                appcode: env::var("OCR_APPCODE").unwrap_or_default(),
                timeout_seconds: env::var("OCR_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()?,
            },
        })
    }
}
