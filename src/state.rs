//! Shared application state

use crate::{config::Config, services::ocr_client::OcrClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub ocr_client: OcrClient,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;
        let ocr_client = OcrClient::new(&config.ocr)?;

        Ok(Self { config, ocr_client })
    }
}
