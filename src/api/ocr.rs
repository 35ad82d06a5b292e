//! Invoice upload endpoint.

use axum::{
    extract::{Multipart, State},
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{models::invoice::ExtractedInvoice, state::AppState};

/// Envelope returned to the frontend. The outcome rides in `success`, never in
/// the HTTP status, so every failure collapses to the same shape.
#[derive(Debug, Serialize)]
pub struct OcrEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ExtractedInvoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OcrEnvelope {
    fn ok(data: ExtractedInvoice) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// POST /api/ocr
/// Relays the uploaded invoice image to the OCR vendor and returns the
/// normalized field set.
pub async fn ocr_invoice(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Json<OcrEnvelope> {
    let mut image_bytes: Option<Vec<u8>> = None;
    let mut file_name = String::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed multipart request: {}", e);
                return Json(OcrEnvelope::failure(format!("Invalid upload: {}", e)));
            }
        };

        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                if let Some(original) = field.file_name() {
                    file_name = original.to_string();
                }

                match field.bytes().await {
                    Ok(bytes) => image_bytes = Some(bytes.to_vec()),
                    Err(e) => {
                        warn!("Error reading uploaded file: {}", e);
                        return Json(OcrEnvelope::failure(format!("Invalid upload: {}", e)));
                    }
                }
            }
            _ => {
                // Skip unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    let Some(image) = image_bytes else {
        warn!("Invoice upload without a file field");
        return Json(OcrEnvelope::failure("No file field in upload"));
    };

    info!(
        "Processing invoice upload {:?} ({} bytes)",
        file_name,
        image.len()
    );

    match state.ocr_client.recognize(&image).await {
        Ok(raw) => Json(OcrEnvelope::ok(ExtractedInvoice::from_vendor(raw))),
        Err(e) => {
            error!("OCR processing failed: {}", e);
            Json(OcrEnvelope::failure(e.to_string()))
        }
    }
}
