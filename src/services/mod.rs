pub mod ocr_client;
