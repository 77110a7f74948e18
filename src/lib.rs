pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod view;

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    exam_service::ExamService, gemini_service::GeminiService, model::GenerativeModel,
};
use reqwest::Client;

#[derive(Clone)]
pub struct AppState {
    pub exam_service: ExamService,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = Client::builder().build()?;

        let gemini = GeminiService::new(
            config.gemini_api_key.clone(),
            &config.gemini_api_base,
            &config.gemini_model,
            http_client,
        )?
        .with_timeout(config.model_timeout_secs.map(Duration::from_secs));

        Ok(Self::with_model(Arc::new(gemini)))
    }

    pub fn with_model(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            exam_service: ExamService::new(model),
        }
    }
}
