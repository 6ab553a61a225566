//! # Label Detection Client Module
//!
//! ## Aim
//! Client for the external image-labeling ("vision") service. The image
//! bytes travel base64-encoded in a JSON body; the service answers with
//! ranked label candidates (`description` plus a confidence `score` in
//! [0, 1]). The candidates come back in the service's order — ranking is the
//! service's business, this crate never re-sorts them.
//!
//! ## Main Data Structures
//! - `VisionClient<C>`: generic client with dependency injection for the
//!   HTTP client (enables testing)
//! - `LabelCandidate`: one detected-object guess, deserialized directly from
//!   the wire format

use crate::Utils::http_client::{HttpClient, HttpError};
use crate::settings::Settings;
use log::info;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// error types for the label detection call
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Network error: {0}")]
    Network(#[from] HttpError),
    #[error("Label detection service returned HTTP {0}")]
    BadStatus(u16),
    #[error("Invalid data format: {0}")]
    InvalidDataFormat(#[from] serde_json::Error),
}

/// one detected-object guess from the image service
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LabelCandidate {
    #[serde(default)]
    pub description: String,
    /// confidence in [0, 1]
    #[serde(default)]
    pub score: f64,
}

impl LabelCandidate {
    /// confidence as a percentage with one decimal, 0.873 -> "87.3%"
    pub fn score_percent(&self) -> String {
        format!("{:.1}%", self.score * 100.0)
    }
}

#[derive(Serialize)]
struct VisionRequest<'a> {
    #[serde(rename = "imageBase64")]
    image_base64: &'a str,
}

#[derive(Debug, Deserialize)]
struct VisionResponse {
    #[serde(default)]
    responses: Vec<VisionResult>,
}

#[derive(Debug, Default, Deserialize)]
struct VisionResult {
    #[serde(rename = "labelAnnotations", default)]
    label_annotations: Vec<LabelCandidate>,
}

pub struct VisionClient<C: HttpClient> {
    client: C,
    settings: Settings,
}

impl VisionClient<Client> {
    pub fn new(settings: Settings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }
}

impl<C: HttpClient> VisionClient<C> {
    pub fn with_client(client: C, settings: Settings) -> Self {
        Self { client, settings }
    }

    /// Sends the base64 payload to the vision endpoint and returns the first
    /// result's label list, in the order the service ranked it. An answer
    /// without labels is an empty list, not an error.
    pub fn detect_labels(&self, image_base64: &str) -> Result<Vec<LabelCandidate>, VisionError> {
        let body = serde_json::to_string(&VisionRequest { image_base64 })?;
        info!(
            "posting {} byte payload to {}",
            body.len(),
            self.settings.vision_endpoint
        );

        let reply = self.client.post_json(&self.settings.vision_endpoint, &body)?;
        if !reply.is_success() {
            return Err(VisionError::BadStatus(reply.status));
        }

        let response: VisionResponse = serde_json::from_str(&reply.body)?;
        Ok(response
            .responses
            .into_iter()
            .next()
            .map(|result| result.label_annotations)
            .unwrap_or_default())
    }
}
