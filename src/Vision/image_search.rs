//! # Image Search Pipeline
//!
//! ## Aim
//! Resolves a photo to a compound: read the file, base64-encode it, send it
//! to the label-detection service, then walk the detected labels through the
//! shared compound resolver until one matches. First match wins — the labels
//! arrive ranked by the service, and the walk stops at the first success
//! rather than hunting for a "best" one.
//!
//! Every step runs strictly after the previous one completes, so at most one
//! request is outstanding at any moment. A candidate that fails to resolve —
//! whether "no match" or a transport error — is skipped, never surfaced: one
//! bad candidate must not abort the whole search. Only when every candidate
//! is exhausted does the surface fall back to the raw label list with
//! confidence scores.

use crate::Search::pubchem_api::{PubChemClient, ResolutionOutcome};
use crate::Utils::http_client::HttpClient;
use crate::Utils::load_image::load_image_base64;
use crate::Vision::vision_api::VisionClient;
use crate::render::{RenderInstruction, RenderSink};
use log::{error, warn};
use std::path::Path;

/// Runs one image search interaction. `None` (no file supplied) is a silent
/// no-op, matching a cancelled file picker.
pub fn run_image_search<V: HttpClient, C: HttpClient>(
    image: Option<&Path>,
    vision: &VisionClient<V>,
    resolver: &PubChemClient<C>,
    sink: &mut dyn RenderSink,
) {
    let Some(path) = image else {
        return;
    };

    sink.render(RenderInstruction::Analyzing);

    let payload = match load_image_base64(path) {
        Ok(payload) => payload,
        Err(message) => {
            error!("image read failed: {}", message);
            sink.render(RenderInstruction::ImageSearchFailed(message));
            return;
        }
    };

    let labels = match vision.detect_labels(&payload) {
        Ok(labels) => labels,
        Err(e) => {
            error!("label detection failed: {}", e);
            sink.render(RenderInstruction::GenericError);
            return;
        }
    };

    if labels.is_empty() {
        sink.render(RenderInstruction::NoObjectsDetected);
        return;
    }

    // First-success-wins fold over the candidates, in the service's order.
    // One resolution completes before the next begins.
    let matched = labels.iter().find_map(|label| {
        sink.render(RenderInstruction::InProgress(label.description.clone()));
        match resolver.resolve(&label.description) {
            Ok(ResolutionOutcome::Found(record)) => Some((record, label.description.clone())),
            Ok(ResolutionOutcome::NotFound) => None,
            Err(e) => {
                warn!("candidate '{}' skipped: {}", label.description, e);
                None
            }
        }
    });

    match matched {
        Some((record, description)) => sink.render(RenderInstruction::Compound {
            record,
            matched_label: Some(description),
        }),
        None => sink.render(RenderInstruction::DetectedLabels(labels)),
    }
}
