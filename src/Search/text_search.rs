//! Text search pipeline: validate the typed query, resolve it against the
//! compound database, render the outcome. One invocation owns the results
//! surface from the first status message to the final content.

use crate::Search::pubchem_api::{PubChemClient, ResolutionOutcome};
use crate::Utils::http_client::HttpClient;
use crate::render::{RenderInstruction, RenderSink};
use log::error;

/// Runs one text search interaction.
///
/// An empty or whitespace-only query is rejected before any network call.
/// "Nothing matched" and "the lookup itself failed" render differently: the
/// first names the query, the second is the generic failure message.
pub fn run_text_search<C: HttpClient>(
    query: &str,
    resolver: &PubChemClient<C>,
    sink: &mut dyn RenderSink,
) {
    let query = query.trim();
    if query.is_empty() {
        sink.render(RenderInstruction::Prompt);
        return;
    }

    sink.render(RenderInstruction::InProgress(query.to_string()));

    match resolver.resolve(query) {
        Ok(ResolutionOutcome::Found(record)) => sink.render(RenderInstruction::Compound {
            record,
            matched_label: None,
        }),
        Ok(ResolutionOutcome::NotFound) => {
            sink.render(RenderInstruction::NotFound(query.to_string()))
        }
        Err(e) => {
            error!("compound lookup for '{}' failed: {}", query, e);
            sink.render(RenderInstruction::GenericError);
        }
    }
}
