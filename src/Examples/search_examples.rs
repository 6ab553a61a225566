use crate::Search::pubchem_api::PubChemClient;
use crate::Search::text_search::run_text_search;
use crate::Vision::image_search::run_image_search;
use crate::Vision::vision_api::VisionClient;
use crate::render::{ConsoleSurface, HtmlSurface};
use crate::settings::Settings;
use std::path::Path;

/// Live demos against the real services. Pick one by number.
pub fn search_examples(task: usize) {
    match task {
        0 => {
            // name lookup rendered to the terminal
            let settings = Settings::new();
            let resolver = PubChemClient::new(settings.clone());
            let mut surface = ConsoleSurface::new(settings);
            run_text_search("water", &resolver, &mut surface);
        }

        1 => {
            // same lookup, but capturing the HTML fragment a hosting page would embed
            let settings = Settings::new();
            let resolver = PubChemClient::new(settings.clone());
            let mut surface = HtmlSurface::new(settings);
            run_text_search("ethanol", &resolver, &mut surface);
            println!("{}", surface.current());
        }

        2 => {
            // photo lookup; needs a label-detection service listening on the
            // vision endpoint and a molecule.jpg next to the executable
            let settings = Settings::new();
            let vision = VisionClient::new(settings.clone());
            let resolver = PubChemClient::new(settings.clone());
            let mut surface = ConsoleSurface::new(settings);
            run_image_search(
                Some(Path::new("molecule.jpg")),
                &vision,
                &resolver,
                &mut surface,
            );
        }

        _ => {
            println!("non existing examples");
        }
    }
}
