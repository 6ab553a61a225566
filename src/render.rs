//! # Render Module
//!
//! ## Purpose
//! Turns display instructions into presentational content. The pipelines
//! never touch an output surface directly: they emit `RenderInstruction`
//! values into an injected `RenderSink`, and every instruction REPLACES what
//! the surface currently shows. The latest write wins; nothing is additive.
//!
//! Two surfaces ship with the crate: `HtmlSurface` produces the HTML
//! fragments of the hosting page, `ConsoleSurface` prints to the terminal
//! for the interactive menu.

use crate::Search::pubchem_api::CompoundRecord;
use crate::Vision::vision_api::LabelCandidate;
use crate::settings::Settings;
use prettytable::{Cell, Row, Table};

/// What the results surface should show next. One interaction emits a
/// sequence of these; only the last one stays visible.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderInstruction {
    /// ask the user to type a chemical name
    Prompt,
    /// lookup under way for the named query or label
    InProgress(String),
    /// image analysis under way
    Analyzing,
    /// the named query matched nothing
    NotFound(String),
    /// transport or parse failure, deliberately unspecific
    GenericError,
    /// the image produced no labels at all
    NoObjectsDetected,
    /// the image could not be read, carries the underlying error text
    ImageSearchFailed(String),
    /// a resolved compound, annotated with the matched image label when the
    /// image pipeline produced it
    Compound {
        record: CompoundRecord,
        matched_label: Option<String>,
    },
    /// no label resolved to a compound, show what was detected
    DetectedLabels(Vec<LabelCandidate>),
}

/// The single shared results surface. `render` replaces the previous content.
pub trait RenderSink {
    fn render(&mut self, instruction: RenderInstruction);
}

//////////////////////////////// HTML ////////////////////////////////

/// Pure instruction-to-HTML mapping, mirroring the markup of the hosting page.
pub struct HtmlRenderer {
    settings: Settings,
}

impl HtmlRenderer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn to_html(&self, instruction: &RenderInstruction) -> String {
        match instruction {
            RenderInstruction::Prompt => "<p>Please enter a chemical name!</p>".to_string(),
            RenderInstruction::InProgress(name) => {
                format!("<p>Searching PubChem for <strong>{}</strong>...</p>", name)
            }
            RenderInstruction::Analyzing => "<p>Analyzing image...</p>".to_string(),
            RenderInstruction::NotFound(name) => {
                format!("<p>No data found for \"{}\".</p>", name)
            }
            RenderInstruction::GenericError => "<p>Oops! Something went wrong.</p>".to_string(),
            RenderInstruction::NoObjectsDetected => {
                "<p>No recognizable objects found.</p>".to_string()
            }
            RenderInstruction::ImageSearchFailed(message) => {
                format!("<p>Image search failed. {}</p>", message)
            }
            RenderInstruction::Compound {
                record,
                matched_label,
            } => self.compound_html(record, matched_label.as_deref()),
            RenderInstruction::DetectedLabels(labels) => {
                let items: String = labels
                    .iter()
                    .map(|label| {
                        format!("<li>{} ({})</li>", label.description, label.score_percent())
                    })
                    .collect();
                format!("<h2>Detected:</h2><ul>{}</ul>", items)
            }
        }
    }

    fn compound_html(&self, record: &CompoundRecord, matched_label: Option<&str>) -> String {
        let mut html = format!(
            "<h2>{}</h2>\
             <p><strong>Formula:</strong> {}</p>\
             <p><strong>IUPAC Name:</strong> {}</p>\
             <p><strong>Molecular Weight:</strong> {}</p>\
             <p><strong>Boiling Point:</strong> {}</p>\
             <img src=\"{}\" alt=\"Structure of {}\">\
             <a href=\"{}\" target=\"_blank\">View on PubChem</a>",
            record.display_name,
            record.formula,
            record.iupac_name,
            record.molecular_weight,
            record.boiling_point,
            self.settings.structure_image_url(record.cid),
            record.display_name,
            self.settings.compound_page_url(record.cid),
        );
        if let Some(label) = matched_label {
            html.push_str(&format!(
                "<hr><p>Matched by image label: <b>{}</b></p>",
                label
            ));
        }
        html
    }
}

/// HTML results surface: holds the latest fragment only
pub struct HtmlSurface {
    renderer: HtmlRenderer,
    current: String,
}

impl HtmlSurface {
    pub fn new(settings: Settings) -> Self {
        Self {
            renderer: HtmlRenderer::new(settings),
            current: String::new(),
        }
    }

    /// what the surface currently shows
    pub fn current(&self) -> &str {
        &self.current
    }
}

impl RenderSink for HtmlSurface {
    fn render(&mut self, instruction: RenderInstruction) {
        self.current = self.renderer.to_html(&instruction);
    }
}

//////////////////////////////// CONSOLE ////////////////////////////////

/// Terminal results surface for the interactive menu
pub struct ConsoleSurface {
    settings: Settings,
}

impl ConsoleSurface {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    fn print_compound(&self, record: &CompoundRecord, matched_label: Option<&str>) {
        println!("\x1b[34m\n{}\x1b[0m", record.display_name);
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Formula"),
            Cell::new(&record.formula),
        ]));
        table.add_row(Row::new(vec![
            Cell::new("IUPAC Name"),
            Cell::new(&record.iupac_name),
        ]));
        table.add_row(Row::new(vec![
            Cell::new("Molecular Weight"),
            Cell::new(&record.molecular_weight),
        ]));
        table.add_row(Row::new(vec![
            Cell::new("Boiling Point"),
            Cell::new(&record.boiling_point),
        ]));
        table.printstd();
        println!("Structure: {}", self.settings.structure_image_url(record.cid));
        println!(
            "View on PubChem: {}",
            self.settings.compound_page_url(record.cid)
        );
        if let Some(label) = matched_label {
            println!("Matched by image label: {}", label);
        }
    }
}

impl RenderSink for ConsoleSurface {
    fn render(&mut self, instruction: RenderInstruction) {
        match instruction {
            RenderInstruction::Prompt => {
                println!("\x1b[33mPlease enter a chemical name!\x1b[0m")
            }
            RenderInstruction::InProgress(name) => {
                println!("\x1b[36mSearching PubChem for {}...\x1b[0m", name)
            }
            RenderInstruction::Analyzing => println!("\x1b[36mAnalyzing image...\x1b[0m"),
            RenderInstruction::NotFound(name) => println!("No data found for \"{}\".", name),
            RenderInstruction::GenericError => {
                println!("\x1b[31mOops! Something went wrong.\x1b[0m")
            }
            RenderInstruction::NoObjectsDetected => println!("No recognizable objects found."),
            RenderInstruction::ImageSearchFailed(message) => {
                println!("\x1b[31mImage search failed. {}\x1b[0m", message)
            }
            RenderInstruction::Compound {
                record,
                matched_label,
            } => self.print_compound(&record, matched_label.as_deref()),
            RenderInstruction::DetectedLabels(labels) => {
                println!("Detected:");
                for label in labels {
                    println!("  {} ({})", label.description, label.score_percent());
                }
            }
        }
    }
}

/// Test sink keeping the whole instruction sequence; the last entry is what
/// a replacing surface would show.
#[cfg(test)]
pub struct RecordingSink {
    pub history: Vec<RenderInstruction>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    pub fn last(&self) -> Option<&RenderInstruction> {
        self.history.last()
    }
}

#[cfg(test)]
impl RenderSink for RecordingSink {
    fn render(&mut self, instruction: RenderInstruction) {
        self.history.push(instruction);
    }
}
