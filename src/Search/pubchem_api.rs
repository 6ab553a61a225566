//! # PubChem Compound Resolver Module
//!
//! ## Aim
//! This module resolves a chemical name against the PubChem PUG REST service
//! (https://pubchem.ncbi.nlm.nih.gov/rest/pug). It extracts the identifying
//! data of the best-matching compound: molecular formula, IUPAC name,
//! molecular weight, boiling point and the compound identifier (CID) used to
//! reference the structure image and the detail page.
//!
//! ## Main Data Structures and Logic
//! - `PubChemClient<C>`: generic resolver with dependency injection for the
//!   HTTP client (enables testing)
//! - `CompoundRecord`: normalized result of a successful resolution, missing
//!   properties carry the `"N/A"` sentinel
//! - `ResolutionOutcome` enum: `Found(CompoundRecord)` or `NotFound`
//! - `PropertyLabel` enum: closed set of the recognized upstream property
//!   labels; all label-string matching is confined to `extract_properties`
//!
//! ## Key Methods
//! - `resolve()`: main method orchestrating lookup, parsing and extraction
//! - `construct_url()`: builds the name-lookup URL, percent-encoding the
//!   query into the path
//!
//! ## Usage
//! ```rust, ignore
//! let client = PubChemClient::new(Settings::new());
//! match client.resolve("water")? {
//!     ResolutionOutcome::Found(record) => println!("{:?}", record),
//!     ResolutionOutcome::NotFound => println!("no match"),
//! }
//! ```

use crate::Utils::http_client::{HttpClient, HttpError};
use crate::settings::Settings;
use log::{info, warn};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use url::Url;

/// sentinel shown for properties the upstream record does not carry
pub const NOT_AVAILABLE: &str = "N/A";

/// error types for the compound lookup
#[derive(Debug, Error)]
pub enum PubChemError {
    #[error("Network error: {0}")]
    Network(#[from] HttpError),
    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("Base URL cannot carry path segments")]
    BadBaseUrl,
    #[error("Compound database returned HTTP {0}")]
    BadStatus(u16),
    #[error("Invalid data format: {0}")]
    InvalidDataFormat(#[from] serde_json::Error),
}

/// Closed set of the upstream property labels this crate recognizes.
/// Matching is exact, against the label strings PubChem uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyLabel {
    MolecularFormula,
    IupacName,
    MolecularWeight,
    BoilingPoint,
}

impl PropertyLabel {
    pub const ALL: [PropertyLabel; 4] = [
        PropertyLabel::MolecularFormula,
        PropertyLabel::IupacName,
        PropertyLabel::MolecularWeight,
        PropertyLabel::BoilingPoint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyLabel::MolecularFormula => "Molecular Formula",
            PropertyLabel::IupacName => "IUPAC Name",
            PropertyLabel::MolecularWeight => "Molecular Weight",
            PropertyLabel::BoilingPoint => "Boiling Point",
        }
    }
}

/// normalized compound record assembled from one upstream entry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CompoundRecord {
    /// the query or matched label this record was resolved from
    pub display_name: String,
    pub formula: String,
    pub iupac_name: String,
    pub molecular_weight: String,
    pub boiling_point: String,
    /// PubChem compound identifier, references the structure image and detail page
    pub cid: i64,
}

/// outcome of one resolver invocation, never partially populated
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    Found(CompoundRecord),
    NotFound,
}

//////////////////////////////// UPSTREAM WIRE FORMAT ////////////////////////////////

#[derive(Debug, Deserialize)]
struct PugResponse {
    #[serde(rename = "PC_Compounds", default)]
    compounds: Vec<PugCompound>,
}

#[derive(Debug, Deserialize)]
struct PugCompound {
    #[serde(default)]
    id: PugIdOuter,
    #[serde(default)]
    props: Vec<PugProp>,
}

#[derive(Debug, Default, Deserialize)]
struct PugIdOuter {
    #[serde(default)]
    id: PugIdInner,
}

#[derive(Debug, Default, Deserialize)]
struct PugIdInner {
    cid: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct PugProp {
    #[serde(default)]
    urn: PugUrn,
    #[serde(default)]
    value: PugValue,
}

#[derive(Debug, Default, Deserialize)]
struct PugUrn {
    label: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PugValue {
    sval: Option<String>,
}

//////////////////////////////// RESOLVER ////////////////////////////////

pub struct PubChemClient<C: HttpClient> {
    client: C,
    settings: Settings,
}

impl PubChemClient<Client> {
    pub fn new(settings: Settings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }
}

impl<C: HttpClient> PubChemClient<C> {
    pub fn with_client(client: C, settings: Settings) -> Self {
        Self { client, settings }
    }

    /// Builds the name-lookup URL. The query lands percent-encoded in the
    /// path, so spaces and slashes in a name cannot break the request.
    pub fn construct_url(&self, name: &str) -> Result<Url, PubChemError> {
        let mut url = Url::parse(&self.settings.pug_base)?;
        url.path_segments_mut()
            .map_err(|_| PubChemError::BadBaseUrl)?
            .extend(["compound", "name", name, "JSON"]);
        Ok(url)
    }

    /// Resolves a chemical name to a compound record.
    ///
    /// An absent or empty compound list is `Ok(NotFound)`; a non-success
    /// HTTP status, a network failure or a malformed body is `Err(..)`.
    /// The caller decides whether an error is surfaced or skipped.
    pub fn resolve(&self, name: &str) -> Result<ResolutionOutcome, PubChemError> {
        let url = self.construct_url(name)?;
        info!("querying compound database: {}", url);

        let reply = self.client.get_text(url.as_str())?;
        if !reply.is_success() {
            return Err(PubChemError::BadStatus(reply.status));
        }

        let response: PugResponse = serde_json::from_str(&reply.body)?;
        let Some(compound) = response.compounds.into_iter().next() else {
            return Ok(ResolutionOutcome::NotFound);
        };

        // A listed entry without an identifier cannot be displayed (the
        // structure image and detail link both need the CID), so it counts
        // as no match.
        let Some(cid) = compound.id.id.cid else {
            warn!("compound entry for '{}' carries no cid", name);
            return Ok(ResolutionOutcome::NotFound);
        };

        let props = extract_properties(&compound.props);
        let field = |label: PropertyLabel| {
            props
                .get(&label)
                .cloned()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };

        Ok(ResolutionOutcome::Found(CompoundRecord {
            display_name: name.to_string(),
            formula: field(PropertyLabel::MolecularFormula),
            iupac_name: field(PropertyLabel::IupacName),
            molecular_weight: field(PropertyLabel::MolecularWeight),
            boiling_point: field(PropertyLabel::BoilingPoint),
            cid,
        }))
    }
}

/// Picks the recognized properties out of an upstream property list.
/// For every label the FIRST property whose label matches decides: its
/// `sval` if present, otherwise the label stays absent (a later duplicate
/// is never consulted). An empty list yields an empty map.
fn extract_properties(props: &[PugProp]) -> HashMap<PropertyLabel, String> {
    let mut found = HashMap::new();
    for label in PropertyLabel::ALL {
        let first_match = props
            .iter()
            .find(|prop| prop.urn.label.as_deref() == Some(label.as_str()));
        if let Some(sval) = first_match.and_then(|prop| prop.value.sval.clone()) {
            found.insert(label, sval);
        }
    }
    found
}
