/// client for the PubChem compound database, resolves a chemical name to a
/// normalized compound record
pub mod pubchem_api;
/// text search pipeline: validate the typed query, resolve it, render the outcome
pub mod text_search;
/// tests
pub mod text_search_tests;
