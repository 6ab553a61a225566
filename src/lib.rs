#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Search;
#[allow(non_snake_case)]
pub mod Utils;
#[allow(non_snake_case)]
pub mod Vision;
pub mod cli;
pub mod render;
pub mod settings;
