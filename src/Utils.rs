/// HTTP client trait and the reqwest-backed implementation
pub mod http_client;
/// image file loading and base64 encoding
pub mod load_image;
