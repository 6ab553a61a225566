/// client for the external image-labeling service
pub mod vision_api;
/// image search pipeline: read the photo, detect labels, resolve candidates
/// first-match-wins through the compound resolver
pub mod image_search;
