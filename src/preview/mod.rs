/// Preview rendering module
///
/// This module handles:
/// - Choosing a renderer from the MIME type (renderer.rs)
/// - Decoding image blobs into displayable handles (decode.rs)

pub mod decode;
pub mod renderer;
