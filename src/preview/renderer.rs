/// Renderer selection for the preview modal
///
/// Rules are scanned in order and the first prefix the MIME type starts
/// with wins. No match means an empty modal body.

/// How a record's content is shown in the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    Audio,
    Video,
    Image,
}

/// One entry of the lookup table
#[derive(Debug, Clone, Copy)]
pub struct RendererRule {
    pub prefix: &'static str,
    pub renderer: Renderer,
}

impl RendererRule {
    pub fn matches(&self, mime_type: &str) -> bool {
        mime_type.starts_with(self.prefix)
    }
}

/// Scanned in this order
pub const RENDERER_RULES: [RendererRule; 3] = [
    RendererRule { prefix: "audio/", renderer: Renderer::Audio },
    RendererRule { prefix: "video/", renderer: Renderer::Video },
    RendererRule { prefix: "image/", renderer: Renderer::Image },
];

/// Pick the renderer for a MIME type, `None` when nothing applies
pub fn renderer_for(mime_type: &str) -> Option<Renderer> {
    RENDERER_RULES
        .iter()
        .find(|rule| rule.matches(mime_type))
        .map(|rule| rule.renderer)
}
