use std::fmt;

/// Pipeline stage a shader source is written for.
///
/// The stage is an explicit tag carried by [`ShaderSource`] from
/// construction onwards, so classification never depends on inspecting
/// the source text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    /// Tag used for diagnostics emitted about this stage.
    pub fn tag(&self) -> &'static str {
        match self {
            ShaderKind::Vertex => "vertex",
            ShaderKind::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Shader source text paired with the stage it targets.
pub struct ShaderSource {
    kind: ShaderKind,
    text: String,
}

impl ShaderSource {
    pub fn new(kind: ShaderKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn vertex(text: impl Into<String>) -> Self {
        Self::new(ShaderKind::Vertex, text)
    }

    pub fn fragment(text: impl Into<String>) -> Self {
        Self::new(ShaderKind::Fragment, text)
    }

    pub fn kind(&self) -> ShaderKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
