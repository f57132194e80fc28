/// Vertex stage of the triangle demo pair.
pub const TRIANGLE_VERT: &str = r"#version 450 core
layout (location = 0) in vec3 aPos;

void main() {
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

/// Fragment stage of the triangle demo pair, constant orange output.
pub const TRIANGLE_FRAG: &str = r"#version 330 core
out vec4 FragColor;

void main() {
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
";

pub mod context;
pub mod gl_context;
pub mod logger;
pub mod program;
pub mod shader;

#[cfg(test)]
pub(crate) mod fake;
