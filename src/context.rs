use gl::types::GLuint;

use crate::shader::ShaderKind;

/// Handle to a shader object owned by a [`GraphicsContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderId(pub GLuint);

/// Handle to a program object owned by a [`GraphicsContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramId(pub GLuint);

/// Capability surface of the GPU-binding layer.
///
/// [`crate::gl_context::GlContext`] implements this over the `gl` crate;
/// tests substitute an in-memory fake. All operations are blocking and must
/// run on the thread owning the underlying context.
pub trait GraphicsContext {
    fn create_shader(&mut self, kind: ShaderKind) -> ShaderId;
    fn shader_source(&mut self, shader: ShaderId, source: &str);
    fn compile_shader(&mut self, shader: ShaderId);
    fn compile_status(&mut self, shader: ShaderId) -> bool;
    /// Backend diagnostic for the last compilation of `shader`.
    /// Implementations may truncate; the text is for human eyes only.
    fn compile_log(&mut self, shader: ShaderId) -> String;
    fn create_program(&mut self) -> ProgramId;
    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId);
    fn link_program(&mut self, program: ProgramId);
    fn link_status(&mut self, program: ProgramId) -> bool;
    fn link_log(&mut self, program: ProgramId) -> String;
    /// Makes `program` current. This mutates global context state; later
    /// draw calls implicitly depend on it.
    fn use_program(&mut self, program: ProgramId);
    fn delete_shader(&mut self, shader: ShaderId);
}
