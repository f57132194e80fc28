use thiserror::Error;

use crate::context::{GraphicsContext, ProgramId, ShaderId};
use crate::logger::{Logger, Severity};
use crate::shader::{ShaderKind, ShaderSource};

/// Compilation outcome carried by a [`CompiledShader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStatus {
    Compiled,
    Failed,
}

/// Link outcome carried by a [`ShaderProgram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Linked,
    Failed,
}

/// Shader object produced by [`ShaderProgramBuilder::compile`].
///
/// The handle stays valid until it is consumed by
/// [`ShaderProgramBuilder::link`], which deletes it on the context.
#[derive(Debug)]
pub struct CompiledShader {
    id: ShaderId,
    kind: ShaderKind,
    status: CompileStatus,
}

impl CompiledShader {
    pub fn id(&self) -> ShaderId {
        self.id
    }

    pub fn kind(&self) -> ShaderKind {
        self.kind
    }

    pub fn status(&self) -> CompileStatus {
        self.status
    }

    pub fn is_compiled(&self) -> bool {
        self.status == CompileStatus::Compiled
    }
}

/// Linked (or failed-to-link) program, current on its context.
///
/// Process-lifetime resource; this crate never deletes program objects.
#[derive(Debug)]
pub struct ShaderProgram {
    id: ProgramId,
    status: LinkStatus,
}

impl ShaderProgram {
    pub fn id(&self) -> ProgramId {
        self.id
    }

    pub fn status(&self) -> LinkStatus {
        self.status
    }

    pub fn is_linked(&self) -> bool {
        self.status == LinkStatus::Linked
    }
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("{0} shader has empty source")]
    EmptySource(ShaderKind),
    #[error("{0} shader source contains a NUL byte")]
    NulInSource(ShaderKind),
}

/// Turns two shader sources into one linked program.
///
/// Compile and link failures are reported to the [`Logger`] and absorbed:
/// the returned handles carry a status flag instead of failing the call,
/// so a caller may keep going with a non-functional program or check the
/// flag and bail out itself.
pub struct ShaderProgramBuilder<'a, C, L> {
    ctx: &'a mut C,
    logger: &'a L,
}

impl<'a, C, L> ShaderProgramBuilder<'a, C, L>
where
    C: GraphicsContext,
    L: Logger,
{
    pub fn new(ctx: &'a mut C, logger: &'a L) -> Self {
        Self { ctx, logger }
    }

    /// Compiles one shader stage.
    ///
    /// Errors only on malformed input (empty text, interior NUL). Source
    /// rejected by the backend is not an error: the handle comes back with
    /// [`CompileStatus::Failed`] and the backend diagnostic goes to the
    /// logger, tagged with the shader kind.
    pub fn compile(&mut self, source: &ShaderSource) -> Result<CompiledShader, ShaderError> {
        let kind = source.kind();

        if source.text().is_empty() {
            return Err(ShaderError::EmptySource(kind));
        }

        if source.text().contains('\0') {
            return Err(ShaderError::NulInSource(kind));
        }

        let id = self.ctx.create_shader(kind);
        self.ctx.shader_source(id, source.text());
        self.ctx.compile_shader(id);

        let status = if self.ctx.compile_status(id) {
            CompileStatus::Compiled
        } else {
            let info = self.ctx.compile_log(id);
            self.logger.log(Severity::Error, kind.tag(), &info);

            CompileStatus::Failed
        };

        Ok(CompiledShader { id, kind, status })
    }

    /// Attaches both shaders to a fresh program and links it.
    ///
    /// A failed link is logged under the "program" tag and absorbed; the
    /// handle comes back with [`LinkStatus::Failed`]. The program is made
    /// current on the context in either case, and both input shaders are
    /// deleted afterwards, win or lose.
    pub fn link(&mut self, vertex: CompiledShader, fragment: CompiledShader) -> ShaderProgram {
        let program = self.ctx.create_program();

        self.ctx.attach_shader(program, vertex.id);
        self.ctx.attach_shader(program, fragment.id);
        self.ctx.link_program(program);

        let status = if self.ctx.link_status(program) {
            LinkStatus::Linked
        } else {
            let info = self.ctx.link_log(program);
            self.logger.log(Severity::Error, "program", &info);

            LinkStatus::Failed
        };

        self.ctx.use_program(program);

        self.ctx.delete_shader(vertex.id);
        self.ctx.delete_shader(fragment.id);

        ShaderProgram { id: program, status }
    }

    /// Compiles both stages and links them in one go.
    pub fn build(
        &mut self,
        vertex: &ShaderSource,
        fragment: &ShaderSource,
    ) -> Result<ShaderProgram, ShaderError> {
        let vert = self.compile(vertex)?;
        let frag = self.compile(fragment)?;

        Ok(self.link(vert, frag))
    }
}
