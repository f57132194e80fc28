use std::marker::PhantomData;

use gl::types::{GLchar, GLenum, GLint};

use crate::context::{GraphicsContext, ProgramId, ShaderId};
use crate::shader::ShaderKind;

/// Info logs are read into a fixed buffer of this size; longer backend
/// diagnostics are truncated.
const INFO_LOG_CAP: usize = 512;

/// [`GraphicsContext`] over the `gl` crate.
///
/// Requires an OpenGL context that is current on the calling thread, with
/// function pointers loaded via `gl::load_with`. The type is not `Send`;
/// a GL context is only valid on the thread that owns it.
pub struct GlContext {
    _not_send: PhantomData<*const ()>,
}

impl GlContext {
    pub fn new() -> Self {
        Self {
            _not_send: PhantomData,
        }
    }
}

fn gl_kind(kind: ShaderKind) -> GLenum {
    match kind {
        ShaderKind::Vertex => gl::VERTEX_SHADER,
        ShaderKind::Fragment => gl::FRAGMENT_SHADER,
    }
}

fn read_log(len: GLint, buf: &[u8; INFO_LOG_CAP]) -> String {
    let len = (len.max(0) as usize).min(buf.len());
    let end = buf[..len].iter().position(|b| *b == 0).unwrap_or(len);

    String::from_utf8_lossy(&buf[..end]).trim_end().to_owned()
}

impl GraphicsContext for GlContext {
    fn create_shader(&mut self, kind: ShaderKind) -> ShaderId {
        ShaderId(unsafe { gl::CreateShader(gl_kind(kind)) })
    }

    fn shader_source(&mut self, shader: ShaderId, source: &str) {
        // Passing the length explicitly avoids NUL termination entirely.
        let ptr = source.as_ptr() as *const GLchar;
        let len = source.len() as GLint;

        unsafe {
            gl::ShaderSource(shader.0, 1, &ptr, &len);
        }
    }

    fn compile_shader(&mut self, shader: ShaderId) {
        unsafe {
            gl::CompileShader(shader.0);
        }
    }

    fn compile_status(&mut self, shader: ShaderId) -> bool {
        let mut success: GLint = 0;

        unsafe {
            gl::GetShaderiv(shader.0, gl::COMPILE_STATUS, &mut success);
        }

        success != 0
    }

    fn compile_log(&mut self, shader: ShaderId) -> String {
        let mut buf = [0u8; INFO_LOG_CAP];
        let mut len: GLint = 0;

        unsafe {
            gl::GetShaderInfoLog(
                shader.0,
                buf.len() as GLint,
                &mut len,
                buf.as_mut_ptr() as *mut GLchar,
            );
        }

        read_log(len, &buf)
    }

    fn create_program(&mut self) -> ProgramId {
        ProgramId(unsafe { gl::CreateProgram() })
    }

    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId) {
        unsafe {
            gl::AttachShader(program.0, shader.0);
        }
    }

    fn link_program(&mut self, program: ProgramId) {
        unsafe {
            gl::LinkProgram(program.0);
        }
    }

    fn link_status(&mut self, program: ProgramId) -> bool {
        let mut success: GLint = 0;

        unsafe {
            gl::GetProgramiv(program.0, gl::LINK_STATUS, &mut success);
        }

        success != 0
    }

    fn link_log(&mut self, program: ProgramId) -> String {
        let mut buf = [0u8; INFO_LOG_CAP];
        let mut len: GLint = 0;

        unsafe {
            gl::GetProgramInfoLog(
                program.0,
                buf.len() as GLint,
                &mut len,
                buf.as_mut_ptr() as *mut GLchar,
            );
        }

        read_log(len, &buf)
    }

    fn use_program(&mut self, program: ProgramId) {
        unsafe {
            gl::UseProgram(program.0);
        }
    }

    fn delete_shader(&mut self, shader: ShaderId) {
        unsafe {
            gl::DeleteShader(shader.0);
        }
    }
}
