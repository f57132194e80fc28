//! In-memory stand-ins for the graphics backend and the diagnostic sink,
//! used by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::context::{GraphicsContext, ProgramId, ShaderId};
use crate::logger::{Logger, Severity};
use crate::shader::ShaderKind;

/// Sources containing this marker fail to compile in the fake backend.
pub(crate) const BAD_SOURCE_MARKER: &str = "@@reject@@";

struct FakeShader {
    kind: ShaderKind,
    source: String,
    compiled: bool,
    delete_count: u32,
}

#[derive(Default)]
struct FakeProgram {
    attached: Vec<ShaderId>,
    linked: bool,
}

#[derive(Default)]
pub(crate) struct FakeContext {
    next_id: u32,
    shaders: HashMap<u32, FakeShader>,
    programs: HashMap<u32, FakeProgram>,
    current: Option<ProgramId>,
    fail_link: bool,
}

impl FakeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent link attempt report failure.
    pub fn force_link_failure(&mut self) {
        self.fail_link = true;
    }

    pub fn current_program(&self) -> Option<ProgramId> {
        self.current
    }

    pub fn program_linked(&self, program: ProgramId) -> bool {
        self.programs[&program.0].linked
    }

    pub fn delete_count(&self, shader: ShaderId) -> u32 {
        self.shaders[&shader.0].delete_count
    }

    pub fn shader_count(&self) -> usize {
        self.shaders.len()
    }

    pub fn live_shader_count(&self) -> usize {
        self.shaders.values().filter(|s| s.delete_count == 0).count()
    }

    fn alloc_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

impl GraphicsContext for FakeContext {
    fn create_shader(&mut self, kind: ShaderKind) -> ShaderId {
        let id = self.alloc_id();
        self.shaders.insert(
            id,
            FakeShader {
                kind,
                source: String::new(),
                compiled: false,
                delete_count: 0,
            },
        );

        ShaderId(id)
    }

    fn shader_source(&mut self, shader: ShaderId, source: &str) {
        self.shaders.get_mut(&shader.0).unwrap().source = source.to_owned();
    }

    fn compile_shader(&mut self, shader: ShaderId) {
        let entry = self.shaders.get_mut(&shader.0).unwrap();
        entry.compiled = !entry.source.contains(BAD_SOURCE_MARKER);
    }

    fn compile_status(&mut self, shader: ShaderId) -> bool {
        self.shaders[&shader.0].compiled
    }

    fn compile_log(&mut self, shader: ShaderId) -> String {
        let entry = &self.shaders[&shader.0];
        format!("0:1(1): error: {} stage rejected", entry.kind)
    }

    fn create_program(&mut self) -> ProgramId {
        let id = self.alloc_id();
        self.programs.insert(id, FakeProgram::default());

        ProgramId(id)
    }

    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId) {
        self.programs.get_mut(&program.0).unwrap().attached.push(shader);
    }

    fn link_program(&mut self, program: ProgramId) {
        let linked = !self.fail_link
            && self.programs[&program.0].attached.len() == 2
            && self.programs[&program.0]
                .attached
                .iter()
                .all(|s| self.shaders[&s.0].compiled);

        self.programs.get_mut(&program.0).unwrap().linked = linked;
    }

    fn link_status(&mut self, program: ProgramId) -> bool {
        self.programs[&program.0].linked
    }

    fn link_log(&mut self, program: ProgramId) -> String {
        format!("error: program {} failed to link", program.0)
    }

    fn use_program(&mut self, program: ProgramId) {
        self.current = Some(program);
    }

    fn delete_shader(&mut self, shader: ShaderId) {
        self.shaders.get_mut(&shader.0).unwrap().delete_count += 1;
    }
}

/// Captures every diagnostic for later inspection.
#[derive(Default)]
pub(crate) struct RecordingLogger {
    entries: RefCell<Vec<(Severity, String, String)>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<(Severity, String, String)> {
        self.entries.borrow().clone()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, severity: Severity, tag: &str, message: &str) {
        self.entries
            .borrow_mut()
            .push((severity, tag.to_owned(), message.to_owned()));
    }
}
