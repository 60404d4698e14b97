use glow::HasContext;

use crate::core::rendering::program_backend::ProgramBackend;

// Method names are shared with HasContext, so every call below is spelled out
// as `HasContext::method(self, ...)` to pick the glow one.
impl ProgramBackend for glow::Context {
    type Program = <glow::Context as HasContext>::Program;
    type Shader = <glow::Context as HasContext>::Shader;
    type UniformLocation = <glow::Context as HasContext>::UniformLocation;

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn validate_program(&self, program: Self::Program) {
        unsafe { HasContext::validate_program(self, program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn is_program(&self, program: Self::Program) -> bool {
        unsafe { HasContext::is_program(self, program) }
    }

    fn get_program_parameter_i32(&self, program: Self::Program, parameter: u32) -> i32 {
        unsafe { HasContext::get_program_parameter_i32(self, program, parameter) }
    }

    fn get_program_info_log(&self, program: Self::Program) -> String {
        unsafe { HasContext::get_program_info_log(self, program) }
    }

    fn get_uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        unsafe { HasContext::get_uniform_location(self, program, name) }
    }
}
