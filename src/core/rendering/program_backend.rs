use std::fmt::Debug;

/// Driver operations a [ShaderProgram](super::program::ShaderProgram) forwards to.
///
/// Parameter names and status values follow the OpenGL encoding
/// (`glow::LINK_STATUS`, `glow::INFO_LOG_LENGTH`, `1` for true...), whatever the
/// implementation behind it. Implementations are not expected to be thread safe:
/// call them only from the thread that owns the graphics context.
pub trait ProgramBackend {
    type Program: Copy + Debug + PartialEq;
    type Shader: Copy + Debug + PartialEq;
    type UniformLocation: Debug;

    // Resource creation and destruction
    fn create_program(&self) -> Result<Self::Program, String>;
    fn delete_program(&self, program: Self::Program);

    // Stages
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);

    // Driver side work
    fn link_program(&self, program: Self::Program);
    fn validate_program(&self, program: Self::Program);

    // Bindings
    fn use_program(&self, program: Option<Self::Program>);
    fn is_program(&self, program: Self::Program) -> bool;

    // Queries
    fn get_program_parameter_i32(&self, program: Self::Program, parameter: u32) -> i32;
    fn get_program_info_log(&self, program: Self::Program) -> String;
    fn get_uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;
}
