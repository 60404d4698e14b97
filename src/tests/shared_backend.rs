// -- < Scripted backend and log sink shared by the program tests > ---------------------------
#[cfg(test)]
pub mod sb {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::fmt;

    use gl_program::core::logging::{Level, LogSink};
    use gl_program::core::rendering::program_backend::ProgramBackend;
    use gl_program::core::rendering::shader::ShaderStage;

    pub const PROGRAM_ID: u32 = 7;

    /// Every call the program made into the backend, in order
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum BackendCall {
        CreateProgram,
        DeleteProgram(u32),
        AttachShader(u32, u32),
        DetachShader(u32, u32),
        LinkProgram(u32),
        ValidateProgram(u32),
        UseProgram(Option<u32>),
        IsProgram(u32),
        GetParameter(u32),
        GetInfoLog,
        GetUniformLocation(String),
    }

    /// What the driver answers for one operation (link, validate, compile)
    #[derive(Debug, Clone)]
    pub struct DriverResponse {
        pub status: i32,
        pub log_length: i32,
        pub log: String,
    }

    impl DriverResponse {
        pub fn new(status: i32, log_length: i32, log: &str) -> Self {
            DriverResponse {
                status,
                log_length,
                log: log.to_owned(),
            }
        }

        pub fn success(log: &str) -> Self {
            Self::new(1, log.len() as i32 + 1, log)
        }

        pub fn failure(log: &str) -> Self {
            Self::new(0, log.len() as i32 + 1, log)
        }
    }

    pub struct MockBackend {
        pub link: DriverResponse,
        pub validate: DriverResponse,
        pub compile: DriverResponse,
        pub create_error: Option<String>,
        pub valid_program: bool,
        pub uniforms: HashMap<String, i32>,
        calls: RefCell<Vec<BackendCall>>,
        // Operation whose status was queried last, log queries answer for it
        current: Cell<u32>,
    }

    impl Default for MockBackend {
        fn default() -> Self {
            MockBackend {
                link: DriverResponse::success("link ok"),
                validate: DriverResponse::success("validate ok"),
                compile: DriverResponse::success("compile ok"),
                create_error: None,
                valid_program: true,
                uniforms: HashMap::new(),
                calls: RefCell::new(Vec::new()),
                current: Cell::new(glow::LINK_STATUS),
            }
        }
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn calls(&self) -> Vec<BackendCall> {
            self.calls.borrow().clone()
        }

        pub fn count(&self, call: &BackendCall) -> usize {
            self.calls.borrow().iter().filter(|c| *c == call).count()
        }

        pub fn parameter_queries(&self) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|c| matches!(c, BackendCall::GetParameter(_)))
                .count()
        }

        fn record(&self, call: BackendCall) {
            self.calls.borrow_mut().push(call);
        }

        fn current_response(&self) -> &DriverResponse {
            match self.current.get() {
                glow::VALIDATE_STATUS => &self.validate,
                glow::COMPILE_STATUS => &self.compile,
                _ => &self.link,
            }
        }
    }

    impl ProgramBackend for MockBackend {
        type Program = u32;
        type Shader = u32;
        type UniformLocation = i32;

        fn create_program(&self) -> Result<u32, String> {
            self.record(BackendCall::CreateProgram);
            match &self.create_error {
                Some(reason) => Err(reason.clone()),
                None => Ok(PROGRAM_ID),
            }
        }

        fn delete_program(&self, program: u32) {
            self.record(BackendCall::DeleteProgram(program));
        }

        fn attach_shader(&self, program: u32, shader: u32) {
            self.record(BackendCall::AttachShader(program, shader));
        }

        fn detach_shader(&self, program: u32, shader: u32) {
            self.record(BackendCall::DetachShader(program, shader));
        }

        fn link_program(&self, program: u32) {
            self.record(BackendCall::LinkProgram(program));
        }

        fn validate_program(&self, program: u32) {
            self.record(BackendCall::ValidateProgram(program));
        }

        fn use_program(&self, program: Option<u32>) {
            self.record(BackendCall::UseProgram(program));
        }

        fn is_program(&self, program: u32) -> bool {
            self.record(BackendCall::IsProgram(program));
            self.valid_program && program == PROGRAM_ID
        }

        fn get_program_parameter_i32(&self, _program: u32, parameter: u32) -> i32 {
            self.record(BackendCall::GetParameter(parameter));
            match parameter {
                glow::LINK_STATUS | glow::VALIDATE_STATUS | glow::COMPILE_STATUS => {
                    self.current.set(parameter);
                    self.current_response().status
                }
                glow::INFO_LOG_LENGTH => self.current_response().log_length,
                _ => 0,
            }
        }

        fn get_program_info_log(&self, _program: u32) -> String {
            self.record(BackendCall::GetInfoLog);
            self.current_response().log.clone()
        }

        fn get_uniform_location(&self, _program: u32, name: &str) -> Option<i32> {
            self.record(BackendCall::GetUniformLocation(name.to_owned()));
            self.uniforms.get(name).copied()
        }
    }

    pub struct MockStage {
        pub stage_type: u32,
        pub id: u32,
    }

    impl MockStage {
        pub fn vertex(id: u32) -> Self {
            MockStage {
                stage_type: glow::VERTEX_SHADER,
                id,
            }
        }

        pub fn fragment(id: u32) -> Self {
            MockStage {
                stage_type: glow::FRAGMENT_SHADER,
                id,
            }
        }
    }

    impl ShaderStage for MockStage {
        type Native = u32;

        fn stage_type(&self) -> u32 {
            self.stage_type
        }

        fn native_shader(&self) -> u32 {
            self.id
        }
    }

    #[derive(Default)]
    pub struct RecordingSink {
        lines: RefCell<Vec<(Level, String)>>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn lines(&self) -> Vec<(Level, String)> {
            self.lines.borrow().clone()
        }

        pub fn with_level(&self, level: Level) -> Vec<String> {
            self.lines
                .borrow()
                .iter()
                .filter(|(l, _)| *l == level)
                .map(|(_, line)| line.clone())
                .collect()
        }
    }

    impl LogSink for RecordingSink {
        fn log(&self, level: Level, args: fmt::Arguments<'_>) {
            self.lines.borrow_mut().push((level, args.to_string()));
        }
    }
}
