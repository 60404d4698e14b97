use std::fmt;

use crate::core::logging::LogSink;
use crate::core::rendering::error::{CheckError, ProgramError};
use crate::core::rendering::program_backend::ProgramBackend;
use crate::core::rendering::shader::{ShaderStage, ShaderStageKind};

const GL_TRUE: i32 = glow::TRUE as i32;
const GL_FALSE: i32 = glow::FALSE as i32;

/// Driver operations whose status can be checked on a program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Link,
    Validate,
    Compile,
}

impl CheckKind {
    pub fn from_gl(what: u32) -> Option<Self> {
        match what {
            glow::LINK_STATUS => Some(CheckKind::Link),
            glow::VALIDATE_STATUS => Some(CheckKind::Validate),
            glow::COMPILE_STATUS => Some(CheckKind::Compile),
            _ => None,
        }
    }

    pub fn to_gl(self) -> u32 {
        match self {
            CheckKind::Link => glow::LINK_STATUS,
            CheckKind::Validate => glow::VALIDATE_STATUS,
            CheckKind::Compile => glow::COMPILE_STATUS,
        }
    }

    /// Stem used to build log lines: "link" + "ed", "validat" + "ing"...
    pub fn verb(self) -> &'static str {
        match self {
            CheckKind::Link => "link",
            CheckKind::Validate => "validat",
            CheckKind::Compile => "compil",
        }
    }
}

/// Status reported by the driver for a [CheckKind]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramStatus {
    Success,
    Failure,
}

impl ProgramStatus {
    /// Drivers hand back the status as an integer. Anything but GL_TRUE or
    /// GL_FALSE is not a status.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            GL_TRUE => Some(ProgramStatus::Success),
            GL_FALSE => Some(ProgramStatus::Failure),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramState {
    Unlinked,
    Linked,
    Validated,
    /// Linking or validation failed. The program should not be used for rendering
    Failed,
}

/// Options for how a program goes through [ShaderProgram::link]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramConfig {
    validate_on_link: bool,
    detach_after_link: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        ProgramConfig {
            validate_on_link: true,
            detach_after_link: false,
        }
    }
}

impl ProgramConfig {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    /// Run driver validation right after a successful link
    pub fn set_validate_on_link(&mut self, validate: bool) -> &mut Self {
        self.validate_on_link = validate;
        self
    }

    #[inline]
    pub fn get_validate_on_link(&self) -> bool {
        self.validate_on_link
    }

    #[inline]
    /// Detach every stage from the program once linking went ok,
    /// so the stages can be deleted independently from the program
    pub fn set_detach_after_link(&mut self, detach: bool) -> &mut Self {
        self.detach_after_link = detach;
        self
    }

    #[inline]
    pub fn get_detach_after_link(&self) -> bool {
        self.detach_after_link
    }
}

/// A driver shader program: stages get attached to it, then it's linked,
/// validated and used for drawing.
///
/// The program owns its driver handle and deletes it when dropped. Backend and
/// log sink are borrowed for the lifetime of the program.
///
/// Like the graphics context behind it, a program must only be used from the
/// thread that owns that context. This is up to the caller.
pub struct ShaderProgram<'a, B: ProgramBackend> {
    name: String,
    native_program: B::Program,
    has_vertex_stage: bool,
    has_fragment_stage: bool,
    attached: Vec<B::Shader>,
    state: ProgramState,
    config: ProgramConfig,
    backend: &'a B,
    log: &'a dyn LogSink,
}

impl<'a, B: ProgramBackend> ShaderProgram<'a, B> {
    pub fn new(
        name: impl Into<String>,
        backend: &'a B,
        log: &'a dyn LogSink,
    ) -> Result<Self, ProgramError> {
        Self::with_config(name, backend, log, ProgramConfig::default())
    }

    pub fn with_config(
        name: impl Into<String>,
        backend: &'a B,
        log: &'a dyn LogSink,
        config: ProgramConfig,
    ) -> Result<Self, ProgramError> {
        let name = name.into();
        let native_program = match backend.create_program() {
            Ok(program) => program,
            Err(reason) => {
                let err = ProgramError::CreationFailed { name, reason };
                log.error(format_args!("{}", err));
                return Err(err);
            }
        };

        Ok(ShaderProgram {
            name,
            native_program,
            has_vertex_stage: false,
            has_fragment_stage: false,
            attached: Vec::new(),
            state: ProgramState::Unlinked,
            config,
            backend,
            log,
        })
    }

    /// Attach a compiled stage to this program.
    ///
    /// Only vertex and fragment stages are accepted, anything else is
    /// rejected before reaching the driver.
    pub fn attach_shader<S>(&mut self, stage: &S) -> Result<(), ProgramError>
    where
        S: ShaderStage<Native = B::Shader>,
    {
        let stage_type = stage.stage_type();
        let Some(kind) = ShaderStageKind::from_gl(stage_type) else {
            let err = ProgramError::UnsupportedStageKind {
                name: self.name.clone(),
                stage_type,
            };
            self.log.error(format_args!("{}", err));
            return Err(err);
        };

        // The driver refuses a shader that is already attached
        let shader = stage.native_shader();
        if !self.attached.contains(&shader) {
            self.backend.attach_shader(self.native_program, shader);
            self.attached.push(shader);
        }

        match kind {
            ShaderStageKind::Vertex => self.has_vertex_stage = true,
            ShaderStageKind::Fragment => self.has_fragment_stage = true,
        }
        Ok(())
    }

    /// Link the attached stages, then validate the result unless the config
    /// says otherwise. Needs at least a vertex and a fragment stage.
    pub fn link(&mut self) -> Result<(), ProgramError> {
        if !self.has_vertex_stage || !self.has_fragment_stage {
            let err = ProgramError::MissingStage {
                name: self.name.clone(),
            };
            self.log.error(format_args!("{}", err));
            return Err(err);
        }

        self.backend.link_program(self.native_program);
        if let Err(source) = self.check(glow::LINK_STATUS) {
            self.state = ProgramState::Failed;
            let err = ProgramError::LinkFailed {
                name: self.name.clone(),
                source,
            };
            self.log.error(format_args!("{}", err));
            return Err(err);
        }
        self.state = ProgramState::Linked;

        if self.config.validate_on_link {
            self.backend.validate_program(self.native_program);
            if let Err(source) = self.check(glow::VALIDATE_STATUS) {
                self.state = ProgramState::Failed;
                return Err(ProgramError::ValidationFailed {
                    name: self.name.clone(),
                    source,
                });
            }
            self.state = ProgramState::Validated;
        }

        if self.config.detach_after_link {
            // Flags follow what the driver has attached
            for shader in self.attached.drain(..) {
                self.backend.detach_shader(self.native_program, shader);
            }
            self.has_vertex_stage = false;
            self.has_fragment_stage = false;
        }

        Ok(())
    }

    /// Check the driver status of a link, validate or compile operation
    /// (`glow::LINK_STATUS`, `glow::VALIDATE_STATUS`, `glow::COMPILE_STATUS`).
    ///
    /// Always writes exactly one line with the driver info log to the log sink.
    /// An empty info log counts as an error, even when the driver reports success.
    pub fn check(&self, what: u32) -> Result<(), CheckError> {
        let Some(kind) = CheckKind::from_gl(what) else {
            let err = CheckError::UnknownCheckKind {
                program: self.repr(),
                what,
            };
            self.log.error(format_args!("{}", err));
            return Err(err);
        };
        let verb = kind.verb();

        let raw_status = self.get_info(what);
        let log_length = self.get_info(glow::INFO_LOG_LENGTH);
        if log_length <= 0 {
            let err = CheckError::EmptyLog {
                program: self.repr(),
            };
            self.log.error(format_args!("{}", err));
            return Err(err);
        }

        let info_log = self.get_log();
        match ProgramStatus::from_raw(raw_status) {
            Some(ProgramStatus::Success) => {
                self.log.info(format_args!(
                    "{} was {}ed successfully:\n{}",
                    self, verb, info_log
                ));
                Ok(())
            }
            Some(ProgramStatus::Failure) => {
                let err = CheckError::Failed {
                    program: self.repr(),
                    verb,
                    log: info_log,
                };
                self.log.error(format_args!("{}", err));
                Err(err)
            }
            None => {
                let err = CheckError::AmbiguousStatus {
                    program: self.repr(),
                    verb,
                    raw: raw_status,
                    log: info_log,
                };
                self.log.error(format_args!("{}", err));
                Err(err)
            }
        }
    }

    /// Raw program parameter, as the driver returns it
    #[inline]
    pub fn get_info(&self, parameter: u32) -> i32 {
        self.backend
            .get_program_parameter_i32(self.native_program, parameter)
    }

    /// Driver info log of the last link or validation
    #[inline]
    pub fn get_log(&self) -> String {
        self.backend.get_program_info_log(self.native_program)
    }

    /// Name used in diagnostics: "program <name>"
    pub fn repr(&self) -> String {
        self.to_string()
    }

    /// Make this the program used by the next draw calls.
    /// Does nothing (except logging) if the handle is no longer a driver program.
    pub fn use_program(&self) {
        if self.backend.is_program(self.native_program) {
            self.backend.use_program(Some(self.native_program));
        } else {
            self.log.error(format_args!("error using a program {}", self));
        }
    }

    /// Unbind whatever program is in use, this one or not
    pub fn stop_using(&self) {
        self.backend.use_program(None);
    }

    /// `None` if the driver does not know the uniform (or optimized it out)
    pub fn get_uniform_location(&self, name: &str) -> Option<B::UniformLocation> {
        self.backend
            .get_uniform_location(self.native_program, name)
    }

    #[inline]
    pub fn get_name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn native_program(&self) -> B::Program {
        self.native_program
    }

    #[inline]
    pub fn has_vertex_stage(&self) -> bool {
        self.has_vertex_stage
    }

    #[inline]
    pub fn has_fragment_stage(&self) -> bool {
        self.has_fragment_stage
    }

    #[inline]
    pub fn state(&self) -> ProgramState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }
}

impl<B: ProgramBackend> fmt::Display for ShaderProgram<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "program {}", self.name)
    }
}

impl<B: ProgramBackend> Drop for ShaderProgram<'_, B> {
    fn drop(&mut self) {
        self.backend.delete_program(self.native_program);
    }
}
