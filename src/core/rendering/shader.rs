/// Kinds of shader stage a program keeps track of before linking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStageKind {
    Vertex,
    Fragment,
}

impl ShaderStageKind {
    /// Resolve a raw OpenGL shader type. Stage types other than
    /// vertex and fragment (geometry, compute...) have no kind.
    pub fn from_gl(stage_type: u32) -> Option<Self> {
        match stage_type {
            glow::VERTEX_SHADER => Some(ShaderStageKind::Vertex),
            glow::FRAGMENT_SHADER => Some(ShaderStageKind::Fragment),
            _ => None,
        }
    }

    pub fn to_gl(self) -> u32 {
        match self {
            ShaderStageKind::Vertex => glow::VERTEX_SHADER,
            ShaderStageKind::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    pub fn get_name(self) -> &'static str {
        match self {
            ShaderStageKind::Vertex => "vertex",
            ShaderStageKind::Fragment => "fragment",
        }
    }
}

/// A compiled shader stage that can be attached to a program.
///
/// Programs only borrow stages: they read the stage type and the native
/// handle, the stage object keeps ownership of the driver shader.
pub trait ShaderStage {
    type Native: Copy;

    /// Raw shader type as reported by the driver (e.g. `glow::VERTEX_SHADER`)
    fn stage_type(&self) -> u32;

    fn native_shader(&self) -> Self::Native;
}

#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    /// The driver could not allocate a shader object
    #[error("could not create {kind} shader: {reason}")]
    CreationFailed {
        kind: &'static str,
        reason: String,
    },
    /// Could not compile this shader
    #[error("shader compilation failed:\n{0}")]
    CompilationError(String),
}
