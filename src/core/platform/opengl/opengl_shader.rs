use glow::HasContext;

use crate::core::logging::LogSink;
use crate::core::rendering::shader::{ShaderError, ShaderStage, ShaderStageKind};

/// A compiled glow shader object, ready to be attached to a program.
/// The shader object is deleted when this is dropped.
pub struct OpenGLShaderStage<'gl> {
    gl: &'gl glow::Context,
    native_shader: <glow::Context as HasContext>::Shader,
    kind: ShaderStageKind,
}

impl<'gl> OpenGLShaderStage<'gl> {
    /// Create a shader of the given kind and compile `source` into it
    pub fn compile(
        gl: &'gl glow::Context,
        log: &dyn LogSink,
        kind: ShaderStageKind,
        source: &str,
    ) -> Result<Self, ShaderError> {
        unsafe {
            let shader = gl
                .create_shader(kind.to_gl())
                .map_err(|reason| ShaderError::CreationFailed {
                    kind: kind.get_name(),
                    reason,
                })?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let info_log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);

                log.error(format_args!(
                    "failed compiling {} shader:\n{}",
                    kind.get_name(),
                    info_log
                ));
                return Err(ShaderError::CompilationError(info_log));
            }

            Ok(OpenGLShaderStage {
                gl,
                native_shader: shader,
                kind,
            })
        }
    }

    #[inline]
    pub fn get_kind(&self) -> ShaderStageKind {
        self.kind
    }
}

impl ShaderStage for OpenGLShaderStage<'_> {
    type Native = <glow::Context as HasContext>::Shader;

    fn stage_type(&self) -> u32 {
        self.kind.to_gl()
    }

    fn native_shader(&self) -> Self::Native {
        self.native_shader
    }
}

impl Drop for OpenGLShaderStage<'_> {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.native_shader);
        }
    }
}
