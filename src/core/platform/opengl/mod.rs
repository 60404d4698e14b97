pub mod opengl_program_backend;
pub mod opengl_shader;
