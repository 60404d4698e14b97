pub mod error;
pub mod program;
pub mod program_backend;
pub mod shader;
