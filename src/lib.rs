pub mod core;

// Lets paths like `gl_program::core::...` resolve inside the crate too.
extern crate self as gl_program;

#[cfg(test)]
mod tests;
