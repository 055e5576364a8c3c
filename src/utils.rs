pub mod log;
mod macros;
