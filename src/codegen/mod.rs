//! IR code generation
//!
//! - [`emitter`]: [`IrGenerator`], the tree walk producing IR text
//! - [`constants`]: the string-literal pool behind the global constants
//! - [`errors`]: [`CodegenError`]

pub mod constants;
pub mod emitter;
pub mod errors;

pub use emitter::IrGenerator;
pub use errors::CodegenError;
