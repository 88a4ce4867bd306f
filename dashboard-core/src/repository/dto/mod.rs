mod academy_module;
mod plan;

pub use academy_module::*;
pub use plan::*;
