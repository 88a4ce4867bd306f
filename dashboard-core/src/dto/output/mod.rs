mod academy_module;
mod page;
mod plan;

pub use academy_module::*;
pub use page::*;
pub use plan::*;
