mod memory_navigator;
mod navigator;

pub use memory_navigator::*;
pub use navigator::*;
