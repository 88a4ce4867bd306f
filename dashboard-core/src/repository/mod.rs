mod academy_modules_repository;
mod academy_modules_repository_impl;
mod dto;
mod error;
mod json_file;
mod plans_repository;
mod plans_repository_impl;

pub use academy_modules_repository::*;
pub use academy_modules_repository_impl::*;
pub use dto::*;
pub use error::*;
pub use plans_repository::*;
pub use plans_repository_impl::*;
