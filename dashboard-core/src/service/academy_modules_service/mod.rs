mod academy_module_record;
mod academy_modules_service;
mod academy_modules_service_impl;

pub use academy_modules_service::*;
pub use academy_modules_service_impl::*;
