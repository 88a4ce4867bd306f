pub mod academy_modules_service;
pub mod listing;
pub mod plans_service;
