pub mod registration_service;
pub mod roster_service;
