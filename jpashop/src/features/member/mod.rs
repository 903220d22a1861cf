mod dto;
pub mod repository;
pub mod router;
pub mod service;
