// Declare submodules
pub mod notify_dto;
pub mod notify_handlers;
pub mod notify_models;
pub mod notify_repository;
pub mod notify_service;

// Re-export public items
pub use notify_models::{Notification, NotificationStatus};
pub use notify_repository::NotifyRepository;
pub use notify_service::NotifyService;
