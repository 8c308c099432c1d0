//! Infrastructure layer: record store, settings, notifications, demo data.

pub mod catalog;
pub mod config;
pub mod notification;
pub mod repository;
pub mod seed;

pub use catalog::{Catalog, InvoiceLineRequest, NewInvoice};
pub use config::{ConfigError, Settings};
pub use notification::{
    InMemoryNotificationSink, Notification, NotificationLevel, NotificationSink,
    TracingNotificationSink,
};
pub use repository::{InMemoryRepository, Repository};
