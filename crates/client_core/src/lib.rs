//! Client side of the customers backend: REST gateway, screen session state
//! and the async manager tying them together.

pub mod config;
pub mod error;
pub mod gateway;
pub mod manager;
pub mod notification;
pub mod session;

pub use config::{load_settings, Settings, SettingsError};
pub use error::{GatewayError, GatewayOperation};
pub use gateway::{CustomerGateway, HttpCustomerGateway};
pub use manager::CustomerManager;
pub use notification::{Notification, NotificationCenter, Severity};
pub use session::{CustomerEditor, CustomerSession, DeleteConfirmation, EditorMode, SaveRequest};
