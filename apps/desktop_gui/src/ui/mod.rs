//! UI layer for desktop GUI: customers table, dialogs and notification toast.

pub mod app;

pub use app::CustomerManagerApp;
