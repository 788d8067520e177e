//! Bridge between the UI thread and the worker that talks to the backend.

pub mod commands;
pub mod runtime;
