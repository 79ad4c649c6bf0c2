/// State management module
///
/// This module handles all form state, including:
/// - Shared data structures (data.rs)
/// - The form controller and its lifecycle (form.rs)
/// - Asynchronous preview decoding (preview.rs)

pub mod data;
pub mod form;
pub mod preview;
