//! Rendering widgets for the playground screens.
//!
//! Each widget is a plain `render_*` function taking a frame, an area,
//! and the state it displays. Widgets never mutate state; all state
//! transitions happen in the application event handlers.

pub mod chat_panel;
pub mod code_view;
pub mod config_panel;
pub mod contact_form;
pub mod gallery;
pub mod pages;
