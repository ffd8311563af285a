//! Episode and panel navigation core for the panel viewer.
//!
//! Everything here is pure state logic: the presentation layer feeds raw
//! input into [`app::ViewerApp`] and applies the resulting [`render::Screen`].

pub mod app;
pub mod config;
pub mod error;
pub mod fragment;
pub mod input;
pub mod manifest;
pub mod mode;
pub mod position;
pub mod render;
pub mod session;
pub mod text_policy;
