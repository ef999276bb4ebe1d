//! Interactive terminal front-end
pub mod app;
pub mod context_viewer;
pub mod ui;
#[allow(clippy::module_inception)]
pub mod viewer;
pub mod viewer_main;
pub mod words_viewer;
