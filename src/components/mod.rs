//! The components module contains all shared components for the site.

mod app_view;
mod audio_controls;
mod audio_manager;
mod counter;
pub(crate) mod dom;
mod forms;
mod icons;
mod lightbox;
mod page_effects;
mod shell;
mod views;

pub use app_view::*;
pub use audio_controls::*;
pub use audio_manager::*;
pub use counter::*;
pub use forms::*;
pub use icons::*;
pub use lightbox::*;
pub use page_effects::*;
pub use shell::*;
// Views are reached through the router via SiteRoute
