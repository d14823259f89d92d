//! Persistent background music: an intro track followed by an endless loop,
//! resumed from local storage on every page load.

mod controller;
mod media;
mod notice;
mod state;
mod store;
#[cfg(test)]
mod testing;

pub use controller::*;
pub use media::*;
pub use notice::*;
pub use state::*;
pub use store::*;
