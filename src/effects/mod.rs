//! Pure logic behind the page effects, kept free of DOM types so it can be tested natively.

mod counter;
mod scroll;
mod validation;

pub use counter::*;
pub use scroll::*;
pub use validation::*;
