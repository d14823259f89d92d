mod contact;
mod gallery;
mod home;
mod menu;
mod not_found;
mod orders;

pub use contact::Contact;
pub use gallery::Gallery;
pub use home::Home;
pub use menu::Menu;
pub use not_found::NotFound;
pub use orders::Orders;
