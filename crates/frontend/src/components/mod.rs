//! Reusable UI components.

mod card;
mod navbar;

pub use card::Card;
pub use navbar::Navbar;
