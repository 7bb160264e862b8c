//! UI Components

pub mod alert;
pub mod navbar;

pub use alert::AlertBanner;
pub use navbar::Navbar;
