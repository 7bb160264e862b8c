//! Page modules

pub mod connect;
pub mod home;

pub use connect::ConnectPage;
pub use home::{HomePage, NotFound};
