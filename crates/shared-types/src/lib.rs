pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod notification;
pub mod requests;

pub use config::*;
pub use error::*;
pub use models::*;
pub use navigation::*;
pub use notification::*;
pub use requests::*;
