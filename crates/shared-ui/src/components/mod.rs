// Form building blocks
pub mod button;
pub mod card;
pub mod field;
pub mod select_field;
pub mod switch;

// Feedback
pub mod badge;
pub mod loader;
pub mod toast;

// Shell chrome
pub mod avatar;
pub mod disclosure;
pub mod navbar;
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use disclosure::*;
pub use field::*;
pub use loader::*;
pub use navbar::*;
pub use select_field::*;
pub use sidebar::*;
pub use switch::*;
pub use toast::*;
