pub mod notification;
pub mod organisation;

pub use notification::*;
pub use organisation::*;
