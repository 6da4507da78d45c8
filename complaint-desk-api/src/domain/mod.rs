pub mod role;
pub mod staff_action;
pub mod view;

pub use role::*;
pub use staff_action::*;
pub use view::*;
