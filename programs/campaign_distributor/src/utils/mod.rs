pub mod eligibility;
pub mod slug;
pub mod token;

pub use eligibility::*;
pub use slug::*;
pub use token::*;
