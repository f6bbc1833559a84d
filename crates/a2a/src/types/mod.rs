pub mod agent_card;
pub mod core;
pub mod requests;
pub mod responses;

pub use agent_card::*;
pub use core::*;
pub use requests::*;
pub use responses::*;
