mod event;
mod reminder;
mod shared;
mod user;

pub use event::Event;
pub use reminder::Reminder;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::{User, UserError};
