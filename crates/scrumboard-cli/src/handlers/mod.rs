pub mod board;
pub mod card;
pub mod list;
pub mod profile;
pub mod session;
