//! Reusable view pieces.

pub mod correct;
pub mod message_box;

pub use correct::correct_banner;
pub use message_box::message_box;
