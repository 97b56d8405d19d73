//! Reusable UI components shared by the admin and affiliate apps.

mod alert;
mod button;
mod field;
mod input;

pub use alert::*;
pub use button::*;
pub use field::*;
pub use input::*;
