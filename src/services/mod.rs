pub use admins::*;
pub use cache::*;
pub use crud::*;
pub use notify::*;
pub use ordering::*;
pub use permissions::*;
pub use preview::*;
pub use session::*;
pub use storage::*;
pub use validation::*;

mod admins;
mod cache;
mod crud;
pub mod forms;
mod notify;
mod ordering;
pub mod permissions;
mod preview;
mod session;
mod storage;
mod validation;
