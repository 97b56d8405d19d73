//! Read-only view models for the public affiliate site.
//!
//! Every builder takes the fetched document as `Option<&T>` (`None` while
//! loading or after a failed read) and always yields complete content: a
//! blank or missing field resolves to the built-in copy for the language.

pub use commission::*;
pub use content::*;
pub use fallback::*;
pub use footer::*;
pub use media::*;
pub use notice::*;
pub use page::*;
pub use promotions::*;
pub use theme::*;

mod commission;
mod content;
mod fallback;
mod footer;
mod media;
mod notice;
mod page;
mod promotions;
mod theme;
