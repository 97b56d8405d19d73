pub use admin::*;
pub use agent::*;
pub use banners::*;
pub use commission::*;
pub use floating_social::*;
pub use footer::*;
pub use lang::*;
pub use notice::*;
pub use promotion::*;
pub use resource::*;
pub use site::*;
pub use slider::*;

mod admin;
mod agent;
mod banners;
mod commission;
mod floating_social;
mod footer;
mod lang;
mod notice;
mod promotion;
mod resource;
mod site;
mod slider;
