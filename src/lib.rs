pub mod app;
pub mod components;
pub mod constants;
mod pages;
pub mod types;

pub use constants::SocialLinks;
pub use types::{LinkTarget, SignupForm, SignupState, SocialPlatform};
