pub mod button;
pub mod footer;
pub mod link;
