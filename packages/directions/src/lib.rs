pub mod common;
pub mod loading;
pub mod narration;
pub mod routing;
