//! Browser module - DevTools-driven page control
//!
//! Contains the session lifecycle, the page driving primitives, and the
//! navigation settle detection.

pub mod page;
pub mod session;
pub mod wait;

pub use page::DrivenPage;
pub use session::Session;
