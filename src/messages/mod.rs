//! Failure message handling.
//!
//! Contains the override store, the resolution priority chain, and the
//! placeholder interpolation shared by default and custom messages.

pub mod overrides;
pub mod resolver;
pub mod template;

pub use overrides::MessageOverrides;
pub use resolver::MessageResolver;
pub use template::{interpolate, FALLBACK_MESSAGE};
