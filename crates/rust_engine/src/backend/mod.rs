//! # Backend Module
//!
//! Concrete implementations of the traits defined in the core modules.
//!
//! ## Organization
//!
//! - **Headless**: recording renderer and scripted event source
//!
//! ## Design Principles
//!
//! - **Abstraction**: Backends implement traits defined in core modules
//! - **Isolation**: Backend-specific code is isolated from high-level APIs

pub mod headless;

pub use headless::{HeadlessRenderer, ScriptedEvents};
