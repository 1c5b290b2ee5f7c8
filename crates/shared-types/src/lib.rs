//! # Shared Types Crate
//!
//! This crate contains the domain types shared across Arclight subsystems:
//! the beacon operation payloads, the content identity contract they expose,
//! and the component contract the bootstrapper uses to assemble a node.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Content Addressing**: Every operation exposes a deterministic
//!   [`HashTreeRoot`](operations::HashTreeRoot) so downstream pools and caches
//!   can key it without trusting the sender.
//! - **Explicit Assembly**: Components are merged by the
//!   [`ComponentRegistry`](component_registry::ComponentRegistry) in a fixed
//!   precedence order; there is no hidden discovery mechanism.

pub mod component;
pub mod component_registry;
pub mod operations;

pub use component::*;
pub use component_registry::ComponentRegistry;
pub use operations::*;
