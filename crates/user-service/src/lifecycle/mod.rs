//! # System Lifecycle & Orchestration
//!
//! This module owns the runtime lifecycle of the service: creating the store
//! actor, wiring the repository into the controllers, and coordinating
//! graceful shutdown.
//!
//! ## Shutdown
//!
//! The shutdown pattern follows these steps:
//!
//! 1. **Drop all repository handles** - Closes the sender side of the store
//!    channel
//! 2. **The store detects closure** - `receiver.recv()` returns `None`
//! 3. **The store drains** - Processes remaining messages, logs final state
//! 4. **Await completion** - Wait for the store task to finish
//!
//! This ensures no requests are lost and the store terminates cleanly.

pub mod app_system;

pub use app_system::*;
