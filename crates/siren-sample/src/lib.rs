//! # Siren Sample App Library
//!
//! A small resource graph (`root`, `child`, `widgets`) wired through the
//! [`ActionInterceptor`](siren_actions::ActionInterceptor), exposed for integration testing.

pub mod error;
pub mod lifecycle;
pub mod resources;
