//! API Routes
//!
//! Route handlers organized by functionality.

pub mod bottleneck;
pub mod health;
pub mod insight;
pub mod orders;
