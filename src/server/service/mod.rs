//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories, own transactions and apply the checks that
//! span more than one table.

pub mod game;
pub mod import;
pub mod invariant;
pub mod retry;
pub mod verify;
