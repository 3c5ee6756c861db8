//! Wire contracts shared by the admin frontend.
//!
//! Everything here mirrors the shapes the external REST backend sends and
//! accepts. The crate has no I/O; the analytics in `dashboards` are pure
//! functions over already-fetched DTOs.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
