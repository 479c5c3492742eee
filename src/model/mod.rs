// Core model - the three closed enumerations
//
// Every navigation decision is a pure function of these three types:
// - Destination: which screen
// - BusinessType: which vertical's catalog and group ordering
// - Role: which permission set
//
// All three are compile-time constants; nothing here is created, mutated,
// or destroyed at runtime.

pub mod business;
pub mod destination;
pub mod role;

pub use business::BusinessType;
pub use destination::Destination;
pub use role::{Role, RoleParseError};
