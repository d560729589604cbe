//! Project object model types for pomkit.
//!
//! This crate contains:
//! - The descriptor record types, rooted at [`Project`]
//! - The [`Properties`] bag used for properties and configuration blocks
//! - Identity triple helpers ([`Coordinates`])
//! - `${...}` variable expansion
//!
//! Every field is an `Option`: absent and present-but-empty are different
//! states and survive a decode/encode round trip.

pub mod build;
pub mod coordinates;
pub mod dependency;
pub mod error;
pub mod people;
pub mod profile;
pub mod project;
pub mod properties;
pub mod reporting;
pub mod repository;
pub mod variables;

pub use coordinates::Coordinates;
pub use error::{Error, Result};
pub use project::Project;
pub use properties::Properties;
pub use variables::{ProjectResolver, Resolver};
