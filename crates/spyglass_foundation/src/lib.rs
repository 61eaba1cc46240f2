//! Core identifiers, type sets, and errors for Spyglass.
//!
//! This crate provides:
//! - [`Entity`] - Opaque entity identifiers from the simulation under inspection
//! - [`ComponentId`] / [`TypeSet`] - Ordered, de-duplicated component id sets
//! - [`Filter`] - Superset-membership selection over type sets
//! - [`Error`] - Console error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod entity;
mod error;
mod types;

pub use entity::Entity;
pub use error::{Error, ErrorKind, Result};
pub use types::{ComponentId, Filter, TypeSet};
