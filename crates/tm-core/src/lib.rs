//! Type-directed construction of aggregates from unordered, optional arguments.
//!
//! A *field shape* is a struct deriving [`FieldShape`]. Its fields, in
//! declaration order, are the types a target needs. Callers hand over any
//! subset of those values in any order; each field is filled from the
//! argument of the same type, or from `Default` when none was supplied.
//!
//! ```
//! use tm_core::{construct, FieldShape};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Width(u32);
//! #[derive(Debug, Default, PartialEq)]
//! struct Height(u32);
//!
//! #[derive(Debug, FieldShape)]
//! struct Rect {
//!     width: Width,
//!     height: Height,
//! }
//!
//! let rect = construct!(Rect; Height(7));
//! assert_eq!(rect.width, Width(0));
//! assert_eq!(rect.height, Height(7));
//! ```
//!
//! An argument whose type is not a field of the shape does not compile:
//!
//! ```compile_fail,E0277
//! use tm_core::{construct, FieldShape};
//! # #[derive(Debug, Default)] struct Width(u32);
//! # #[derive(Debug, Default)] struct Height(u32);
//! # #[derive(Debug, Default)] struct Depth(u32);
//! #[derive(FieldShape)]
//! struct Rect { width: Width, height: Height }
//!
//! let rect = construct!(Rect; Depth(3));
//! ```
//!
//! Neither does supplying the same field twice:
//!
//! ```compile_fail,E0277
//! use tm_core::{construct, FieldShape};
//! # #[derive(Debug, Default)] struct Width(u32);
//! # #[derive(Debug, Default)] struct Height(u32);
//! # #[derive(Debug, Default)] struct Depth(u32);
//! #[derive(FieldShape)]
//! struct Cuboid { width: Width, height: Height, depth: Depth }
//!
//! let cuboid = construct!(Cuboid; Width(1), Width(2));
//! ```
//!
//! Both report the `Place` bound that is not satisfied. When exactly one
//! slot is still vacant, rustc instead infers the argument type from the
//! single remaining `Place` impl and reports a type mismatch (E0308) naming
//! that slot's type; the call is rejected either way.
//!
//! When arguments only exist at runtime, collect them into an [`ArgSet`] and
//! go through [`DynamicShape::from_arg_set`], which runs the same checks and
//! reports a [`MatchError`] instead.

extern crate self as tm_core;

#[macro_use]
pub mod macros;

pub mod argbox;
pub mod args;
pub mod error;
pub mod matcher;
pub mod shape;
pub mod slot;

// Generated code logs through this path.
pub use tracing;

pub use argbox::{ArgBox, Argument};
pub use args::ArgSet;
pub use error::{MatchError, Result};
pub use shape::{build, build_dynamic, DynamicShape, FieldDescriptor, FieldShape, FromFields};
pub use slot::{Filled, Finish, Place, Slot, Vacant};
pub use tm_macros::FieldShape;
