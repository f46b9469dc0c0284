//! A measured variable assembled from typed, optional parts.
//!
//! [`Variable`] needs a [`Unit`], a [`Shape`], [`Values`] and [`Variances`].
//! [`make_variable!`] accepts any subset of them in any order and defaults
//! the rest; [`build_variable`] does the same from arguments parsed at
//! runtime.

pub mod error;
pub mod holder;
pub mod parse;
pub mod scaffold;
pub mod scenarios;
pub mod variable;

// `make_variable!` expands through this path.
pub use tm_core;

pub use error::{Error, Result};
pub use holder::{Element, Holder, Printable, Values, Variances};
pub use parse::{build_from_text, build_variable, parse_argument, ParseArgError, Precision};
pub use scaffold::{Shape, Unit};
pub use scenarios::{scenarios, Scenario};
pub use variable::{Variable, VariableFields, VariableFieldsArgs};
