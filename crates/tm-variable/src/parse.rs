//! Text arguments for building a [`Variable`] at runtime.
//!
//! Each argument is `<field>[:<element>]=<list>`:
//!
//! - `unit=3`
//! - `shape=1,2,3`
//! - `values=1,4,5` or `values:f32=1,4,5`
//! - `variances=6,7,8` or `variances:f64=6,7,8`
//!
//! The element suffix defaults to the build precision. Spelling out a
//! different one produces an argument whose type is not a field of the shape
//! being built, which the matcher then rejects.

use crate::error::Result;
use crate::holder::{Values, Variances};
use crate::scaffold::{Shape, Unit};
use crate::variable::{Variable, VariableFields};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tm_core::{build_dynamic, ArgBox, ArgSet, DynamicShape, FieldDescriptor};
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseArgError {
    #[error("argument `{0}` must look like `<field>=<value>`")]
    MissingValue(String),
    #[error("unknown field `{0}`; expected one of unit, shape, values, variances")]
    UnknownField(String),
    #[error("unknown element type `{0}`; expected f32 or f64")]
    UnknownPrecision(String),
    #[error("field `{0}` does not take an element type")]
    UnexpectedElementType(String),
    #[error("invalid number `{value}` for field `{field}`")]
    InvalidNumber { field: String, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    F32,
    #[default]
    F64,
}

impl FromStr for Precision {
    type Err = ParseArgError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "f32" => Ok(Precision::F32),
            "f64" => Ok(Precision::F64),
            other => Err(ParseArgError::UnknownPrecision(other.to_string())),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::F32 => f.write_str("f32"),
            Precision::F64 => f.write_str("f64"),
        }
    }
}

impl Precision {
    pub fn descriptors(self) -> Vec<FieldDescriptor> {
        match self {
            Precision::F32 => VariableFields::<f32>::descriptors(),
            Precision::F64 => VariableFields::<f64>::descriptors(),
        }
    }
}

fn parse_number<T: FromStr>(field: &str, value: &str) -> std::result::Result<T, ParseArgError> {
    value.trim().parse().map_err(|_| ParseArgError::InvalidNumber {
        field: field.to_string(),
        value: value.trim().to_string(),
    })
}

fn parse_list<T: FromStr>(field: &str, list: &str) -> std::result::Result<Vec<T>, ParseArgError> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }
    list.split(',').map(|item| parse_number(field, item)).collect()
}

fn holder_argument<T>(field: &str, list: &str) -> std::result::Result<ArgBox, ParseArgError>
where
    T: FromStr + fmt::Debug + 'static,
{
    let data = parse_list::<T>(field, list)?;
    Ok(match field {
        "values" => ArgBox::new(Values::new(data)),
        _ => ArgBox::new(Variances::new(data)),
    })
}

/// Parses one text argument into a typed, boxed value.
pub fn parse_argument(text: &str, precision: Precision) -> std::result::Result<ArgBox, ParseArgError> {
    let (key, list) = text
        .split_once('=')
        .ok_or_else(|| ParseArgError::MissingValue(text.to_string()))?;
    let (field, element) = match key.split_once(':') {
        Some((field, element)) => (field.trim(), Some(element.trim().parse::<Precision>()?)),
        None => (key.trim(), None),
    };

    let arg = match field {
        "unit" | "shape" if element.is_some() => {
            return Err(ParseArgError::UnexpectedElementType(field.to_string()))
        }
        "unit" => ArgBox::new(Unit(parse_number(field, list)?)),
        "shape" => ArgBox::new(Shape::new(parse_list(field, list)?)),
        "values" | "variances" => match element.unwrap_or(precision) {
            Precision::F32 => holder_argument::<f32>(field, list)?,
            Precision::F64 => holder_argument::<f64>(field, list)?,
        },
        other => return Err(ParseArgError::UnknownField(other.to_string())),
    };
    debug!(argument = text, argument_type = arg.type_name(), "parsed argument");
    Ok(arg)
}

/// Resolves `args` against `VariableFields` of the given precision.
pub fn build_variable(args: ArgSet, precision: Precision) -> Result<Variable> {
    let variable = match precision {
        Precision::F32 => build_dynamic::<Variable, VariableFields<f32>>(args)?,
        Precision::F64 => build_dynamic::<Variable, VariableFields<f64>>(args)?,
    };
    Ok(variable)
}

/// Parses every text argument, then builds. Parsing stops at the first error
/// and nothing is resolved unless all arguments parsed.
pub fn build_from_text<S: AsRef<str>>(texts: &[S], precision: Precision) -> Result<Variable> {
    let args = texts
        .iter()
        .map(|text| parse_argument(text.as_ref(), precision))
        .collect::<std::result::Result<ArgSet, _>>()?;
    build_variable(args, precision)
}
