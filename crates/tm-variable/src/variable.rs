use crate::holder::{Element, Printable, Values, Variances};
use crate::scaffold::{print_dims, Shape, Unit};
use std::any::type_name;
use std::fmt;
use tm_core::{FieldShape, FromFields};
use tracing::debug;

/// Field shape of [`Variable`], in constructor order.
#[derive(Debug, FieldShape)]
pub struct VariableFields<T: Element> {
    pub unit: Unit,
    pub shape: Shape,
    pub values: Values<T>,
    pub variances: Variances<T>,
}

#[derive(Debug)]
pub struct Variable {
    unit: Unit,
    shape: Vec<i32>,
    values: Box<dyn Printable>,
    variances: Option<Box<dyn Printable>>,
    element_type: &'static str,
}

impl<T: Element> FromFields<VariableFields<T>> for Variable {
    fn from_fields(fields: VariableFields<T>) -> Self {
        let VariableFields {
            unit,
            shape,
            values,
            variances,
        } = fields;
        let variances: Option<Box<dyn Printable>> = if variances.is_empty() {
            debug!("empty variances stored as absent");
            None
        } else {
            Some(Box::new(variances))
        };
        Self {
            unit,
            shape: shape.0,
            values: Box::new(values),
            variances,
            element_type: type_name::<T>(),
        }
    }
}

impl Variable {
    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn shape(&self) -> &[i32] {
        &self.shape
    }

    pub fn values(&self) -> &dyn Printable {
        self.values.as_ref()
    }

    pub fn variances(&self) -> Option<&dyn Printable> {
        self.variances.as_deref()
    }

    pub fn has_variances(&self) -> bool {
        self.variances.is_some()
    }

    pub fn element_type(&self) -> &'static str {
        self.element_type
    }

    pub fn values_as<T: Element>(&self) -> Option<&Values<T>> {
        self.values.as_any().downcast_ref()
    }

    pub fn variances_as<T: Element>(&self) -> Option<&Variances<T>> {
        self.variances.as_ref()?.as_any().downcast_ref()
    }

    /// One line per field in field order, then a blank line.
    pub fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.unit.print(out)?;
        print_dims(out, &self.shape)?;
        self.values.print(out)?;
        match &self.variances {
            Some(variances) => variances.print(out)?,
            None => out.write_str("No variances\n")?,
        }
        out.write_str("\n")
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

/// Builds a [`Variable`] with element type `T` from any subset of its parts.
///
/// ```
/// use tm_variable::{make_variable, Unit, Values};
///
/// let variable = make_variable!(f64; Values::new(vec![1.0, 4.0, 5.0]), Unit(1));
/// assert_eq!(variable.unit(), Unit(1));
/// assert!(variable.shape().is_empty());
/// assert!(!variable.has_variances());
/// ```
#[macro_export]
macro_rules! make_variable {
    ($element:ty $(; $($arg:expr),* $(,)?)?) => {
        $crate::tm_core::construct_into!(
            $crate::Variable,
            $crate::VariableFields<$element>
            $(; $($arg),*)?
        )
    };
}
