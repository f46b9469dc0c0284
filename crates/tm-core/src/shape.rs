use crate::args::ArgSet;
use crate::error::Result;
use std::any::{type_name, TypeId};
use std::fmt;

/// Runtime description of one field of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Position in the target's constructor order.
    pub position: usize,
    pub name: &'static str,
    pub type_name: &'static str,
    pub type_id: TypeId,
}

impl FieldDescriptor {
    pub fn of<F: 'static>(position: usize, name: &'static str) -> Self {
        Self {
            position,
            name,
            type_name: type_name::<F>(),
            type_id: TypeId::of::<F>(),
        }
    }

    pub fn matches(&self, type_id: TypeId) -> bool {
        self.type_id == type_id
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.position, self.name, self.type_name)
    }
}

/// A struct whose fields are the ordered field types of a target.
///
/// Implemented by `#[derive(FieldShape)]`, which also generates the
/// [`Place`](crate::Place) and [`Finish`](crate::Finish) impls for
/// [`FieldShape::Args`].
pub trait FieldShape: Sized {
    /// Argument value with every slot [`Vacant`](crate::Vacant).
    type Args;

    const FIELD_COUNT: usize;

    fn args() -> Self::Args;
}

/// Resolution from arguments that are only known at runtime.
///
/// Every field type must be `Default + 'static`.
pub trait DynamicShape: FieldShape + 'static {
    fn descriptors() -> Vec<FieldDescriptor>;

    /// Validates `args` against [`descriptors`](Self::descriptors) and, only
    /// if every argument is recognized and unique, resolves each field.
    fn from_arg_set(args: ArgSet) -> Result<Self>;
}

/// Builds a target from a fully resolved shape.
pub trait FromFields<S: FieldShape> {
    fn from_fields(fields: S) -> Self;
}

impl<S: FieldShape> FromFields<S> for S {
    fn from_fields(fields: S) -> Self {
        fields
    }
}

pub fn build<T, S>(fields: S) -> T
where
    T: FromFields<S>,
    S: FieldShape,
{
    T::from_fields(fields)
}

pub fn build_dynamic<T, S>(args: ArgSet) -> Result<T>
where
    T: FromFields<S>,
    S: DynamicShape,
{
    Ok(T::from_fields(S::from_arg_set(args)?))
}
