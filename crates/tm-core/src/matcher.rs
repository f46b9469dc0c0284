//! Runtime counterpart of the compile-time slot checks.

use crate::argbox::ArgBox;
use crate::args::ArgSet;
use crate::error::{MatchError, Result};
use crate::shape::FieldDescriptor;
use std::any::TypeId;
use tracing::{debug, warn};

pub fn is_recognized(descriptors: &[FieldDescriptor], type_id: TypeId) -> bool {
    descriptors.iter().any(|d| d.matches(type_id))
}

/// Number of supplied arguments whose type is one of the field types.
pub fn count_recognized(descriptors: &[FieldDescriptor], args: &ArgSet) -> usize {
    args.type_ids()
        .filter(|id| is_recognized(descriptors, *id))
        .count()
}

/// Rejects `args` unless every argument matches exactly one field and no
/// field is supplied twice. Nothing is resolved here.
pub fn validate(shape: &'static str, descriptors: &[FieldDescriptor], args: &ArgSet) -> Result<()> {
    let recognized = count_recognized(descriptors, args);
    if recognized != args.len() {
        if let Some((position, arg)) = args
            .iter()
            .enumerate()
            .find(|(_, arg)| !is_recognized(descriptors, ArgBox::type_id(arg)))
        {
            warn!(shape, argument = arg.type_name(), position, "unrecognized argument");
            return Err(MatchError::Unrecognized {
                shape,
                type_name: arg.type_name(),
                position,
            });
        }
    }

    let supplied: Vec<TypeId> = args.type_ids().collect();
    for (second, arg) in args.iter().enumerate() {
        let Some(first) = supplied[..second]
            .iter()
            .position(|earlier| *earlier == supplied[second])
        else {
            continue;
        };
        let field = descriptors
            .iter()
            .find(|d| d.matches(supplied[second]))
            .map(|d| d.name)
            .unwrap_or_default();
        warn!(shape, field, first, second, "duplicate argument");
        return Err(MatchError::Duplicate {
            shape,
            field,
            type_name: arg.type_name(),
            first,
            second,
        });
    }

    Ok(())
}

/// Takes the argument for `descriptor`, or falls back to `F::default()`.
pub fn resolve<F: Default + 'static>(args: &mut ArgSet, descriptor: &FieldDescriptor) -> F {
    match args.take::<F>() {
        Some(value) => {
            debug!(field = descriptor.name, position = descriptor.position, "field supplied");
            value
        }
        None => {
            debug!(field = descriptor.name, position = descriptor.position, "field defaulted");
            F::default()
        }
    }
}
