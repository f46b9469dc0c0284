//! Per-field typestate used while arguments are being placed.
//!
//! A derived argument value carries one type parameter per field. Each starts
//! out as [`Vacant`] and becomes [`Filled<F>`] once an argument of type `F` is
//! placed. `Place<F>` is only implemented while the matching slot is still
//! vacant, so supplying a field twice, or supplying a type that is not a field
//! at all, is a compile error at the call site.

/// A field no argument has been supplied for yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vacant;

/// A field holding the caller's argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filled<F>(pub F);

/// Turns a slot into the value of field type `F`.
pub trait Slot<F> {
    /// Whether the caller supplied this field.
    const SUPPLIED: bool;

    fn resolve(self) -> F;
}

impl<F: Default> Slot<F> for Vacant {
    const SUPPLIED: bool = false;

    fn resolve(self) -> F {
        F::default()
    }
}

impl<F> Slot<F> for Filled<F> {
    const SUPPLIED: bool = true;

    fn resolve(self) -> F {
        self.0
    }
}

/// Moves an argument of type `A` into the slot of the same type.
///
/// With two or more vacant slots a misplaced argument fails with the message
/// below. With exactly one, rustc picks the remaining impl and reports a type
/// mismatch against its field type instead.
#[diagnostic::on_unimplemented(
    message = "`{A}` cannot be placed into `{Self}`",
    label = "`{A}` is not a field type of this shape, or it was already supplied",
    note = "every argument must match exactly one field type and appear at most once"
)]
pub trait Place<A> {
    type Output;

    fn place(self, arg: A) -> Self::Output;
}

/// Resolves every slot, in field order, into the shape struct.
pub trait Finish {
    type Output;

    fn finish(self) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vacant_slot_resolves_to_default() {
        let value: Vec<i32> = Slot::<Vec<i32>>::resolve(Vacant);
        assert!(value.is_empty());
        assert!(!<Vacant as Slot<Vec<i32>>>::SUPPLIED);
    }

    #[test]
    fn filled_slot_moves_value_out() {
        let value = Slot::<String>::resolve(Filled(String::from("given")));
        assert_eq!(value, "given");
        assert!(<Filled<String> as Slot<String>>::SUPPLIED);
    }
}
