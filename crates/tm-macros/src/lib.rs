//! Derive support for `tm-core` field shapes.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod shape;

/// Derives `FieldShape` and `DynamicShape` for a struct with named fields.
///
/// For `struct Foo<T> { a: A, b: B<T> }` this generates `FooArgs<T, S0, S1>`,
/// whose slot parameters start out `Vacant`, a `Place<A>` / `Place<B<T>>`
/// impl that only exists while the matching slot is vacant, and a `Finish`
/// impl that resolves the slots back into `Foo<T>` in field order.
///
/// Field types must be pairwise distinct and implement `Default`, since an
/// omitted argument falls back to it. Lifetime and const parameters are not
/// supported.
#[proc_macro_derive(FieldShape)]
pub fn derive_field_shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    shape::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
