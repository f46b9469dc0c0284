/// Builds a field shape from any subset of its field values, in any order.
///
/// `construct!(Shape; a, b)` places each argument into the slot of its type
/// and resolves the rest from `Default`. With no arguments every field is
/// defaulted: `construct!(Shape)`.
#[macro_export]
macro_rules! construct {
    ($shape:ty $(; $($arg:expr),* $(,)?)?) => {{
        let args = <$shape as $crate::FieldShape>::args();
        $($(let args = $crate::Place::place(args, $arg);)*)?
        $crate::Finish::finish(args)
    }};
}

/// Like [`construct!`] but hands the resolved shape to `FromFields`.
///
/// `construct_into!(Target, Shape; a, b)`
#[macro_export]
macro_rules! construct_into {
    ($target:ty, $shape:ty $(; $($arg:expr),* $(,)?)?) => {
        $crate::build::<$target, $shape>($crate::construct!($shape $(; $($arg),*)?))
    };
}
