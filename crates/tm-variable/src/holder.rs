use std::any::Any;
use std::fmt;
use std::ops::Deref;

/// Anything that can dump itself as one line of the variable listing.
pub trait Printable: Any + fmt::Debug {
    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    fn as_any(&self) -> &dyn Any;
}

/// Element type a holder can store.
pub trait Element: fmt::Display + fmt::Debug + 'static {}
impl<T: fmt::Display + fmt::Debug + 'static> Element for T {}

#[derive(Debug, PartialEq)]
pub struct Holder<T> {
    array: Vec<T>,
}

impl<T> Holder<T> {
    pub fn new(array: Vec<T>) -> Self {
        Self { array }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.array
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.array
    }
}

impl<T> Default for Holder<T> {
    fn default() -> Self {
        Self { array: Vec::new() }
    }
}

impl<T: Element> Printable for Holder<T> {
    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str("Holder: [ ")?;
        for element in &self.array {
            write!(out, "{}, ", element)?;
        }
        out.write_str(" ]\n")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// Values and Variances are distinct types over the same storage, so they can
// sit side by side in one field shape. Neither is Clone.
macro_rules! holder_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, PartialEq)]
        pub struct $name<T>(Holder<T>);

        impl<T> $name<T> {
            pub fn new(data: Vec<T>) -> Self {
                Self(Holder::new(data))
            }

            pub fn into_vec(self) -> Vec<T> {
                self.0.into_vec()
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self(Holder::default())
            }
        }

        impl<T> From<Vec<T>> for $name<T> {
            fn from(data: Vec<T>) -> Self {
                Self::new(data)
            }
        }

        impl<T> Deref for $name<T> {
            type Target = Holder<T>;

            fn deref(&self) -> &Holder<T> {
                &self.0
            }
        }

        impl<T: Element> Printable for $name<T> {
            fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
                self.0.print(out)
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }
    };
}

holder_wrapper! {
    /// Measured values.
    Values
}

holder_wrapper! {
    /// Per-value variances. An empty set means "no variances".
    Variances
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(item: &dyn Printable) -> String {
        let mut out = String::new();
        item.print(&mut out).unwrap();
        out
    }

    #[test]
    fn holder_line_format() {
        assert_eq!(render(&Values::new(vec![1.0f64, 4.0, 5.0])), "Holder: [ 1, 4, 5,  ]\n");
        assert_eq!(render(&Variances::new(vec![0.5f32])), "Holder: [ 0.5,  ]\n");
        assert_eq!(render(&Values::<f64>::default()), "Holder: [  ]\n");
    }

    #[test]
    fn wrappers_share_storage_behaviour() {
        let variances = Variances::from(vec![6, 7, 8]);
        assert_eq!(variances.len(), 3);
        assert_eq!(variances.as_slice(), &[6, 7, 8]);
        assert!(Values::<i32>::default().is_empty());
        assert_eq!(variances.into_vec(), vec![6, 7, 8]);
    }

    #[test]
    fn printable_downcasts_to_concrete_holder() {
        let boxed: Box<dyn Printable> = Box::new(Values::new(vec![2.5f64]));
        let values = boxed.as_any().downcast_ref::<Values<f64>>().unwrap();
        assert_eq!(values.as_slice(), &[2.5]);
        assert!(boxed.as_any().downcast_ref::<Variances<f64>>().is_none());
    }
}
