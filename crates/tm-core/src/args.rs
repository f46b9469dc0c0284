use crate::argbox::{ArgBox, Argument};
use std::any::{Any, TypeId};

/// Unordered arguments collected at runtime.
///
/// Insertion order is kept only so errors can point at an argument's
/// position; resolution never depends on it.
#[derive(Debug, Default)]
pub struct ArgSet {
    args: Vec<ArgBox>,
}

impl ArgSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<T: Argument>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    pub fn push<T: Argument>(&mut self, value: T) {
        self.args.push(ArgBox::new(value));
    }

    pub fn push_boxed(&mut self, arg: ArgBox) {
        self.args.push(arg);
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArgBox> {
        self.args.iter()
    }

    pub fn type_ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.args.iter().map(ArgBox::type_id)
    }

    /// Removes and returns the first argument of type `T`.
    pub fn take<T: Any>(&mut self) -> Option<T> {
        let index = self.args.iter().position(ArgBox::is::<T>)?;
        self.args.remove(index).downcast::<T>().ok()
    }
}

impl FromIterator<ArgBox> for ArgSet {
    fn from_iter<I: IntoIterator<Item = ArgBox>>(iter: I) -> Self {
        Self {
            args: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ArgSet {
    type Item = &'a ArgBox;
    type IntoIter = std::slice::Iter<'a, ArgBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_moves_matching_argument_out() {
        let mut args = ArgSet::new().with(3u8).with(String::from("label"));
        assert_eq!(args.len(), 2);
        assert_eq!(args.take::<String>().as_deref(), Some("label"));
        assert_eq!(args.len(), 1);
        assert_eq!(args.take::<String>(), None);
        assert_eq!(args.take::<u8>(), Some(3));
        assert!(args.is_empty());
    }

    #[test]
    fn collects_from_boxed_arguments() {
        let args: ArgSet = vec![ArgBox::new(1i64), ArgBox::new(2.5f32)]
            .into_iter()
            .collect();
        let ids: Vec<_> = args.type_ids().collect();
        assert_eq!(ids, vec![TypeId::of::<i64>(), TypeId::of::<f32>()]);
    }
}
