use std::any::{type_name, Any, TypeId};
use std::fmt::Debug;

pub trait Argument: Any + Debug {}
impl<T: Any + Debug> Argument for T {}

#[derive(Clone, Copy)]
pub struct ArgBoxVTable {
    pub type_id: TypeId,
    pub type_name: &'static str,
    pub debug: fn(&dyn Any) -> String,
}

impl ArgBoxVTable {
    pub fn new<T: Argument>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            debug: |v| {
                v.downcast_ref::<T>()
                    .map(|v| format!("{:?}", v))
                    .unwrap_or_default()
            },
        }
    }
}

/// A type-erased argument that remembers which type it was built from.
pub struct ArgBox {
    value: Box<dyn Any>,
    vtable: ArgBoxVTable,
}

impl ArgBox {
    pub fn new<T: Argument>(t: T) -> Self {
        Self {
            value: Box::new(t),
            vtable: ArgBoxVTable::new::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.vtable.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.vtable.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.vtable.type_id == TypeId::of::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }

    /// Moves the value out, or hands the box back when `T` is the wrong type.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let ArgBox { value, vtable } = self;
        match value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(ArgBox { value, vtable }),
        }
    }
}

impl Debug for ArgBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((self.vtable.debug)(self.value.as_ref()).as_str())
    }
}
