use crate::holder::Printable;
use std::any::Any;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unit(pub i32);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shape(pub Vec<i32>);

impl Shape {
    pub fn new(dims: Vec<i32>) -> Self {
        Self(dims)
    }
}

impl From<Vec<i32>> for Shape {
    fn from(dims: Vec<i32>) -> Self {
        Self(dims)
    }
}

pub(crate) fn print_dims(out: &mut dyn fmt::Write, dims: &[i32]) -> fmt::Result {
    out.write_str("Shape: [")?;
    for dim in dims {
        write!(out, "{}, ", dim)?;
    }
    out.write_str(" ]\n")
}

impl Printable for Unit {
    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "Unit: {}", self.0)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Printable for Shape {
    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        print_dims(out, &self.0)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
