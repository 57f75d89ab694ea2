use std::any::Any;
use std::f64::consts::PI;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Closed set of shapes sharing the "has an area" capability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Rectangle { width, height } => width * height,
        }
    }

    /// Variant tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "Circle",
            Shape::Rectangle { .. } => "Rectangle",
        }
    }

    /// Attribute values in declaration order.
    pub fn attributes(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Shape::Circle { radius } => vec![("radius", radius)],
            Shape::Rectangle { width, height } => vec![("width", width), ("height", height)],
        }
    }
}

/// `Type: Circle, Value: {5}`
impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self
            .attributes()
            .iter()
            .map(|(_, value)| value.to_string())
            .collect();
        write!(f, "Type: {}, Value: {{{}}}", self.type_name(), values.join(" "))
    }
}

/// A float that can be handed out as an untyped value and recovered by a
/// checked downcast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Value(pub f64);

impl Value {
    pub fn into_any(self) -> Box<dyn Any> {
        Box::new(self.0)
    }
}

/// Recover a concrete `T` from an untyped value, handing the box back on mismatch.
pub fn downcast<T: Any>(value: Box<dyn Any>) -> Result<T, Box<dyn Any>> {
    value.downcast::<T>().map(|boxed| *boxed)
}
