use crate::value::{Inspect, Key, Resource, Value};

/// Closed classification of a value's runtime shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeCategory {
    Boolean,
    Null,
    IndexedSequence,
    KeyedMapping,
    StructuredValue,
    OpaqueHandle,
    Scalar,
}

/// How a structured value gets laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuredStrategy {
    QueryResultHandle,
    MarkupTreeNode,
    GenericStructured,
}

/// Scalar payloads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Int(i64),
    Float(f64),
    Str(&'a str),
}

/// A value viewed through its shape category, borrowing the payload the
/// category's renderer needs.
pub enum Shape<'a> {
    Boolean(bool),
    Null,
    IndexedSequence(&'a [(Key, Value)]),
    KeyedMapping(&'a [(Key, Value)]),
    Structured(&'a dyn Inspect),
    OpaqueHandle(&'a Resource),
    Scalar(Scalar<'a>),
}

impl<'a> Shape<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Bool(b) => Shape::Boolean(*b),
            Value::Null => Shape::Null,
            Value::Container(entries) if is_indexed(entries) => Shape::IndexedSequence(entries),
            Value::Container(entries) => Shape::KeyedMapping(entries),
            Value::Object(object) => Shape::Structured(&**object),
            Value::Handle(resource) => Shape::OpaqueHandle(resource),
            Value::Int(i) => Shape::Scalar(Scalar::Int(*i)),
            Value::Float(x) => Shape::Scalar(Scalar::Float(*x)),
            Value::Str(s) => Shape::Scalar(Scalar::Str(s)),
        }
    }

    pub fn category(&self) -> ShapeCategory {
        match self {
            Shape::Boolean(_) => ShapeCategory::Boolean,
            Shape::Null => ShapeCategory::Null,
            Shape::IndexedSequence(_) => ShapeCategory::IndexedSequence,
            Shape::KeyedMapping(_) => ShapeCategory::KeyedMapping,
            Shape::Structured(_) => ShapeCategory::StructuredValue,
            Shape::OpaqueHandle(_) => ShapeCategory::OpaqueHandle,
            Shape::Scalar(_) => ShapeCategory::Scalar,
        }
    }
}

pub fn classify(value: &Value) -> ShapeCategory {
    Shape::of(value).category()
}

/// True when the keys are exactly `0, 1, 2, ...` in order. Empty counts.
pub fn is_indexed(entries: &[(Key, Value)]) -> bool {
    entries
        .iter()
        .enumerate()
        .all(|(position, (key, _))| matches!(key, Key::Index(i) if *i == position as i64))
}

pub fn select_strategy(object: &dyn Inspect) -> StructuredStrategy {
    if object.as_query_result().is_some() {
        StructuredStrategy::QueryResultHandle
    } else if object.as_markup_node().is_some() {
        StructuredStrategy::MarkupTreeNode
    } else {
        StructuredStrategy::GenericStructured
    }
}
