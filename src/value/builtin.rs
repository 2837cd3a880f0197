//! Ready-made structured values.
//!
//! Most callers implement [`Inspect`] for their own types; these cover the
//! common cases of an ad-hoc record, an in-memory result set, and a markup
//! element tree.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::InspectError;
use crate::value::inspect::{
    CallableDescriptor, Field, Inspect, MarkupNode, QueryResult, Visibility,
};
use crate::value::types::Value;

/// A named record with explicit fields and methods.
#[derive(Debug, Clone)]
pub struct Structure {
    type_name: String,
    fields: Vec<Field>,
    methods: Vec<CallableDescriptor>,
}

impl Structure {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn field(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_field(Field::public(name, value))
    }

    pub fn private_field(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_field(Field::new(name, Visibility::Private, value))
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: CallableDescriptor) -> Self {
        self.methods.push(method);
        self
    }
}

impl Inspect for Structure {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn fields(&self) -> Vec<Field> {
        self.fields.clone()
    }

    fn methods(&self) -> Vec<CallableDescriptor> {
        self.methods.clone()
    }
}

/// An in-memory result set with one-shot cursor semantics.
#[derive(Debug)]
pub struct ResultSet {
    query: String,
    columns: Vec<String>,
    rows: RefCell<VecDeque<Vec<Value>>>,
}

impl ResultSet {
    pub fn new<I, S>(query: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            query: query.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            rows: RefCell::new(VecDeque::new()),
        }
    }

    /// Appends a row; cells beyond the column count are dropped and missing
    /// ones are filled with `Null`.
    pub fn row<I, V>(self, cells: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut row: Vec<Value> = cells
            .into_iter()
            .take(self.columns.len())
            .map(Into::into)
            .collect();
        row.resize(self.columns.len(), Value::Null);
        self.rows.borrow_mut().push_back(row);
        self
    }

    pub fn remaining(&self) -> usize {
        self.rows.borrow().len()
    }
}

impl QueryResult for ResultSet {
    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column_name(&self, index: usize) -> Option<String> {
        self.columns.get(index).cloned()
    }

    fn fetch_all(&self) -> Result<Vec<Vec<(String, Value)>>, InspectError> {
        let drained: Vec<Vec<Value>> = self.rows.borrow_mut().drain(..).collect();
        Ok(drained
            .into_iter()
            .map(|row| self.columns.iter().cloned().zip(row).collect())
            .collect())
    }

    fn query_text(&self) -> String {
        self.query.clone()
    }
}

impl Inspect for ResultSet {
    fn type_name(&self) -> &str {
        "ResultSet"
    }

    fn as_query_result(&self) -> Option<&dyn QueryResult> {
        Some(self)
    }
}

/// An element of a parsed XML-like document.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    name: String,
    text: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }
}

impl MarkupNode for XmlElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn attributes(&self) -> Vec<(String, String)> {
        self.attributes.clone()
    }

    fn children(&self) -> Vec<&dyn MarkupNode> {
        self.children.iter().map(|c| c as &dyn MarkupNode).collect()
    }
}

impl Inspect for XmlElement {
    fn type_name(&self) -> &str {
        "XmlElement"
    }

    fn as_markup_node(&self) -> Option<&dyn MarkupNode> {
        Some(self)
    }
}
