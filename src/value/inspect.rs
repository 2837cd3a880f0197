use crate::error::InspectError;
use crate::value::types::Value;

/// Capability implemented by structured values that want to be dumped.
///
/// Rust has no runtime reflection, so a type describes itself: its name,
/// every field regardless of visibility, and its methods. Access through this
/// trait is read-only.
///
/// Two well-known shapes get dedicated layouts: a type that exposes
/// [`QueryResult`] is shown as a result grid, and one that exposes
/// [`MarkupNode`] is shown as a document tree. Everything else is shown
/// through [`Inspect::fields`] and [`Inspect::methods`].
pub trait Inspect {
    fn type_name(&self) -> &str;

    fn fields(&self) -> Vec<Field> {
        Vec::new()
    }

    fn methods(&self) -> Vec<CallableDescriptor> {
        Vec::new()
    }

    fn as_query_result(&self) -> Option<&dyn QueryResult> {
        None
    }

    fn as_markup_node(&self) -> Option<&dyn MarkupNode> {
        None
    }
}

/// A forward-only database result cursor.
pub trait QueryResult {
    fn column_count(&self) -> usize;

    /// Column name at `index`, if the driver knows it.
    fn column_name(&self, index: usize) -> Option<String>;

    /// Fetches every remaining row as ordered `column -> value` pairs.
    ///
    /// This consumes the cursor: a second call returns no rows.
    fn fetch_all(&self) -> Result<Vec<Vec<(String, Value)>>, InspectError>;

    fn query_text(&self) -> String;
}

/// A node of a parsed markup document.
pub trait MarkupNode {
    fn name(&self) -> &str;

    fn text(&self) -> String;

    fn attributes(&self) -> Vec<(String, String)>;

    fn children(&self) -> Vec<&dyn MarkupNode>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub visibility: Visibility,
    /// Current value, or the fault raised while reading it.
    pub value: Result<Value, InspectError>,
}

impl Field {
    pub fn new(name: impl Into<String>, visibility: Visibility, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            visibility,
            value: Ok(value.into()),
        }
    }

    pub fn public(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(name, Visibility::Public, value)
    }

    pub fn protected(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(name, Visibility::Protected, value)
    }

    pub fn private(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(name, Visibility::Private, value)
    }

    pub fn faulted(name: impl Into<String>, visibility: Visibility, error: InspectError) -> Self {
        Self {
            name: name.into(),
            visibility,
            value: Err(error),
        }
    }
}

/// Where a method's implementation comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodOrigin {
    /// Implemented by the inspected type itself.
    Declared,
    /// Universal behavior inherited unchanged from a base.
    Inherited,
}

#[derive(Debug, Clone)]
pub enum ParamDefault {
    Value(Value),
    /// The default cannot be determined statically.
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub optional: bool,
    pub default: ParamDefault,
}

impl Parameter {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
            default: ParamDefault::Unavailable,
        }
    }

    pub fn optional(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            optional: true,
            default: ParamDefault::Value(default.into()),
        }
    }
}

/// Metadata describing one callable.
#[derive(Debug, Clone)]
pub struct CallableDescriptor {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub is_static: bool,
    pub doc_comment: Option<String>,
    pub origin: MethodOrigin,
}

impl CallableDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            is_static: false,
            doc_comment: None,
            origin: MethodOrigin::Declared,
        }
    }

    pub fn param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_doc(mut self, doc_comment: impl Into<String>) -> Self {
        self.doc_comment = Some(doc_comment.into());
        self
    }

    pub fn inherited(mut self) -> Self {
        self.origin = MethodOrigin::Inherited;
        self
    }

    pub fn is_declared(&self) -> bool {
        self.origin == MethodOrigin::Declared
    }
}
