use serde::Serialize;

/// A single `@tag` line of a doc-comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocTag {
    pub name: String,
    /// Declared type for typed tags (`@param`, `@return`, ...), empty otherwise.
    #[serde(rename = "type")]
    pub ty: String,
    /// `$name` of a `@param`, `@var` or `@property` tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    pub description: String,
}

/// Parsed doc-comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocBlock {
    pub short_description: String,
    pub long_description: String,
    pub tags: Vec<DocTag>,
}

impl DocBlock {
    /// First tag called `name`.
    pub fn tag(&self, name: &str) -> Option<&DocTag> {
        self.tags.iter().find(|tag| tag.name == name)
    }

    pub fn tags_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DocTag> + 'a {
        self.tags.iter().filter(move |tag| tag.name == name)
    }

    /// Declared type of the `@return` tag.
    pub fn return_type(&self) -> Option<&str> {
        self.tag("return").map(|tag| tag.ty.as_str())
    }
}
