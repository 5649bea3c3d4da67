use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use crate::element::Element;

/// A record of caller-supplied tabular data.
///
/// Fields are looked up by name so column accessors stay data-driven; the
/// grid never copies or mutates a record. A lookup miss is not an error:
/// the grid renders a placeholder for it.
pub trait Record {
    /// The value of the named field, if the record has one.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl Record for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|value| Cow::Borrowed(value.as_str()))
    }
}

/// Describes how to label and render one field of each row.
///
/// Rendering is a capability, not a subclass: a column either reads its
/// `accessor` field as text or delegates to an injected render function.
pub struct Column<T> {
    /// Unique among the grid's columns.
    pub id: String,
    /// Header text.
    pub label: String,
    /// Field name read from the row when no custom renderer is set.
    pub accessor: String,
    /// Optional renderer replacing the accessor's text cell.
    pub custom_render: Option<Box<dyn Fn(&T) -> Element>>,
}

impl<T> Column<T> {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        accessor: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            accessor: accessor.into(),
            custom_render: None,
        }
    }

    /// Replace the accessor text cell with a custom renderer.
    pub fn render_with(mut self, render: impl Fn(&T) -> Element + 'static) -> Self {
        self.custom_render = Some(Box::new(render));
        self
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("accessor", &self.accessor)
            .field("custom_render", &self.custom_render.is_some())
            .finish()
    }
}
