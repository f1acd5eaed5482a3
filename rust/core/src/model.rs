// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model-facing traits and attribute values.
//!
//! The engine reads raw elements through [`ModelReader`] and writes room
//! reports through [`ModelWriter`]. Hosts adapt their element storage
//! behind these two traits; [`MemoryModel`](crate::memory::MemoryModel)
//! is the in-memory reference implementation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Opaque handle to an element owned by the host model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Finish categories: a partition of model elements by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Floor,
    Wall,
    Ceiling,
}

impl Category {
    /// All categories, in pipeline order.
    pub const ALL: [Category; 3] = [Category::Floor, Category::Wall, Category::Ceiling];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Floor => "floor",
            Category::Wall => "wall",
            Category::Ceiling => "ceiling",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute value as stored by the host model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
}

impl AttrValue {
    /// Get as text
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as number
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Consume into text
    #[inline]
    pub fn into_text(self) -> Option<String> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

/// Read access to the host model.
///
/// The engine never mutates the model through this trait. Attribute
/// lookups return `None` for absent attributes rather than failing;
/// the extractor's default policy takes over from there.
pub trait ModelReader {
    /// All rooms in the model.
    fn rooms(&self) -> Vec<ElementId>;

    /// All elements of one category, before classification.
    fn elements(&self, category: Category) -> Vec<ElementId>;

    /// Instance-level attribute of an element.
    fn attribute(&self, element: ElementId, name: &str) -> Option<AttrValue>;

    /// Type-level attribute, read from the element's type.
    fn type_attribute(&self, element: ElementId, name: &str) -> Option<AttrValue>;
}

/// Write access to the host model.
///
/// The caller is responsible for wrapping all writes of one recompute in
/// an atomic transaction: start before invoking the pipeline, commit
/// after it returns, roll back on any error.
pub trait ModelWriter {
    /// Sets a string attribute on an element.
    ///
    /// Fails if the element is unknown or the attribute is not bound on
    /// it; the pipeline treats either as fatal for the whole recompute.
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) -> Result<()>;
}
