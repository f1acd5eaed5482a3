// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory model backing for tests and hostless embedding.
//!
//! Stores instance and type attributes in plain maps behind the
//! [`ModelReader`]/[`ModelWriter`] traits. Writes require the attribute
//! to already be bound on the element, as in host models where room
//! parameters must exist before they can be set.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::model::{AttrValue, Category, ElementId, ModelReader, ModelWriter};

#[derive(Debug, Clone, Default)]
struct Record {
    attributes: FxHashMap<String, AttrValue>,
    type_attributes: FxHashMap<String, AttrValue>,
}

/// Reference [`ModelReader`]/[`ModelWriter`] implementation.
#[derive(Debug, Clone, Default)]
pub struct MemoryModel {
    records: Vec<Record>,
    rooms: Vec<ElementId>,
    elements: FxHashMap<Category, Vec<ElementId>>,
}

impl MemoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, record: Record) -> ElementId {
        let id = ElementId(self.records.len() as u32);
        self.records.push(record);
        id
    }

    fn record(&self, element: ElementId) -> Option<&Record> {
        self.records.get(element.0 as usize)
    }

    /// Adds a room with the given instance attributes.
    pub fn add_room(&mut self, attributes: Vec<(&str, AttrValue)>) -> ElementId {
        let record = Record {
            attributes: to_map(attributes),
            type_attributes: FxHashMap::default(),
        };
        let id = self.push(record);
        self.rooms.push(id);
        id
    }

    /// Adds an element of one category with instance and type attributes.
    pub fn add_element(
        &mut self,
        category: Category,
        attributes: Vec<(&str, AttrValue)>,
        type_attributes: Vec<(&str, AttrValue)>,
    ) -> ElementId {
        let record = Record {
            attributes: to_map(attributes),
            type_attributes: to_map(type_attributes),
        };
        let id = self.push(record);
        self.elements.entry(category).or_default().push(id);
        id
    }
}

fn to_map(pairs: Vec<(&str, AttrValue)>) -> FxHashMap<String, AttrValue> {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

impl ModelReader for MemoryModel {
    fn rooms(&self) -> Vec<ElementId> {
        self.rooms.clone()
    }

    fn elements(&self, category: Category) -> Vec<ElementId> {
        self.elements.get(&category).cloned().unwrap_or_default()
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<AttrValue> {
        self.record(element)?.attributes.get(name).cloned()
    }

    fn type_attribute(&self, element: ElementId, name: &str) -> Option<AttrValue> {
        self.record(element)?.type_attributes.get(name).cloned()
    }
}

impl ModelWriter for MemoryModel {
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) -> Result<()> {
        let record = self
            .records
            .get_mut(element.0 as usize)
            .ok_or(Error::ElementNotFound(element))?;
        match record.attributes.get_mut(name) {
            Some(slot) => {
                *slot = AttrValue::Text(value.to_string());
                Ok(())
            }
            None => Err(Error::AttributeNotFound {
                element,
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooms_and_elements_are_listed_separately() {
        let mut model = MemoryModel::new();
        let room = model.add_room(vec![("Room Number", "101".into())]);
        let floor = model.add_element(Category::Floor, vec![], vec![]);

        assert_eq!(model.rooms(), vec![room]);
        assert_eq!(model.elements(Category::Floor), vec![floor]);
        assert!(model.elements(Category::Wall).is_empty());
    }

    #[test]
    fn instance_and_type_attributes_are_distinct() {
        let mut model = MemoryModel::new();
        let element = model.add_element(
            Category::Wall,
            vec![("Area", 2.0.into())],
            vec![("Mark", "W1".into())],
        );

        assert_eq!(model.attribute(element, "Area"), Some(AttrValue::Number(2.0)));
        assert_eq!(model.attribute(element, "Mark"), None);
        assert_eq!(
            model.type_attribute(element, "Mark"),
            Some(AttrValue::Text("W1".to_string()))
        );
    }

    #[test]
    fn writes_require_a_bound_attribute() {
        let mut model = MemoryModel::new();
        let room = model.add_room(vec![("Floor Finishes", "".into())]);

        model.set_attribute(room, "Floor Finishes", "F1.\n").unwrap();
        assert_eq!(
            model.attribute(room, "Floor Finishes"),
            Some(AttrValue::Text("F1.\n".to_string()))
        );

        let err = model.set_attribute(room, "Missing", "x").unwrap_err();
        assert!(matches!(err, Error::AttributeNotFound { .. }));

        let err = model.set_attribute(ElementId(99), "Floor Finishes", "x").unwrap_err();
        assert!(matches!(err, Error::ElementNotFound(_)));
    }
}
