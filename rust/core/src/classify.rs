// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element classification by type-level grouping label.

use crate::extract::ElementSchema;
use crate::model::{Category, ElementId, ModelReader};

/// Returns the elements of `category` whose type-level grouping label
/// contains `keyword` as a substring.
///
/// Matching is case-sensitive against the model's native text. Elements
/// whose type has no grouping label, or whose label does not match, are
/// excluded. Absence of any match yields an empty result, not an error.
pub fn classify(
    model: &impl ModelReader,
    category: Category,
    keyword: &str,
    schema: &ElementSchema,
) -> Vec<ElementId> {
    model
        .elements(category)
        .into_iter()
        .filter(|&element| {
            model
                .type_attribute(element, &schema.model_group)
                .and_then(|v| v.into_text())
                .map_or(false, |label| label.contains(keyword))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryModel;

    fn labeled(model: &mut MemoryModel, category: Category, label: &str) -> ElementId {
        model.add_element(category, vec![], vec![("Model Group", label.into())])
    }

    #[test]
    fn selects_elements_whose_label_contains_the_keyword() {
        let mut model = MemoryModel::new();
        let schema = ElementSchema::default();

        let tile = labeled(&mut model, Category::Floor, "Interior Floor Finish");
        let screed = labeled(&mut model, Category::Floor, "Floor Finish, wet rooms");
        let slab = labeled(&mut model, Category::Floor, "Structural Slab");

        let selected = classify(&model, Category::Floor, "Floor Finish", &schema);
        assert_eq!(selected, vec![tile, screed]);
        assert!(!selected.contains(&slab));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let mut model = MemoryModel::new();
        let schema = ElementSchema::default();

        labeled(&mut model, Category::Wall, "wall finish");
        let selected = classify(&model, Category::Wall, "Wall Finish", &schema);
        assert!(selected.is_empty());
    }

    #[test]
    fn elements_without_a_grouping_label_are_excluded() {
        let mut model = MemoryModel::new();
        let schema = ElementSchema::default();

        model.add_element(Category::Ceiling, vec![], vec![]);
        let matched = labeled(&mut model, Category::Ceiling, "Ceiling Finish");

        let selected = classify(&model, Category::Ceiling, "Ceiling Finish", &schema);
        assert_eq!(selected, vec![matched]);
    }

    #[test]
    fn other_categories_are_not_consulted() {
        let mut model = MemoryModel::new();
        let schema = ElementSchema::default();

        labeled(&mut model, Category::Wall, "Floor Finish");
        let selected = classify(&model, Category::Floor, "Floor Finish", &schema);
        assert!(selected.is_empty());
    }
}
