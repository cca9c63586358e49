use crate::model::{DrinkSelection, MenuItem, Temperature};

/// How clicking a menu item affects the draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// Picking an item replaces whatever was picked before.
    #[default]
    Single,
    /// Items are toggled like checkboxes and accumulate.
    Multi,
}

/// The order being put together on the ordering page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    customer_name: String,
    mode: SelectionMode,
    selections: Vec<DrinkSelection>,
}

impl OrderDraft {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Switching mode discards the current selection.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        if self.mode != mode {
            self.mode = mode;
            self.selections.clear();
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    /// Picks an item. In single mode this replaces the previous pick; in multi
    /// mode an item already picked stays picked.
    ///
    /// Items are matched by name and category, so a drink listed under two
    /// categories is two separate entries.
    pub fn select(&mut self, item: MenuItem) {
        match self.mode {
            SelectionMode::Single => {
                self.selections = vec![DrinkSelection::new(item)];
            }
            SelectionMode::Multi => {
                if !self.is_selected(&item) {
                    self.selections.push(DrinkSelection::new(item));
                }
            }
        }
    }

    pub fn deselect(&mut self, item: &MenuItem) {
        self.selections.retain(|s| s.item != *item);
    }

    /// Checkbox semantics: selects when absent, deselects when present.
    pub fn toggle(&mut self, item: MenuItem) {
        if self.is_selected(&item) {
            self.deselect(&item);
        } else {
            self.select(item);
        }
    }

    /// Sets the temperature of a picked drink. HOT on an ice-only drink is
    /// ignored. Returns false when the drink is not picked.
    pub fn set_temperature(&mut self, item: &MenuItem, temperature: Temperature) -> bool {
        match self.selections.iter_mut().find(|s| s.item == *item) {
            Some(selection) => {
                selection.choose(temperature);
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, item: &MenuItem) -> bool {
        self.selections.iter().any(|s| s.item == *item)
    }

    pub fn selections(&self) -> &[DrinkSelection] {
        &self.selections
    }

    /// Empties the selection after a successful submit. The name is kept.
    pub fn clear(&mut self) {
        self.selections.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn item(name: &str) -> MenuItem {
        MenuItem::new(name, Category::Coffee)
    }

    #[test]
    fn test_single_mode_replaces() {
        let mut draft = OrderDraft::new(SelectionMode::Single);
        draft.select(item("아메리카노"));
        draft.select(item("카페라떼"));

        assert_eq!(draft.selections().len(), 1);
        assert!(draft.is_selected(&item("카페라떼")));
    }

    #[test]
    fn test_multi_mode_accumulates() {
        let mut draft = OrderDraft::new(SelectionMode::Multi);
        draft.toggle(item("아메리카노"));
        draft.toggle(item("카페라떼"));
        draft.toggle(item("카페모카"));
        draft.toggle(item("카페라떼"));

        let names: Vec<_> = draft.selections().iter().map(|s| s.item.name.as_str()).collect();
        assert_eq!(names, vec!["아메리카노", "카페모카"]);
    }

    #[test]
    fn test_mode_switch_clears_selection() {
        let mut draft = OrderDraft::new(SelectionMode::Multi);
        draft.select(item("아메리카노"));
        draft.set_customer_name("김주형");

        draft.set_mode(SelectionMode::Single);
        assert!(draft.selections().is_empty());
        assert_eq!(draft.customer_name(), "김주형");
    }

    #[test]
    fn test_hot_on_ice_only_is_noop() {
        let mut draft = OrderDraft::new(SelectionMode::Single);
        let smoothie = MenuItem::new("망고요거트스무디", Category::SmoothieFrappe);
        draft.select(smoothie.clone());

        assert!(draft.set_temperature(&smoothie, Temperature::Hot));
        assert_eq!(draft.selections()[0].temperature, None);
        assert!(!draft.set_temperature(&item("없는메뉴"), Temperature::Hot));
    }

    #[test]
    fn test_same_name_in_two_categories_are_separate_entries() {
        let soda = MenuItem::new("체리콕", Category::Beverage);
        let ade = MenuItem::new("체리콕", Category::AdeJuice);

        let mut draft = OrderDraft::new(SelectionMode::Multi);
        draft.toggle(soda.clone());
        draft.toggle(ade.clone());
        assert_eq!(draft.selections().len(), 2);

        // Only the 음료 listing can be served hot.
        assert!(draft.set_temperature(&soda, Temperature::Hot));
        assert!(draft.set_temperature(&ade, Temperature::Hot));
        let rendered: Vec<String> = draft
            .selections()
            .iter()
            .map(|s| s.resolve().to_string())
            .collect();
        assert_eq!(rendered, vec!["체리콕 (HOT)", "체리콕 (ICE)"]);

        draft.toggle(soda.clone());
        assert!(!draft.is_selected(&soda));
        assert!(draft.is_selected(&ade));
    }
}
