use std::fmt::Display;

/// A menu category as shown on the category buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Coffee,
    Decaf,
    Beverage,
    Tea,
    AdeJuice,
    SmoothieFrappe,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Coffee,
        Category::Decaf,
        Category::Beverage,
        Category::Tea,
        Category::AdeJuice,
        Category::SmoothieFrappe,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Coffee => "커피",
            Category::Decaf => "디카페인",
            Category::Beverage => "음료",
            Category::Tea => "티",
            Category::AdeJuice => "에이드&주스",
            Category::SmoothieFrappe => "스무디&프라페",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Category filter for the menu list; `All` is the "전체" button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "전체";

    /// Every button label in display order, "전체" first.
    pub fn labels() -> Vec<&'static str> {
        std::iter::once(Self::ALL_LABEL)
            .chain(Category::ALL.iter().map(|c| c.label()))
            .collect()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if label == Self::ALL_LABEL {
            return Some(CategoryFilter::All);
        }
        Category::from_label(label).map(CategoryFilter::Only)
    }

    pub fn admits(self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == category,
        }
    }
}

/// One entry of the menu catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuItem {
    pub name: String,
    pub category: Category,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    /// See [`crate::menu::is_ice_only`].
    pub fn is_ice_only(&self) -> bool {
        crate::menu::is_ice_only(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        let labels = CategoryFilter::labels();
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[0], "전체");
        for label in labels {
            assert!(CategoryFilter::from_label(label).is_some(), "{label}");
        }
        assert_eq!(CategoryFilter::from_label("디저트"), None);
    }

    #[test]
    fn test_filter_admits_matching_category() {
        let tea = MenuItem::new("유자차", Category::Tea);
        assert!(CategoryFilter::All.admits(&tea));
        assert!(CategoryFilter::Only(Category::Tea).admits(&tea));
        assert!(!CategoryFilter::Only(Category::Coffee).admits(&tea));
    }
}
