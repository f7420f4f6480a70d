// src/filter.rs
//! The visibility filter: a pure predicate layer over the entity model.
//!
//! Kind toggles are independent of each other and of the search term.
//! Hiding methods never hides the owning class; hiding relationships never
//! hides `contains`/`inherits` edges (those come from entity structure, not
//! relationship records).

use crate::model::{ClassEntity, FunctionEntity};

/// Current visibility flags plus the free-text search term.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFilter {
    pub show_functions: bool,
    pub show_classes: bool,
    pub show_methods: bool,
    pub show_relationships: bool,
    pub search: String,
}

impl Default for ViewFilter {
    fn default() -> Self {
        Self {
            show_functions: true,
            show_classes: true,
            show_methods: true,
            show_relationships: true,
            search: String::new(),
        }
    }
}

impl ViewFilter {
    /// A name matches iff the search term is empty or is contained in the
    /// name, compared case-insensitively.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        if self.search.is_empty() {
            return true;
        }
        name.to_lowercase().contains(&self.search.to_lowercase())
    }

    #[must_use]
    pub fn admits_function(&self, function: &FunctionEntity) -> bool {
        self.show_functions && self.matches_name(&function.name)
    }

    #[must_use]
    pub fn admits_class(&self, class: &ClassEntity) -> bool {
        self.show_classes && self.matches_name(&class.name)
    }

    /// Methods are only reachable through a visible class; the class check
    /// lives in the builder loop, this predicate covers the method itself.
    #[must_use]
    pub fn admits_method(&self, method: &FunctionEntity) -> bool {
        self.show_methods && self.matches_name(&method.name)
    }
}
