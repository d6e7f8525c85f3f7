//! UI binding contract
//!
//! Renderers mark translatable elements with a [`Binding`]: a catalog key and
//! an optional attribute name. When the attribute is set the resolved string
//! goes into that attribute, otherwise it replaces the element's text.
//! Renderers that must react to language changes register a
//! [`LanguageObserver`] with the [`Localizer`].

use super::engine::Localizer;

/// Translation binding declared by an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: String,
    pub attr: Option<String>,
}

impl Binding {
    pub fn text(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            attr: None,
        }
    }

    pub fn attribute(key: impl Into<String>, attr: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            attr: Some(attr.into()),
        }
    }
}

/// An element that may carry a translation binding
pub trait Translatable {
    fn binding(&self) -> Option<Binding>;

    fn set_text(&mut self, text: String);

    fn set_attribute(&mut self, name: &str, value: String);
}

/// Notified after the active language is initialized or changed
pub trait LanguageObserver {
    fn on_language_changed(&self, localizer: &Localizer);
}

/// Apply resolved strings to every bound element, returning how many were updated
pub fn apply_bindings<T: Translatable>(localizer: &Localizer, elements: &mut [T]) -> usize {
    let mut updated = 0;

    for element in elements.iter_mut() {
        let Some(binding) = element.binding() else {
            continue;
        };

        let text = localizer.resolve(&binding.key, None);
        match &binding.attr {
            Some(attr) => element.set_attribute(attr, text),
            None => element.set_text(text),
        }
        updated += 1;
    }

    updated
}
