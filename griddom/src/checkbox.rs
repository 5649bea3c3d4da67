//! Checkbox widget - a tri-state checkbox indicator.

use crate::element::Element;
use crate::types::{Style, Theme};

/// A checkbox widget builder.
///
/// Builds a checkbox-content element; the caller wires activation by
/// routing click/key events on the element id (the grid does this through
/// its data attributes). Disabled checkboxes take no focus and no clicks.
#[derive(Clone, Debug, Default)]
pub struct Checkbox {
    id: Option<String>,
    checked: bool,
    indeterminate: bool,
    disabled: bool,
    focused: bool,
    style: Option<Style>,
    style_focused: Option<Style>,
    style_disabled: Option<Style>,
    data: Vec<(String, String)>,
}

impl Checkbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the checkbox id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Tri-state "some but not all" visual.
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set the indicator style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the style when focused.
    pub fn style_focused(mut self, style: Style) -> Self {
        self.style_focused = Some(style);
        self
    }

    /// Set the style when disabled.
    pub fn style_disabled(mut self, style: Style) -> Self {
        self.style_disabled = Some(style);
        self
    }

    /// Attach a custom data entry for event routing.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }

    /// Build the checkbox element.
    pub fn build(self, theme: &Theme) -> Element {
        let mut elem = Element::checkbox(self.checked)
            .indeterminate(self.indeterminate)
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .disabled(self.disabled)
            .focused(self.focused && !self.disabled);

        if let Some(id) = &self.id {
            elem = elem.id(id);
        }

        elem = elem
            .style(
                self.style
                    .unwrap_or_else(|| Style::new().foreground(theme.foreground)),
            )
            .style_focused(
                self.style_focused
                    .unwrap_or_else(|| Style::new().foreground(theme.accent).bold()),
            )
            .style_disabled(
                self.style_disabled
                    .unwrap_or_else(|| Style::new().foreground(theme.muted).dim()),
            );

        for (key, value) in self.data {
            elem = elem.data(key, value);
        }

        elem
    }
}
