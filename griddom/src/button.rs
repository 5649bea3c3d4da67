//! Button widget - a disableable trigger control.

use crate::element::Element;
use crate::event::{Event, Key, MouseButton};
use crate::types::{Edges, Size, Style, Theme};

/// A button widget builder.
///
/// The control carries no logic of its own: it renders a label, takes
/// focus and clicks while enabled, and the caller observes activation
/// through [`Button::activated`].
#[derive(Clone, Debug, Default)]
pub struct Button {
    id: Option<String>,
    label: String,
    disabled: bool,
    focused: bool,
    style: Option<Style>,
    style_focused: Option<Style>,
    style_disabled: Option<Style>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Set the button id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
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

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn style_focused(mut self, style: Style) -> Self {
        self.style_focused = Some(style);
        self
    }

    pub fn style_disabled(mut self, style: Style) -> Self {
        self.style_disabled = Some(style);
        self
    }

    /// Build the button element.
    pub fn build(self, theme: &Theme) -> Element {
        let mut elem = Element::text(self.label)
            .height(Size::Fixed(1))
            .padding(Edges::horizontal(1))
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .disabled(self.disabled)
            .focused(self.focused && !self.disabled);

        if let Some(id) = &self.id {
            elem = elem.id(id);
        }

        elem
            .style(self.style.unwrap_or_else(|| {
                Style::new()
                    .background(theme.border)
                    .foreground(theme.foreground)
            }))
            .style_focused(self.style_focused.unwrap_or_else(|| {
                Style::new()
                    .background(theme.accent)
                    .foreground(theme.background)
                    .bold()
            }))
            .style_disabled(
                self.style_disabled
                    .unwrap_or_else(|| Style::new().foreground(theme.muted).dim()),
            )
    }

    /// Whether the given events activate the button: a left click or an
    /// Enter/Space press targeting its id. Disabled buttons never hit-test
    /// or take focus, so they can't be activated through the event flow.
    pub fn activated(events: &[Event], id: &str) -> bool {
        events.iter().any(|event| match event {
            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
                ..
            } => target == id,
            Event::Key {
                target: Some(target),
                key: Key::Enter | Key::Char(' '),
                modifiers,
            } => modifiers.none() && target == id,
            _ => false,
        })
    }
}
