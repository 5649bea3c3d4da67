use crate::checkbox::Checkbox;
use crate::element::Element;
use crate::focus::FocusState;
use crate::messages::{create_message, Messages};
use crate::types::{Edges, Justify, Size, Style, Theme};

use super::{DATA_GRID, DATA_ROLE, ROLE_SELECT_ALL};

/// Selection summary bar: a select-all control plus count message, and a
/// slot for caller-supplied actions. Pure function of its props — the
/// checkbox's checked/indeterminate/disabled flags are derived here on
/// every build, never stored.
pub struct Topbar<'a> {
    grid_id: &'a str,
    selectable: bool,
    total_size: usize,
    selected_count: usize,
    actions: Option<Element>,
}

impl<'a> Topbar<'a> {
    pub fn new(grid_id: &'a str) -> Self {
        Self {
            grid_id,
            selectable: false,
            total_size: 0,
            selected_count: 0,
            actions: None,
        }
    }

    /// Show the select-all control and count message.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Total row count (not the selectable count).
    pub fn total_size(mut self, total_size: usize) -> Self {
        self.total_size = total_size;
        self
    }

    pub fn selected_count(mut self, selected_count: usize) -> Self {
        self.selected_count = selected_count;
        self
    }

    /// Prebuilt actions slot, rendered whether or not the bar shows the
    /// selection controls.
    pub fn actions(mut self, actions: Element) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn build(self, focus: &FocusState, theme: &Theme) -> Element {
        let mut bar = Element::row()
            .id(format!("{}-topbar", self.grid_id))
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .justify(Justify::SpaceBetween)
            .padding(Edges::horizontal(1))
            .style(Style::new().background(theme.surface));

        if self.selectable {
            // Checked compares against the total row count: when some rows
            // are unselectable, select-all alone never reaches checked.
            let checked = self.selected_count == self.total_size;
            let indeterminate = self.total_size > 0
                && self.selected_count > 0
                && self.selected_count < self.total_size;

            let select_all_id = format!("{}-select-all", self.grid_id);
            let checkbox = Checkbox::new()
                .id(&select_all_id)
                .checked(checked)
                .indeterminate(indeterminate)
                .disabled(self.total_size == 0)
                .focused(focus.focused() == Some(select_all_id.as_str()))
                .data(DATA_GRID, self.grid_id)
                .data(DATA_ROLE, ROLE_SELECT_ALL)
                .build(theme);

            let message = Element::text(create_message(Messages::selected, self.selected_count))
                .id(format!("{}-selected-count", self.grid_id))
                .style(Style::new().foreground(theme.muted));

            bar = bar.child(Element::row().gap(1).child(checkbox).child(message));
        }

        if let Some(actions) = self.actions {
            bar = bar.child(actions);
        }

        bar
    }
}
