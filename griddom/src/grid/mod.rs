//! Data grid widget: tabular rendering with optional row selection.
//!
//! The grid itself is a pure function of its props; the only real state
//! is the selection set owned by [`GridState`]. Checkbox elements carry
//! data attributes (`grid`, `role`, `key`) so `GridState::process_events`
//! can route clicks back to selection transitions without handler
//! registration.

mod column;
mod state;
mod topbar;

pub use column::{Column, Record};
pub use state::GridState;
pub use topbar::Topbar;

use crate::checkbox::Checkbox;
use crate::element::Element;
use crate::focus::FocusState;
use crate::types::{Edges, Size, Style, Theme, TextWrap};

pub(crate) const DATA_GRID: &str = "grid";
pub(crate) const DATA_ROLE: &str = "role";
pub(crate) const DATA_KEY: &str = "key";
pub(crate) const ROLE_ROW_SELECT: &str = "row-select";
pub(crate) const ROLE_SELECT_ALL: &str = "select-all";

/// Width of the injected selection column, sized to the checkbox glyph.
const SELECT_COLUMN_WIDTH: u16 = 3;

/// Cell text for fields a row doesn't have. Rendering stays permissive:
/// a bad accessor shows this placeholder instead of failing.
const MISSING_FIELD: &str = "undefined";

/// Tabular display widget with optional row selection and a topbar.
///
/// Rows stay caller-owned and are identified by the `unique_key` field;
/// key values must be unique across rows (not checked at runtime).
pub struct DataGrid<'a, T: Record> {
    data: &'a [T],
    columns: &'a [Column<T>],
    unique_key: &'a str,
    selectable: bool,
    is_row_selectable: Option<&'a dyn Fn(&T) -> bool>,
    custom_actions: Option<&'a dyn Fn(&[&T]) -> Element>,
    style: Option<Style>,
    header_style: Option<Style>,
    row_style_selected: Option<Style>,
}

impl<'a, T: Record> DataGrid<'a, T> {
    pub fn new(data: &'a [T], columns: &'a [Column<T>], unique_key: &'a str) -> Self {
        Self {
            data,
            columns,
            unique_key,
            selectable: false,
            is_row_selectable: None,
            custom_actions: None,
            style: None,
            header_style: None,
            row_style_selected: None,
        }
    }

    /// Enable the selection column and topbar select-all control.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Predicate deciding whether a row may be selected. Re-evaluated on
    /// every build. Without one, no row is selectable.
    pub fn is_row_selectable(mut self, predicate: &'a dyn Fn(&T) -> bool) -> Self {
        self.is_row_selectable = Some(predicate);
        self
    }

    /// Caller-supplied topbar actions, built from the current selection
    /// (insertion order). Rendered whether or not the grid is selectable.
    pub fn custom_actions(mut self, actions: &'a dyn Fn(&[&T]) -> Element) -> Self {
        self.custom_actions = Some(actions);
        self
    }

    /// Set the grid container style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the header row style.
    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = Some(style);
        self
    }

    /// Set the style applied to selected rows.
    pub fn row_style_selected(mut self, style: Style) -> Self {
        self.row_style_selected = Some(style);
        self
    }

    /// Build the grid element tree from the current selection state.
    pub fn build(&self, state: &GridState, focus: &FocusState, theme: &Theme) -> Element {
        let gid = state.id().to_string();
        let total = self.data.len();

        // Topbar: select-all + count when selectable, actions whenever given.
        let selected = state.selected_rows(self.data, self.unique_key);
        let mut topbar = Topbar::new(&gid)
            .selectable(self.selectable)
            .total_size(total)
            .selected_count(state.selected_count());
        if let Some(actions) = self.custom_actions {
            topbar = topbar.actions(actions(&selected));
        }
        let topbar = topbar.build(focus, theme);

        let header = self.build_header(&gid, theme);
        let body = self.build_body(&gid, state, focus, theme);

        let mut grid = Element::col()
            .id(&gid)
            .width(Size::Fill)
            .height(Size::Fill)
            .child(topbar)
            .child(header)
            .child(body);

        if let Some(style) = self.style {
            grid = grid.style(style);
        }

        grid
    }

    fn build_header(&self, gid: &str, theme: &Theme) -> Element {
        let mut header = Element::row()
            .id(format!("{gid}-header"))
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .gap(1)
            .padding(Edges::horizontal(1))
            .style(self.header_style.unwrap_or_else(|| {
                Style::new()
                    .background(theme.surface)
                    .foreground(theme.foreground)
                    .bold()
            }));

        if self.selectable {
            header = header.child(
                Element::box_()
                    .id(format!("{gid}-head-select"))
                    .width(Size::Fixed(SELECT_COLUMN_WIDTH))
                    .height(Size::Fixed(1)),
            );
        }

        for column in self.columns {
            header = header.child(
                Element::text(&column.label)
                    .id(format!("{gid}-head-{}", column.id))
                    .width(Size::Fill)
                    .height(Size::Fixed(1))
                    .text_wrap(TextWrap::Truncate),
            );
        }

        header
    }

    fn build_body(
        &self,
        gid: &str,
        state: &GridState,
        focus: &FocusState,
        theme: &Theme,
    ) -> Element {
        let mut body = Element::col()
            .id(format!("{gid}-body"))
            .width(Size::Fill)
            .height(Size::Fill);

        for row in self.data {
            body = body.child(self.build_row(gid, row, state, focus, theme));
        }

        body
    }

    fn build_row(
        &self,
        gid: &str,
        row: &T,
        state: &GridState,
        focus: &FocusState,
        theme: &Theme,
    ) -> Element {
        let key = row
            .field(self.unique_key)
            .map(|v| v.into_owned())
            .unwrap_or_else(|| MISSING_FIELD.to_string());
        let row_selected = state.is_selected(&key);

        let mut row_el = Element::row()
            .id(format!("{gid}-row-{key}"))
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .gap(1)
            .padding(Edges::horizontal(1));

        if row_selected {
            row_el = row_el.style(
                self.row_style_selected
                    .unwrap_or_else(|| Style::new().background(theme.surface)),
            );
        }

        if self.selectable {
            let checkbox_id = format!("{gid}-select-{key}");
            // Without a predicate nothing is selectable, mirroring the
            // select-all transition which selects predicate matches only.
            let row_selectable = self.is_row_selectable.map(|f| f(row)).unwrap_or(false);

            let checkbox = Checkbox::new()
                .id(&checkbox_id)
                .checked(row_selected)
                .disabled(!row_selectable)
                .focused(focus.focused() == Some(checkbox_id.as_str()))
                .data(DATA_GRID, gid)
                .data(DATA_ROLE, ROLE_ROW_SELECT)
                .data(DATA_KEY, &key)
                .build(theme)
                .width(Size::Fixed(SELECT_COLUMN_WIDTH))
                .height(Size::Fixed(1));

            row_el = row_el.child(checkbox);
        }

        for column in self.columns {
            let cell_id = format!("{gid}-cell-{key}-{}", column.id);
            let cell = match &column.custom_render {
                Some(render) => render(row),
                None => {
                    let value = row
                        .field(&column.accessor)
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|| MISSING_FIELD.to_string());
                    Element::text(value).text_wrap(TextWrap::Truncate)
                }
            };
            row_el = row_el.child(cell.id(cell_id).width(Size::Fill).height(Size::Fixed(1)));
        }

        row_el
    }
}
