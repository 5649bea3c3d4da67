use crate::element::{find_element, Content, Element};
use crate::event::{Event, Key, MouseButton};
use crate::layout::LayoutResult;

use super::{Record, DATA_GRID, DATA_KEY, DATA_ROLE, ROLE_ROW_SELECT, ROLE_SELECT_ALL};

/// Selection state for one grid: the only real state the widget owns.
///
/// Rows are tracked by their stringified unique-key value, kept in
/// insertion order (the order is observable through the topbar's action
/// slot). If the caller swaps the row collection between builds, keys
/// without a matching row linger until the next select-all or explicit
/// deselect; no cleanup pass runs.
#[derive(Debug)]
pub struct GridState {
    id: String,
    selected: Vec<String>,
}

impl GridState {
    /// Create the state for a grid with the given element id.
    /// The selection starts empty.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            selected: Vec::new(),
        }
    }

    /// The grid element id this state is bound to.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Mark one row selected or deselected.
    ///
    /// Selectability is not re-checked here; the disabled checkbox is the
    /// only guard, so a programmatic call can select an unselectable row.
    /// Deselecting a key that isn't selected is a no-op.
    pub fn select_row(&mut self, key: &str, selected: bool) {
        if selected {
            if !self.is_selected(key) {
                self.selected.push(key.to_string());
            }
        } else {
            self.selected.retain(|k| k != key);
        }
    }

    /// Select-all transition. `true` replaces the selection with exactly
    /// the given selectable keys (previously selected rows outside that
    /// set are dropped); `false` empties it.
    pub fn select_all<I>(&mut self, value: bool, selectable_keys: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.selected.clear();
        if value {
            for key in selectable_keys {
                if !self.is_selected(&key) {
                    self.selected.push(key);
                }
            }
        }
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.iter().any(|k| k == key)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected keys in insertion order.
    pub fn selected_keys(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Select-all checkbox `checked`: the selection covers the total row
    /// count. Deliberately the total, not the selectable count — a grid
    /// with unselectable rows never reaches checked via select-all alone.
    pub fn all_selected(&self, total: usize) -> bool {
        self.selected.len() == total
    }

    /// Select-all checkbox `indeterminate`: some but not all rows.
    pub fn partially_selected(&self, total: usize) -> bool {
        total > 0 && !self.selected.is_empty() && self.selected.len() < total
    }

    /// Resolve the selected keys against the current row collection, in
    /// insertion order. Keys without a matching row are skipped.
    pub fn selected_rows<'a, T: Record>(&self, data: &'a [T], unique_key: &str) -> Vec<&'a T> {
        self.selected
            .iter()
            .filter_map(|key| {
                data.iter()
                    .find(|row| row.field(unique_key).as_deref() == Some(key.as_str()))
            })
            .collect()
    }

    /// Route events into selection transitions.
    ///
    /// Consumes left clicks and Enter/Space key presses targeting this
    /// grid's checkbox elements; every other event is passed through.
    /// The select-all transition reads the selectable rows from the
    /// current tree: every enabled row checkbox, in tree order.
    pub fn process_events(
        &mut self,
        events: &[Event],
        root: &Element,
        _layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            let target = match event {
                Event::Click {
                    target: Some(target),
                    button: MouseButton::Left,
                    ..
                } => Some(target),
                Event::Key {
                    target: Some(target),
                    key: Key::Enter | Key::Char(' '),
                    modifiers,
                } if modifiers.none() => Some(target),
                _ => None,
            };

            let element = target.and_then(|id| find_element(root, id));
            let Some(element) = element else {
                output.push(event.clone());
                continue;
            };

            if element.get_data(DATA_GRID).map(String::as_str) != Some(self.id.as_str()) {
                output.push(event.clone());
                continue;
            }

            match element.get_data(DATA_ROLE).map(String::as_str) {
                Some(ROLE_ROW_SELECT) => {
                    if let Some(key) = element.get_data(DATA_KEY) {
                        let select = !self.is_selected(key);
                        log::debug!("[grid:{}] row {key} selected={select}", self.id);
                        self.select_row(key, select);
                        continue;
                    }
                    output.push(event.clone());
                }
                Some(ROLE_SELECT_ALL) => {
                    let total = count_row_checkboxes(root, &self.id);
                    let value = !self.all_selected(total);
                    log::debug!("[grid:{}] select-all={value} (total={total})", self.id);
                    let keys = if value {
                        collect_selectable_keys(root, &self.id)
                    } else {
                        Vec::new()
                    };
                    self.select_all(value, keys);
                }
                _ => output.push(event.clone()),
            }
        }

        output
    }
}

fn walk<'a>(element: &'a Element, f: &mut impl FnMut(&'a Element)) {
    f(element);
    if let Content::Children(children) = &element.content {
        for child in children {
            walk(child, f);
        }
    }
}

fn is_row_checkbox(element: &Element, grid_id: &str) -> bool {
    element.get_data(DATA_GRID).map(String::as_str) == Some(grid_id)
        && element.get_data(DATA_ROLE).map(String::as_str) == Some(ROLE_ROW_SELECT)
}

/// Total rows, counted as row checkboxes whether or not they're enabled.
fn count_row_checkboxes(root: &Element, grid_id: &str) -> usize {
    let mut count = 0;
    walk(root, &mut |el| {
        if is_row_checkbox(el, grid_id) {
            count += 1;
        }
    });
    count
}

/// Keys of the selectable rows: enabled row checkboxes, in tree order.
fn collect_selectable_keys(root: &Element, grid_id: &str) -> Vec<String> {
    let mut keys = Vec::new();
    walk(root, &mut |el| {
        if is_row_checkbox(el, grid_id) && !el.disabled {
            if let Some(key) = el.get_data(DATA_KEY) {
                keys.push(key.clone());
            }
        }
    });
    keys
}
