use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Disabled elements (and their subtrees) don't receive input.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, |el| el.clickable)
}

/// Find the focusable element at the given coordinates.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    hit_test_element(layout, root, x, y, |el| el.focusable)
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accepts: fn(&Element) -> bool,
) -> Option<String> {
    if element.disabled {
        return None;
    }

    let rect = layout.get(&element.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if let Some(id) = hit_test_element(layout, child, x, y, accepts) {
                return Some(id);
            }
        }
    }

    if accepts(element) {
        Some(element.id.clone())
    } else {
        None
    }
}
