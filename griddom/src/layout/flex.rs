use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Border, Direction, Edges, Justify, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();

    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, &mut result);
    result
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let inner = rect.inset(content_edges(element));
    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // First pass: fixed sizes and fill counts along the main axis.
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;
    let gap_total = element.gap * children.len().saturating_sub(1) as u16;

    for child in children {
        let main = if is_row { child.width } else { child.height };
        match main {
            Size::Fixed(n) => fixed_total += n,
            Size::Auto => fixed_total += estimate_size(child, is_row),
            Size::Fill => fill_count += 1,
        }
    }

    let remaining = main_size.saturating_sub(fixed_total + gap_total);
    let fill_size = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    // Resolve main-axis sizes.
    let mut child_mains: Vec<u16> = Vec::with_capacity(children.len());
    let mut total_child_size = 0u16;
    for child in children {
        let main = match if is_row { child.width } else { child.height } {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill => fill_size,
        };
        child_mains.push(main);
        total_child_size += main;
    }

    // Justify spacing.
    let extra_space = main_size.saturating_sub(total_child_size + gap_total);
    let (start_offset, between_gap) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::Center => (extra_space / 2, element.gap),
        Justify::End => (extra_space, element.gap),
        Justify::SpaceBetween => {
            if children.len() > 1 {
                (0, extra_space / (children.len() - 1) as u16 + element.gap)
            } else {
                (0, element.gap)
            }
        }
    };

    // Second pass: assign rects.
    let mut offset = start_offset;
    for (child, &main) in children.iter().zip(&child_mains) {
        let cross = match if is_row { child.height } else { child.width } {
            Size::Fixed(n) => n.min(cross_size),
            Size::Fill => cross_size,
            Size::Auto => {
                if element.align == Align::Stretch {
                    cross_size
                } else {
                    estimate_size(child, !is_row).min(cross_size)
                }
            }
        };

        let cross_offset = match element.align {
            Align::Start | Align::Stretch => 0,
            Align::Center => (cross_size.saturating_sub(cross)) / 2,
            Align::End => cross_size.saturating_sub(cross),
        };

        let main = main.min(main_size.saturating_sub(offset.min(main_size)));

        let child_rect = if is_row {
            Rect::new(inner.x + offset, inner.y + cross_offset, main, cross)
        } else {
            Rect::new(inner.x + cross_offset, inner.y + offset, cross, main)
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset += main + between_gap;
    }
}

/// Padding plus a one-cell inset per side when the element has a border.
fn content_edges(element: &Element) -> Edges {
    let border = if element.style.border == Border::None {
        0
    } else {
        1
    };
    Edges::new(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    )
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width).min(available),
    }
}

fn estimate_size(element: &Element, is_width: bool) -> u16 {
    // A declared fixed size wins over any content estimate.
    if let Size::Fixed(n) = if is_width { element.width } else { element.height } {
        return n;
    }

    let border = if element.style.border == Border::None {
        0
    } else {
        2
    };
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::Text(text) => {
            if is_width {
                text.lines()
                    .map(|line| display_width(line) as u16)
                    .max()
                    .unwrap_or(0)
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::Checkbox { .. } => {
            if is_width {
                3 // "[x]"
            } else {
                1
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if (element.direction == Direction::Row) == is_width {
                // Sum along the main axis.
                let gap_total = element.gap * (children.len().saturating_sub(1)) as u16;
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .sum::<u16>()
                    + gap_total
            } else {
                // Max along the cross axis.
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    content_size + padding + border
}
