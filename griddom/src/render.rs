use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, display_width, truncate_to_width};
use crate::types::{Border, Edges, Rgb, Style, TextWrap};

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    render_element(element, layout, buf);
}

/// Resolve the style an element is drawn with: the disabled style wins
/// over the focused style, which wins over the base style.
pub fn effective_style(element: &Element) -> Style {
    if element.disabled {
        if let Some(disabled) = &element.style_disabled {
            return disabled.merge_over(&element.style);
        }
    } else if element.focused {
        if let Some(focused) = &element.style_focused {
            return focused.merge_over(&element.style);
        }
    }
    element.style
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    if rect.is_empty() {
        return;
    }

    let style = effective_style(element);

    if let Some(bg) = &style.background {
        fill_rect(buf, *rect, bg.to_rgb());
    }

    render_border(&style, *rect, buf);

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            render_text(text, element, &style, *rect, buf);
        }
        Content::Checkbox {
            checked,
            indeterminate,
        } => {
            let glyph = checkbox_glyph(*checked, *indeterminate);
            render_text(glyph, element, &style, *rect, buf);
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf);
            }
        }
    }
}

fn checkbox_glyph(checked: bool, indeterminate: bool) -> &'static str {
    if indeterminate {
        "[~]"
    } else if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

fn render_text(text: &str, element: &Element, style: &Style, rect: Rect, buf: &mut Buffer) {
    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));
    let bg = style.background.as_ref().map(|c| c.to_rgb());

    let border = if style.border == Border::None { 0 } else { 1 };
    let inner = rect.inset(Edges::new(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    ));

    if inner.is_empty() {
        return;
    }

    for (i, line) in text.lines().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.bottom() {
            break;
        }

        let line = match element.text_wrap {
            TextWrap::Truncate => truncate_to_width(line, inner.width as usize),
            TextWrap::Clip => line.to_string(),
        };

        let offset = align_offset(display_width(&line), inner.width as usize, element.text_align);
        buf.set_text(
            inner.x + offset as u16,
            y,
            &line,
            inner.right(),
            fg,
            bg,
            style.text_style,
        );
    }
}

fn render_border(style: &Style, rect: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
    };

    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }

    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        // Preserve the existing background.
    }
}
