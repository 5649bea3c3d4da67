use griddom::render::render_to_buffer;
use griddom::{Border, Buffer, Color, Element, Rect, Rgb, Size, Style, TextWrap};

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let layout = griddom::layout::layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &layout, &mut buf);
    buf
}

fn row_text(buf: &Buffer, y: u16, len: u16) -> String {
    (0..len)
        .map(|x| buf.get(x, y).map(|c| c.char).unwrap_or(' '))
        .collect()
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_text_renders_with_foreground() {
    let root = Element::text("hi")
        .id("t")
        .width(Size::Fixed(2))
        .height(Size::Fixed(1))
        .style(Style::new().foreground(Color::rgb(10, 20, 30)));

    let buf = render(&root, 10, 2);

    assert_eq!(buf.get(0, 0).unwrap().char, 'h');
    assert_eq!(buf.get(1, 0).unwrap().char, 'i');
    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(10, 20, 30));
}

#[test]
fn test_text_clips_at_cell_edge() {
    let root = Element::text("hello world")
        .id("t")
        .width(Size::Fixed(8))
        .height(Size::Fixed(1));

    let buf = render(&root, 8, 1);

    assert_eq!(row_text(&buf, 0, 8), "hello wo");
}

#[test]
fn test_text_truncates_with_ellipsis() {
    let root = Element::text("hello world")
        .id("t")
        .width(Size::Fixed(8))
        .height(Size::Fixed(1))
        .text_wrap(TextWrap::Truncate);

    let buf = render(&root, 8, 1);

    assert_eq!(row_text(&buf, 0, 8), "hello w…");
}

#[test]
fn test_multiline_text_renders_per_line() {
    let root = Element::text("ab\ncd")
        .id("t")
        .width(Size::Fixed(2))
        .height(Size::Fixed(2));

    let buf = render(&root, 4, 4);

    assert_eq!(row_text(&buf, 0, 2), "ab");
    assert_eq!(row_text(&buf, 1, 2), "cd");
}

// ============================================================================
// Background and borders
// ============================================================================

#[test]
fn test_background_fills_rect() {
    let root = Element::box_()
        .id("b")
        .width(Size::Fixed(3))
        .height(Size::Fixed(2))
        .style(Style::new().background(Color::rgb(9, 9, 9)));

    let buf = render(&root, 5, 5);

    assert_eq!(buf.get(0, 0).unwrap().bg, Rgb::new(9, 9, 9));
    assert_eq!(buf.get(2, 1).unwrap().bg, Rgb::new(9, 9, 9));
    assert_eq!(buf.get(3, 0).unwrap().bg, Rgb::new(0, 0, 0));
}

#[test]
fn test_single_border_draws_corners() {
    let root = Element::box_()
        .id("b")
        .width(Size::Fixed(5))
        .height(Size::Fixed(3))
        .style(Style::new().border(Border::Single));

    let buf = render(&root, 5, 3);

    assert_eq!(buf.get(0, 0).unwrap().char, '┌');
    assert_eq!(buf.get(4, 0).unwrap().char, '┐');
    assert_eq!(buf.get(0, 2).unwrap().char, '└');
    assert_eq!(buf.get(4, 2).unwrap().char, '┘');
    assert_eq!(buf.get(2, 0).unwrap().char, '─');
    assert_eq!(buf.get(0, 1).unwrap().char, '│');
}

// ============================================================================
// Checkbox glyphs
// ============================================================================

#[test]
fn test_checkbox_glyphs() {
    for (checked, indeterminate, expected) in [
        (false, false, "[ ]"),
        (true, false, "[x]"),
        (false, true, "[~]"),
        (true, true, "[~]"), // indeterminate wins over checked
    ] {
        let root = Element::checkbox(checked)
            .indeterminate(indeterminate)
            .id("c")
            .width(Size::Fixed(3))
            .height(Size::Fixed(1));

        let buf = render(&root, 3, 1);
        assert_eq!(row_text(&buf, 0, 3), expected);
    }
}

// ============================================================================
// State style precedence
// ============================================================================

#[test]
fn test_disabled_style_wins_over_focused() {
    let root = Element::checkbox(false)
        .id("c")
        .width(Size::Fixed(3))
        .height(Size::Fixed(1))
        .focused(true)
        .disabled(true)
        .style(Style::new().foreground(Color::rgb(1, 1, 1)))
        .style_focused(Style::new().foreground(Color::rgb(2, 2, 2)).bold())
        .style_disabled(Style::new().foreground(Color::rgb(3, 3, 3)).dim());

    let buf = render(&root, 3, 1);
    let cell = buf.get(0, 0).unwrap();

    assert_eq!(cell.fg, Rgb::new(3, 3, 3));
    assert!(cell.style.dim);
    assert!(!cell.style.bold);
}

#[test]
fn test_focused_style_applies_when_enabled() {
    let root = Element::checkbox(false)
        .id("c")
        .width(Size::Fixed(3))
        .height(Size::Fixed(1))
        .focused(true)
        .style(Style::new().foreground(Color::rgb(1, 1, 1)))
        .style_focused(Style::new().foreground(Color::rgb(2, 2, 2)).bold());

    let buf = render(&root, 3, 1);
    let cell = buf.get(0, 0).unwrap();

    assert_eq!(cell.fg, Rgb::new(2, 2, 2));
    assert!(cell.style.bold);
}

#[test]
fn test_base_style_applies_without_state() {
    let root = Element::checkbox(false)
        .id("c")
        .width(Size::Fixed(3))
        .height(Size::Fixed(1))
        .style(Style::new().foreground(Color::rgb(1, 1, 1)))
        .style_focused(Style::new().foreground(Color::rgb(2, 2, 2)));

    let buf = render(&root, 3, 1);

    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(1, 1, 1));
}
