use std::borrow::Cow;
use std::cell::RefCell;

use griddom::{
    find_element, hit_test, Column, Content, DataGrid, Element, Event, FocusState, GridState,
    Key, LayoutResult, Modifiers, MouseButton, Record, Rect, Theme,
};

#[derive(Clone)]
struct TestFile {
    name: &'static str,
    device: &'static str,
    status: &'static str,
}

impl Record for TestFile {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "name" => Some(Cow::Borrowed(self.name)),
            "device" => Some(Cow::Borrowed(self.device)),
            "status" => Some(Cow::Borrowed(self.status)),
            _ => None,
        }
    }
}

fn files() -> Vec<TestFile> {
    vec![
        TestFile { name: "smss.exe", device: "Stark", status: "scheduled" },
        TestFile { name: "netsh.exe", device: "Targaryen", status: "available" },
        TestFile { name: "uxtheme.dll", device: "Lanniester", status: "available" },
        TestFile { name: "cryptbase.dll", device: "Martell", status: "scheduled" },
        TestFile { name: "7za.exe", device: "Baratheon", status: "available" },
    ]
}

fn columns() -> Vec<Column<TestFile>> {
    vec![
        Column::new("name", "Name", "name"),
        Column::new("device", "Device", "device"),
        Column::new("status", "Status", "status"),
    ]
}

fn available(file: &TestFile) -> bool {
    file.status == "available"
}

fn build(state: &GridState, files: &[TestFile], columns: &[Column<TestFile>]) -> Element {
    DataGrid::new(files, columns, "name")
        .selectable(true)
        .is_row_selectable(&available)
        .build(state, &FocusState::new(), &Theme::default())
}

fn children(el: &Element) -> &[Element] {
    match &el.content {
        Content::Children(c) => c,
        _ => &[],
    }
}

fn click(target: &str) -> Event {
    Event::Click {
        target: Some(target.to_string()),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    }
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_select_column_is_injected_first() {
    let state = GridState::new("g");
    let root = build(&state, &files(), &columns());

    let header = find_element(&root, "g-header").unwrap();
    let ids: Vec<&str> = children(header).iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["g-head-select", "g-head-name", "g-head-device", "g-head-status"]
    );
}

#[test]
fn test_no_select_column_when_not_selectable() {
    let state = GridState::new("g");
    let root = DataGrid::new(&files(), &columns(), "name").build(
        &state,
        &FocusState::new(),
        &Theme::default(),
    );

    let header = find_element(&root, "g-header").unwrap();
    let ids: Vec<&str> = children(header).iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["g-head-name", "g-head-device", "g-head-status"]);
    assert!(find_element(&root, "g-select-all").is_none());
    assert!(find_element(&root, "g-select-smss.exe").is_none());
}

#[test]
fn test_header_labels_preserve_column_order() {
    let state = GridState::new("g");
    let root = build(&state, &files(), &columns());

    let header = find_element(&root, "g-header").unwrap();
    let labels: Vec<&str> = children(header)
        .iter()
        .filter_map(|c| match &c.content {
            Content::Text(t) => Some(t.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["Name", "Device", "Status"]);
}

#[test]
fn test_rows_keyed_by_unique_key_in_order() {
    let state = GridState::new("g");
    let root = build(&state, &files(), &columns());

    let body = find_element(&root, "g-body").unwrap();
    let ids: Vec<&str> = children(body).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "g-row-smss.exe",
            "g-row-netsh.exe",
            "g-row-uxtheme.dll",
            "g-row-cryptbase.dll",
            "g-row-7za.exe",
        ]
    );
}

#[test]
fn test_missing_accessor_renders_undefined() {
    let cols = vec![Column::<TestFile>::new("ghost", "Ghost", "no_such_field")];
    let state = GridState::new("g");
    let root = build(&state, &files(), &cols);

    let cell = find_element(&root, "g-cell-smss.exe-ghost").unwrap();
    match &cell.content {
        Content::Text(t) => assert_eq!(t, "undefined"),
        other => panic!("expected text cell, got {other:?}"),
    }
}

#[test]
fn test_custom_render_overrides_accessor_cell() {
    let cols = vec![
        Column::new("name", "Name", "name"),
        Column::new("status", "Status", "status")
            .render_with(|file: &TestFile| Element::text(format!("S:{}", file.status))),
    ];
    let state = GridState::new("g");
    let root = build(&state, &files(), &cols);

    let cell = find_element(&root, "g-cell-netsh.exe-status").unwrap();
    match &cell.content {
        Content::Text(t) => assert_eq!(t, "S:available"),
        other => panic!("expected text cell, got {other:?}"),
    }
}

#[test]
fn test_checkbox_disabled_follows_predicate() {
    let state = GridState::new("g");
    let root = build(&state, &files(), &columns());

    let scheduled = find_element(&root, "g-select-smss.exe").unwrap();
    assert!(scheduled.disabled);
    assert!(!scheduled.focusable);
    assert!(!scheduled.clickable);

    let available = find_element(&root, "g-select-netsh.exe").unwrap();
    assert!(!available.disabled);
    assert!(available.focusable);
    assert!(available.clickable);
}

#[test]
fn test_without_predicate_no_row_is_selectable() {
    let state = GridState::new("g");
    let root = DataGrid::new(&files(), &columns(), "name").selectable(true).build(
        &state,
        &FocusState::new(),
        &Theme::default(),
    );

    for file in files() {
        let checkbox = find_element(&root, &format!("g-select-{}", file.name)).unwrap();
        assert!(checkbox.disabled, "{} should be disabled", file.name);
    }
}

#[test]
fn test_row_checkbox_reflects_selection() {
    let mut state = GridState::new("g");
    state.select_row("netsh.exe", true);
    let root = build(&state, &files(), &columns());

    let checked = find_element(&root, "g-select-netsh.exe").unwrap();
    assert!(matches!(
        checked.content,
        Content::Checkbox { checked: true, .. }
    ));

    let unchecked = find_element(&root, "g-select-uxtheme.dll").unwrap();
    assert!(matches!(
        unchecked.content,
        Content::Checkbox { checked: false, .. }
    ));
}

// ============================================================================
// Event routing
// ============================================================================

#[test]
fn test_click_toggles_row_selection() {
    let mut state = GridState::new("g");
    let root = build(&state, &files(), &columns());

    state.process_events(&[click("g-select-netsh.exe")], &root, &LayoutResult::new());
    assert!(state.is_selected("netsh.exe"));

    state.process_events(&[click("g-select-netsh.exe")], &root, &LayoutResult::new());
    assert!(!state.is_selected("netsh.exe"));
}

#[test]
fn test_enter_key_toggles_row_selection() {
    let mut state = GridState::new("g");
    let root = build(&state, &files(), &columns());

    let key = Event::Key {
        target: Some("g-select-uxtheme.dll".to_string()),
        key: Key::Enter,
        modifiers: Modifiers::new(),
    };
    state.process_events(&[key], &root, &LayoutResult::new());

    assert!(state.is_selected("uxtheme.dll"));
}

#[test]
fn test_select_all_click_selects_exactly_the_selectable_rows() {
    let mut state = GridState::new("g");
    state.select_row("smss.exe", true); // unselectable row, selected programmatically
    let root = build(&state, &files(), &columns());

    state.process_events(&[click("g-select-all")], &root, &LayoutResult::new());

    let keys: Vec<&str> = state.selected_keys().collect();
    assert_eq!(keys, vec!["netsh.exe", "uxtheme.dll", "7za.exe"]);
    assert!(!state.all_selected(5));
    assert!(state.partially_selected(5));
}

#[test]
fn test_select_all_click_clears_when_everything_is_selected() {
    let mut state = GridState::new("g");
    for file in files() {
        state.select_row(file.name, true);
    }
    let root = build(&state, &files(), &columns());
    assert!(state.all_selected(5));

    state.process_events(&[click("g-select-all")], &root, &LayoutResult::new());

    assert!(state.is_empty());
}

#[test]
fn test_indeterminate_select_all_click_selects_again() {
    // With a partial selection the select-all control reads unchecked, so
    // activating it selects (it never clears from the indeterminate state).
    let mut state = GridState::new("g");
    let root = build(&state, &files(), &columns());
    state.process_events(&[click("g-select-netsh.exe")], &root, &LayoutResult::new());

    let root = build(&state, &files(), &columns());
    state.process_events(&[click("g-select-all")], &root, &LayoutResult::new());

    let keys: Vec<&str> = state.selected_keys().collect();
    assert_eq!(keys, vec!["netsh.exe", "uxtheme.dll", "7za.exe"]);
}

#[test]
fn test_unrelated_events_pass_through() {
    let mut state = GridState::new("g");
    let root = build(&state, &files(), &columns());

    let key = Event::Key {
        target: None,
        key: Key::Char('q'),
        modifiers: Modifiers::new(),
    };
    let out = state.process_events(&[key.clone()], &root, &LayoutResult::new());

    assert_eq!(out, vec![key]);
    assert!(state.is_empty());
}

#[test]
fn test_other_grids_events_pass_through() {
    let mut state = GridState::new("other");
    let root = build(&GridState::new("g"), &files(), &columns());

    let out = state.process_events(&[click("g-select-netsh.exe")], &root, &LayoutResult::new());

    assert_eq!(out.len(), 1);
    assert!(state.is_empty());
}

#[test]
fn test_disabled_checkbox_does_not_hit() {
    let state = GridState::new("g");
    let root = build(&state, &files(), &columns());
    let layout = griddom::layout::layout(&root, Rect::from_size(90, 30));

    let disabled = layout.get("g-select-smss.exe").unwrap();
    let (x, y) = disabled.center();
    assert_eq!(hit_test(&layout, &root, x, y), None);

    let enabled = layout.get("g-select-netsh.exe").unwrap();
    let (x, y) = enabled.center();
    assert_eq!(
        hit_test(&layout, &root, x, y),
        Some("g-select-netsh.exe".to_string())
    );
}

// ============================================================================
// Topbar wiring
// ============================================================================

#[test]
fn test_custom_actions_render_independent_of_selectable() {
    let actions = |_rows: &[&TestFile]| Element::text("actions-slot").id("actions");
    let state = GridState::new("g");
    let root = DataGrid::new(&files(), &columns(), "name")
        .custom_actions(&actions)
        .build(&state, &FocusState::new(), &Theme::default());

    assert!(find_element(&root, "actions").is_some());
    assert!(find_element(&root, "g-select-all").is_none());
}

#[test]
fn test_custom_actions_receive_selection_in_insertion_order() {
    let captured: RefCell<Vec<String>> = RefCell::new(Vec::new());
    let actions = |rows: &[&TestFile]| {
        *captured.borrow_mut() = rows.iter().map(|r| r.name.to_string()).collect();
        Element::text("actions-slot").id("actions")
    };

    let mut state = GridState::new("g");
    state.select_row("uxtheme.dll", true);
    state.select_row("netsh.exe", true);

    let data = files();
    let cols = columns();
    let _root = DataGrid::new(&data, &cols, "name")
        .selectable(true)
        .is_row_selectable(&available)
        .custom_actions(&actions)
        .build(&state, &FocusState::new(), &Theme::default());

    assert_eq!(*captured.borrow(), vec!["uxtheme.dll", "netsh.exe"]);
}

#[test]
fn test_selected_rows_skips_stale_keys() {
    let mut state = GridState::new("g");
    state.select_row("netsh.exe", true);
    state.select_row("gone.dll", true);

    let data = files();
    let rows = state.selected_rows(&data, "name");

    let names: Vec<&str> = rows.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["netsh.exe"]);
    // The stale key still counts toward the selection size.
    assert_eq!(state.selected_count(), 2);
}
