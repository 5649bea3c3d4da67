use std::borrow::Cow;
use std::fs::File;

use griddom::{
    Color, Column, DataGrid, Edges, Element, Event, FocusState, GridState, Key, Record, Size,
    Style, Terminal, Theme,
};
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Clone)]
struct Package {
    name: &'static str,
    version: &'static str,
    channel: &'static str,
}

impl Record for Package {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "name" => Some(Cow::Borrowed(self.name)),
            "version" => Some(Cow::Borrowed(self.version)),
            "channel" => Some(Cow::Borrowed(self.channel)),
            _ => None,
        }
    }
}

fn main() -> std::io::Result<()> {
    if let Ok(log_file) = File::create("griddom-demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let packages = vec![
        Package { name: "flexlay", version: "1.4.2", channel: "stable" },
        Package { name: "termpaint", version: "0.9.0", channel: "beta" },
        Package { name: "rowbuf", version: "2.1.0", channel: "stable" },
        Package { name: "keymapd", version: "0.3.1", channel: "nightly" },
        Package { name: "cellgrid", version: "1.0.0", channel: "stable" },
    ];

    let columns = vec![
        Column::new("name", "Name", "name"),
        Column::new("version", "Version", "version"),
        Column::new("channel", "Channel", "channel"),
    ];

    let theme = Theme::default();
    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();
    let mut grid = GridState::new("packages");

    let stable_only = |package: &Package| package.channel == "stable";

    loop {
        let table = DataGrid::new(&packages, &columns, "name")
            .selectable(true)
            .is_row_selectable(&stable_only)
            .build(&grid, &focus, &theme);

        let root = Element::col()
            .width(Size::Fill)
            .height(Size::Fill)
            .style(Style::new().background(theme.background))
            .padding(Edges::all(1))
            .gap(1)
            .child(Element::text("griddom demo - stable packages are selectable").style(
                Style::new().foreground(Color::oklch(0.9, 0.02, 250.0)).bold(),
            ))
            .child(table)
            .child(
                Element::text("Tab/arrows move focus, Enter or click toggles, q quits")
                    .style(Style::new().foreground(theme.muted)),
            );

        term.render(&root)?;

        let raw_events = term.poll(None)?;
        let events = focus.process_events(&raw_events, &root, term.layout());
        let events = grid.process_events(&events, &root, term.layout());

        for event in &events {
            if let Event::Key {
                key: Key::Char('q'),
                ..
            } = event
            {
                return Ok(());
            }
        }
    }
}
