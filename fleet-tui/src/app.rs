//! Fleet file browser: a selectable grid of device files with a
//! download action over the current selection.

use std::borrow::Cow;

use griddom::crossterm::event::Event as CrosstermEvent;
use griddom::{
    Align, Border, Button, Column, DataGrid, Edges, Element, Event, FocusState, GridState,
    Justify, Key, LayoutResult, Messages, Record, Size, Status, Style, Theme,
};
use serde::Serialize;

const GRID_ID: &str = "fleet";
const DOWNLOAD_BUTTON_ID: &str = "download";
const STATUS_AVAILABLE: &str = "available";

/// One file known on a fleet device. `name` is the grid's unique key.
#[derive(Clone, Debug, Serialize)]
pub struct DeviceFile {
    pub name: String,
    pub device: String,
    pub path: String,
    pub status: String,
}

impl DeviceFile {
    fn new(name: &str, device: &str, path: &str, status: &str) -> Self {
        Self {
            name: name.into(),
            device: device.into(),
            path: path.into(),
            status: status.into(),
        }
    }
}

impl Record for DeviceFile {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "name" => Some(Cow::Borrowed(&self.name)),
            "device" => Some(Cow::Borrowed(&self.device)),
            "path" => Some(Cow::Borrowed(&self.path)),
            "status" => Some(Cow::Borrowed(&self.status)),
            _ => None,
        }
    }
}

fn sample_files() -> Vec<DeviceFile> {
    vec![
        DeviceFile::new(
            "smss.exe",
            "Stark",
            "\\Device\\HarddiskVolume2\\Windows\\System32\\smss.exe",
            "scheduled",
        ),
        DeviceFile::new(
            "netsh.exe",
            "Targaryen",
            "\\Device\\HarddiskVolume2\\Windows\\System32\\netsh.exe",
            "available",
        ),
        DeviceFile::new(
            "uxtheme.dll",
            "Lanniester",
            "\\Device\\HarddiskVolume1\\Windows\\System32\\uxtheme.dll",
            "available",
        ),
        DeviceFile::new(
            "cryptbase.dll",
            "Martell",
            "\\Device\\HarddiskVolume1\\Windows\\System32\\cryptbase.dll",
            "scheduled",
        ),
        DeviceFile::new(
            "7za.exe",
            "Baratheon",
            "\\Device\\HarddiskVolume1\\temp\\7za.exe",
            "scheduled",
        ),
    ]
}

fn columns(theme: &Theme) -> Vec<Column<DeviceFile>> {
    let status_theme = theme.clone();
    vec![
        Column::new("name", "Name", "name"),
        Column::new("device", "Device", "device"),
        Column::new("path", "Path", "path"),
        Column::new("status", "Status", "status")
            .render_with(move |file: &DeviceFile| Status::new(&file.status).build(&status_theme)),
    ]
}

pub struct App {
    files: Vec<DeviceFile>,
    columns: Vec<Column<DeviceFile>>,
    grid: GridState,
    focus: FocusState,
    theme: Theme,
    /// JSON payload shown in the download modal while open.
    download: Option<String>,
    quit: bool,
}

impl App {
    pub fn new() -> Self {
        let theme = Theme::default();
        Self {
            files: sample_files(),
            columns: columns(&theme),
            grid: GridState::new(GRID_ID),
            focus: FocusState::new(),
            theme,
            download: None,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn build(&self) -> Element {
        if let Some(json) = &self.download {
            return self.build_download_modal(json);
        }

        let is_available = |file: &DeviceFile| file.status == STATUS_AVAILABLE;
        let download_action = |selected: &[&DeviceFile]| {
            Button::new(Messages::download())
                .id(DOWNLOAD_BUTTON_ID)
                .disabled(selected.is_empty())
                .focused(self.focus.focused() == Some(DOWNLOAD_BUTTON_ID))
                .build(&self.theme)
        };

        let grid = DataGrid::new(&self.files, &self.columns, "name")
            .selectable(true)
            .is_row_selectable(&is_available)
            .custom_actions(&download_action)
            .build(&self.grid, &self.focus, &self.theme);

        Element::col()
            .width(Size::Fill)
            .height(Size::Fill)
            .style(Style::new().background(self.theme.background))
            .padding(Edges::all(1))
            .gap(1)
            .child(
                Element::text("Fleet files")
                    .style(Style::new().foreground(self.theme.foreground).bold()),
            )
            .child(grid)
            .child(
                Element::text("Tab/arrows move focus, Enter or click toggles, q quits")
                    .style(Style::new().foreground(self.theme.muted)),
            )
    }

    fn build_download_modal(&self, json: &str) -> Element {
        let dialog = Element::col()
            .width(Size::Fixed(64))
            .padding(Edges::all(1))
            .gap(1)
            .style(
                Style::new()
                    .background(self.theme.surface)
                    .foreground(self.theme.foreground)
                    .border(Border::Rounded),
            )
            .child(Element::text("Downloading").style(Style::new().bold()))
            .child(Element::text(json))
            .child(Element::text("Press Esc to close").style(Style::new().foreground(self.theme.muted)));

        Element::col()
            .width(Size::Fill)
            .height(Size::Fill)
            .style(Style::new().background(self.theme.background))
            .justify(Justify::Center)
            .align(Align::Center)
            .child(dialog)
    }

    /// Feed one batch of raw terminal events through focus tracking, the
    /// grid's selection routing and the app-level bindings.
    pub fn handle(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Result<(), crate::error::AppError> {
        let events = self.focus.process_events(raw, root, layout);
        let events = if self.download.is_none() {
            self.grid.process_events(&events, root, layout)
        } else {
            events
        };

        for event in &events {
            match event {
                Event::Key {
                    key: Key::Char('q'),
                    modifiers,
                    ..
                } if modifiers.none() || modifiers.ctrl => {
                    self.quit = true;
                }
                Event::Key {
                    key: Key::Escape, ..
                } => {
                    self.download = None;
                }
                _ => {}
            }
        }

        if self.download.is_none() && Button::activated(&events, DOWNLOAD_BUTTON_ID) {
            self.open_download()?;
        }

        Ok(())
    }

    fn open_download(&mut self) -> Result<(), crate::error::AppError> {
        let selected = self.grid.selected_rows(&self.files, "name");
        log::info!("downloading {} file(s)", selected.len());
        self.download = Some(serde_json::to_string_pretty(&selected)?);
        self.focus.blur();
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
