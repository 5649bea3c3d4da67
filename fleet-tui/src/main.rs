mod app;
mod error;

use std::fs::File;

use app::App;
use error::AppError;
use griddom::Terminal;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let log_file = File::create("fleet-tui.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut term = Terminal::new()?;
    let mut app = App::new();

    while !app.should_quit() {
        let root = app.build();
        term.render(&root)?;

        let raw_events = term.poll(None)?;
        app.handle(&raw_events, &root, term.layout())?;
    }

    Ok(())
}
