mod config;
mod display;
mod error;
mod logging;
mod models;
mod ui;

use std::io;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::{config_path, load_config};
use crate::display::{DisplaySurface, TerminalSurface, WindowedSurface};
use crate::error::Result;
use crate::ui::{App, render};

fn main() -> Result<()> {
    // 配置文件路径 (~/.config/tally/config.toml)
    let config = load_config(&config_path()?)?;
    let log_path = logging::init(&config.log)?;
    info!(log = %log_path.display(), "tally starting");

    let surface: Box<dyn DisplaySurface> = if config.presentation.fullscreen {
        Box::new(TerminalSurface::new(io::stdout()))
    } else {
        Box::new(WindowedSurface)
    };

    // 创建应用状态
    let mut app = App::new(config, surface);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    app.release_display();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(players = app.board.players.len(), "tally exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key) {
                break;
            }
        }
    }
    Ok(())
}
