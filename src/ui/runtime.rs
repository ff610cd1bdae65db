use crate::clipboard::ClipboardShareTarget;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use crossterm::event::{MouseButton, MouseEventKind};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Instant;

pub fn run(config: Config) -> anyhow::Result<()> {
    let catalog = Arc::new(config.catalog()?);
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new(
        catalog,
        Box::new(ClipboardShareTarget::new()),
        config.ui.notice_duration(),
    );

    let (mut terminal, guard) = setup_terminal().context("setting up terminal")?;
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(first = %app.session().active_item().name, "Session started");

    loop {
        if app.take_dirty() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    app.on_mouse_click(mouse.column, mouse.row);
                }
            }
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    let state = app.session();
    tracing::info!(
        sold = state.sold_count(),
        revenue = state.revenue(),
        "Session ended"
    );
    drop(guard);
    Ok(())
}
