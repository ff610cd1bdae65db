use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => app.on_sale(),
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'s') && !has_ctrl(key) => app.on_share(),
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'q') && !has_ctrl(key) => {
            app.request_quit()
        }
        KeyCode::Esc => {
            // First Escape clears a visible notice
            if app.notice().is_visible() {
                app.dismiss_notice();
            } else {
                app.request_quit();
            }
        }
        _ => {}
    }
}

fn has_ctrl(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && has_ctrl(key)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
