use crate::ui::app::App;
use crate::ui::posts::DraftEdit;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key press to the layer that currently has focus:
/// delete confirmation, then the modal, then the card list.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.posts().is_confirming_delete() {
        handle_confirm_key(app, key);
        return;
    }

    if app.posts().modal.is_open() {
        handle_modal_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_delete();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.submit();
        return;
    }

    match key.code {
        KeyCode::Esc => app.close_modal(),
        KeyCode::Tab => app.edit_draft(DraftEdit::NextField),
        KeyCode::BackTab => app.edit_draft(DraftEdit::PreviousField),
        KeyCode::Enter => app.edit_draft(DraftEdit::Newline),
        KeyCode::Backspace => app.edit_draft(DraftEdit::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_draft(DraftEdit::Insert(ch));
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char('n') => app.open_create(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_selected(),
        KeyCode::Char('p') => {
            app.publish_selected();
        }
        KeyCode::Char('d') => app.request_delete_selected(),
        KeyCode::Char('r') => {
            app.reload();
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
