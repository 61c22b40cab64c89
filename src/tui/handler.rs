//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use chrono::NaiveDate;

use super::app::{ActiveDialog, App, FocusedPanel, HitTarget};
use super::dialogs;
use super::event::Event;
use crate::state::Command;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Key(_) | Event::Tick | Event::Resize(_, _) => {}
    }
    Ok(())
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.active_dialog() {
        ActiveDialog::Help => app.show_help = false,
        ActiveDialog::AddExpense => dialogs::expense::handle_key(app, key),
        ActiveDialog::AddEvent => dialogs::event::handle_key(app, key),
        ActiveDialog::None => handle_normal_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    app.clear_status();

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Char('a') => {
            app.open_expense_form();
            return;
        }
        KeyCode::Char('[') | KeyCode::PageUp => {
            app.change_month(Command::PrevMonth);
            return;
        }
        KeyCode::Char(']') | KeyCode::PageDown => {
            app.change_month(Command::NextMonth);
            return;
        }
        KeyCode::Char('t') => {
            app.change_month(Command::CurrentMonth);
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_panel_focus();
            return;
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Calendar => handle_calendar_key(app, key),
        FocusedPanel::Expenses => handle_expenses_key(app, key),
    }
}

fn handle_calendar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-7),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(7),
        KeyCode::Enter => {
            let date = app.selected_date;
            let anchor = day_anchor(app, date);
            app.select_day(date, anchor);
        }
        KeyCode::Char('e') => app.next_event(),
        KeyCode::Char('x') | KeyCode::Delete => app.delete_selected_event(),
        _ => {}
    }
}

fn handle_expenses_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_expense_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_expense_down(),
        KeyCode::Char('x') | KeyCode::Delete => app.delete_selected_expense(),
        _ => {}
    }
}

/// Handle a mouse event; only left clicks outside dialogs do anything
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || app.has_dialog() {
        return;
    }

    match app.hit_at(mouse.column, mouse.row) {
        Some(HitTarget::Event(id)) => {
            app.dispatch(Command::DeleteEvent(id));
        }
        Some(HitTarget::Day(date)) => {
            app.focused_panel = FocusedPanel::Calendar;
            let anchor = day_anchor(app, date);
            app.select_day(date, anchor);
        }
        Some(HitTarget::DeleteExpense(id)) => {
            app.dispatch(Command::DeleteExpense(id));
        }
        None => {}
    }
}

/// Screen position just right of a day cell, from the last drawn frame
fn day_anchor(app: &App, date: NaiveDate) -> Option<(u16, u16)> {
    app.hits.iter().find_map(|(rect, target)| match target {
        HitTarget::Day(d) if *d == date => Some((rect.right(), rect.y)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::config::settings::Settings;
    use crate::models::{CalendarEvent, MonthCursor};
    use crate::storage::Storage;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::layout::Rect;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_quit_key() {
        let (_temp_dir, storage) = create_test_storage();
        let mut app = App::new(&storage, Settings::default());

        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let (_temp_dir, storage) = create_test_storage();
        let mut app = App::new(&storage, Settings::default());

        handle_event(&mut app, key(KeyCode::Char('?'))).unwrap();
        assert_eq!(app.active_dialog(), ActiveDialog::Help);

        handle_event(&mut app, key(KeyCode::Char('z'))).unwrap();
        assert_eq!(app.active_dialog(), ActiveDialog::None);
    }

    #[test]
    fn test_month_keys() {
        let (_temp_dir, storage) = create_test_storage();
        let mut app = App::new(&storage, Settings::default());
        let start = app.state.cursor();

        handle_event(&mut app, key(KeyCode::Char(']'))).unwrap();
        assert_eq!(app.state.cursor(), start.next());

        handle_event(&mut app, key(KeyCode::Char('['))).unwrap();
        handle_event(&mut app, key(KeyCode::Char('['))).unwrap();
        assert_eq!(app.state.cursor(), start.prev());

        handle_event(&mut app, key(KeyCode::Char('t'))).unwrap();
        assert_eq!(app.state.cursor(), MonthCursor::current());
    }

    #[test]
    fn test_enter_opens_event_form() {
        let (_temp_dir, storage) = create_test_storage();
        let mut app = App::new(&storage, Settings::default());

        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.active_dialog(), ActiveDialog::AddEvent);

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.active_dialog(), ActiveDialog::None);
    }

    #[test]
    fn test_click_day_anchors_form() {
        let (_temp_dir, storage) = create_test_storage();
        let mut app = App::new(&storage, Settings::default());
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        app.hits.push((Rect::new(10, 5, 8, 3), HitTarget::Day(date)));

        handle_event(&mut app, click(12, 6)).unwrap();

        assert_eq!(app.selected_date, date);
        let form = app.state.ui().event_form.unwrap();
        assert_eq!(form.date, date);
        assert_eq!(form.anchor, Some((18, 5)));
    }

    #[test]
    fn test_click_event_deletes_without_opening_form() {
        let (_temp_dir, storage) = create_test_storage();
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let event = CalendarEvent::new(date, "Dentist", "#fbb6ce");
        let id = event.id;
        storage.events.insert(event).unwrap();

        let mut app = App::new(&storage, Settings::default());
        app.hits.push((Rect::new(10, 5, 8, 3), HitTarget::Day(date)));
        app.hits.push((Rect::new(10, 6, 8, 1), HitTarget::Event(id)));

        handle_event(&mut app, click(11, 6)).unwrap();

        assert_eq!(storage.events.count().unwrap(), 0);
        assert_eq!(app.active_dialog(), ActiveDialog::None);
    }

    #[test]
    fn test_clicks_ignored_while_dialog_open() {
        let (_temp_dir, storage) = create_test_storage();
        let mut app = App::new(&storage, Settings::default());
        app.open_expense_form();
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        app.hits.push((Rect::new(0, 0, 5, 5), HitTarget::Day(date)));

        handle_event(&mut app, click(1, 1)).unwrap();
        assert_eq!(app.active_dialog(), ActiveDialog::AddExpense);
    }
}
