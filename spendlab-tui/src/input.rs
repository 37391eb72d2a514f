//! Keyboard input dispatch — overlays first, then global keys, then the
//! focused control.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Control, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Notes => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('n')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.focused = Control::StartYear; return; }
        KeyCode::Char('2') => { app.focused = Control::EndYear; return; }
        KeyCode::Char('3') => { app.focused = Control::ChartKind; return; }
        KeyCode::Char('4') => { app.focused = Control::ShowTable; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focused = app.focused.prev();
            } else {
                app.focused = app.focused.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.focused = app.focused.prev();
            return;
        }
        KeyCode::Char('g') => {
            app.chart_kind = app.chart_kind.toggle();
            app.set_status(format!("Chart: {}", app.chart_kind.label()));
            return;
        }
        KeyCode::Char('t') => {
            app.show_table = !app.show_table;
            return;
        }
        KeyCode::Char('n') => {
            app.overlay = Overlay::Notes;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        _ => {}
    }

    // 3. Table scroll (only meaningful while the table is visible).
    if app.show_table {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let rows = app.filtered().len();
                if app.table_scroll + 1 < rows {
                    app.table_scroll += 1;
                }
                return;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.table_scroll = app.table_scroll.saturating_sub(1);
                return;
            }
            _ => {}
        }
    }

    // 4. Focused-control keys.
    handle_control_key(app, key);
}

fn handle_control_key(app: &mut AppState, key: KeyEvent) {
    match app.focused {
        Control::StartYear => match key.code {
            KeyCode::Char('h') | KeyCode::Left => app.adjust_year_lo(-1),
            KeyCode::Char('l') | KeyCode::Right => app.adjust_year_lo(1),
            KeyCode::Home => app.snap_focused_year(true),
            KeyCode::End => app.snap_focused_year(false),
            _ => {}
        },
        Control::EndYear => match key.code {
            KeyCode::Char('h') | KeyCode::Left => app.adjust_year_hi(-1),
            KeyCode::Char('l') | KeyCode::Right => app.adjust_year_hi(1),
            KeyCode::Home => app.snap_focused_year(true),
            KeyCode::End => app.snap_focused_year(false),
            _ => {}
        },
        Control::ChartKind => match key.code {
            KeyCode::Char('h')
            | KeyCode::Char('l')
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char(' ')
            | KeyCode::Enter => {
                app.chart_kind = app.chart_kind.toggle();
            }
            _ => {}
        },
        Control::ShowTable => match key.code {
            KeyCode::Char('h')
            | KeyCode::Char('l')
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char(' ')
            | KeyCode::Enter => {
                app.show_table = !app.show_table;
            }
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spendlab_core::sample::sample_dataset;
    use spendlab_core::ChartKind;
    use std::path::PathBuf;

    fn app() -> AppState {
        AppState::new(sample_dataset(), "sample".into(), PathBuf::from("."))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn any_key_dismisses_welcome() {
        let mut app = app();
        app.overlay = Overlay::Welcome;
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.overlay, Overlay::None);
        // The key is consumed, not forwarded.
        assert!(app.running);
    }

    #[test]
    fn g_toggles_chart_kind() {
        let mut app = app();
        assert_eq!(app.chart_kind, ChartKind::Line);
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.chart_kind, ChartKind::Scatter);
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.chart_kind, ChartKind::Line);
    }

    #[test]
    fn adjust_keys_hit_the_focused_bound() {
        let mut app = app();
        app.focused = Control::StartYear;
        handle_key(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.year_lo, 2014);

        handle_key(&mut app, press(KeyCode::Char('2')));
        handle_key(&mut app, press(KeyCode::Char('h')));
        assert_eq!(app.year_hi, 2023);
    }

    #[test]
    fn table_scroll_only_when_visible() {
        let mut app = app();
        app.focused = Control::ChartKind;
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.table_scroll, 0);

        app.show_table = true;
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.table_scroll, 1);
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.table_scroll, 0);
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn notes_overlay_closes_on_escape_only() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('n')));
        assert_eq!(app.overlay, Overlay::Notes);
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.overlay, Overlay::Notes);
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
    }
}
