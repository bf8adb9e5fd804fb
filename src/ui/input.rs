//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, AppMode};
use crate::models::{DisplayMode, Scoreboard, View};

/// 根据当前模式、界面和按键获取对应的 Action
pub fn get_action(mode: &AppMode, board: &Scoreboard, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Confirm(_) => match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Submit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
        AppMode::Normal => match (board.view, board.display_mode) {
            (View::Setup, _) => setup_action(key),
            (View::Counter, DisplayMode::Normal) => counter_action(key),
            (View::Counter, DisplayMode::Presentation) => presentation_action(key),
        },
    }
}

fn setup_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::AddPlayer),
        KeyCode::Tab => Some(Action::StartGame),
        KeyCode::Up => Some(Action::MoveSelectionUp),
        KeyCode::Down => Some(Action::MoveSelectionDown),
        KeyCode::Delete => Some(Action::RemoveSelected),
        KeyCode::Backspace => Some(Action::DeleteChar),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

/// 计分和选择在两种显示模式下通用
fn scoring_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') | KeyCode::Right => {
            Some(Action::Increment)
        }
        KeyCode::Char('-') | KeyCode::Char('h') | KeyCode::Left => Some(Action::Decrement),
        KeyCode::Char('t') => Some(Action::TogglePresentation),
        _ => None,
    }
}

fn counter_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::RequestReset),
        KeyCode::Char('p') => Some(Action::BackToSetup),
        _ => scoring_action(key),
    }
}

// 电视模式下隐藏返回、重置和退出
fn presentation_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Esc => Some(Action::ExitPresentation),
        _ => scoring_action(key),
    }
}

/// Ctrl+C 在任何界面下都退出，不写入输入框
fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if is_interrupt(&key) {
        return app.dispatch(Action::Quit);
    }
    match get_action(&app.mode, &app.board, key.code) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::ConfirmAction;

    fn counter_board(display_mode: DisplayMode) -> Scoreboard {
        let mut board = Scoreboard::new();
        board.add_player("Alice");
        board.start_game();
        board.display_mode = display_mode;
        board
    }

    #[test]
    fn test_setup_keys_edit_buffer() {
        let board = Scoreboard::new();
        let mode = AppMode::Normal;
        assert_eq!(get_action(&mode, &board, KeyCode::Char('q')), Some(Action::Input('q')));
        assert_eq!(get_action(&mode, &board, KeyCode::Char('+')), Some(Action::Input('+')));
        assert_eq!(get_action(&mode, &board, KeyCode::Enter), Some(Action::AddPlayer));
        assert_eq!(get_action(&mode, &board, KeyCode::Tab), Some(Action::StartGame));
        assert_eq!(get_action(&mode, &board, KeyCode::Delete), Some(Action::RemoveSelected));
        assert_eq!(get_action(&mode, &board, KeyCode::Esc), Some(Action::Quit));
    }

    #[test]
    fn test_counter_keys() {
        let board = counter_board(DisplayMode::Normal);
        let mode = AppMode::Normal;
        assert_eq!(get_action(&mode, &board, KeyCode::Char('+')), Some(Action::Increment));
        assert_eq!(get_action(&mode, &board, KeyCode::Char('-')), Some(Action::Decrement));
        assert_eq!(get_action(&mode, &board, KeyCode::Char('r')), Some(Action::RequestReset));
        assert_eq!(get_action(&mode, &board, KeyCode::Char('p')), Some(Action::BackToSetup));
        assert_eq!(get_action(&mode, &board, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(
            get_action(&mode, &board, KeyCode::Char('t')),
            Some(Action::TogglePresentation)
        );
    }

    #[test]
    fn test_presentation_hides_navigation_and_reset() {
        let board = counter_board(DisplayMode::Presentation);
        let mode = AppMode::Normal;
        assert_eq!(get_action(&mode, &board, KeyCode::Char('p')), None);
        assert_eq!(get_action(&mode, &board, KeyCode::Char('r')), None);
        assert_eq!(get_action(&mode, &board, KeyCode::Char('q')), None);
        assert_eq!(get_action(&mode, &board, KeyCode::Esc), Some(Action::ExitPresentation));
        assert_eq!(get_action(&mode, &board, KeyCode::Up), Some(Action::MoveSelectionUp));
        assert_eq!(get_action(&mode, &board, KeyCode::Char('+')), Some(Action::Increment));
    }

    #[test]
    fn test_ctrl_c_quits_instead_of_typing() {
        let mut app = App::new(
            crate::config::Config::default(),
            Box::new(crate::display::WindowedSurface),
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key_event(&mut app, ctrl_c));
        assert!(app.input_buffer.is_empty());

        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!handle_key_event(&mut app, plain_c));
        assert_eq!(app.input_buffer, "c");
    }

    #[test]
    fn test_confirm_keys() {
        let board = counter_board(DisplayMode::Normal);
        let mode = AppMode::Confirm(ConfirmAction::ResetScores);
        assert_eq!(get_action(&mode, &board, KeyCode::Char('y')), Some(Action::Submit));
        assert_eq!(get_action(&mode, &board, KeyCode::Char('N')), Some(Action::Cancel));
        assert_eq!(get_action(&mode, &board, KeyCode::Esc), Some(Action::Cancel));
        assert_eq!(get_action(&mode, &board, KeyCode::Char('+')), None);
    }
}
