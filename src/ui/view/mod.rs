//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{App, AppMode, ConfirmAction};
use crate::models::{Player, View};
use components::{BIG_DIGIT_HEIGHT, big_digits, render_dialog_framework, render_input_widget};
use layouts::{centered_rect, grid_cells};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    match app.board.view {
        View::Setup => render_setup(frame, app),
        View::Counter if app.board.is_presentation() => render_presentation(frame, app),
        View::Counter => render_counter(frame, app),
    }

    // 渲染弹窗
    if let AppMode::Confirm(action) = &app.mode {
        render_confirm_dialog(frame, action);
    }
}

fn render_title(frame: &mut Frame, title: &str, area: Rect) {
    let title = Paragraph::new(title.to_uppercase())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_help(frame: &mut Frame, app: &App, help_text: &str, area: Rect) {
    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn selected_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

// ============ 录入界面 ============

fn render_setup(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 输入
            Constraint::Min(3),    // 名单
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, &app.config.title, chunks[0]);
    render_input_widget(
        frame,
        chunks[1],
        "PLAYER NAME",
        &app.input_buffer,
        true,
        Color::Yellow,
    );
    render_roster(frame, app, chunks[2]);

    let help_text = if app.board.players.is_empty() {
        "[Enter] add  [Esc] quit"
    } else {
        "[Enter] add  [↑/↓] select  [Del] remove  [Tab] START  [Esc] quit"
    };
    render_help(frame, app, help_text, chunks[3]);
}

fn render_roster(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("PLAYERS").borders(Borders::ALL);

    if app.board.players.is_empty() {
        let hint = Paragraph::new("ADD PLAYERS")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = app
        .board
        .players
        .iter()
        .enumerate()
        .map(|(i, player)| {
            let style = if i == app.selected_index {
                selected_style()
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            ListItem::new(Line::from(Span::styled(player.name().to_uppercase(), style)))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}

// ============ 计分界面 ============

fn render_counter(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(3),    // 计分列表
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, &app.config.title, chunks[0]);

    let name_width = app
        .board
        .players
        .iter()
        .map(|p| p.name().chars().count())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = app
        .board
        .players
        .iter()
        .enumerate()
        .map(|(i, player)| {
            let name_style = if i == app.selected_index {
                selected_style()
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<width$}", player.name().to_uppercase(), width = name_width),
                    name_style,
                ),
                Span::styled("   [-] ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{:>4}", player.score()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(" [+]", Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    let list = List::new(items).block(Block::default().title("SCORES").borders(Borders::ALL));
    frame.render_stateful_widget(list, chunks[1], &mut state);

    render_help(
        frame,
        app,
        "[↑/↓] select  [+/-] score  [p] players  [r] reset  [t] TV  [q] quit",
        chunks[2],
    );
}

// ============ 电视模式 ============

fn render_presentation(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 退出提示
            Constraint::Min(3),    // 卡片网格
            Constraint::Length(1), // 页脚
        ])
        .split(frame.area());

    let exit_hint = Paragraph::new("[Esc] EXIT")
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(exit_hint, chunks[0]);

    let cells = grid_cells(
        chunks[1],
        app.board.players.len(),
        app.config.presentation.card_width,
    );
    for (i, (player, cell)) in app.board.players.iter().zip(cells).enumerate() {
        render_card(frame, player, i == app.selected_index, cell);
    }

    let footer = Paragraph::new("AIRPLAY MODE ACTIVE")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(footer, chunks[2]);
}

fn render_card(frame: &mut Frame, player: &Player, selected: bool, area: Rect) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            player.name().to_uppercase(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    // 空间不足时退回普通数字
    if inner.height >= BIG_DIGIT_HEIGHT + 2 {
        lines.extend(big_digits(player.score()).into_iter().map(Line::from));
    } else {
        lines.push(Line::from(Span::styled(
            player.score().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }

    let top_pad = inner.height.saturating_sub(lines.len() as u16) / 2;
    let card = Paragraph::new(lines).alignment(Alignment::Center);
    let content = Rect {
        y: inner.y + top_pad,
        height: inner.height - top_pad,
        ..inner
    };
    frame.render_widget(card, content);
}

// ============ 确认框 ============

fn render_confirm_dialog(frame: &mut Frame, action: &ConfirmAction) {
    let area = centered_rect(50, 20, frame.area());
    let inner = render_dialog_framework(frame, area, "CONFIRM");

    let dialog = Paragraph::new(format!("{}\n\n[y] yes  [n] no", action.prompt()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    frame.render_widget(dialog, inner);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::Config;
    use crate::display::WindowedSurface;
    use crate::ui::actions::Action;

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app_with_players(names: &[&str]) -> App {
        let mut app = App::new(Config::default(), Box::new(WindowedSurface));
        for name in names {
            app.board.add_player(name);
        }
        app
    }

    #[test]
    fn test_empty_setup_shows_hint() {
        let mut app = app_with_players(&[]);
        let screen = draw(&mut app, 80, 20);
        assert!(screen.contains("WHO'S JOKING?"));
        assert!(screen.contains("ADD PLAYERS"));
        assert!(!screen.contains("START"));
    }

    #[test]
    fn test_very_long_name_buffer() {
        let mut app = app_with_players(&[]);
        app.input_buffer = "a".repeat(usize::from(u16::MAX) + 10);
        let screen = draw(&mut app, 80, 20);
        assert!(screen.contains("PLAYER NAME"));
    }

    #[test]
    fn test_setup_lists_players_uppercase() {
        let mut app = app_with_players(&["Alice", "Bob"]);
        let screen = draw(&mut app, 80, 20);
        assert!(screen.contains("ALICE"));
        assert!(screen.contains("BOB"));
        assert!(screen.contains("START"));
    }

    #[test]
    fn test_counter_shows_scores() {
        let mut app = app_with_players(&["Alice", "Bob"]);
        app.dispatch(Action::StartGame);
        app.dispatch(Action::MoveSelectionDown);
        app.dispatch(Action::Increment);
        app.dispatch(Action::Increment);

        let screen = draw(&mut app, 80, 20);
        assert!(screen.contains("SCORES"));
        assert!(screen.contains("BOB     [-]    2 [+]"));
        assert!(screen.contains("[r] reset"));
    }

    #[test]
    fn test_presentation_layout() {
        let mut app = app_with_players(&["Alice", "Bob"]);
        app.dispatch(Action::StartGame);
        app.dispatch(Action::TogglePresentation);

        let screen = draw(&mut app, 80, 24);
        assert!(screen.contains("AIRPLAY MODE ACTIVE"));
        assert!(screen.contains("ALICE"));
        assert!(!screen.contains("[r] reset"));
    }

    #[test]
    fn test_confirm_dialog() {
        let mut app = app_with_players(&["Alice"]);
        app.dispatch(Action::StartGame);
        app.dispatch(Action::RequestReset);

        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains("RESET ALL PLAYERS' SCORES?"));
    }
}
