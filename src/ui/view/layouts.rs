//! 布局计算

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 居中弹窗区域
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// 电视模式网格列数：尽量多放列，但不超过卡片数
pub fn grid_columns(width: u16, card_width: u16, count: usize) -> usize {
    let fit = usize::from(width / card_width.max(1)).max(1);
    fit.min(count.max(1))
}

/// 按行优先顺序切分网格单元格
pub fn grid_cells(area: Rect, count: usize, card_width: u16) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let columns = grid_columns(area.width, card_width, count);
    let rows = count.div_ceil(columns);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}
