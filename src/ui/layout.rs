use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    pub list_area: Rect,
    pub budget_area: Rect,
    pub progress_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Header: date title and stat cards
/// - Main area: task list (65%) | budget selector above progress chart (35%)
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(5), // Header
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Task list
            Constraint::Percentage(35), // Side column
        ])
        .split(main_chunks[2]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Budget selector
            Constraint::Min(0),    // Progress chart
        ])
        .split(content[1]);

    MainLayout {
        keybindings_area: main_chunks[0],
        header_area: main_chunks[1],
        list_area: content[0],
        budget_area: side[0],
        progress_area: side[1],
    }
}

/// Split the header into three equal stat cards
pub fn split_stat_cards(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Create centered modal area
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(height),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
