use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Running status badge style
pub fn running_style() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

/// Pending status badge style
pub fn pending_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Done/completed task style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Over-estimate warning style
pub fn over_estimate_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
}

/// Early finish note
pub fn early_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Late finish note
pub fn late_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Stat card value colors: allocated, remaining, completion
pub fn stat_allocated_style() -> Style {
    Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD)
}

pub fn stat_remaining_style() -> Style {
    Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD)
}

pub fn stat_completion_style() -> Style {
    Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD)
}

/// Gauge colors for the progress chart
pub fn completed_gauge_style() -> Style {
    Style::default().fg(Color::Green).bg(Color::Black)
}

pub fn pending_gauge_style() -> Style {
    Style::default().fg(Color::Blue).bg(Color::Black)
}

pub fn unallocated_gauge_style() -> Style {
    Style::default().fg(Color::DarkGray).bg(Color::Black)
}

/// Highlighted budget option
pub fn budget_selected_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

/// Unselected budget option
pub fn budget_option_style() -> Style {
    Style::default().fg(Color::Gray)
}
