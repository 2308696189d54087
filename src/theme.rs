use ratatui::style::Color;

// Centralized theme colors. Named colors only, so the desktop reads the same
// on 16-color terminals.

// Desktop background
pub fn desktop_bg() -> Color {
    Color::Indexed(24)
}

// Menu bar
pub fn menu_bar_bg() -> Color {
    Color::Gray
}
pub fn menu_bar_fg() -> Color {
    Color::Black
}
pub fn menu_bar_hint_fg() -> Color {
    Color::Blue
}

// Dock
pub fn dock_bg() -> Color {
    Color::DarkGray
}
pub fn dock_fg() -> Color {
    Color::White
}
pub fn dock_indicator() -> Color {
    Color::White
}
pub fn dock_idle_fg() -> Color {
    Color::Gray
}

// Window chrome
pub fn title_bar_active_bg() -> Color {
    Color::Gray
}
pub fn title_bar_inactive_bg() -> Color {
    Color::DarkGray
}
pub fn title_fg() -> Color {
    Color::Black
}
pub fn border_active() -> Color {
    Color::White
}
pub fn border_inactive() -> Color {
    Color::DarkGray
}
pub fn window_bg() -> Color {
    Color::Black
}
pub fn window_fg() -> Color {
    Color::White
}

// Traffic lights
pub fn close_button() -> Color {
    Color::Red
}
pub fn minimize_button() -> Color {
    Color::Yellow
}
pub fn maximize_button() -> Color {
    Color::Green
}

// Content accents
pub fn accent() -> Color {
    Color::Cyan
}
pub fn muted() -> Color {
    Color::DarkGray
}
pub fn bubble_bg() -> Color {
    Color::Blue
}
pub fn selection_bg() -> Color {
    Color::Blue
}
pub fn link() -> Color {
    Color::LightBlue
}
pub fn divider() -> Color {
    Color::DarkGray
}
pub fn divider_active() -> Color {
    Color::Cyan
}
