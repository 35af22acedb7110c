use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Picker layout: search box, session list with a detail pane, status bar
pub struct AppLayout {
    pub search_area: Rect,
    pub list_area: Rect,
    pub detail_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// - Search input: 3 rows at the top
    /// - Session list: 65% width, detail pane: 35% width
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search box
                Constraint::Min(3),    // List + detail
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(vertical_chunks[1]);

        Self {
            search_area: vertical_chunks[0],
            list_area: horizontal_chunks[0],
            detail_area: horizontal_chunks[1],
            status_area: vertical_chunks[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_correctly() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));

        assert_eq!(layout.search_area.height, 3);
        assert_eq!(layout.search_area.y, 0);

        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);

        assert_eq!(layout.list_area.height, 26);
        assert_eq!(layout.list_area.width, 65);
        assert_eq!(layout.detail_area.width, 35);
    }

    #[test]
    fn test_layout_minimum_height() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 7));

        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.list_area.height, 3);
        assert_eq!(layout.detail_area.height, 3);
    }
}
