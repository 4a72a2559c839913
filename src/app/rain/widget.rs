use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::RainState;

/// Terminal columns per grid cell; two make a cell read roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Paints the rain grid cell-by-cell into the frame buffer, clipped to the
/// render area.
pub struct RainGrid<'a> {
    state: &'a RainState,
}

impl<'a> RainGrid<'a> {
    pub fn new(state: &'a RainState) -> Self {
        Self { state }
    }
}

impl Widget for RainGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let config = self.state.config();
        for row in 0..config.rows.min(area.height) {
            for col in 0..config.cols {
                let x = area.x + col * CELL_WIDTH;
                if x >= area.right() {
                    break;
                }
                let width = CELL_WIDTH.min(area.right() - x) as usize;
                let style = Style::default().bg(self.state.cell_color(row, col));
                buf.set_string(x, area.y + row, &"  "[..width], style);
            }
        }
    }
}
