//! UiFrame: a thin wrapper around a ratatui buffer that clamps drawing to the
//! visible area.
//!
//! Windows render into an offscreen buffer sized to their own frame and are
//! then composited onto the terminal with [`UiFrame::blit_from_signed`]. That
//! path tolerates negative origins, which is how a window dragged partly off
//! the left or top edge keeps drawing correctly.
use crate::window::Geometry;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn fill(&mut self, area: Rect, style: Style) {
        let Some(clipped) = self.clip_rect(area) else {
            return;
        };
        for y in clipped.y..clipped.y.saturating_add(clipped.height) {
            for x in clipped.x..clipped.x.saturating_add(clipped.width) {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_style(style);
                }
            }
        }
    }

    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style) {
        safe_set_string(self.buffer, self.area, x, y, text, style);
    }

    /// Copy `src` (whose area starts at 0,0) onto this frame at `dest`,
    /// dropping every cell that falls outside the frame.
    pub fn blit_from_signed(&mut self, src: &Buffer, dest: Geometry) {
        let frame_x0 = self.area.x as i32;
        let frame_y0 = self.area.y as i32;
        let frame_x1 = frame_x0 + self.area.width as i32;
        let frame_y1 = frame_y0 + self.area.height as i32;
        for sy in 0..dest.height as i32 {
            let dy = dest.y + sy;
            if dy < frame_y0 || dy >= frame_y1 {
                continue;
            }
            for sx in 0..dest.width as i32 {
                let dx = dest.x + sx;
                if dx < frame_x0 || dx >= frame_x1 {
                    continue;
                }
                if let (Some(src_cell), Some(dst_cell)) = (
                    src.cell((sx as u16, sy as u16)),
                    self.buffer.cell_mut((dx as u16, dy as u16)),
                ) {
                    *dst_cell = src_cell.clone();
                }
            }
        }
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    let bounds = bounds.intersection(buffer.area);
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

/// Greedy word wrap by character count. Words longer than `width` are split.
pub(crate) fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            lines.push(word.drain(..width).collect());
        }
        let word_len = word.len();
        if word_len == 0 {
            continue;
        }
        let needed = if current_len == 0 {
            word_len
        } else {
            current_len + 1 + word_len
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word);
        current_len += word_len;
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    fn filled(area: Rect, symbol: &str) -> Buffer {
        let mut buf = Buffer::empty(area);
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(symbol);
                }
            }
        }
        buf
    }

    #[test]
    fn blit_from_signed_clips_negative_offsets() {
        let frame_area = Rect::new(0, 0, 4, 2);
        let mut dest = Buffer::empty(frame_area);
        let mut frame = UiFrame::from_parts(frame_area, &mut dest);
        let src = filled(Rect::new(0, 0, 3, 2), "#");
        frame.blit_from_signed(&src, Geometry::new(-1, 0, 3, 2));
        let buffer = frame.buffer;
        assert_eq!(buffer.cell((0, 0)).unwrap().symbol(), "#");
        assert_eq!(buffer.cell((1, 0)).unwrap().symbol(), "#");
        assert_eq!(buffer.cell((2, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn blit_from_signed_ignores_non_overlapping() {
        let frame_area = Rect::new(0, 0, 3, 3);
        let mut dest = Buffer::empty(frame_area);
        let mut frame = UiFrame::from_parts(frame_area, &mut dest);
        let src = filled(Rect::new(0, 0, 2, 2), "#");
        frame.blit_from_signed(&src, Geometry::new(-5, -5, 2, 2));
        let buffer = frame.buffer;
        for y in 0..frame_area.height {
            for x in 0..frame_area.width {
                assert_eq!(buffer.cell((x, y)).unwrap().symbol(), " ");
            }
        }
    }

    #[test]
    fn truncate_to_width_short_and_long() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
    }

    #[test]
    fn safe_set_string_writes_within_bounds() {
        let bounds = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(bounds);
        safe_set_string(&mut buf, bounds, 2, 0, "hello", Style::default());
        assert_eq!(buf.cell((2, 0)).unwrap().symbol(), "h");
        assert_eq!(buf.cell((4, 0)).unwrap().symbol(), "l");
        // outside bounds is ignored
        safe_set_string(&mut buf, bounds, 9, 0, "x", Style::default());
    }

    #[test]
    fn wrap_words_breaks_on_spaces() {
        let lines = wrap_words("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn wrap_words_splits_overlong_words() {
        let lines = wrap_words("abcdefghij xy", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn wrap_words_zero_width_is_empty() {
        assert!(wrap_words("anything", 0).is_empty());
    }
}
