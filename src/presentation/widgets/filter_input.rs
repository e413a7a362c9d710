use ratatui::{prelude::*, widgets::*};

use crate::domain::{text::tail_to_width, FilterField};

/// One bordered text input of the filter bar
#[derive(Clone, Debug)]
pub struct FilterInput<'a> {
    pub field: FilterField,
    pub value: &'a str,
    pub focused: bool,
    pub focused_style: Style,
    pub placeholder_style: Style,
}

impl<'a> FilterInput<'a> {
    pub fn new(field: FilterField, value: &'a str) -> Self {
        Self {
            field,
            value,
            focused: false,
            focused_style: Style::default().fg(Color::Cyan),
            placeholder_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn focused_style(mut self, style: Style) -> Self {
        self.focused_style = style;
        self
    }

    pub fn placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    fn content(&self, width: usize) -> Line<'a> {
        if self.value.is_empty() && !self.focused {
            return Line::styled(self.field.placeholder(), self.placeholder_style);
        }
        if !self.focused {
            return Line::raw(tail_to_width(self.value, width));
        }
        // keep one cell for the cursor
        let visible = tail_to_width(self.value, width.saturating_sub(1));
        Line::from(vec![
            Span::raw(visible),
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
        ])
    }
}

impl Widget for FilterInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        if self.focused {
            block = block.border_style(self.focused_style);
        }
        let width = block.inner(area).width as usize;
        Paragraph::new(self.content(width))
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn inner_line(input: FilterInput<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        input.render(area, &mut buf);
        (1..width - 1)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let input = FilterInput::new(FilterField::Country, "");
        assert_eq!(inner_line(input, 30), FilterField::Country.placeholder());
    }

    #[test]
    fn test_value_shown() {
        let input = FilterInput::new(FilterField::Name, "acme");
        assert_eq!(inner_line(input, 20), "acme");
    }

    #[test]
    fn test_long_value_keeps_tail_while_focused() {
        let input = FilterInput::new(FilterField::Name, "abcdefghij").focused(true);
        // 6 inner cells: 5 characters and the cursor
        assert_eq!(inner_line(input, 8), "fghij");
    }
}
