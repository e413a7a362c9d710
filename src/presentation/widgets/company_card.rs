use ratatui::{prelude::*, widgets::*};
use thousands::Separable;

use crate::domain::{text::truncate_to_width, Company};

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 6;

const MISSING: &str = "-";

#[derive(Clone, Debug)]
pub struct CompanyCard<'a> {
    pub company: &'a Company,
    pub highlight: bool,
    pub border_style: Style,
    pub title_style: Style,
    pub label_style: Style,
}

impl<'a> CompanyCard<'a> {
    pub fn new(company: &'a Company) -> Self {
        Self {
            company,
            highlight: false,
            border_style: Style::default(),
            title_style: Style::default().bold(),
            label_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    pub fn employees(&self) -> String {
        self.company
            .employees
            .map(|n| n.separate_with_commas())
            .unwrap_or_else(|| MISSING.to_string())
    }

    pub fn founded(&self) -> String {
        self.company
            .founded
            .map(|year| year.to_string())
            .unwrap_or_else(|| MISSING.to_string())
    }

    pub fn industry(&self) -> &str {
        self.company.industry.as_deref().unwrap_or(MISSING)
    }

    pub fn location(&self) -> String {
        let location = self.company.location();
        if location.is_empty() {
            MISSING.to_string()
        } else {
            location
        }
    }

    fn field(&self, label: &'static str, value: String, width: usize) -> Line<'static> {
        let value_width = width.saturating_sub(label.len());
        Line::from(vec![
            Span::styled(label, self.label_style),
            Span::raw(truncate_to_width(&value, value_width)),
        ])
    }
}

impl Widget for CompanyCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_type = if self.highlight {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        let inner_width = area.width.saturating_sub(4) as usize;
        let title = Span::styled(
            format!(" {} ", truncate_to_width(&self.company.name, inner_width)),
            self.title_style,
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(self.border_style)
            .padding(Padding::horizontal(1))
            .title(title);

        let lines = vec![
            self.field("Industry: ", self.industry().to_string(), inner_width),
            self.field("Location: ", self.location(), inner_width),
            self.field("Employees: ", self.employees(), inner_width),
            self.field("Founded: ", self.founded(), inner_width),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
