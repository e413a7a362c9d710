//! Company list component
//!
//! Lays the projected companies out as a grid of cards followed by one status row.
//! The status row doubles as the scroll sentinel: after drawing, the component reports
//! where it sits relative to the viewport so the observer can decide whether to load
//! the next page.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{
        sentinel::{RowSpan, SentinelLayout},
        AppState,
    },
    presentation::widgets::{CompanyCard, CARD_HEIGHT},
};

/// Two columns of cards from this width on
pub const TWO_COLUMN_WIDTH: u16 = 80;

const SENTINEL_HEIGHT: u32 = 1;

/// Number of card columns for a list `width` cells wide
pub fn columns_for(width: u16) -> usize {
    if width >= TWO_COLUMN_WIDTH {
        2
    } else {
        1
    }
}

/// Text of the status row, if any.
///
/// One line at a time, first match wins: the error, "Loading...", then the empty
/// state, then exhaustion. An exhausted filter with no results shows only
/// "No companies found."; "No more results." is reserved for a non-empty list.
pub fn status_line(state: &AppState) -> Option<String> {
    let pagination = &state.pagination;
    if let Some(error) = pagination.error() {
        Some(format!("{error} (press r to retry)"))
    } else if pagination.is_loading() {
        Some("Loading...".to_string())
    } else if pagination.is_empty_result() {
        Some("No companies found.".to_string())
    } else if !pagination.has_more() {
        Some("No more results.".to_string())
    } else {
        None
    }
}

/// Scrollable card grid. Only the scroll offset is kept between frames.
#[derive(Debug, Clone, Default)]
pub struct CompanyListComponent {
    offset: u32,
}

impl CompanyListComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// First content row shown at the top of the viewport
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Render the list and return the sentinel geometry, or `None` when there is no room
    pub fn view(&mut self, state: &AppState, frame: &mut Frame, area: Rect) -> Option<SentinelLayout> {
        if area.width == 0 || area.height == 0 {
            return None;
        }

        let columns = columns_for(area.width);
        let count = state.list.projection.len();
        let card_height = u32::from(CARD_HEIGHT);
        let rows = count.div_ceil(columns) as u32;
        let sentinel = RowSpan::new(rows * card_height, SENTINEL_HEIGHT);
        let height = u32::from(area.height);

        self.scroll(state.list.selected, count, columns, sentinel, height);
        let viewport = RowSpan::new(self.offset, height);

        let styles = &state.config.config.styles;
        let column_width = area.width / columns as u16;
        for (index, company) in state.visible_companies().enumerate() {
            let top = (index / columns) as u32 * card_height;
            if top + card_height <= viewport.top {
                continue;
            }
            if top >= viewport.bottom() {
                break;
            }

            let column = (index % columns) as u16;
            let width = if column + 1 == columns as u16 {
                area.width - column * column_width
            } else {
                column_width
            };
            let selected = state.list.selected == Some(index);
            let border_style = if selected {
                styles.get_or_default("card_selected")
            } else {
                styles.get_or_default("card")
            };
            let card = CompanyCard::new(company)
                .highlight(selected)
                .border_style(border_style)
                .title_style(styles.get_or_default("card_title"))
                .label_style(styles.get_or_default("muted"));
            render_clipped(
                card,
                area.x + column * column_width,
                width,
                RowSpan::new(top, card_height),
                viewport,
                area,
                frame.buffer_mut(),
            );
        }

        if let Some(text) = status_line(state) {
            if sentinel.top >= viewport.top && sentinel.top < viewport.bottom() {
                let style = if state.pagination.error().is_some() {
                    styles.get_or_default("error")
                } else {
                    styles.get_or_default("status")
                };
                let y = area.y + (sentinel.top - viewport.top) as u16;
                let row = Rect::new(area.x, y, area.width, 1);
                frame.render_widget(
                    Paragraph::new(text).style(style).alignment(Alignment::Center),
                    row,
                );
            }
        }

        Some(SentinelLayout { viewport, sentinel })
    }

    /// Keep the selected card in view. On the last row the status row is revealed too.
    fn scroll(
        &mut self,
        selected: Option<usize>,
        count: usize,
        columns: usize,
        sentinel: RowSpan,
        height: u32,
    ) {
        let card_height = u32::from(CARD_HEIGHT);
        if let Some(selected) = selected.filter(|&i| i < count) {
            let row = selected / columns;
            let top = row as u32 * card_height;
            let bottom = if row == (count - 1) / columns {
                sentinel.bottom()
            } else {
                top + card_height
            };

            if top < self.offset {
                self.offset = top;
            } else if bottom > self.offset + height {
                self.offset = (bottom - height).min(top);
            }
        }

        let max_offset = sentinel.bottom().saturating_sub(height);
        self.offset = self.offset.min(max_offset);
    }
}

/// Render `widget` as if placed at content rows `span`, drawing only what falls in
/// `viewport`
fn render_clipped<W: Widget>(
    widget: W,
    x: u16,
    width: u16,
    span: RowSpan,
    viewport: RowSpan,
    area: Rect,
    buf: &mut Buffer,
) {
    let scratch_area = Rect::new(0, 0, width, span.height as u16);
    let mut scratch = Buffer::empty(scratch_area);
    widget.render(scratch_area, &mut scratch);

    let first = span.top.max(viewport.top);
    let last = span.bottom().min(viewport.bottom());
    for row in first..last {
        let src_y = (row - span.top) as u16;
        let dst_y = area.y + (row - viewport.top) as u16;
        for dx in 0..width {
            buf[(x + dx, dst_y)] = scratch[(dx, src_y)].clone();
        }
    }
}
