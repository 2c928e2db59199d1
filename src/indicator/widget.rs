//! ratatui renderer for the indicator card.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::icons::get_icons;
use crate::theme::{Theme, BORDER_ASCII};

use super::animation::pulse_glyph;
use super::state::{Emphasis, IndicatorView};

/// Columns kept free at the right of the title row: marker glyph plus a space.
const MARKER_WIDTH: u16 = 2;

/// Widget that draws one [`IndicatorView`] into a 4-row card.
pub struct IndicatorWidget<'a> {
    view: &'a IndicatorView,
    theme: Theme,
    unicode: bool,
    frame: usize,
}

impl<'a> IndicatorWidget<'a> {
    pub fn new(view: &'a IndicatorView, theme: Theme, unicode: bool) -> Self {
        Self {
            view,
            theme,
            unicode,
            frame: 0,
        }
    }

    /// Select the liveness-marker animation frame.
    pub fn frame(mut self, frame: usize) -> Self {
        self.frame = frame;
        self
    }
}

impl Widget for IndicatorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.theme.palette();
        let icons = get_icons(self.unicode);
        let glyph = icons.glyph(self.view.icon());
        let dim = Style::default().fg(palette.dim);
        let text = Style::default().fg(palette.text);

        let (border_color, icon_style, title, title_style, detail, detail_style) = match self.view {
            IndicatorView::RequestPrompt {
                title,
                hint,
                enabled,
                ..
            } => {
                if *enabled {
                    (
                        palette.accent,
                        Style::default().fg(palette.accent),
                        *title,
                        text.add_modifier(Modifier::BOLD),
                        *hint,
                        dim,
                    )
                } else {
                    (palette.dim, dim, *title, dim, *hint, dim)
                }
            }
            IndicatorView::Denied { title, hint, .. } => (
                palette.border,
                Style::default().fg(palette.error),
                *title,
                text.add_modifier(Modifier::BOLD),
                *hint,
                dim,
            ),
            IndicatorView::ActiveStatus {
                label,
                caption,
                emphasis,
                ..
            } => {
                let icon_style = match emphasis {
                    Emphasis::Highlighted => Style::default().fg(palette.highlight),
                    Emphasis::Muted => dim,
                };
                (
                    palette.border,
                    icon_style,
                    *caption,
                    dim,
                    *label,
                    text.add_modifier(Modifier::BOLD),
                )
            }
        };

        let indent = " ".repeat(unicode_width::UnicodeWidthStr::width(glyph) + 2);
        let title_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(glyph, icon_style),
            Span::raw(" "),
            Span::styled(title, title_style),
        ]);
        let detail_line = Line::from(vec![Span::raw(indent), Span::styled(detail, detail_style)]);

        let borders = if self.unicode {
            self.theme.colors().borders
        } else {
            BORDER_ASCII
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(borders.symbols())
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let live = matches!(self.view, IndicatorView::ActiveStatus { liveness: true, .. });
        let mut title_area = Rect { height: 1, ..inner };
        if live {
            title_area.width = title_area.width.saturating_sub(MARKER_WIDTH);
        }
        Paragraph::new(title_line).render(title_area, buf);
        if inner.height > 1 {
            let detail_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            Paragraph::new(detail_line).render(detail_area, buf);
        }

        if live && inner.width > MARKER_WIDTH {
            buf.set_string(
                inner.right() - MARKER_WIDTH,
                inner.y,
                pulse_glyph(icons.pulse, self.frame),
                Style::default().fg(palette.active),
            );
        }
    }
}

/// Translate a terminal cell into 1-based card coordinates, if it lies on the card.
pub fn card_coordinates(area: Rect, column: u16, row: u16) -> Option<(u16, u16)> {
    let inside = column >= area.x && column < area.right() && row >= area.y && row < area.bottom();
    inside.then(|| (column - area.x + 1, row - area.y + 1))
}
