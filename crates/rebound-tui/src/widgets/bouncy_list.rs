use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use rebound_core::overscroll::Phase;

use crate::app::App;
use crate::surface::ListSurface;
use crate::theme::GruvboxMaterial;

pub struct BouncyListWidget;

impl BouncyListWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let border_style = match app.phase() {
            Phase::Rest => Style::default().fg(GruvboxMaterial::GREY0),
            Phase::Pulling => Style::default().fg(GruvboxMaterial::ORANGE),
            Phase::Springing => Style::default().fg(GruvboxMaterial::ACCENT),
        };

        let block = Block::default()
            .title(" Rows ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(GruvboxMaterial::BG0));

        let inner = block.inner(area);
        let lines = visible_lines(&app.surface, inner.height);

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
    }
}

/// Rows to draw, shifted by the current translation
///
/// Rows uncovered by the shift are drawn as an empty gap.
fn visible_lines(surface: &ListSurface, height: u16) -> Vec<Line<'static>> {
    let shift = surface.row_shift() as i64;
    let offset = surface.offset() as i64;
    let items = surface.items();

    (0..height as i64)
        .map(|row| {
            let index = offset + row - shift;
            match usize::try_from(index).ok().and_then(|i| items.get(i)) {
                Some(item) => {
                    let color = if index % 2 == 0 {
                        GruvboxMaterial::FG0
                    } else {
                        GruvboxMaterial::GREY2
                    };
                    Line::styled(format!(" {}", item), Style::default().fg(color))
                }
                None => Line::styled("", Style::default().bg(GruvboxMaterial::BG1)),
            }
        })
        .collect()
}
