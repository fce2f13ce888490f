use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use rebound_core::overscroll::{Axis, Phase, Surface};

use crate::app::App;
use crate::surface::ListSurface;
use crate::theme::GruvboxMaterial;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let (phase_str, phase_color) = match app.phase() {
            Phase::Rest => ("REST", GruvboxMaterial::GREEN),
            Phase::Pulling => ("PULLING", GruvboxMaterial::ORANGE),
            Phase::Springing => ("SPRINGING", GruvboxMaterial::YELLOW),
        };

        let status_text = format!(
            " row {}/{} {}| translation {:+.2} ",
            app.surface.offset(),
            app.surface.max_scroll(),
            position_marker(&app.surface),
            app.surface.translation(Axis::Vertical),
        );

        let help_hint = " q:quit j/k:move g/G:jump r:reset drag/wheel:bounce ";
        let used = phase_str.len() + 2 + status_text.len() + help_hint.len();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", phase_str),
                Style::default().fg(GruvboxMaterial::BG0).bg(phase_color),
            ),
            Span::styled(
                status_text,
                Style::default()
                    .fg(GruvboxMaterial::FG0)
                    .bg(GruvboxMaterial::BG2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(GruvboxMaterial::BG2),
            ),
            Span::styled(
                help_hint,
                Style::default()
                    .fg(GruvboxMaterial::BLUE)
                    .bg(GruvboxMaterial::BG2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}

/// Which boundary the list is pinned against
fn position_marker(surface: &ListSurface) -> &'static str {
    match (surface.at_start(), surface.at_end()) {
        (true, true) => "[all] ",
        (true, false) => "[top] ",
        (false, true) => "[end] ",
        (false, false) => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_marker() {
        let mut surface = ListSurface::numbered(30);
        surface.set_viewport(40, 10);
        assert_eq!(position_marker(&surface), "[top] ");

        surface.scroll_by(5);
        assert_eq!(position_marker(&surface), "");

        surface.jump_to_end();
        assert_eq!(position_marker(&surface), "[end] ");

        let mut short = ListSurface::numbered(3);
        short.set_viewport(40, 10);
        assert_eq!(position_marker(&short), "[all] ");
    }
}
