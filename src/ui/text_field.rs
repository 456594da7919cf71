use crate::model::field::TextField;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Draw a bordered single-line text field and place the terminal cursor in it
/// when focused.
pub fn render(frame: &mut Frame, area: Rect, title: &str, field: &TextField, focused: bool) {
    let (border_style, border_type) = Theme::frame(focused);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !focused {
        let paragraph = Paragraph::new(field.as_str()).style(Theme::input_text());
        frame.render_widget(paragraph, inner);
        return;
    }

    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
        Span::styled(field.as_str(), Theme::input_text()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    if inner.width == 0 || inner.height == 0 {
        return;
    }
    // Prompt chevron "❯ " is 2 columns
    let prompt_offset = 2u16;
    let column = u16::try_from(field.cursor_column()).unwrap_or(u16::MAX);
    let cursor_x = inner.x.saturating_add(prompt_offset).saturating_add(column);
    frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
}
