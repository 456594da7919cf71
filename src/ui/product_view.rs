use crate::app::state::{AppState, ProductFocus};
use crate::ui::layout::split_form;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, LineGauge, Paragraph, Row, Table, TableState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (filter_area, table_area) = split_form(area, 36);
    render_filters(frame, filter_area, state);
    render_table(frame, table_area, state);
}

fn panel(title: &str, focused: bool) -> Block<'static> {
    let (border_style, border_type) = Theme::frame(focused);
    Block::default()
        .title(format!(" {} ", title))
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
}

/// A `◀ value ▶` selector line.
fn selector_line(value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(" ◀ ", Style::default().fg(Theme::ACCENT_TEAL)),
        Span::styled(value, Theme::input_text()),
        Span::styled(" ▶", Style::default().fg(Theme::ACCENT_TEAL)),
    ])
}

/// Whole amounts without decimals, anything else with cents.
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${:.0}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

fn render_filters(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category
            Constraint::Length(3), // In stock
            Constraint::Length(3), // Max price
            Constraint::Length(3), // Sort
            Constraint::Min(0),
        ])
        .split(area);

    let filter = state.catalog.filter();
    let focus = state.product_focus;

    let category = Paragraph::new(selector_line(filter.category.to_string()))
        .block(panel("Category", focus == ProductFocus::Category));
    frame.render_widget(category, chunks[0]);

    let mark = if filter.in_stock_only { "[x]" } else { "[ ]" };
    let stock = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", mark), Style::default().fg(Theme::ACCENT_TEAL)),
        Span::styled("In Stock Only", Theme::input_text()),
    ]))
    .block(panel("Availability", focus == ProductFocus::InStock));
    frame.render_widget(stock, chunks[1]);

    let max = state.catalog.price_max();
    let ratio = if max > 0.0 {
        (filter.price_range / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let gauge = LineGauge::default()
        .block(panel(
            &format!("Max Price: {}", format_amount(filter.price_range)),
            focus == ProductFocus::Price,
        ))
        .filled_style(Style::default().fg(Theme::ACCENT_AMBER))
        .unfilled_style(Theme::muted())
        .label("")
        .ratio(ratio);
    frame.render_widget(gauge, chunks[2]);

    let sort = Paragraph::new(selector_line(state.catalog.sort_key().label().to_string()))
        .block(panel("Sort By", focus == ProductFocus::Sort));
    frame.render_widget(sort, chunks[3]);
}

fn render_table(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.product_focus == ProductFocus::Table;
    let visible = state.catalog.visible();
    let total = state.catalog.products().len();

    let block = panel("Products", focused)
        .title_bottom(Line::from(format!(" Showing {} of {} products ", visible.len(), total)));

    if visible.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "  No products match your filters",
            Theme::muted(),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = visible
        .iter()
        .map(|p| {
            let (status, style) = if p.in_stock {
                ("In Stock", Theme::in_stock())
            } else {
                ("Out of Stock", Theme::out_of_stock())
            };
            Row::new(vec![
                Text::from(p.name.clone()),
                Text::from(p.category.clone()),
                Text::from(format!("${:.2}", p.price)),
                Text::styled(status, style),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(25),
        Constraint::Length(10),
        Constraint::Min(12),
    ];
    let header = Row::new(vec!["Name", "Category", "Price", "Status"]).style(Theme::header());
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Theme::selected_row());

    if focused {
        let mut table_state = TableState::default().with_selected(Some(state.product_cursor.index));
        frame.render_stateful_widget(table, area, &mut table_state);
    } else {
        frame.render_widget(table, area);
    }
}
