use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ArtDisplay, ContentLayout, ContentState, TitleBar, layout_content};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollbarVisibility};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    // Title bar
    let mut title_bar = TitleBar::new(
        app.generator.name().to_string(),
        app.status_message.clone(),
        app.is_loading,
    );
    title_bar.render(frame, title_area);

    // Main area - art above, description below, one shared scroll surface
    draw_canvas_area(frame, main_area, app, tui);

    // Input area
    tui.topic_input.render(frame, input_area);
}

fn draw_canvas_area(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let content_width = area.width.saturating_sub(1);

    let art_height = ArtDisplay::calculate_height(&tui.reveal, content_width);
    let layout = layout_content(
        &app.description,
        content_width,
        app.is_loading,
        tui.cursor_glyph,
        tui.content.hovered,
    );
    let ContentLayout { lines, hits } = layout;
    let description_height = lines.len() as u16;
    let total_height = art_height + description_height;

    // Cache hit boxes for mouse events arriving before the next draw
    tui.content.hits = hits;
    tui.content.origin_y = art_height;

    let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

    scroll_view.render_widget(
        ArtDisplay::new(&tui.reveal, &app.topic, tui.cursor_glyph),
        Rect::new(0, 0, content_width, art_height),
    );
    if description_height > 0 {
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, art_height, content_width, description_height),
        );
    }

    frame.render_stateful_widget(scroll_view, area, &mut tui.scroll_state);
}

/// Hit test: given a screen position, find the index (into
/// `content.hits`) of the activatable word under it, if any.
pub fn hit_test_word(
    screen_x: u16,
    screen_y: u16,
    frame_area: Rect,
    scroll_offset_y: u16,
    content: &ContentState,
) -> Option<usize> {
    use Constraint::{Length, Min};

    // Calculate layout to find main_area
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [_title_area, main_area, _input_area] = layout.areas(frame_area);

    if !main_area.contains(Position::new(screen_x, screen_y)) {
        return None;
    }

    // Convert screen position to canvas position (accounting for scroll),
    // then to a position relative to the description block
    let canvas_y = (screen_y - main_area.y) + scroll_offset_y;
    let canvas_x = screen_x - main_area.x;
    if canvas_y < content.origin_y {
        return None; // Inside the art block
    }
    let line = canvas_y - content.origin_y;

    content
        .hits
        .iter()
        .position(|hit| hit.line == line && canvas_x >= hit.col && canvas_x < hit.col + hit.width)
}
