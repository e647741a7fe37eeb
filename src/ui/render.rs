use crate::model::types::Screen;
use crate::App;
use ratatui::Frame;

use super::{
    categories, grid, header, home, layout, legend, pagination, preview, search, status_bar,
    toast,
};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    match app.model.ui.screen {
        Screen::Home => {
            home::render_home(f, size, app.model.ui.chosen_template_url.as_deref());
        }
        Screen::Gallery => render_gallery(f, app),
    }

    // Render toast notification if active
    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}

fn render_gallery(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let loading = app.model.catalog.is_loading();

    let page_count = app.model.gallery.page_count();
    let show_pagination = !loading && page_count > 1;
    let has_search_query = !app.model.gallery.search_term.is_empty();

    let legend_height = legend::calculate_legend_height(
        size.width,
        app.model.ui.vim_mode,
        app.model.gallery.search_mode,
        has_search_query,
        show_pagination,
    );
    let layout_info = layout::calculate_layout(
        size,
        show_pagination,
        legend_height,
        app.image_picker.is_some(),
    );

    // Counts only make sense once the catalog is in
    let (found, category_count) = if loading {
        (None, None)
    } else {
        (
            Some(app.model.gallery.filtered.len()),
            Some(app.model.catalog.categories.len()),
        )
    };
    header::render_header(f, layout_info.header_area, found, category_count);

    search::render_search_input(
        f,
        layout_info.search_area,
        &app.model.gallery.search_term,
        app.model.gallery.search_mode,
        found,
        app.model.ui.vim_mode,
    );

    categories::render_categories(
        f,
        layout_info.categories_area,
        &app.model.gallery.search_term,
        &app.model.catalog.categories,
    );

    if loading {
        grid::render_loading(f, layout_info.grid_area);
    } else if app.model.gallery.filtered.is_empty() {
        grid::render_empty(f, layout_info.grid_area);
    } else {
        let shape = grid::render_grid(
            f,
            layout_info.grid_area,
            app.model.gallery.page_items(),
            app.model.gallery.selected_index,
            app.model.gallery.row_offset,
        );
        // Feed the rendered shape back so up/down moves by visual rows
        app.model.gallery.grid_columns = shape.columns;
        app.model.gallery.row_offset = shape.row_offset;
    }

    if let Some(preview_area) = layout_info.preview_area {
        let record = app.model.gallery.selected_template().cloned();
        let state = record
            .as_ref()
            .and_then(|r| app.preview_state(r.id));
        preview::render_preview(f, preview_area, record.as_ref(), state);
    }

    if let Some(pagination_area) = layout_info.pagination_area {
        pagination::render_pagination(
            f,
            pagination_area,
            app.model.gallery.current_page,
            page_count,
        );
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        app.model.ui.vim_mode,
        app.model.gallery.search_mode,
        has_search_query,
        show_pagination,
    );

    let source = if loading {
        None
    } else {
        app.model.catalog.source.as_ref()
    };
    let status_line = status_bar::build_status_line(
        source,
        &app.origin_label(),
        app.model.gallery.current_page,
        page_count,
        app.model.gallery.selected_template(),
    );
    status_bar::render_status_bar(f, layout_info.status_area, &status_line);
}
