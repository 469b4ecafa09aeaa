use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::{
    ui::{
        app::App,
        components::{player::PlayerBar, sidebar::Sidebar},
    },
    util::colors,
};

pub struct AppLayout<'a> {
    app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame) {
        let area = f.area();
        f.buffer_mut()
            .set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(4)])
            .split(area);
        let main_area = chunks[0];
        let player_area = chunks[1];

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(1)])
            .split(main_area);
        let sidebar_area = main_chunks[0];
        let content_area = main_chunks[1];

        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("trackdeck")
            .title_alignment(Alignment::Center);
        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(self.app.state.section.title());

        let sidebar_inner = sidebar_block.inner(sidebar_area);
        let content_inner = content_block.inner(content_area);
        f.render_widget(sidebar_block, sidebar_area);
        f.render_widget(content_block, content_area);

        let app = self.app;
        f.render_widget(
            Sidebar::new(app.state.section, app.state.profile.as_ref()),
            sidebar_inner,
        );

        let section = app.state.section;
        app.views
            .active_mut(section)
            .render(f, content_inner, &app.state, &app.ctx);

        f.render_widget(
            PlayerBar::new(
                &app.state.playback,
                app.state.volume,
                app.state.shuffle,
                app.state.repeat,
            ),
            player_area,
        );
    }
}
