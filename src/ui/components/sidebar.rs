use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{List, ListItem, Paragraph, Widget},
};

use crate::http::models::Profile;
use crate::ui::state::Section;
use crate::ui::util::display_name;
use crate::util::colors;

/// Section navigation plus the signed-in profile summary.
pub struct Sidebar<'a> {
    active: Section,
    profile: Option<&'a Profile>,
}

impl<'a> Sidebar<'a> {
    pub fn new(active: Section, profile: Option<&'a Profile>) -> Self {
        Self { active, profile }
    }
}

pub fn profile_lines(profile: Option<&Profile>) -> Vec<String> {
    match profile {
        Some(profile) => {
            let name = display_name(&profile.display_name, "Listener");
            let mut lines = vec![name.to_string()];
            if !profile.email.is_empty() {
                lines.push(profile.email.clone());
            }
            lines
        }
        None => vec!["Signing in…".to_string()],
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(2)])
            .split(area);

        let items: Vec<ListItem> = Section::ALL
            .iter()
            .map(|section| {
                let style = if *section == self.active {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::NEUTRAL)
                };
                ListItem::new(format!(" {} {}", section.index() + 1, section.title()))
                    .style(style)
            })
            .collect();
        List::new(items).render(chunks[0], buf);

        let profile: Vec<Line> = profile_lines(self.profile)
            .into_iter()
            .map(Line::from)
            .collect();
        Paragraph::new(profile)
            .style(Style::default().fg(colors::NEUTRAL))
            .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_renders_name_and_email() {
        let profile = Profile {
            display_name: "Ada".into(),
            email: "ada@example.com".into(),
            images: vec![],
        };

        assert_eq!(
            profile_lines(Some(&profile)),
            vec!["Ada".to_string(), "ada@example.com".to_string()]
        );
    }

    #[test]
    fn blank_profile_fields_fall_back() {
        let profile = Profile::default();
        assert_eq!(profile_lines(Some(&profile)), vec!["Listener".to_string()]);
    }

    #[test]
    fn missing_profile_shows_placeholder() {
        assert_eq!(profile_lines(None), vec!["Signing in…".to_string()]);
    }
}
