use crate::ui::context::AppContext;
use crate::ui::state::{DashboardState, Section};
use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

/// App-level actions a view can hand back instead of consuming a key.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    TogglePlayPause,
    Pause,
    NextTrack,
    PreviousTrack,
    VolumeUp,
    VolumeDown,
    ToggleShuffle,
    CycleRepeat,
    Navigate(Section),
    None,
}

#[async_trait]
pub trait View: Send {
    fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        state: &DashboardState,
        ctx: &AppContext,
    );

    /// `None` means the key was not consumed and falls through to the
    /// global bindings.
    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &DashboardState,
        ctx: &AppContext,
    ) -> Option<Action>;
}
