pub mod favorites;
pub mod home;
pub mod library;
pub mod playlists;
pub mod search;

pub use favorites::Favorites;
pub use home::Home;
pub use library::Library;
pub use playlists::Playlists;
pub use search::Search;

use crate::ui::state::Section;
use crate::ui::traits::View;

/// One long-lived view per section; switching sections never rebuilds them,
/// so cursors survive navigation.
#[derive(Default)]
pub struct Views {
    pub home: Home,
    pub search: Search,
    pub library: Library,
    pub playlists: Playlists,
    pub favorites: Favorites,
}

impl Views {
    pub fn active_mut(&mut self, section: Section) -> &mut dyn View {
        match section {
            Section::Home => &mut self.home,
            Section::Search => &mut self.search,
            Section::Library => &mut self.library,
            Section::Playlists => &mut self.playlists,
            Section::Favorites => &mut self.favorites,
        }
    }
}
