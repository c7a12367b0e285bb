mod layout;
mod music_list;

pub use layout::AppLayout;
pub use music_list::MusicList;
