//! Story, video, music, sound and spine animation lists.

pub mod sounds;
pub mod spine;
pub mod stories;
pub mod tracks;

pub use sounds::{group_sounds, SoundEntry, SoundGroup};
pub use spine::{skeleton_files, SpinePlayerConfig};
pub use stories::{sort_stories, StoryDocument, StoryEntry, StoryLine};
pub use tracks::{sort_tracks, MediaEntry};
