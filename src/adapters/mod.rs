//! Port implementations: live disk access, recording, and cassette replay.

pub mod live;
pub mod recording;
pub mod replaying;
