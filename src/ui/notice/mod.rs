mod intent;
mod reducer;
mod state;

pub use intent::NoticeIntent;
pub use reducer::NoticeReducer;
pub use state::{NoticeLevel, NoticeState};
