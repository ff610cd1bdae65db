use crate::ui::mvi::Reducer;
use crate::ui::notice::intent::NoticeIntent;
use crate::ui::notice::state::NoticeState;

pub struct NoticeReducer;

impl Reducer for NoticeReducer {
    type State = NoticeState;
    type Intent = NoticeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NoticeIntent::Show {
                message,
                level,
                expires_at,
            } => NoticeState::Visible {
                message,
                level,
                expires_at,
            },
            NoticeIntent::Tick { now } => match state {
                NoticeState::Visible { expires_at, .. } if now >= expires_at => {
                    NoticeState::Hidden
                }
                other => other,
            },
            NoticeIntent::Dismiss => NoticeState::Hidden,
        }
    }
}
