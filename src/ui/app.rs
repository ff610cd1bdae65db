use crate::catalog::Catalog;
use crate::session::{SessionState, SessionStore};
use crate::share::{share_session, ShareTarget};
use crate::ui::layout::{contains, layout_regions, ScreenRegions};
use crate::ui::mvi::Reducer;
use crate::ui::notice::{NoticeIntent, NoticeLevel, NoticeReducer, NoticeState};
use ratatui::layout::Rect;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    session: SessionStore,
    /// Transient notice (MVI pattern).
    notice: NoticeState,
    notice_duration: Duration,
    share_target: Box<dyn ShareTarget>,
    regions: ScreenRegions,
    /// Set by the session subscription and by local UI changes.
    dirty: Rc<Cell<bool>>,
}

impl App {
    pub fn new(
        catalog: Arc<Catalog>,
        share_target: Box<dyn ShareTarget>,
        notice_duration: Duration,
    ) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let mut session = SessionStore::new(catalog);
        let redraw = Rc::clone(&dirty);
        session.subscribe(move |_| redraw.set(true));
        Self {
            should_quit: false,
            session,
            notice: NoticeState::default(),
            notice_duration,
            share_target,
            regions: ScreenRegions::default(),
            dirty,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn session(&self) -> &SessionState {
        self.session.current()
    }

    pub fn notice(&self) -> &NoticeState {
        &self.notice
    }

    pub fn regions(&self) -> ScreenRegions {
        self.regions
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn on_sale(&mut self) {
        self.session.record_sale();
    }

    /// Share the current totals; shows a notice with the outcome.
    pub fn on_share(&mut self) {
        let state = self.session.current();
        let (message, level) = match share_session(state, self.share_target.as_mut()) {
            Ok(_) => (
                format!("Copied to {}", self.share_target.name()),
                NoticeLevel::Info,
            ),
            Err(err) => (err.user_message().to_string(), NoticeLevel::Error),
        };
        self.show_notice(message, level);
    }

    pub fn on_tick(&mut self, now: Instant) {
        let was_visible = self.notice.is_visible();
        dispatch_mvi!(self, notice, NoticeReducer, NoticeIntent::Tick { now });
        if was_visible != self.notice.is_visible() {
            self.dirty.set(true);
        }
    }

    pub fn dismiss_notice(&mut self) {
        if self.notice.is_visible() {
            dispatch_mvi!(self, notice, NoticeReducer, NoticeIntent::Dismiss);
            self.dirty.set(true);
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.regions = layout_regions(Rect::new(0, 0, cols, rows));
        self.dirty.set(true);
    }

    /// A left click on the dessert sells it. Returns true if it did.
    pub fn on_mouse_click(&mut self, col: u16, row: u16) -> bool {
        if contains(self.regions.dessert, col, row) {
            self.on_sale();
            true
        } else {
            false
        }
    }

    fn show_notice(&mut self, message: String, level: NoticeLevel) {
        let expires_at = Instant::now() + self.notice_duration;
        dispatch_mvi!(
            self,
            notice,
            NoticeReducer,
            NoticeIntent::Show {
                message,
                level,
                expires_at,
            }
        );
        self.dirty.set(true);
    }
}
