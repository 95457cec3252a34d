use crate::board::Board;
use crate::config::CountersConfig;
use crate::context::AppContext;
use crate::error::CellError;
use crate::mvi::Reducer;
use crate::ui::focus::{FocusIntent, FocusReducer, FocusState};
use crate::view::{Button, Strategy};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    board: Board,
    /// Keyboard focus (MVI pattern).
    focus: FocusState,
    /// Last rejected press, shown until the next successful one.
    status: Option<String>,
    /// Board render generation at the last draw; `None` forces a draw.
    drawn_generation: Option<u64>,
    chrome_dirty: bool,
}

impl App {
    pub fn new(ctx: &AppContext, counters: &CountersConfig) -> Self {
        Self {
            should_quit: false,
            board: Board::mount(ctx, counters.initial_value, counters.reducer_step),
            focus: FocusState::default(),
            status: None,
            drawn_generation: None,
            chrome_dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn focus(&self) -> FocusState {
        self.focus
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn dispatch_focus(&mut self, intent: FocusIntent) {
        let before = self.focus;
        dispatch_mvi!(self, focus, FocusReducer, &intent);
        if self.focus != before {
            self.chrome_dirty = true;
        }
    }

    /// Activate `button` of `strategy`. A rejected press lands in the status line.
    pub fn press(&mut self, strategy: Strategy, button: Button) {
        let result = self.board.press(strategy, button);
        self.record_outcome(strategy, result);
    }

    /// Send a raw action tag to `strategy`, with the same error reporting as a press.
    pub fn dispatch_tag(&mut self, strategy: Strategy, tag: &str) {
        let result = self.board.dispatch_tag(strategy, tag);
        self.record_outcome(strategy, result);
    }

    fn record_outcome(&mut self, strategy: Strategy, result: Result<(), CellError>) {
        match result {
            Ok(()) => {
                if self.status.take().is_some() {
                    self.chrome_dirty = true;
                }
            }
            Err(err) => {
                tracing::warn!(strategy = strategy.key(), error = %err, "press rejected");
                self.status = Some(format!("{strategy}: {err}"));
                self.chrome_dirty = true;
            }
        }
    }

    /// Press `button` on the focused section and move focus onto it.
    pub fn press_focused(&mut self, button: Button) {
        self.dispatch_focus(FocusIntent::SelectButton(button));
        self.press(self.focus.section, button);
    }

    pub fn activate_focused(&mut self) {
        let FocusState { section, button } = self.focus;
        self.press(section, button);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        tracing::debug!(cols, rows, "ui: resized");
        self.chrome_dirty = true;
    }

    /// True when a view re-rendered or the surrounding chrome changed.
    pub fn needs_redraw(&self) -> bool {
        self.chrome_dirty || self.drawn_generation != Some(self.board.render_generation())
    }

    pub fn mark_drawn(&mut self) {
        self.drawn_generation = Some(self.board.render_generation());
        self.chrome_dirty = false;
    }
}
