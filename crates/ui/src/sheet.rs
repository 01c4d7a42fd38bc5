use std::fmt;
use std::rc::Rc;

use wander_core::model::QuestionKind;

//
// ─── SNAP POINTS ──────────────────────────────────────────────────────────────
//

/// Heights the sheet can settle at, as a fraction of the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapPoint {
    /// 40% — enough for a yes/no prompt.
    Compact,
    /// 50% — plan pickers.
    Half,
    /// 80% — the default for everything else.
    Tall,
}

impl SnapPoint {
    #[must_use]
    pub fn percent(self) -> u8 {
        match self {
            Self::Compact => 40,
            Self::Half => 50,
            Self::Tall => 80,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Compact => "sheet-panel--compact",
            Self::Half => "sheet-panel--half",
            Self::Tall => "sheet-panel--tall",
        }
    }

    #[must_use]
    pub fn for_hint(hint: Option<&SheetHint>) -> Self {
        match hint {
            Some(SheetHint::Question(QuestionKind::Bool)) => Self::Compact,
            Some(SheetHint::Plans) => Self::Half,
            _ => Self::Tall,
        }
    }
}

/// What the sheet is currently showing, used to pick a snap point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SheetHint {
    Question(QuestionKind),
    Plans,
}

//
// ─── CONFIG ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq)]
pub enum SheetContent {
    Questionnaire,
    Plans,
}

#[derive(Clone)]
pub struct SheetConfig {
    content: SheetContent,
    header_title: String,
    hint: Option<SheetHint>,
}

impl SheetConfig {
    #[must_use]
    pub fn new(content: SheetContent, header_title: impl Into<String>) -> Self {
        Self {
            content,
            header_title: header_title.into(),
            hint: None,
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: Option<SheetHint>) -> Self {
        self.hint = hint;
        self
    }

    #[must_use]
    pub fn content(&self) -> &SheetContent {
        &self.content
    }

    #[must_use]
    pub fn header_title(&self) -> &str {
        &self.header_title
    }
}

//
// ─── SURFACE ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, PartialEq, Eq)]
pub enum SurfaceError {
    NotMounted,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotMounted => write!(f, "sheet surface is not mounted"),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// The rendered panel the controller drives.
///
/// The host view attaches a surface once its DOM exists; until then the
/// controller parks the requested snap and replays it on attach. This is the
/// ready signal that replaces racing the mount with timers.
pub trait SheetSurface {
    /// Animate the panel to the given height.
    ///
    /// # Errors
    ///
    /// Returns `SurfaceError` when the panel cannot be driven.
    fn snap_to(&self, point: SnapPoint) -> Result<(), SurfaceError>;

    /// Animate the panel off screen.
    ///
    /// # Errors
    ///
    /// Returns `SurfaceError` when the panel cannot be driven.
    fn hide(&self) -> Result<(), SurfaceError>;
}

//
// ─── CONTROLLER ───────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetState {
    Closed,
    Open,
}

/// Single app-wide bottom-sheet controller.
///
/// Exactly one sheet exists at a time: opening while open replaces the
/// content (last write wins), and `close` is safe to call repeatedly. A
/// swipe-down dismissal is reported through `on_visibility_changed`, which
/// reconciles state without re-firing the hide animation the gesture
/// already performed.
pub struct SheetController {
    state: SheetState,
    config: Option<SheetConfig>,
    snap: SnapPoint,
    surface: Option<Rc<dyn SheetSurface>>,
    pending_snap: Option<SnapPoint>,
}

impl Default for SheetController {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SheetState::Closed,
            config: None,
            snap: SnapPoint::Tall,
            surface: None,
            pending_snap: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> SheetState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == SheetState::Open
    }

    #[must_use]
    pub fn config(&self) -> Option<&SheetConfig> {
        self.config.as_ref()
    }

    #[must_use]
    pub fn snap_point(&self) -> SnapPoint {
        self.snap
    }

    /// Open the sheet with the given content, replacing whatever was shown.
    pub fn open(&mut self, config: SheetConfig) {
        let snap = SnapPoint::for_hint(config.hint.as_ref());
        self.config = Some(config);
        self.state = SheetState::Open;
        self.issue_snap(snap);
    }

    /// Re-evaluate the snap point for new content inside an open sheet.
    pub fn set_hint(&mut self, hint: Option<SheetHint>) {
        if !self.is_open() {
            return;
        }
        let snap = SnapPoint::for_hint(hint.as_ref());
        if let Some(config) = self.config.as_mut() {
            config.hint = hint;
        }
        self.issue_snap(snap);
    }

    /// Close the sheet. Calling this while already closed does nothing.
    pub fn close(&mut self) {
        if self.state == SheetState::Closed {
            return;
        }
        if let Some(surface) = self.surface.as_ref() {
            if let Err(err) = surface.hide() {
                tracing::warn!(error = %err, "sheet hide failed");
            }
        }
        self.reset_closed();
    }

    /// Reconcile state after the surface reported a visibility change.
    ///
    /// Negative indices mean the user dismissed the sheet with a gesture;
    /// the panel is already gone, so only the state is updated here.
    pub fn on_visibility_changed(&mut self, index: i32) {
        if index < 0 {
            self.reset_closed();
        }
    }

    /// Signal that the panel's DOM exists and can be driven.
    ///
    /// A snap requested before the panel mounted is replayed now.
    pub fn attach_surface(&mut self, surface: Rc<dyn SheetSurface>) {
        self.surface = Some(surface);
        if self.is_open()
            && let Some(snap) = self.pending_snap.take()
        {
            self.issue_snap(snap);
        }
    }

    fn issue_snap(&mut self, snap: SnapPoint) {
        self.snap = snap;
        match self.surface.as_ref() {
            Some(surface) => {
                if let Err(err) = surface.snap_to(snap) {
                    tracing::warn!(error = %err, "sheet snap failed");
                }
            }
            None => self.pending_snap = Some(snap),
        }
    }

    fn reset_closed(&mut self) {
        self.state = SheetState::Closed;
        self.config = None;
        self.pending_snap = None;
        self.snap = SnapPoint::Tall;
    }
}

impl fmt::Debug for SheetController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetController")
            .field("state", &self.state)
            .field("snap", &self.snap)
            .field("has_surface", &self.surface.is_some())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
