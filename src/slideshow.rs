//! Photo slideshow and its full-screen gallery modal.
//!
//! The slideshow owns `index` while the modal is closed. While the modal is
//! open it owns its own index and reports every change upward as a
//! [`GalleryEffect::Report`]; the slideshow applies it with
//! [`SlideAction::SyncFromModal`]. No cell is shared between the two.

use crate::listeners::{GalleryKey, KeySource, TimerSource};

pub const AUTO_ADVANCE_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SlideAction {
    Tick,
    Next,
    Prev,
    Select(usize),
    PointerEnter,
    PointerLeave,
    OpenModal,
    CloseModal,
    SyncFromModal(usize),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SlideshowState {
    pub len: usize,
    pub index: usize,
    pub paused: bool,
    pub modal_open: bool,
}

/// The inputs whose change stops and re-arms the auto-advance timer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimerGate {
    pub len: usize,
    pub paused: bool,
    pub modal_open: bool,
}

impl TimerGate {
    pub fn should_run(self) -> bool {
        self.len > 1 && !self.paused && !self.modal_open
    }
}

fn step(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }

    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

impl SlideshowState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            paused: false,
            modal_open: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The photo at `index`, or `None` when the list is empty or shorter than
    /// the one the state was created for.
    pub fn current_photo<'a>(&self, photos: &[&'a str]) -> Option<&'a str> {
        photos.get(self.index).copied()
    }

    /// Prev/next buttons and position indicators are shown only for two or
    /// more photos.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn timer_gate(&self) -> TimerGate {
        TimerGate {
            len: self.len,
            paused: self.paused,
            modal_open: self.modal_open,
        }
    }

    pub fn apply(self, action: SlideAction) -> Self {
        let mut next = self;

        match action {
            SlideAction::Tick => {
                if self.timer_gate().should_run() {
                    next.index = step(self.index, self.len, true);
                }
            }
            SlideAction::Next => next.index = step(self.index, self.len, true),
            SlideAction::Prev => next.index = step(self.index, self.len, false),
            SlideAction::Select(index) | SlideAction::SyncFromModal(index) => {
                if index < self.len {
                    next.index = index;
                }
            }
            SlideAction::PointerEnter => next.paused = true,
            SlideAction::PointerLeave => next.paused = false,
            SlideAction::OpenModal => next.modal_open = !self.is_empty(),
            SlideAction::CloseModal => next.modal_open = false,
        }

        next
    }
}

/// Arms the repeating auto-advance timer when `gate` allows it. The caller
/// drops the returned handle whenever the gate changes and arms again, so a
/// tick scheduled under an old gate can never fire.
pub fn arm_auto_advance<S: TimerSource>(
    source: &S,
    gate: TimerGate,
    on_tick: impl FnMut() + 'static,
) -> Option<S::Handle> {
    gate.should_run()
        .then(|| source.every(AUTO_ADVANCE_MS, Box::new(on_tick)))
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GalleryAction {
    Prev,
    Next,
    Select(usize),
    Close,
}

impl GalleryAction {
    pub fn from_key(key: GalleryKey) -> Self {
        match key {
            GalleryKey::ArrowLeft => Self::Prev,
            GalleryKey::ArrowRight => Self::Next,
            GalleryKey::Escape => Self::Close,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GalleryEffect {
    None,
    Report(usize),
    Close,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GalleryState {
    pub len: usize,
    pub index: usize,
}

impl GalleryState {
    /// Copies the slideshow's index once; later slideshow changes are not
    /// observed.
    pub fn open(len: usize, start: usize) -> Self {
        let index = if start < len { start } else { 0 };
        Self { len, index }
    }

    pub fn apply(self, action: GalleryAction) -> (Self, GalleryEffect) {
        let index = match action {
            GalleryAction::Close => return (self, GalleryEffect::Close),
            GalleryAction::Prev => step(self.index, self.len, false),
            GalleryAction::Next => step(self.index, self.len, true),
            GalleryAction::Select(index) if index < self.len => index,
            GalleryAction::Select(_) => self.index,
        };

        if index == self.index {
            return (self, GalleryEffect::None);
        }

        (Self { index, ..self }, GalleryEffect::Report(index))
    }
}

/// Attaches the modal's single global key listener. Keys the modal does not
/// handle never reach `on_action`.
pub fn bind_gallery_keys<S: KeySource>(
    source: &S,
    mut on_action: impl FnMut(GalleryAction) + 'static,
) -> S::Handle {
    source.attach(Box::new(move |key| on_action(GalleryAction::from_key(key))))
}
