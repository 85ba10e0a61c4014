//! Seams between the widget state machines and the host's timers and global
//! key events. Handles returned by a source detach their registration when
//! dropped, so a component only has to drop the handle on unmount or when the
//! conditions that armed it change.

/// Keys the gallery modal reacts to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GalleryKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl GalleryKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }
}

pub trait TimerSource {
    type Handle;

    /// Starts a repeating timer. Dropping the handle stops it.
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

pub trait KeySource {
    type Handle;

    /// Attaches a global key listener. Dropping the handle removes it.
    fn attach(&self, handler: Box<dyn FnMut(GalleryKey)>) -> Self::Handle;
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    type Slots<T> = Rc<RefCell<BTreeMap<u64, T>>>;

    /// Timer source that only fires when the test calls `fire_all`.
    #[derive(Clone, Default)]
    pub struct ManualTimers {
        next_id: Rc<RefCell<u64>>,
        live: Slots<(u32, Box<dyn FnMut()>)>,
        created: Rc<RefCell<usize>>,
    }

    pub struct ManualTimerHandle {
        id: u64,
        live: Slots<(u32, Box<dyn FnMut()>)>,
    }

    impl Drop for ManualTimerHandle {
        fn drop(&mut self) {
            self.live.borrow_mut().remove(&self.id);
        }
    }

    impl ManualTimers {
        pub fn live_count(&self) -> usize {
            self.live.borrow().len()
        }

        pub fn created_count(&self) -> usize {
            *self.created.borrow()
        }

        pub fn periods(&self) -> Vec<u32> {
            self.live.borrow().values().map(|(period, _)| *period).collect()
        }

        pub fn fire_all(&self) {
            let ids: Vec<u64> = self.live.borrow().keys().copied().collect();
            for id in ids {
                // Take the callback out while it runs so it may touch the source.
                let taken = self.live.borrow_mut().remove(&id);
                if let Some((period, mut tick)) = taken {
                    tick();
                    self.live.borrow_mut().insert(id, (period, tick));
                }
            }
        }
    }

    impl TimerSource for ManualTimers {
        type Handle = ManualTimerHandle;

        fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle {
            let id = {
                let mut next = self.next_id.borrow_mut();
                *next += 1;
                *next
            };
            *self.created.borrow_mut() += 1;
            self.live.borrow_mut().insert(id, (period_ms, tick));
            ManualTimerHandle {
                id,
                live: self.live.clone(),
            }
        }
    }

    /// Key source that records attached handlers and lets tests press keys.
    #[derive(Clone, Default)]
    pub struct RecordingKeys {
        next_id: Rc<RefCell<u64>>,
        live: Slots<Box<dyn FnMut(GalleryKey)>>,
    }

    pub struct RecordingKeyHandle {
        id: u64,
        live: Slots<Box<dyn FnMut(GalleryKey)>>,
    }

    impl Drop for RecordingKeyHandle {
        fn drop(&mut self) {
            self.live.borrow_mut().remove(&self.id);
        }
    }

    impl RecordingKeys {
        pub fn attached(&self) -> usize {
            self.live.borrow().len()
        }

        pub fn press(&self, key: GalleryKey) {
            let ids: Vec<u64> = self.live.borrow().keys().copied().collect();
            for id in ids {
                let taken = self.live.borrow_mut().remove(&id);
                if let Some(mut handler) = taken {
                    handler(key);
                    self.live.borrow_mut().insert(id, handler);
                }
            }
        }
    }

    impl KeySource for RecordingKeys {
        type Handle = RecordingKeyHandle;

        fn attach(&self, handler: Box<dyn FnMut(GalleryKey)>) -> Self::Handle {
            let id = {
                let mut next = self.next_id.borrow_mut();
                *next += 1;
                *next
            };
            self.live.borrow_mut().insert(id, handler);
            RecordingKeyHandle {
                id,
                live: self.live.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_gallery_keys_only() {
        assert_eq!(GalleryKey::from_key("ArrowLeft"), Some(GalleryKey::ArrowLeft));
        assert_eq!(GalleryKey::from_key("ArrowRight"), Some(GalleryKey::ArrowRight));
        assert_eq!(GalleryKey::from_key("Escape"), Some(GalleryKey::Escape));
        assert_eq!(GalleryKey::from_key("Enter"), None);
        assert_eq!(GalleryKey::from_key("arrowleft"), None);
    }
}
