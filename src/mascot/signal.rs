use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "audio is playing" signal.
///
/// Cloneable handle around one atomic flag. The host UI is the single
/// writer; the driver only reads, and reads it fresh on every frame
/// advance — the value is never captured at construction, so a flip is
/// picked up by the very next frame.
#[derive(Clone, Default)]
pub struct PlayingFlag(Arc<AtomicBool>);

impl PlayingFlag {
    #[must_use]
    pub fn new(playing: bool) -> Self {
        Self(Arc::new(AtomicBool::new(playing)))
    }

    /// Written by the host when playback starts or stops.
    pub fn set(&self, playing: bool) {
        self.0.store(playing, Ordering::Release);
    }

    pub fn toggle(&self) -> bool {
        !self.0.fetch_xor(true, Ordering::AcqRel)
    }

    /// Read once per frame advance.
    #[must_use]
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_observe_the_writer() {
        let flag = PlayingFlag::new(false);
        let reader = flag.clone();
        flag.set(true);
        assert!(reader.get());
        assert!(!flag.toggle());
        assert!(!reader.get());
    }
}
