use super::{RevealState, Threshold};

/// Slack for ratios the browser reports a hair under the configured threshold.
const RATIO_TOLERANCE: f64 = 1e-6;

/// Two-state machine per target: `Hidden` moves to `Revealed` once, never back.
pub struct RevealTracker<T> {
    entries: Vec<(T, RevealState)>,
    threshold: Threshold,
    released: bool,
}

impl<T: PartialEq> RevealTracker<T> {
    pub fn new(targets: Vec<T>, threshold: Threshold) -> Self {
        Self {
            entries: targets
                .into_iter()
                .map(|target| (target, RevealState::Hidden))
                .collect(),
            threshold,
            released: false,
        }
    }

    /// Whether a visible ratio counts as having entered the viewport.
    pub fn entered(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio + RATIO_TOLERANCE >= self.threshold.value()
    }

    /// Record one intersection sample. Returns true only for the sample that
    /// flips the target, so callers signal the transition exactly once.
    pub fn record(&mut self, target: &T, ratio: f64) -> bool {
        if self.released || !self.entered(ratio) {
            return false;
        }
        match self.entries.iter_mut().find(|(t, _)| t == target) {
            Some((_, state)) if *state == RevealState::Hidden => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Reveal every hidden target, returning the ones that flipped.
    pub fn reveal_all(&mut self) -> Vec<&T> {
        if self.released {
            return Vec::new();
        }
        self.entries
            .iter_mut()
            .filter(|(_, state)| *state == RevealState::Hidden)
            .map(|(target, state)| {
                *state = RevealState::Revealed;
                &*target
            })
            .collect()
    }

    pub fn state(&self, target: &T) -> Option<RevealState> {
        self.entries
            .iter()
            .find(|(t, _)| t == target)
            .map(|(_, state)| *state)
    }

    pub fn targets(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(target, _)| target)
    }

    pub fn revealed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, state)| *state == RevealState::Revealed)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stop accepting samples. Returns false if already released.
    pub fn release(&mut self) -> bool {
        !std::mem::replace(&mut self.released, true)
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}
