//! Scroll-triggered reveal of presentational elements.
//!
//! [`activate`] registers a fixed set of targets and returns an owned
//! [`RevealSession`]. Each target starts [`RevealState::Hidden`] and flips to
//! [`RevealState::Revealed`] the first time a reported intersection ratio
//! reaches the threshold. The flip is permanent. How ratios are detected is
//! left to a [`Watcher`]; see [`dom`] for the `IntersectionObserver` binding.

pub mod dom;
mod tracker;

use std::cell::RefCell;
use std::fmt;
use std::num::ParseFloatError;
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;

pub use tracker::RevealTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

#[derive(Debug, Error, PartialEq)]
pub enum ThresholdError {
    #[error("threshold must be within [0, 1], got {0}")]
    OutOfRange(f64),
    #[error("threshold is not a number: {0}")]
    Parse(#[from] ParseFloatError),
}

/// Minimum visible fraction of a target that counts as "entered".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(0.1);

    pub fn new(value: f64) -> Result<Self, ThresholdError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ThresholdError::OutOfRange(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Threshold {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim().parse::<f64>()?)
    }
}

/// Watch settings handed to the browser binding.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: Threshold,
    /// CSS margin applied around the viewport, e.g. `"0px 0px -50px 0px"`.
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: Threshold::DEFAULT,
            root_margin: "0px".to_string(),
        }
    }
}

/// Detection mechanism that reports intersection ratios through a [`Notifier`].
pub trait Watcher<T> {
    fn observe(&self, target: &T);
    /// Cancel every watch. No notification may be delivered afterwards.
    fn disconnect(&self);
}

/// Applies the visual reveal transition to a target.
pub trait Presenter<T> {
    fn reveal(&self, target: &T);
}

impl<T, F: Fn(&T)> Presenter<T> for F {
    fn reveal(&self, target: &T) {
        self(target)
    }
}

/// Handle given to a [`Watcher`] for feeding samples back into the session.
pub struct Notifier<T, P> {
    tracker: Rc<RefCell<RevealTracker<T>>>,
    presenter: Rc<P>,
}

impl<T, P> Clone for Notifier<T, P> {
    fn clone(&self) -> Self {
        Self {
            tracker: Rc::clone(&self.tracker),
            presenter: Rc::clone(&self.presenter),
        }
    }
}

impl<T: PartialEq, P: Presenter<T>> Notifier<T, P> {
    /// Report the current visible ratio of `target`. Returns true if this
    /// sample revealed it; the watcher may stop observing it then.
    pub fn notify(&self, target: &T, ratio: f64) -> bool {
        let flipped = self.tracker.borrow_mut().record(target, ratio);
        if flipped {
            self.presenter.reveal(target);
        }
        flipped
    }
}

/// Owned handle to one page mount's reveal watching. Dropping it releases.
pub struct RevealSession<T: PartialEq, W: Watcher<T>> {
    tracker: Rc<RefCell<RevealTracker<T>>>,
    watcher: Option<W>,
}

impl<T: PartialEq, W: Watcher<T>> RevealSession<T, W> {
    /// Stop watching every target. Calling it again is a no-op.
    pub fn release(&mut self) {
        if !self.tracker.borrow_mut().release() {
            return;
        }
        if let Some(watcher) = self.watcher.take() {
            watcher.disconnect();
        }
        let tracker = self.tracker.borrow();
        log::debug!(
            "reveal session released ({}/{} revealed)",
            tracker.revealed_count(),
            tracker.len()
        );
    }

    pub fn is_released(&self) -> bool {
        self.tracker.borrow().is_released()
    }

    pub fn state(&self, target: &T) -> Option<RevealState> {
        self.tracker.borrow().state(target)
    }

    pub fn revealed_count(&self) -> usize {
        self.tracker.borrow().revealed_count()
    }

    pub fn len(&self) -> usize {
        self.tracker.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracker.borrow().is_empty()
    }
}

impl<T: PartialEq, W: Watcher<T>> Drop for RevealSession<T, W> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Start watching `targets`.
///
/// `connect` builds the watcher around the session's [`Notifier`]. If it
/// fails, every target is revealed right away so nothing stays invisible.
/// An empty target set yields an inert session without calling `connect`.
pub fn activate<T, P, W, E, F>(
    targets: Vec<T>,
    threshold: Threshold,
    presenter: P,
    connect: F,
) -> RevealSession<T, W>
where
    T: PartialEq,
    P: Presenter<T>,
    W: Watcher<T>,
    E: fmt::Debug,
    F: FnOnce(Notifier<T, P>) -> Result<W, E>,
{
    let tracker = Rc::new(RefCell::new(RevealTracker::new(targets, threshold)));
    if tracker.borrow().is_empty() {
        log::debug!("no reveal targets present, nothing to watch");
        return RevealSession {
            tracker,
            watcher: None,
        };
    }

    let presenter = Rc::new(presenter);
    let notifier = Notifier {
        tracker: Rc::clone(&tracker),
        presenter: Rc::clone(&presenter),
    };

    let watcher = match connect(notifier) {
        Ok(watcher) => {
            for target in tracker.borrow().targets() {
                watcher.observe(target);
            }
            log::debug!(
                "watching {} reveal targets at threshold {}",
                tracker.borrow().len(),
                threshold.value()
            );
            Some(watcher)
        }
        Err(e) => {
            log::warn!("viewport watching unavailable, revealing all targets: {:?}", e);
            for target in tracker.borrow_mut().reveal_all() {
                presenter.reveal(target);
            }
            None
        }
    };

    RevealSession { tracker, watcher }
}
