//! Selection/preview controller
//!
//! Decides which single entry is featured. The user either picks an entry
//! explicitly, or nothing is picked and a timer rotates through the current
//! filtered view. Every event returns a [`TimerDirective`] so the runtime
//! owning the actual timer can arm or cancel it.

mod browser;
mod timer;

pub use browser::Browser;
pub use timer::RotationTimer;

use std::time::Duration;
use tracing::{debug, trace};

use crate::catalog::{Entry, FilteredView};

/// Default auto-rotation period
pub const DEFAULT_ROTATION_PERIOD: Duration = Duration::from_millis(3500);

/// Which entry is featured, and why
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    /// The user picked this id
    Explicit(u32),
    /// Nothing picked; the timer rotates through the view
    AutoPreview(usize),
}

/// What the runtime must do with the rotation timer after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerDirective {
    /// (Re)start the timer for the controller's current generation
    Arm,
    /// Cancel any running timer
    Disarm,
    /// Leave the timer as it is
    Keep,
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    view: FilteredView,
    mode: PreviewMode,
    last_preview_index: usize,
    generation: u64,
    timer_armed: bool,
}

impl SelectionController {
    /// Create a controller in `AutoPreview(0)`. Call [`Self::mount`] to get
    /// the initial timer directive.
    pub fn new(view: FilteredView) -> Self {
        Self {
            view,
            mode: PreviewMode::AutoPreview(0),
            last_preview_index: 0,
            generation: 0,
            timer_armed: false,
        }
    }

    pub fn mode(&self) -> PreviewMode {
        self.mode
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Generation of the currently armed timer; ticks from older timers are ignored
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn timer_armed(&self) -> bool {
        self.timer_armed
    }

    pub fn mount(&mut self) -> TimerDirective {
        self.reconcile_timer(false)
    }

    /// Tear down: the timer must not outlive the controller's owner
    pub fn unmount(&mut self) -> TimerDirective {
        self.timer_armed = false;
        self.generation += 1;
        TimerDirective::Disarm
    }

    /// User selected entry `id`. Ids outside the current view are ignored.
    pub fn select(&mut self, id: u32) -> TimerDirective {
        if !self.view.contains_id(id) {
            debug!("Ignoring selection of id {} outside the current view", id);
            return TimerDirective::Keep;
        }

        if let PreviewMode::AutoPreview(index) = self.mode {
            self.last_preview_index = index;
        }
        self.mode = PreviewMode::Explicit(id);
        debug!("Selected entry #{}", id);

        self.reconcile_timer(false)
    }

    /// User cleared the selection; rotation resumes where it left off
    pub fn clear(&mut self) -> TimerDirective {
        if let PreviewMode::AutoPreview(_) = self.mode {
            return TimerDirective::Keep;
        }

        self.mode = PreviewMode::AutoPreview(self.wrap(self.last_preview_index));
        debug!("Selection cleared, resuming preview at {:?}", self.mode);

        self.reconcile_timer(false)
    }

    /// Replace the filtered view after a query edit
    pub fn set_view(&mut self, view: FilteredView) -> TimerDirective {
        let length_changed = view.len() != self.view.len();
        self.view = view;

        self.mode = match self.mode {
            PreviewMode::Explicit(id) if !self.view.contains_id(id) => {
                debug!("Selected entry #{} left the view; back to auto preview", id);
                self.last_preview_index = 0;
                PreviewMode::AutoPreview(0)
            }
            PreviewMode::Explicit(id) => PreviewMode::Explicit(id),
            PreviewMode::AutoPreview(index) => PreviewMode::AutoPreview(self.wrap(index)),
        };

        self.reconcile_timer(length_changed)
    }

    /// A rotation tick fired. Returns whether the featured entry moved.
    pub fn tick(&mut self, generation: u64) -> bool {
        if !self.timer_armed || generation != self.generation {
            trace!(
                "Dropping stale tick (generation {}, current {})",
                generation,
                self.generation
            );
            return false;
        }

        match self.mode {
            PreviewMode::AutoPreview(index) if !self.view.is_empty() => {
                let next = (index + 1) % self.view.len();
                self.mode = PreviewMode::AutoPreview(next);
                self.last_preview_index = next;
                true
            }
            _ => false,
        }
    }

    /// Move the explicit selection one entry forward through the view
    pub fn select_next(&mut self) -> TimerDirective {
        self.step(1)
    }

    /// Move the explicit selection one entry back through the view
    pub fn select_prev(&mut self) -> TimerDirective {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> TimerDirective {
        let len = self.view.len();
        let Some(current) = self.featured_index() else {
            return TimerDirective::Keep;
        };

        let next = (current as isize + delta).rem_euclid(len as isize) as usize;
        match self.view.get(next).map(|e| e.id) {
            Some(id) => self.select(id),
            None => TimerDirective::Keep,
        }
    }

    /// The featured entry, or `None` when the view has no matches
    pub fn featured(&self) -> Option<&Entry> {
        self.featured_index().and_then(|index| self.view.get(index))
    }

    /// Position of the featured entry within the view
    pub fn featured_index(&self) -> Option<usize> {
        match self.mode {
            PreviewMode::Explicit(id) => self.view.position_of(id),
            PreviewMode::AutoPreview(_) if self.view.is_empty() => None,
            PreviewMode::AutoPreview(index) => Some(index % self.view.len()),
        }
    }

    /// The view is empty; render the no-match placeholder
    pub fn is_no_match(&self) -> bool {
        self.view.is_empty()
    }

    fn wrap(&self, index: usize) -> usize {
        if self.view.is_empty() {
            0
        } else {
            index % self.view.len()
        }
    }

    fn should_rotate(&self) -> bool {
        matches!(self.mode, PreviewMode::AutoPreview(_)) && !self.view.is_empty()
    }

    fn reconcile_timer(&mut self, force_rearm: bool) -> TimerDirective {
        let want = self.should_rotate();

        if want && (!self.timer_armed || force_rearm) {
            self.generation += 1;
            self.timer_armed = true;
            TimerDirective::Arm
        } else if !want && self.timer_armed {
            self.generation += 1;
            self.timer_armed = false;
            TimerDirective::Disarm
        } else {
            TimerDirective::Keep
        }
    }
}
