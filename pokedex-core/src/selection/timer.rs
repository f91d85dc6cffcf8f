//! Runtime side of auto-rotation: a tokio task emitting tick messages

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use super::TimerDirective;

/// Recurring rotation timer
///
/// Each armed timer is tagged with the controller generation it was armed
/// for, and that generation is carried by every tick message. The task is
/// aborted on disarm, on re-arm and when the timer is dropped.
pub struct RotationTimer<T> {
    period: Duration,
    tx: UnboundedSender<T>,
    make_tick: fn(u64) -> T,
    handle: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> RotationTimer<T> {
    pub fn new(period: Duration, tx: UnboundedSender<T>, make_tick: fn(u64) -> T) -> Self {
        Self {
            period,
            tx,
            make_tick,
            handle: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Apply a directive from the selection controller
    pub fn apply(&mut self, directive: TimerDirective, generation: u64) {
        match directive {
            TimerDirective::Arm => self.arm(generation),
            TimerDirective::Disarm => self.disarm(),
            TimerDirective::Keep => {}
        }
    }

    /// Start ticking for `generation`, replacing any running timer
    pub fn arm(&mut self, generation: u64) {
        self.disarm();

        let period = self.period;
        let tx = self.tx.clone();
        let make_tick = self.make_tick;

        debug!("Arming rotation timer (generation {}, period {:?})", generation, period);
        self.handle = Some(tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                if tx.send(make_tick(generation)).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn disarm(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("Disarming rotation timer");
            handle.abort();
        }
    }
}

impl<T> Drop for RotationTimer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::{self, error::TryRecvError};

    #[derive(Debug, PartialEq)]
    enum Msg {
        Tick(u64),
    }

    #[tokio::test(start_paused = true)]
    async fn test_armed_timer_ticks_with_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = RotationTimer::new(Duration::from_millis(3500), tx, Msg::Tick);

        timer.apply(TimerDirective::Arm, 7);
        assert!(timer.is_armed());

        assert_eq!(rx.recv().await, Some(Msg::Tick(7)));
        assert_eq!(rx.recv().await, Some(Msg::Tick(7)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarm_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = RotationTimer::new(Duration::from_millis(100), tx, Msg::Tick);

        timer.arm(1);
        timer.apply(TimerDirective::Disarm, 2);
        assert!(!timer.is_armed());

        time::sleep(Duration::from_millis(1000)).await;
        // The timer keeps its own sender, so the channel is idle but open.
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_replaces_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = RotationTimer::new(Duration::from_millis(100), tx, Msg::Tick);

        timer.arm(1);
        timer.arm(2);

        assert_eq!(rx.recv().await, Some(Msg::Tick(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut timer = RotationTimer::new(Duration::from_millis(100), tx, Msg::Tick);
            timer.arm(1);
        }

        // Dropping the timer drops its sender and aborts the task holding the
        // clone, so no sender is left and the channel closes.
        assert_eq!(rx.recv().await, None);
    }
}
