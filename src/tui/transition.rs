//! List transitions keyed by the selection
//!
//! When the selection key changes, the list on screen is retired first
//! (fade out while drifting up) and only then the new list enters (fade in
//! while settling down into place). Rows are terminal cells, so "fade" is a
//! muted palette and "drift" is a whole-row offset.
//!
//! A reload under the same key keeps the list mounted. Rows whose position
//! changed settle with a short fade instead.

use crate::topics::{Topic, TopicId};
use std::time::{Duration, Instant};

/// Rows a list drifts during a transition
const MAX_OFFSET: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Outgoing rows are leaving
    Exiting,
    /// Current rows are arriving
    Entering,
    /// Same list, some rows changed position
    Reordering,
    /// No animation in progress
    Settled,
}

/// What to draw for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionFrame {
    /// Draw the retired rows instead of the current view
    pub outgoing: bool,
    /// Vertical offset in rows; negative is up
    pub offset: i16,
    /// Draw with the muted palette
    pub faded: bool,
}

impl TransitionFrame {
    const STILL: Self = Self {
        outgoing: false,
        offset: 0,
        faded: false,
    };
}

#[derive(Debug, Clone)]
pub struct Transition {
    phase: Phase,
    started: Instant,
    duration: Duration,
    outgoing: Vec<Topic>,
    moved: Vec<TopicId>,
}

impl Transition {
    pub fn new(duration: Duration) -> Self {
        Self {
            phase: Phase::Settled,
            started: Instant::now(),
            duration,
            outgoing: Vec::new(),
            moved: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rows being retired during [`Phase::Exiting`]
    pub fn outgoing(&self) -> &[Topic] {
        &self.outgoing
    }

    /// Start retiring `on_screen`
    ///
    /// A key change while the previous list is still leaving keeps that list;
    /// it is what the user sees. A zero duration skips straight to settled.
    pub fn begin(&mut self, on_screen: Vec<Topic>, now: Instant) {
        if self.duration.is_zero() {
            self.settle();
            return;
        }

        if self.phase != Phase::Exiting {
            self.outgoing = on_screen;
            self.started = now;
        }
        self.moved.clear();
        self.phase = Phase::Exiting;
    }

    /// Mark rows of `after` that are new or sit at a different index than in
    /// `before`
    ///
    /// Ignored while a keyed exit/enter runs; the whole list is moving then.
    pub fn reorder(&mut self, before: &[Topic], after: &[Topic], now: Instant) {
        if self.duration.is_zero() || matches!(self.phase, Phase::Exiting | Phase::Entering) {
            return;
        }

        let moved: Vec<TopicId> = after
            .iter()
            .enumerate()
            .filter(|(idx, topic)| before.get(*idx).map(|t| t.id) != Some(topic.id))
            .map(|(_, topic)| topic.id)
            .collect();
        if moved.is_empty() {
            return;
        }

        self.moved = moved;
        self.started = now;
        self.phase = Phase::Reordering;
    }

    /// Whether row `id` is still settling after a reorder
    pub fn is_moving(&self, id: TopicId, now: Instant) -> bool {
        self.phase == Phase::Reordering && self.progress(now) < 1.0 && self.moved.contains(&id)
    }

    fn settle(&mut self) {
        self.phase = Phase::Settled;
        self.outgoing.clear();
        self.moved.clear();
    }

    /// Advance phases whose time is up
    pub fn tick(&mut self, now: Instant) {
        if self.progress(now) < 1.0 {
            return;
        }

        match self.phase {
            Phase::Exiting => {
                self.outgoing.clear();
                self.phase = Phase::Entering;
                self.started = now;
            }
            Phase::Entering | Phase::Reordering => self.settle(),
            Phase::Settled => {}
        }
    }

    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Settled
    }

    /// Fraction of the current phase that has elapsed, in 0.0..=1.0
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn frame(&self, now: Instant) -> TransitionFrame {
        let p = self.progress(now);
        match self.phase {
            Phase::Exiting => TransitionFrame {
                outgoing: true,
                offset: -((p * MAX_OFFSET).round() as i16),
                faded: p >= 0.5,
            },
            Phase::Entering => TransitionFrame {
                outgoing: false,
                offset: ((1.0 - p) * MAX_OFFSET).round() as i16,
                faded: p < 0.5,
            },
            Phase::Reordering | Phase::Settled => TransitionFrame::STILL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::{SeedTopics, TopicSource};

    const PHASE: Duration = Duration::from_millis(300);

    fn rows() -> Vec<Topic> {
        SeedTopics.load().unwrap()
    }

    #[test]
    fn exit_then_enter_then_settle() {
        let t0 = Instant::now();
        let mut transition = Transition::new(PHASE);
        transition.begin(rows(), t0);
        assert_eq!(transition.phase(), Phase::Exiting);
        assert_eq!(transition.outgoing().len(), 5);

        let start = transition.frame(t0);
        assert!(start.outgoing);
        assert_eq!(start.offset, 0);
        assert!(!start.faded);

        let end = transition.frame(t0 + PHASE);
        assert_eq!(end.offset, -2);
        assert!(end.faded);

        transition.tick(t0 + PHASE);
        assert_eq!(transition.phase(), Phase::Entering);
        assert!(transition.outgoing().is_empty());

        let entering = transition.frame(t0 + PHASE);
        assert!(!entering.outgoing);
        assert_eq!(entering.offset, 2);
        assert!(entering.faded);

        transition.tick(t0 + PHASE * 2);
        assert_eq!(transition.phase(), Phase::Settled);
        assert_eq!(transition.frame(t0 + PHASE * 2), TransitionFrame::STILL);
    }

    #[test]
    fn tick_before_phase_ends_is_a_no_op() {
        let t0 = Instant::now();
        let mut transition = Transition::new(PHASE);
        transition.begin(rows(), t0);
        transition.tick(t0 + PHASE / 2);
        assert_eq!(transition.phase(), Phase::Exiting);
    }

    #[test]
    fn rekey_while_exiting_keeps_on_screen_rows() {
        let t0 = Instant::now();
        let mut transition = Transition::new(PHASE);
        transition.begin(rows(), t0);
        transition.begin(Vec::new(), t0 + PHASE / 3);
        assert_eq!(transition.outgoing().len(), 5);

        // Timing continues from the first key change
        transition.tick(t0 + PHASE);
        assert_eq!(transition.phase(), Phase::Entering);
    }

    #[test]
    fn rekey_while_entering_restarts_exit() {
        let t0 = Instant::now();
        let mut transition = Transition::new(PHASE);
        transition.begin(rows(), t0);
        transition.tick(t0 + PHASE);

        let on_screen: Vec<Topic> = rows().into_iter().take(2).collect();
        transition.begin(on_screen, t0 + PHASE + PHASE / 2);
        assert_eq!(transition.phase(), Phase::Exiting);
        assert_eq!(transition.outgoing().len(), 2);
    }

    #[test]
    fn reorder_fades_only_moved_rows() {
        let t0 = Instant::now();
        let mut transition = Transition::new(PHASE);
        let before = rows();
        let mut after = before.clone();
        after.swap(0, 1);

        transition.reorder(&before, &after, t0);
        assert_eq!(transition.phase(), Phase::Reordering);
        assert_eq!(transition.frame(t0), TransitionFrame::STILL);
        assert!(transition.is_moving(after[0].id, t0));
        assert!(transition.is_moving(after[1].id, t0));
        assert!(!transition.is_moving(after[2].id, t0));

        transition.tick(t0 + PHASE);
        assert_eq!(transition.phase(), Phase::Settled);
        assert!(!transition.is_moving(after[0].id, t0 + PHASE));
    }

    #[test]
    fn reorder_with_same_order_is_a_no_op() {
        let mut transition = Transition::new(PHASE);
        transition.reorder(&rows(), &rows(), Instant::now());
        assert!(!transition.is_animating());
    }

    #[test]
    fn reorder_does_not_interrupt_keyed_transition() {
        let t0 = Instant::now();
        let mut transition = Transition::new(PHASE);
        transition.begin(rows(), t0);
        let mut after = rows();
        after.reverse();
        transition.reorder(&rows(), &after, t0);
        assert_eq!(transition.phase(), Phase::Exiting);
        assert!(!transition.is_moving(after[0].id, t0));
    }

    #[test]
    fn zero_duration_disables_animation() {
        let mut transition = Transition::new(Duration::ZERO);
        transition.begin(rows(), Instant::now());
        assert!(!transition.is_animating());
        assert!(transition.outgoing().is_empty());
    }
}
