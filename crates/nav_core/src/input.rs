//! Input events, bounded queue, and the per-frame sampler.
//!
//! Host events arrive asynchronously; the sampler drains them exactly once
//! per frame so frame logic never depends on listener timing.

use glam::Vec2;

/// Logical movement axes. Up/down are world-vertical; the rest are relative
/// to the look basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAxis {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Discrete events delivered by the host input subsystem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    MoveKey { axis: MoveAxis, pressed: bool },
    PointerDelta { dx: f32, dy: f32 },
    CaptureChanged(bool),
    ResetRequested,
}

/// Cap on events buffered between two frames; overflow drops the newest.
pub const MAX_PENDING_EVENTS: usize = 256;

/// Bounded event queue drained once per frame by the sampler.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn push(&mut self, ev: InputEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            log::debug!(target: "nav", "input queue full; dropping {ev:?}");
            return;
        }
        self.events.push(ev);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

/// Held-key state. Persists across frames until the release event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveButtons {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveButtons {
    pub fn set(&mut self, axis: MoveAxis, pressed: bool) {
        match axis {
            MoveAxis::Forward => self.forward = pressed,
            MoveAxis::Backward => self.backward = pressed,
            MoveAxis::Left => self.left = pressed,
            MoveAxis::Right => self.right = pressed,
            MoveAxis::Up => self.up = pressed,
            MoveAxis::Down => self.down = pressed,
        }
    }

    #[must_use]
    pub fn any(self) -> bool {
        self.forward || self.backward || self.left || self.right || self.up || self.down
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Look-capture state machine. Pointer deltas are consumed only while
/// `Active`; while `Inactive` the orientation is frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Inactive,
    Active,
}

/// One frame of sampled intent. Discarded after integration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    pub buttons: MoveButtons,
    /// Raw pointer delta accumulated this frame (counts, not radians).
    pub look_delta: Vec2,
    pub reset: bool,
}

/// Normalizes raw host events into one [`InputSample`] per frame.
#[derive(Debug, Clone, Default)]
pub struct Sampler {
    queue: InputQueue,
    buttons: MoveButtons,
    capture: CaptureState,
}

impl Sampler {
    pub fn push(&mut self, ev: InputEvent) {
        self.queue.push(ev);
    }

    #[must_use]
    pub fn capture(&self) -> CaptureState {
        self.capture
    }

    /// Drain pending events in arrival order and build this frame's sample.
    ///
    /// Capture transitions apply in queue order: deltas queued before a
    /// release are still counted, later ones are not. Non-finite deltas are
    /// discarded for the frame rather than propagated.
    pub fn sample(&mut self) -> InputSample {
        let mut look_delta = Vec2::ZERO;
        let mut reset = false;
        for ev in self.queue.events.drain(..) {
            match ev {
                InputEvent::MoveKey { axis, pressed } => self.buttons.set(axis, pressed),
                InputEvent::PointerDelta { dx, dy } => {
                    if self.capture != CaptureState::Active {
                        continue;
                    }
                    if dx.is_finite() && dy.is_finite() {
                        look_delta += Vec2::new(dx, dy);
                    } else {
                        log::debug!(target: "nav", "discarding non-finite pointer delta");
                    }
                }
                InputEvent::CaptureChanged(active) => {
                    self.capture = if active {
                        CaptureState::Active
                    } else {
                        CaptureState::Inactive
                    };
                    log::debug!(target: "controls", "look capture -> {:?}", self.capture);
                }
                InputEvent::ResetRequested => reset = true,
            }
        }
        InputSample {
            buttons: self.buttons,
            look_delta,
            reset,
        }
    }
}
