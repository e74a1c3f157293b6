use crate::state::PanelEvent;
use rdev::{listen, Event, EventType};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Minimum horizontal travel before a direction change counts as a swing.
const SWING_MIN_PX: f64 = 60.0;
/// Direction reversals needed inside the window to count as a shake.
const SHAKE_REVERSALS: usize = 4;
/// Window for accumulating reversals.
const SHAKE_WINDOW_MS: u64 = 900;
/// Refractory period after a reported shake.
const SHAKE_COOLDOWN_MS: u64 = 1_500;

static LISTENER_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Shake-detection seam. Produces one [`PanelEvent::ShakeDetected`] per
/// gesture; start/stop/destroy mirrors the platform detectors this wraps.
pub trait GestureSignal {
    /// Registers the event sink and the generation counter stamped onto
    /// every event. Does not start detection.
    fn connect(&mut self, events: Sender<PanelEvent>, generation: Arc<AtomicU64>);
    /// Begins (or resumes) detection. Safe to call repeatedly and before
    /// `connect`.
    fn start(&mut self);
    /// Pauses detection, keeping the registration alive.
    fn stop(&mut self);
    /// Releases the detector. Safe even if detection never started.
    fn destroy(&mut self);
    /// True while detection is active.
    fn is_running(&self) -> bool;
}

/// Desktop stand-in for an accelerometer shake: rapid horizontal pointer
/// direction reversals. The global input hook thread is spawned once per
/// process and stays up; the detector arms and disarms it.
pub struct PointerShakeDetector {
    shared: Arc<DetectorShared>,
}

struct DetectorShared {
    armed: AtomicBool,
    sink: Mutex<Option<(Sender<PanelEvent>, Arc<AtomicU64>)>>,
}

impl PointerShakeDetector {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(DetectorShared {
                armed: AtomicBool::new(false),
                sink: Mutex::new(None),
            }),
        }
    }
}

impl Default for PointerShakeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureSignal for PointerShakeDetector {
    fn connect(&mut self, events: Sender<PanelEvent>, generation: Arc<AtomicU64>) {
        if let Ok(mut sink) = self.shared.sink.lock() {
            *sink = Some((events, generation));
        }
    }

    fn start(&mut self) {
        self.shared.armed.store(true, Ordering::SeqCst);
        ensure_listener(self.shared.clone());
    }

    fn stop(&mut self) {
        self.shared.armed.store(false, Ordering::SeqCst);
    }

    fn destroy(&mut self) {
        self.shared.armed.store(false, Ordering::SeqCst);
        if let Ok(mut sink) = self.shared.sink.lock() {
            *sink = None;
        }
    }

    fn is_running(&self) -> bool {
        self.shared.armed.load(Ordering::SeqCst)
    }
}

fn ensure_listener(shared: Arc<DetectorShared>) {
    if LISTENER_ACTIVE.swap(true, Ordering::SeqCst) {
        return;
    }

    std::thread::spawn(move || {
        let mut tracker = ShakeTracker::new();
        let callback = move |event: Event| {
            let EventType::MouseMove { x, .. } = event.event_type else {
                return;
            };
            if !shared.armed.load(Ordering::SeqCst) {
                tracker.disarm();
                return;
            }
            let now_ms = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0);
            if tracker.observe(x, now_ms) {
                if let Ok(sink) = shared.sink.lock() {
                    if let Some((tx, generation)) = sink.as_ref() {
                        let generation = generation.load(Ordering::SeqCst);
                        log::debug!("pointer shake detected");
                        let _ = tx.send(PanelEvent::ShakeDetected { generation });
                    }
                }
            }
        };

        if let Err(e) = listen(callback) {
            eprintln!("rdev listener error: {:?}", e);
        }

        LISTENER_ACTIVE.store(false, Ordering::SeqCst);
    });
}

/// Counts horizontal direction reversals. Pure so it can be exercised
/// without an input hook.
struct ShakeTracker {
    /// -1 moving left, 1 moving right, 0 undecided.
    direction: i8,
    /// Furthest point reached in the current direction.
    extremum_x: f64,
    primed: bool,
    reversal_times: VecDeque<u64>,
    cooldown_until: u64,
}

impl ShakeTracker {
    fn new() -> Self {
        Self {
            direction: 0,
            extremum_x: 0.0,
            primed: false,
            reversal_times: VecDeque::new(),
            cooldown_until: 0,
        }
    }

    /// Clears in-progress gesture state while the detector is disarmed so a
    /// half-shake cannot carry over a stop/start cycle.
    fn disarm(&mut self) {
        self.direction = 0;
        self.primed = false;
        self.reversal_times.clear();
    }

    /// Feeds one pointer sample. Returns true when a shake completes.
    fn observe(&mut self, x: f64, now_ms: u64) -> bool {
        if !self.primed {
            self.primed = true;
            self.extremum_x = x;
            return false;
        }
        if now_ms < self.cooldown_until {
            self.extremum_x = x;
            self.direction = 0;
            self.reversal_times.clear();
            return false;
        }

        let delta = x - self.extremum_x;
        match self.direction {
            0 => {
                if delta.abs() >= SWING_MIN_PX {
                    self.direction = if delta > 0.0 { 1 } else { -1 };
                    self.extremum_x = x;
                }
                false
            }
            1 => {
                if x > self.extremum_x {
                    self.extremum_x = x;
                    false
                } else if delta <= -SWING_MIN_PX {
                    self.direction = -1;
                    self.extremum_x = x;
                    self.note_reversal(now_ms)
                } else {
                    false
                }
            }
            _ => {
                if x < self.extremum_x {
                    self.extremum_x = x;
                    false
                } else if delta >= SWING_MIN_PX {
                    self.direction = 1;
                    self.extremum_x = x;
                    self.note_reversal(now_ms)
                } else {
                    false
                }
            }
        }
    }

    fn note_reversal(&mut self, now_ms: u64) -> bool {
        self.reversal_times.push_back(now_ms);
        let cutoff = now_ms.saturating_sub(SHAKE_WINDOW_MS);
        while self
            .reversal_times
            .front()
            .map(|&t| t < cutoff)
            .unwrap_or(false)
        {
            self.reversal_times.pop_front();
        }
        if self.reversal_times.len() >= SHAKE_REVERSALS {
            self.reversal_times.clear();
            self.direction = 0;
            self.cooldown_until = now_ms + SHAKE_COOLDOWN_MS;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Zigzag samples wide enough to register as swings.
    fn zigzag(tracker: &mut ShakeTracker, start_ms: u64, step_ms: u64, cycles: usize) -> bool {
        let mut now = start_ms;
        let mut fired = false;
        for _ in 0..cycles {
            for x in [0.0, 100.0, 0.0] {
                fired |= tracker.observe(x, now);
                now += step_ms;
            }
        }
        fired
    }

    #[test]
    fn fast_zigzag_fires() {
        let mut tracker = ShakeTracker::new();
        assert!(zigzag(&mut tracker, 1_000, 50, 4));
    }

    #[test]
    fn slow_zigzag_does_not_fire() {
        let mut tracker = ShakeTracker::new();
        assert!(!zigzag(&mut tracker, 1_000, 600, 4));
    }

    #[test]
    fn small_wiggles_do_not_fire() {
        let mut tracker = ShakeTracker::new();
        let mut now = 1_000;
        for _ in 0..40 {
            for x in [0.0, 20.0] {
                assert!(!tracker.observe(x, now));
                now += 10;
            }
        }
    }

    #[test]
    fn cooldown_suppresses_immediate_refire() {
        let mut tracker = ShakeTracker::new();
        assert!(zigzag(&mut tracker, 1_000, 50, 4));
        // Straight into another burst: still inside the refractory period.
        assert!(!zigzag(&mut tracker, 1_700, 50, 4));
        // Well past the cooldown it can fire again.
        assert!(zigzag(&mut tracker, 10_000, 50, 4));
    }

    #[test]
    fn disarm_clears_partial_gesture() {
        let mut tracker = ShakeTracker::new();
        // Two reversals, then a disarm, then two more: never four in a row.
        assert!(!zigzag(&mut tracker, 1_000, 50, 1));
        tracker.disarm();
        assert!(!zigzag(&mut tracker, 1_200, 50, 1));
    }
}
