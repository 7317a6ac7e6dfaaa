use std::time::Instant;

use kiss3d::event::{Action, Key, WindowEvent};

// Key config, all in one place
const KEY_SPEED_UP: Key = Key::Period;
const KEY_SLOW_DOWN: Key = Key::Comma;
const KEY_TOGGLE_PAUSE: Key = Key::Space;
const KEY_TOGGLE_LABELS: Key = Key::L;
const KEY_TOGGLE_ORBITS: Key = Key::O;

const MAX_SPEED: f64 = 64.0;
const MIN_SPEED: f64 = 1.0 / 64.0;

pub struct Controller {
    speed: f64,
    paused: bool,
    show_labels: bool,
    show_orbits: bool,
    fps_counter: FpsCounter,
}

pub struct FpsCounter {
    instant: Instant,
    counter: usize,
    window_size_millis: usize,
    previous_fps: f64,
}

impl FpsCounter {
    pub fn new(window_size_millis: usize) -> Self {
        FpsCounter {
            instant: Instant::now(),
            counter: 0,
            previous_fps: 0.0,
            window_size_millis,
        }
    }

    pub fn reset(&mut self) {
        self.instant = Instant::now();
        self.counter = 0;
    }

    pub fn value(&self) -> f64 {
        self.previous_fps
    }

    /// Returns true whenever a new reading is available.
    pub fn increment(&mut self) -> bool {
        self.counter += 1;

        let elapsed = self.instant.elapsed();
        if elapsed.as_millis() > self.window_size_millis as u128 {
            self.previous_fps = (1000 * self.counter) as f64 / elapsed.as_millis() as f64;
            self.reset();
            return true;
        }
        false
    }
}

impl Controller {
    pub fn new(show_labels: bool, show_orbits: bool) -> Self {
        Controller {
            speed: 1.0,
            paused: false,
            show_labels,
            show_orbits,
            fps_counter: FpsCounter::new(5000),
        }
    }

    /// Returns true if the event was one of ours.
    pub fn process_event(&mut self, event: &WindowEvent) -> bool {
        match *event {
            WindowEvent::Key(KEY_SPEED_UP, Action::Press, _) => {
                self.speed = f64::min(self.speed * 2.0, MAX_SPEED);
                tracing::info!("Speed is {}x", self.speed);
            }
            WindowEvent::Key(KEY_SLOW_DOWN, Action::Press, _) => {
                self.speed = f64::max(self.speed / 2.0, MIN_SPEED);
                tracing::info!("Speed is {}x", self.speed);
            }
            WindowEvent::Key(KEY_TOGGLE_PAUSE, Action::Press, _) => {
                self.paused = !self.paused;
                tracing::info!("{}", if self.paused { "Paused" } else { "Resumed" });
            }
            WindowEvent::Key(KEY_TOGGLE_LABELS, Action::Press, _) => {
                self.show_labels = !self.show_labels;
            }
            WindowEvent::Key(KEY_TOGGLE_ORBITS, Action::Press, _) => {
                self.show_orbits = !self.show_orbits;
            }
            _ => return false,
        }
        true
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Multiplier on the number of frames simulated per tick
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    pub fn show_orbits(&self) -> bool {
        self.show_orbits
    }

    pub fn increment_frame_counter(&mut self) {
        if self.fps_counter.increment() {
            tracing::debug!("{:.1} fps", self.fps_counter.value());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use kiss3d::event::Modifiers;

    fn press(key: Key) -> WindowEvent {
        WindowEvent::Key(key, Action::Press, Modifiers::empty())
    }

    #[test]
    fn test_speed_is_bounded() {
        let mut controller = Controller::new(true, false);
        for _ in 0..20 {
            controller.process_event(&press(KEY_SPEED_UP));
        }
        assert_eq!(controller.speed(), MAX_SPEED);
        for _ in 0..40 {
            controller.process_event(&press(KEY_SLOW_DOWN));
        }
        assert_eq!(controller.speed(), MIN_SPEED);
    }

    #[test]
    fn test_toggles() {
        let mut controller = Controller::new(true, false);
        assert!(controller.process_event(&press(KEY_TOGGLE_PAUSE)));
        assert!(controller.is_paused());
        controller.process_event(&press(KEY_TOGGLE_LABELS));
        assert!(!controller.show_labels());
        controller.process_event(&press(KEY_TOGGLE_ORBITS));
        assert!(controller.show_orbits());

        let release = WindowEvent::Key(KEY_TOGGLE_PAUSE, Action::Release, Modifiers::empty());
        assert!(!controller.process_event(&release));
        assert!(controller.is_paused());
    }
}
