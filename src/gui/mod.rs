use std::time::Instant;

use kiss3d::camera::Camera;
use kiss3d::event::{EventManager, WindowEvent};
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};

use self::controller::Controller;
use crate::config::SceneConfig;
use crate::model::FrameClock;

mod camera;
mod controller;
mod labels;
mod renderers;
mod scene;

pub use camera::{CameraConfig, OrbitCamera};
pub use labels::{project_to_screen, Label};
pub use scene::{open_window, SceneState};

/// The render loop. kiss3d calls `step` once per displayed frame, then draws
/// the 3D pass and after it the text pass.
pub struct Planetarium {
    scene: SceneState,
    controller: Controller,
    clock: FrameClock,
}

impl Planetarium {
    pub fn new(scene: SceneState, config: &SceneConfig) -> Self {
        Self {
            scene,
            controller: Controller::new(config.show_labels, config.show_orbits),
            clock: FrameClock::new(config.pacing),
        }
    }

    fn process_user_input(&mut self, mut events: EventManager) {
        for event in events.iter() {
            if let WindowEvent::FramebufferSize(w, h) = &event.value {
                // The camera picks the new size up on its own
                tracing::debug!("Resized to {}x{}", w, h);
            }
            self.controller.process_event(&event.value);
        }
    }
}

impl State for Planetarium {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        let (camera, renderer) = self.scene.camera_and_renderer();
        (Some(camera), None, Some(renderer), None)
    }

    fn step(&mut self, window: &mut Window) {
        self.process_user_input(window.events());

        self.scene.camera_mut().advance_damping();

        // Keep ticking while paused, so resuming doesn't make up for lost time
        let frames = self.clock.tick(Instant::now());
        if !self.controller.is_paused() {
            self.scene
                .system_mut()
                .advance(frames * self.controller.speed());
        }
        self.scene.sync_nodes();

        self.scene.queue_overlays(self.controller.show_orbits());
        if self.controller.show_labels() {
            self.scene.draw_labels(window);
        }

        self.controller.increment_frame_counter();
    }
}
