use std::f32::consts::PI;

use kiss3d::camera::Camera;
use kiss3d::event::{Action, Key, MouseButton, WindowEvent};
use kiss3d::resource::ShaderUniform;
use kiss3d::window::Canvas;
use nalgebra::{Isometry3, Matrix4, Perspective3, Point3, Vector2, Vector3};

use crate::consts::{
    CAMERA_DAMPING, CAMERA_FOVY_DEGREES, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE,
    CAMERA_START_DIRECTION, CAMERA_START_DISTANCE, CAMERA_Z_FAR, CAMERA_Z_NEAR,
};

const KEY_CAMERA_MOVE_UP: Key = Key::W;
const KEY_CAMERA_MOVE_DOWN: Key = Key::S;
const KEY_CAMERA_MOVE_LEFT: Key = Key::A;
const KEY_CAMERA_MOVE_RIGHT: Key = Key::D;
const KEY_CAMERA_ZOOM_IN: Key = Key::Equals;
const KEY_CAMERA_ZOOM_OUT: Key = Key::Minus;

const KEY_ANGLE_STEP: f32 = 0.1;
const KEY_ZOOM_STEP: f32 = 1.2;

#[derive(Debug, Clone)]
pub struct CameraConfig {
    pub fovy: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Where the camera starts, relative to the origin it orbits
    pub start_position: Point3<f32>,
    pub distance_limits: (f32, f32),
    /// Fraction of the leftover angular velocity lost each frame
    pub damping: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let [x, y, z] = CAMERA_START_DIRECTION;
        let direction = Vector3::new(x, y, z).normalize();
        CameraConfig {
            fovy: CAMERA_FOVY_DEGREES.to_radians(),
            z_near: CAMERA_Z_NEAR,
            z_far: CAMERA_Z_FAR,
            start_position: Point3::from(direction * CAMERA_START_DISTANCE),
            distance_limits: (CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE),
            damping: CAMERA_DAMPING,
        }
    }
}

// Orbit controls, in the style of an ArcBall: drag to rotate around the
// origin, scroll to zoom. Unlike ArcBall, letting go of the mouse doesn't stop
// the camera dead. Drags set an angular velocity, which decays a little every
// frame.
//
// The scene is y-up, so theta is measured around the y-axis (from +z towards
// +x) and phi down from +y.
pub struct OrbitCamera {
    // -- position --
    theta: f32,
    phi: f32,
    radius: f32,
    // -- motion --
    theta_velocity: f32,
    phi_velocity: f32,
    // -- perspective --
    width: u32,
    height: u32,
    fovy: f32,
    z_near: f32,
    z_far: f32,
    // -- other --
    last_cursor_pos: Vector2<f32>,
    // -- knobs to fiddle with --
    theta_step: f32,
    phi_step: f32,
    scroll_ratio: f32,
    phi_limit: f32,
    radius_limits: (f32, f32),
    damping: f32,
}

impl OrbitCamera {
    pub fn new(config: &CameraConfig, width: u32, height: u32) -> Self {
        let eye = config.start_position.coords;
        let radius = eye.norm();
        let phi = if radius > 0.0 {
            (eye.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            PI / 2.0
        };
        let theta = eye.x.atan2(eye.z);

        let mut camera = OrbitCamera {
            theta,
            phi,
            radius,
            theta_velocity: 0.0,
            phi_velocity: 0.0,
            width: width.max(1),
            height: height.max(1),
            fovy: config.fovy,
            z_near: config.z_near,
            z_far: config.z_far,
            last_cursor_pos: Vector2::zeros(),
            theta_step: 0.005,
            phi_step: 0.005,
            scroll_ratio: 1.1,
            phi_limit: 0.001,
            radius_limits: config.distance_limits,
            damping: nalgebra::clamp(config.damping, 0.0, 1.0),
        };
        camera.zoom(1.0);
        camera
    }

    fn projection(&self) -> Perspective3<f32> {
        Perspective3::new(self.aspect(), self.fovy, self.z_near, self.z_far)
    }

    fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection().into_inner()
    }

    fn view_matrix(&self) -> Matrix4<f32> {
        self.view_transform().to_homogeneous()
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Applies a new surface size. Happens on every resize event, as it comes in.
    pub fn resize(&mut self, width: u32, height: u32) {
        // A minimized window reports 0x0; keep the aspect ratio finite
        self.width = width.max(1);
        self.height = height.max(1);
    }

    pub fn rotate(&mut self, dtheta: f32, dphi: f32) {
        self.theta = (self.theta + dtheta) % (2.0 * PI);
        self.phi = nalgebra::clamp(self.phi + dphi, self.phi_limit, PI - self.phi_limit);
    }

    pub fn zoom(&mut self, factor: f32) {
        self.radius = nalgebra::clamp(
            self.radius * factor,
            self.radius_limits.0,
            self.radius_limits.1,
        );
    }

    /// Gives the camera a spin that will wind down over the next frames.
    pub fn fling(&mut self, dtheta: f32, dphi: f32) {
        self.theta_velocity += dtheta;
        self.phi_velocity += dphi;
    }

    /// Moves the camera by its leftover velocity, then damps it. Once per frame.
    pub fn advance_damping(&mut self) {
        if self.theta_velocity == 0.0 && self.phi_velocity == 0.0 {
            return;
        }

        self.rotate(self.theta_velocity, self.phi_velocity);

        let keep = 1.0 - self.damping;
        self.theta_velocity *= keep;
        self.phi_velocity *= keep;

        // Snap tiny leftovers to zero so we stop eventually
        if self.theta_velocity.abs() < 1e-6 && self.phi_velocity.abs() < 1e-6 {
            self.theta_velocity = 0.0;
            self.phi_velocity = 0.0;
        }
    }

    pub fn is_moving(&self) -> bool {
        self.theta_velocity != 0.0 || self.phi_velocity != 0.0
    }
}

impl Camera for OrbitCamera {
    fn handle_event(&mut self, canvas: &Canvas, event: &WindowEvent) {
        match *event {
            WindowEvent::CursorPos(x, y, _) => {
                let curr_pos = Vector2::new(x as f32, y as f32);

                if canvas.get_mouse_button(MouseButton::Button1) == Action::Press {
                    // Rotate the opposite direction as the mouse moves (drag right == camera glides
                    // left)
                    let dpos = curr_pos - self.last_cursor_pos;
                    self.fling(-dpos.x * self.theta_step, -dpos.y * self.phi_step);
                }

                self.last_cursor_pos = curr_pos;
            }
            WindowEvent::Scroll(_, off, _) => {
                // scroll up == zoom in
                if off < 0.0 {
                    self.zoom(self.scroll_ratio);
                } else if off > 0.0 {
                    self.zoom(self.scroll_ratio.recip())
                }
            }
            WindowEvent::FramebufferSize(w, h) => self.resize(w, h),
            WindowEvent::Key(KEY_CAMERA_MOVE_UP, Action::Press, _) => {
                self.fling(0.0, -KEY_ANGLE_STEP)
            }
            WindowEvent::Key(KEY_CAMERA_MOVE_DOWN, Action::Press, _) => {
                self.fling(0.0, KEY_ANGLE_STEP)
            }
            WindowEvent::Key(KEY_CAMERA_MOVE_LEFT, Action::Press, _) => {
                self.fling(-KEY_ANGLE_STEP, 0.0)
            }
            WindowEvent::Key(KEY_CAMERA_MOVE_RIGHT, Action::Press, _) => {
                self.fling(KEY_ANGLE_STEP, 0.0)
            }
            WindowEvent::Key(KEY_CAMERA_ZOOM_IN, Action::Press, _) => {
                self.zoom(KEY_ZOOM_STEP.recip())
            }
            WindowEvent::Key(KEY_CAMERA_ZOOM_OUT, Action::Press, _) => self.zoom(KEY_ZOOM_STEP),
            _ => {}
        }
    }

    fn eye(&self) -> Point3<f32> {
        Point3::new(
            self.radius * self.phi.sin() * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * self.phi.sin() * self.theta.cos(),
        )
    }

    fn view_transform(&self) -> Isometry3<f32> {
        Isometry3::look_at_rh(&self.eye(), &Point3::origin(), &Vector3::y())
    }

    fn transformation(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    fn inverse_transformation(&self) -> Matrix4<f32> {
        self.transformation()
            .try_inverse()
            .unwrap_or_else(Matrix4::identity)
    }

    fn clip_planes(&self) -> (f32, f32) {
        (self.z_near, self.z_far)
    }

    // Damping is advanced explicitly at the start of each tick instead
    fn update(&mut self, _canvas: &Canvas) {}

    fn upload(
        &self,
        _: usize,
        proj: &mut ShaderUniform<Matrix4<f32>>,
        view: &mut ShaderUniform<Matrix4<f32>>,
    ) {
        proj.upload(&self.projection_matrix());
        view.upload(&self.view_matrix());
    }
}
