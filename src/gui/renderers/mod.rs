use kiss3d::camera::Camera;
use kiss3d::renderer::{LineRenderer, PointRenderer, Renderer};
use nalgebra::Point3;

use self::utils::{draw_path, path_iter_parametric};
use crate::model::Starfield;

mod utils;

const ORBIT_SEGMENTS: usize = 128;

/// Everything drawn outside the scene graph: stars, the axes helper and orbit paths.
///
/// kiss3d's line and point renderers are immediate-mode, so things need to be
/// queued up again every frame.
pub struct CompoundRenderer {
    line_renderer: LineRenderer,
    point_renderer: PointRenderer,
}

impl CompoundRenderer {
    pub fn new(point_size: f32) -> Self {
        let mut point_renderer = PointRenderer::new();
        point_renderer.set_point_size(point_size);
        CompoundRenderer {
            line_renderer: LineRenderer::new(),
            point_renderer,
        }
    }

    pub fn draw_starfield(&mut self, starfield: &Starfield) {
        for (position, color) in starfield.points() {
            self.point_renderer.draw_point(position, color);
        }
    }

    /// Red, green and blue lines along +x, +y and +z.
    pub fn draw_axes(&mut self, length: f32) {
        let origin = Point3::origin();
        let axes = [
            (Point3::new(length, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)),
            (Point3::new(0.0, length, 0.0), Point3::new(0.0, 1.0, 0.0)),
            (Point3::new(0.0, 0.0, length), Point3::new(0.0, 0.0, 1.0)),
        ];
        for (end_pt, color) in axes.iter() {
            self.line_renderer.draw_line(origin, *end_pt, *color);
        }
    }

    /// A circle in the xz-plane around the origin, where an orbit runs.
    pub fn draw_orbit(&mut self, radius: f32, color: Point3<f32>) {
        let f = |angle: f32| Point3::new(radius * angle.sin(), 0.0, radius * angle.cos());
        draw_path(
            &mut self.line_renderer,
            path_iter_parametric(f, 0.0, std::f32::consts::TAU, ORBIT_SEGMENTS),
            &color,
        );
    }
}

impl Renderer for CompoundRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        self.point_renderer.render(pass, camera);
        self.line_renderer.render(pass, camera);
    }
}
