use kiss3d::camera::Camera;
use kiss3d::text::Font;
use kiss3d::window::Window;
use nalgebra::{Matrix4, Point2, Point3, Vector3};

const LABEL_FONT_SIZE: f32 = 36.0;
const LABEL_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Screen-space text that hangs above a body.
///
/// The label has no node of its own. Its anchor is an offset from the body's
/// position, so it follows the body around, and it's drawn in the text pass
/// after the 3D scene.
#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
    pub offset: Vector3<f32>,
}

impl Label {
    /// A label sitting right on top of a sphere of the given radius.
    pub fn above(text: &str, radius: f32) -> Self {
        Label {
            text: text.to_owned(),
            offset: Vector3::new(0.0, radius, 0.0),
        }
    }

    pub fn anchor(&self, body_position: &Point3<f32>) -> Point3<f32> {
        body_position + self.offset
    }
}

/// Projects a world-space point to pixel coordinates with the origin in the
/// top-left corner, or `None` if it's behind the camera or outside the clip volume.
pub fn project_to_screen(
    view_projection: &Matrix4<f32>,
    point: &Point3<f32>,
    width: f32,
    height: f32,
) -> Option<Point2<f32>> {
    let clip = view_projection * point.to_homogeneous();
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.xyz() / clip.w;
    if ndc.z < -1.0 || ndc.z > 1.0 {
        return None;
    }

    Some(Point2::new(
        (ndc.x + 1.0) * 0.5 * width,
        (1.0 - ndc.y) * 0.5 * height,
    ))
}

/// Queues the text of every visible label. Kiss3d composites text after the
/// 3D pass, using the same camera we project with here.
pub fn draw_labels<'a, I>(window: &mut Window, camera: &dyn Camera, labels: I)
where
    I: Iterator<Item = (&'a Label, Point3<f32>)>,
{
    let view_projection = camera.transformation();
    let width = window.width() as f32;
    let height = window.height() as f32;
    // Text is laid out in physical pixels, window sizes are logical
    let scale = window.scale_factor() as f32;

    let font = Font::default();
    let [r, g, b] = LABEL_COLOR;
    let color = Point3::new(r, g, b);

    for (label, body_position) in labels {
        let anchor = label.anchor(&body_position);
        let screen = match project_to_screen(&view_projection, &anchor, width, height) {
            Some(pt) => pt,
            None => continue,
        };

        // Center the text horizontally over the anchor, and sit it just above
        let half_width = 0.25 * LABEL_FONT_SIZE * label.text.chars().count() as f32;
        let pos = Point2::new(
            screen.x * scale - half_width,
            screen.y * scale - LABEL_FONT_SIZE,
        );
        window.draw_text(&label.text, &pos, LABEL_FONT_SIZE, &font, &color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::{Isometry3, Perspective3};

    fn view_projection() -> Matrix4<f32> {
        let eye = Point3::new(0.0, 0.0, 10.0);
        let view = Isometry3::look_at_rh(&eye, &Point3::origin(), &Vector3::y());
        let proj = Perspective3::new(800.0 / 600.0, std::f32::consts::FRAC_PI_4, 0.1, 100.0);
        proj.into_inner() * view.to_homogeneous()
    }

    #[test]
    fn test_anchor_follows_body() {
        let label = Label::above("Earth", 2.0);
        let anchor = label.anchor(&Point3::new(100.0, 0.0, 50.0));
        assert_eq!(anchor, Point3::new(100.0, 2.0, 50.0));
    }

    #[test]
    fn test_origin_projects_to_center() {
        let pt = project_to_screen(&view_projection(), &Point3::origin(), 800.0, 600.0).unwrap();
        assert_relative_eq!(pt, Point2::new(400.0, 300.0), epsilon = 1e-3);
    }

    #[test]
    fn test_up_is_up_on_screen() {
        let vp = view_projection();
        let above = project_to_screen(&vp, &Point3::new(0.0, 1.0, 0.0), 800.0, 600.0).unwrap();
        assert!(above.y < 300.0);
    }

    #[test]
    fn test_behind_camera_is_hidden() {
        let vp = view_projection();
        assert!(project_to_screen(&vp, &Point3::new(0.0, 0.0, 20.0), 800.0, 600.0).is_none());
        // Past the far plane
        assert!(project_to_screen(&vp, &Point3::new(0.0, 0.0, -500.0), 800.0, 600.0).is_none());
    }
}
