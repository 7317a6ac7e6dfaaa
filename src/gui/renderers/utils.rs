use kiss3d::renderer::LineRenderer;

use nalgebra::Point3;

/// Samples `f` at `num_segments + 1` evenly spaced parameters from `t_start`
/// to `t_end`, both ends included.
pub fn path_iter_parametric<F, S>(
    f: F,
    t_start: S,
    t_end: S,
    num_segments: usize,
) -> impl Iterator<Item = Point3<f32>>
where
    F: Fn(S) -> Point3<f32>,
    S: nalgebra::RealField + simba::scalar::SupersetOf<usize> + Copy,
{
    // Zero segments would divide by zero below
    let num_segments = num_segments.max(1);
    let convert = nalgebra::convert::<usize, S>;
    (0..=num_segments)
        .map(move |i| convert(i) / convert(num_segments))
        .map(move |u| t_start + u * (t_end - t_start))
        .map(f)
}

/// Queues a line strip through consecutive points.
pub fn draw_path<I: Iterator<Item = Point3<f32>>>(
    line_renderer: &mut LineRenderer,
    points: I,
    color: &Point3<f32>,
) {
    let mut prev_pt = None;
    for pt in points {
        if let Some(prev_pt) = prev_pt {
            line_renderer.draw_line(prev_pt, pt, *color);
        }
        prev_pt = Some(pt);
    }
}
