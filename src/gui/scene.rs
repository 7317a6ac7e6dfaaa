use std::panic::{self, AssertUnwindSafe};

use kiss3d::light::Light;
use kiss3d::scene::SceneNode;
use kiss3d::window::Window;
use nalgebra::{Point3, Translation3, UnitQuaternion, Vector3};

use super::camera::OrbitCamera;
use super::labels::{self, Label};
use super::renderers::CompoundRenderer;
use crate::assets::LoadedTexture;
use crate::config::SceneConfig;
use crate::error::{Error, Result};
use crate::model::{BodyID, CelestialBody, CelestialBodyDescriptor, SolarSystem, Starfield};

/// Opens the window everything gets drawn into.
///
/// kiss3d panics when it can't get a GL context, so that panic is turned into
/// an error here. There's no recovering from it either way.
pub fn open_window(config: &SceneConfig) -> Result<Window> {
    let (width, height) = config.window_size;
    let title = config.title.as_str();
    panic::catch_unwind(AssertUnwindSafe(|| {
        Window::new_with_size(title, width, height)
    }))
    .map_err(|payload| {
        let reason = payload
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
            .unwrap_or_else(|| String::from("unknown windowing error"));
        Error::Surface(reason)
    })
}

// The scene-graph side of a body: its sphere, and the label that rides on it
struct BodyNode {
    id: BodyID,
    sphere: SceneNode,
    label: Label,
}

/// Everything that makes up a running scene.
pub struct SceneState {
    system: SolarSystem,
    body_nodes: Vec<BodyNode>,
    starfield: Starfield,
    camera: OrbitCamera,
    renderer: CompoundRenderer,
    axes_length: f32,
}

impl SceneState {
    /// Builds the whole scene: lights, camera, one sphere per body, and the starfield.
    ///
    /// `textures` lines up with `descriptors`.
    pub fn initialize(
        window: &mut Window,
        config: &SceneConfig,
        descriptors: Vec<CelestialBodyDescriptor>,
        textures: Vec<Option<LoadedTexture>>,
    ) -> Result<Self> {
        let background = config.background;
        window.set_background_color(background.x, background.y, background.z);
        window.set_light(Light::StickToCamera);
        window.set_framerate_limit(Some(60));

        let system = SolarSystem::new(descriptors, config.motion)?;

        let mut textures = textures.into_iter();
        let body_nodes: Vec<BodyNode> = system
            .bodies()
            .map(|body| {
                let texture = textures.next().flatten();
                create_body_node(window, body, texture.as_ref())
            })
            .collect();

        let starfield = Starfield::generate(&config.starfield);
        tracing::info!("Generated starfield with {} stars", starfield.len());

        let camera = OrbitCamera::new(&config.camera, window.width(), window.height());
        let renderer = CompoundRenderer::new(starfield.point_size);

        tracing::info!("Scene ready with {} bodies", system.len());
        Ok(SceneState {
            system,
            body_nodes,
            starfield,
            camera,
            renderer,
            axes_length: config.axes_length,
        })
    }

    pub fn system_mut(&mut self) -> &mut SolarSystem {
        &mut self.system
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn camera_and_renderer(&mut self) -> (&mut OrbitCamera, &mut CompoundRenderer) {
        (&mut self.camera, &mut self.renderer)
    }

    /// Copies body positions and spins onto their scene nodes.
    pub fn sync_nodes(&mut self) {
        for body_node in self.body_nodes.iter_mut() {
            let body = self.system.get_body(body_node.id);
            place_node(&mut body_node.sphere, body);
        }
    }

    /// Queues everything that isn't a scene node for the 3D pass.
    pub fn queue_overlays(&mut self, show_orbits: bool) {
        self.renderer.draw_starfield(&self.starfield);
        if self.axes_length > 0.0 {
            self.renderer.draw_axes(self.axes_length);
        }
        if show_orbits {
            for body in self.system.bodies().skip(1) {
                let color = Point3::from(body.descriptor.color.coords * 0.5);
                self.renderer.draw_orbit(body.orbit_radius() as f32, color);
            }
        }
    }

    /// The label pass. Drawn with the same camera as the 3D pass.
    pub fn draw_labels(&self, window: &mut Window) {
        let system = &self.system;
        let labels = self.body_nodes.iter().map(|body_node| {
            let position: Point3<f32> = nalgebra::convert(system.get_body(body_node.id).position());
            (&body_node.label, position)
        });
        labels::draw_labels(window, &self.camera, labels);
    }
}

fn create_body_node(
    window: &mut Window,
    body: &CelestialBody,
    texture: Option<&LoadedTexture>,
) -> BodyNode {
    let radius = body.radius() as f32;

    let mut sphere = window.add_sphere(radius);
    let color = &body.descriptor.color;
    sphere.set_color(color.x, color.y, color.z);
    match texture {
        Some(texture) => {
            // Texture colors get multiplied by the material color
            sphere.set_color(1.0, 1.0, 1.0);
            sphere.set_texture_from_memory(&texture.bytes, &texture.name);
        }
        None if body.descriptor.texture.is_some() => {
            tracing::debug!("{} has a texture but none was loaded", body.name());
        }
        None => {}
    }
    place_node(&mut sphere, body);

    tracing::info!(
        "Created {} (radius {}, orbit radius {})",
        body.name(),
        radius,
        body.orbit_radius()
    );

    BodyNode {
        id: body.id,
        sphere,
        label: Label::above(body.name(), radius),
    }
}

fn place_node(node: &mut SceneNode, body: &CelestialBody) {
    let position: Point3<f32> = nalgebra::convert(body.position());
    node.set_local_translation(Translation3::from(position.coords));
    node.set_local_rotation(UnitQuaternion::from_axis_angle(
        &Vector3::y_axis(),
        body.rotation_y() as f32,
    ));
}
