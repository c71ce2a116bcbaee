use log::debug;
use nalgebra::{Point3, Vector3};

use crate::camera::Camera;
use crate::ray::Ray;
use crate::shape::Shape;
use crate::surface::{Color, Light, Material, Surface};

/// Offset along the normal for shadow ray origins, and the minimum distance
/// at which a shadow ray counts as blocked.
pub const SHADOW_BIAS: f32 = 0.001;

/// Index of a surface in its scene, in insertion order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub usize);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    pub surface: SurfaceId,
    pub t: f32,
}

/// Where the specular view vector points from a shaded point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewOrigin {
    /// `normalize(-point)`: assumes the eye sits at the world origin.
    WorldOrigin,
    /// `normalize(camera.eye - point)`.
    CameraEye,
}

impl Default for ViewOrigin {
    fn default() -> Self {
        Self::WorldOrigin
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    surfaces: Vec<Surface>,
    pub camera: Camera,
    pub light: Light,
    pub background: Color,
    pub view: ViewOrigin,
}

impl Scene {
    pub fn new(camera: Camera, light: Light) -> Self {
        Self {
            surfaces: Vec::new(),
            camera,
            light,
            background: Vector3::new(0., 0., 0.),
            view: ViewOrigin::default(),
        }
    }

    /// Ground plane and three spheres, lit from the upper left.
    pub fn reference() -> Self {
        let mut scene = Scene::new(Camera::reference(), Light::point(Point3::new(-4., 4., -3.)));

        // gray ground
        scene.add(Surface::new(
            Shape::plane(-2.),
            Material::matte(Vector3::new(0.2, 0.2, 0.2), Vector3::new(1., 1., 1.)),
        ));

        // red
        scene.add(Surface::new(
            Shape::sphere(Point3::new(-4., 0., -7.), 1.),
            Material::matte(Vector3::new(0.2, 0., 0.), Vector3::new(1., 0., 0.)),
        ));

        // green, shiny
        scene.add(Surface::new(
            Shape::sphere(Point3::new(0., 0., -7.), 2.),
            Material::new(
                Vector3::new(0., 0.2, 0.),
                Vector3::new(0., 0.5, 0.),
                Vector3::new(0.5, 0.5, 0.5),
                32.,
            ),
        ));

        // blue
        scene.add(Surface::new(
            Shape::sphere(Point3::new(4., 0., -7.), 1.),
            Material::matte(Vector3::new(0., 0., 0.2), Vector3::new(0., 0., 1.)),
        ));

        scene
    }

    pub fn add(&mut self, surface: Surface) -> SurfaceId {
        let id = SurfaceId(self.surfaces.len());
        debug!("adding surface {:?}: {:?}", id, surface.shape);
        self.surfaces.push(surface);
        id
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(id.0)
    }

    /// Nearest surface along `ray`. On equal distances the earlier surface wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit> {
        self.surfaces
            .iter()
            .enumerate()
            .filter_map(|(i, surface)| {
                surface.intersect(ray).map(|t| Hit {
                    surface: SurfaceId(i),
                    t,
                })
            })
            .fold(None, |closest: Option<Hit>, hit| match closest {
                Some(closest) if closest.t <= hit.t => Some(closest),
                _ => Some(hit),
            })
    }

    pub fn trace(&self, ray: &Ray) -> Color {
        self.closest_hit(ray)
            .map(|hit| {
                let surface = &self.surfaces[hit.surface.0];
                let p = ray.at(hit.t);
                let n = surface.normal_at(&p).into_inner();
                self.shade(&p, &n, &surface.material())
            })
            .unwrap_or(self.background)
    }

    /// Blinn-Phong with a single hard shadow test. Shadowed points get only
    /// the ambient term.
    pub fn shade(&self, p: &Point3<f32>, n: &Vector3<f32>, material: &Material) -> Color {
        let l = (self.light.position - *p).normalize();
        let v = self.view_direction(p);
        let h = (l + v).normalize();

        let ambient = material.ambient;
        if self.in_shadow(p, n, &l) {
            return ambient;
        }

        let diffuse = material.diffuse * n.dot(&l).max(0.);
        let specular = material.specular * n.dot(&h).max(0.).powf(material.shininess);
        ambient + diffuse + specular
    }

    /// Casts a ray from just above `p` along `l`. Any surface in the way
    /// counts, however far past the light it is.
    pub fn in_shadow(&self, p: &Point3<f32>, n: &Vector3<f32>, l: &Vector3<f32>) -> bool {
        let shadow_ray = Ray::towards(*p + *n * SHADOW_BIAS, *l);
        self.surfaces.iter().any(|surface| {
            surface
                .intersect(&shadow_ray)
                .map_or(false, |t| t > SHADOW_BIAS)
        })
    }

    fn view_direction(&self, p: &Point3<f32>) -> Vector3<f32> {
        match self.view {
            ViewOrigin::WorldOrigin => (-p.coords).normalize(),
            ViewOrigin::CameraEye => (self.camera.eye - *p).normalize(),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::reference()
    }
}
