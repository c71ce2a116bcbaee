//! TOML render settings. Every section is optional and falls back to the
//! reference scene.
//!
//! ```toml
//! [render]
//! width = 512
//! height = 512
//! gamma = 2.2
//! output = "render.png"
//! view = "world_origin"
//!
//! [light]
//! position = [-4.0, 4.0, -3.0]
//!
//! [[surfaces]]
//! type = "sphere"
//! center = [0.0, 0.0, -7.0]
//! radius = 2.0
//! material = { ambient = [0.0, 0.2, 0.0], diffuse = [0.0, 0.5, 0.0], specular = [0.5, 0.5, 0.5], shininess = 32.0 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::info;
use nalgebra::{Point3, Vector3};
use serde::Deserialize;

use crate::camera::{Camera, Resolution};
use crate::render::{RenderConfig, DEFAULT_GAMMA};
use crate::scene::{Scene, ViewOrigin};
use crate::shape::Shape;
use crate::surface::{Light, Material, Surface};

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewSetting {
    WorldOrigin,
    CameraEye,
}

impl From<ViewSetting> for ViewOrigin {
    fn from(view: ViewSetting) -> Self {
        match view {
            ViewSetting::WorldOrigin => ViewOrigin::WorldOrigin,
            ViewSetting::CameraEye => ViewOrigin::CameraEye,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub gamma: f32,
    pub output: PathBuf,
    pub view: ViewSetting,
}

impl Default for RenderSettings {
    fn default() -> Self {
        let resolution = Resolution::default();
        Self {
            width: resolution.width,
            height: resolution.height,
            gamma: DEFAULT_GAMMA,
            output: PathBuf::from("render.png"),
            view: ViewSetting::WorldOrigin,
        }
    }
}

fn to_array(v: &Vector3<f32>) -> [f32; 3] {
    [v.x, v.y, v.z]
}

fn to_point(p: [f32; 3]) -> Point3<f32> {
    Point3::new(p[0], p[1], p[2])
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CameraSettings {
    pub eye: [f32; 3],
    pub u: [f32; 3],
    pub v: [f32; 3],
    pub w: [f32; 3],
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        let camera = Camera::reference();
        Self {
            eye: to_array(&camera.eye.coords),
            u: to_array(&camera.u),
            v: to_array(&camera.v),
            w: to_array(&camera.w),
            left: camera.left,
            right: camera.right,
            bottom: camera.bottom,
            top: camera.top,
            distance: camera.distance,
        }
    }
}

impl From<CameraSettings> for Camera {
    fn from(settings: CameraSettings) -> Self {
        Camera::new(
            to_point(settings.eye),
            Vector3::from(settings.u),
            Vector3::from(settings.v),
            Vector3::from(settings.w),
            settings.left,
            settings.right,
            settings.bottom,
            settings.top,
            settings.distance,
        )
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct LightSettings {
    pub position: [f32; 3],
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            position: [-4., 4., -3.],
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct MaterialSettings {
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    #[serde(default)]
    pub specular: [f32; 3],
    #[serde(default)]
    pub shininess: f32,
}

impl From<MaterialSettings> for Material {
    fn from(settings: MaterialSettings) -> Self {
        Material::new(
            Vector3::from(settings.ambient),
            Vector3::from(settings.diffuse),
            Vector3::from(settings.specular),
            settings.shininess,
        )
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceSettings {
    Plane {
        y: f32,
        material: MaterialSettings,
    },
    Sphere {
        center: [f32; 3],
        radius: f32,
        material: MaterialSettings,
    },
}

impl SurfaceSettings {
    fn material(&self) -> &MaterialSettings {
        match self {
            Self::Plane { material, .. } => material,
            Self::Sphere { material, .. } => material,
        }
    }
}

impl From<SurfaceSettings> for Surface {
    fn from(settings: SurfaceSettings) -> Self {
        match settings {
            SurfaceSettings::Plane { y, material } => Surface::new(Shape::plane(y), material.into()),
            SurfaceSettings::Sphere {
                center,
                radius,
                material,
            } => Surface::new(Shape::sphere(to_point(center), radius), material.into()),
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub render: RenderSettings,
    pub camera: CameraSettings,
    pub light: LightSettings,
    /// Empty means the reference scene's surfaces.
    pub surfaces: Vec<SurfaceSettings>,
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("loading settings from {}", path.display());
        let contents =
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("invalid settings in {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let render = &self.render;
        if render.width == 0 || render.height == 0 {
            bail!("resolution must be non-zero, got {}x{}", render.width, render.height);
        }
        if !(render.gamma > 0.) {
            bail!("gamma must be positive, got {}", render.gamma);
        }
        if !(self.camera.distance > 0.) {
            bail!("camera distance must be positive, got {}", self.camera.distance);
        }
        for (i, surface) in self.surfaces.iter().enumerate() {
            if let SurfaceSettings::Sphere { radius, .. } = surface {
                if !(*radius > 0.) {
                    bail!("surface {}: sphere radius must be positive, got {}", i, radius);
                }
            }
            let shininess = surface.material().shininess;
            if !(shininess >= 0.) {
                bail!("surface {}: shininess must be non-negative, got {}", i, shininess);
            }
        }
        Ok(())
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            resolution: Resolution::new(self.render.width, self.render.height),
            gamma: self.render.gamma,
        }
    }

    pub fn scene(&self) -> Scene {
        if self.surfaces.is_empty() {
            let mut scene = Scene::reference();
            scene.camera = self.camera.into();
            scene.light = Light::point(to_point(self.light.position));
            scene.view = self.render.view.into();
            return scene;
        }

        let mut scene = Scene::new(self.camera.into(), Light::point(to_point(self.light.position)));
        scene.view = self.render.view.into();
        for surface in &self.surfaces {
            scene.add((*surface).into());
        }
        scene
    }
}
