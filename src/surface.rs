use nalgebra::{Point3, Unit, Vector3};

use crate::ray::Ray;
use crate::shape::Shape;

/// Linear RGB, unclamped until the gamma stage.
pub type Color = Vector3<f32>;

/// Blinn-Phong reflectance coefficients.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f32,
}

impl Material {
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// No specular highlight.
    pub fn matte(ambient: Color, diffuse: Color) -> Self {
        Self::new(ambient, diffuse, Vector3::zeros(), 0.)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Surface {
    pub shape: Shape,
    pub material: Material,
}

impl Surface {
    pub fn new(shape: Shape, material: Material) -> Self {
        Self { shape, material }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        self.shape.intersect_ray(ray)
    }

    pub fn normal_at(&self, point: &Point3<f32>) -> Unit<Vector3<f32>> {
        self.shape.normal(point)
    }

    pub fn material(&self) -> Material {
        self.material
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Point3<f32>,
}

impl Light {
    pub fn point(position: Point3<f32>) -> Self {
        Self { position }
    }
}
