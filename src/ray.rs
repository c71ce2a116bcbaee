use nalgebra::{Point3, Unit, Vector3};

/// A half-line `origin + t * direction` with a unit-length direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Unit<Vector3<f32>>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Unit<Vector3<f32>>) -> Self {
        Self { origin, direction }
    }

    /// Normalizes `direction` before building the ray.
    pub fn towards(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self::new(origin, Unit::new_normalize(direction))
    }

    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + t * self.direction.into_inner()
    }
}
