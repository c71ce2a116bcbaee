use nalgebra::{Point3, Unit, Vector3};

use crate::ray::Ray;

/// Rays closer than this to parallel never hit a plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    /// Infinite horizontal plane facing +y.
    Plane { y: f32 },
    Sphere { center: Point3<f32>, radius: f32 },
}

impl Shape {
    pub fn plane(y: f32) -> Self {
        Self::Plane { y }
    }

    pub fn sphere(center: Point3<f32>, radius: f32) -> Self {
        Self::Sphere { center, radius }
    }

    /// Distance along `ray` to the surface, if it lies in front of the origin.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let o = &ray.origin;
        let d = ray.direction.into_inner();
        match self {
            Self::Plane { y } => {
                if d.y.abs() < PARALLEL_EPSILON {
                    return None;
                }
                let t = (y - o.y) / d.y;
                if t > 0. {
                    Some(t)
                } else {
                    None
                }
            }
            Self::Sphere { center, radius } => {
                let co = o - center;

                let a = d.dot(&d);
                let b = 2. * co.dot(&d);
                let c = co.dot(&co) - radius * radius;
                let (near, far) = solve_quadratic(a, b, c)?;
                // from inside the sphere the near root lies behind the origin
                let t = if near <= 0. { far } else { near };
                if t > 0. {
                    Some(t)
                } else {
                    None
                }
            }
        }
    }

    pub fn normal(&self, p: &Point3<f32>) -> Unit<Vector3<f32>> {
        match self {
            Self::Plane { .. } => Vector3::y_axis(),
            Self::Sphere { center, .. } => Unit::new_normalize(p - center),
        }
    }
}

/// Real roots of `a t^2 + b t + c`, smaller first.
fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let discriminant = b * b - 4. * a * c;
    if discriminant < 0. {
        return None;
    }
    let disc_sqrt = discriminant.sqrt();
    let root1 = (-b - disc_sqrt) / (2. * a);
    let root2 = (-b + disc_sqrt) / (2. * a);
    Some((root1, root2))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_plane_hit_from_above() {
        let plane = Shape::plane(-2.);
        let ray = Ray::towards(Point3::new(0., 5., 0.), Vector3::new(0., -1., 0.));
        assert_eq!(plane.intersect_ray(&ray), Some(7.));
        assert_eq!(plane.normal(&ray.at(7.)).into_inner(), Vector3::new(0., 1., 0.));
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let plane = Shape::plane(-2.);
        let ray = Ray::towards(Point3::new(0., 5., 0.), Vector3::new(1., 0., 0.));
        assert_eq!(plane.intersect_ray(&ray), None);

        let grazing = Ray::towards(Point3::new(0., -1., 0.), Vector3::new(1., 1e-8, 0.));
        assert_eq!(plane.intersect_ray(&grazing), None);
    }

    #[test]
    fn test_plane_behind_origin_misses() {
        let plane = Shape::plane(-2.);
        let ray = Ray::towards(Point3::new(0., 5., 0.), Vector3::new(0., 1., 0.));
        assert_eq!(plane.intersect_ray(&ray), None);
    }

    #[test]
    fn test_plane_normal_is_constant() {
        let plane = Shape::plane(3.);
        for p in [Point3::new(0., 3., 0.), Point3::new(-9., 12., 4.)].iter() {
            assert_eq!(plane.normal(p), Vector3::y_axis());
        }
    }

    #[test]
    fn test_sphere_near_surface() {
        let sphere = Shape::sphere(Point3::new(0., 0., -7.), 2.);
        let ray = Ray::towards(Point3::origin(), Vector3::new(0., 0., -1.));
        let t = sphere.intersect_ray(&ray).unwrap();
        assert!((t - 5.).abs() < 1e-6);
        let n = sphere.normal(&ray.at(t));
        assert!((n.into_inner() - Vector3::new(0., 0., 1.)).norm() < 1e-6);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Shape::sphere(Point3::new(0., 0., -7.), 2.);
        let ray = Ray::towards(Point3::new(0., 3., 0.), Vector3::new(0., 0., -1.));
        assert_eq!(sphere.intersect_ray(&ray), None);
    }

    #[test]
    fn test_sphere_behind_origin_misses() {
        let sphere = Shape::sphere(Point3::new(0., 0., -7.), 2.);
        let ray = Ray::towards(Point3::origin(), Vector3::new(0., 0., 1.));
        assert_eq!(sphere.intersect_ray(&ray), None);
    }

    #[test]
    fn test_sphere_from_inside_takes_far_root() {
        let sphere = Shape::sphere(Point3::new(0., 0., -7.), 2.);
        let ray = Ray::towards(Point3::new(0., 0., -7.), Vector3::new(0., 0., -1.));
        let t = sphere.intersect_ray(&ray).unwrap();
        assert!((t - 2.).abs() < 1e-6);
        // normal still points outward at the exit point
        let n = sphere.normal(&ray.at(t));
        assert!((n.into_inner() - Vector3::new(0., 0., -1.)).norm() < 1e-6);
    }

    #[test]
    fn test_sphere_tangent_ray() {
        let sphere = Shape::sphere(Point3::new(0., 0., -7.), 2.);
        let ray = Ray::towards(Point3::new(0., 2., 0.), Vector3::new(0., 0., -1.));
        let t = sphere.intersect_ray(&ray).unwrap();
        assert!((t - 7.).abs() < 1e-4);
    }
}
