use nalgebra::{Point3, Vector3};

use crate::ray::Ray;

/// Output image size in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(512, 512)
    }
}

/// Pinhole camera looking down `-w`, with the image plane at `distance`
/// spanning `[left, right] x [bottom, top]` in the (u, v) basis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Point3<f32>,
    pub u: Vector3<f32>,
    pub v: Vector3<f32>,
    pub w: Vector3<f32>,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub distance: f32,
}

impl Camera {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        eye: Point3<f32>,
        u: Vector3<f32>,
        v: Vector3<f32>,
        w: Vector3<f32>,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        distance: f32,
    ) -> Self {
        Self {
            eye,
            u,
            v,
            w,
            left,
            right,
            bottom,
            top,
            distance,
        }
    }

    /// Eye at the origin, axis aligned, with a 0.2 x 0.2 view rectangle at distance 0.1.
    pub fn reference() -> Self {
        Self::new(
            Point3::origin(),
            Vector3::new(1., 0., 0.),
            Vector3::new(0., 1., 0.),
            Vector3::new(0., 0., 1.),
            -0.1,
            0.1,
            -0.1,
            0.1,
            0.1,
        )
    }

    /// Primary ray through the center of pixel `(x, y)`. Row 0 is the bottom
    /// edge of the view rectangle.
    pub fn get_ray(&self, x: f32, y: f32, resolution: &Resolution) -> Ray {
        let ndc_x = (x + 0.5) / resolution.width as f32;
        let ndc_y = (y + 0.5) / resolution.height as f32;
        let screen_x = self.left + (self.right - self.left) * ndc_x;
        let screen_y = self.bottom + (self.top - self.bottom) * ndc_y;

        let direction = -self.distance * self.w + screen_x * self.u + screen_y * self.v;
        Ray::towards(self.eye, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_directions_are_unit_length() {
        let camera = Camera::reference();
        let resolution = Resolution::new(512, 512);
        for y in 0..resolution.height {
            for x in 0..resolution.width {
                let ray = camera.get_ray(x as f32, y as f32, &resolution);
                assert!((ray.direction.norm() - 1.).abs() < 1e-5);
                assert_eq!(ray.origin, camera.eye);
            }
        }
    }

    #[test]
    fn test_scaled_basis_is_renormalized() {
        let mut camera = Camera::reference();
        camera.u *= 3.;
        camera.v *= 0.25;
        camera.w *= 10.;
        let resolution = Resolution::new(7, 5);
        for (x, y) in [(0., 0.), (6., 4.), (3., 2.)].iter() {
            let ray = camera.get_ray(*x, *y, &resolution);
            assert!((ray.direction.norm() - 1.).abs() < 1e-5);
        }
    }

    #[test]
    fn test_corners_follow_view_rectangle() {
        let camera = Camera::reference();
        let resolution = Resolution::new(2, 2);

        // bottom-left pixel looks left and down, top-right looks right and up
        let bottom_left = camera.get_ray(0., 0., &resolution).direction;
        assert!(bottom_left.x < 0. && bottom_left.y < 0. && bottom_left.z < 0.);
        let top_right = camera.get_ray(1., 1., &resolution).direction;
        assert!(top_right.x > 0. && top_right.y > 0. && top_right.z < 0.);

        let expected = Vector3::new(-0.05, -0.05, -0.1).normalize();
        assert!((bottom_left.into_inner() - expected).norm() < 1e-6);
    }

    #[test]
    fn test_resolution_is_read_per_call() {
        let camera = Camera::reference();
        let small = camera.get_ray(0., 0., &Resolution::new(4, 4));
        let large = camera.get_ray(0., 0., &Resolution::new(400, 400));

        // pixel (0, 0) sits closer to the rectangle's corner the finer the grid
        let expected_small = Vector3::new(-0.075, -0.075, -0.1).normalize();
        let expected_large = Vector3::new(-0.09975, -0.09975, -0.1).normalize();
        assert!((small.direction.into_inner() - expected_small).norm() < 1e-5);
        assert!((large.direction.into_inner() - expected_large).norm() < 1e-5);
        assert!(small.direction.x > large.direction.x);
    }
}
