//! Single-bounce Blinn-Phong ray caster: one primary ray per pixel into a
//! plane and spheres, hard shadows, gamma corrected output.

pub mod camera;
pub mod cli;
pub mod config;
pub mod logger;
pub mod output;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shape;
pub mod surface;
