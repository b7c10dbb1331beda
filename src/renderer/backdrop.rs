//! Decorative sky backdrop
//!
//! A translucent sky plane and a handful of cloud clusters floating in a small
//! 3D scene. The scene is generated once and only reprojected when the view
//! aspect changes. It never sees simulation state.

use glam::{Mat4, Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::shapes;
use super::vertex::{Vertex, colors};

pub const CLOUD_COUNT: usize = 5;
pub const PUFFS_PER_CLOUD: usize = 5;
const SKY_PLANE_SIZE: Vec2 = Vec2::new(20.0, 15.0);
const SKY_PLANE_Z: f32 = -1.0;
const CLOUD_Z: f32 = -0.5;
const PUFF_RADIUS: f32 = 0.3;
const PUFF_SEGMENTS: u32 = 24;

/// Perspective camera looking down -Z
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_y_degrees.to_radians(), aspect, self.near, self.far);
        let view = Mat4::look_at_rh(self.eye, self.eye - Vec3::Z, Vec3::Y);
        proj * view
    }
}

/// One sphere of a cloud cluster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Puff {
    pub center: Vec3,
    pub radius: f32,
}

/// A cloud: five puffs arranged around a center, sized by `scale`
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub position: Vec2,
    pub scale: f32,
    pub puffs: [Puff; PUFFS_PER_CLOUD],
}

impl Cloud {
    pub fn new(position: Vec2, scale: f32) -> Self {
        let offsets = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.4, 0.1),
            Vec2::new(-0.4, 0.1),
            Vec2::new(0.2, -0.2),
            Vec2::new(-0.2, -0.2),
        ];
        let puffs = offsets.map(|o| {
            let p = position + o * scale;
            Puff {
                center: Vec3::new(p.x, p.y, CLOUD_Z),
                radius: PUFF_RADIUS * scale,
            }
        });
        Self {
            position,
            scale,
            puffs,
        }
    }
}

/// The generated backdrop scene
#[derive(Debug, Clone)]
pub struct BackdropScene {
    pub camera: Camera,
    pub clouds: Vec<Cloud>,
}

impl BackdropScene {
    /// Scatter the clouds using the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let clouds = (0..CLOUD_COUNT)
            .map(|_| {
                let x = rng.random_range(-7.5..7.5);
                let y = rng.random_range(-4.0..4.0);
                let scale = rng.random_range(0.2..0.7);
                Cloud::new(Vec2::new(x, y), scale)
            })
            .collect();

        Self {
            camera: Camera::default(),
            clouds,
        }
    }

    /// Clip-space triangles for the whole scene, back to front
    pub fn vertices(&self, aspect: f32) -> Vec<Vertex> {
        let view_proj = self.camera.view_proj(aspect);
        let project = |p: Vec3| view_proj.project_point3(p).truncate();

        let mut vertices = Vec::new();

        // Sky plane
        let half = SKY_PLANE_SIZE * 0.5;
        let min = project(Vec3::new(-half.x, -half.y, SKY_PLANE_Z));
        let max = project(Vec3::new(half.x, half.y, SKY_PLANE_Z));
        vertices.extend(shapes::quad(min, max, colors::SKY_PLANE));

        // Clouds; spheres seen head-on are discs
        let unit = shapes::circle(Vec2::ZERO, 1.0, colors::CLOUD, PUFF_SEGMENTS);
        for puff in self.clouds.iter().flat_map(|c| c.puffs.iter()) {
            let center = project(puff.center);
            let rx = project(puff.center + Vec3::X * puff.radius).x - center.x;
            let ry = project(puff.center + Vec3::Y * puff.radius).y - center.y;
            vertices.extend(unit.iter().map(|v| {
                Vertex::new(
                    center.x + v.position[0] * rx,
                    center.y + v.position[1] * ry,
                    v.color,
                )
            }));
        }

        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_layout() {
        let scene = BackdropScene::new(7);
        assert_eq!(scene.clouds.len(), CLOUD_COUNT);
        for cloud in &scene.clouds {
            assert!((-7.5..7.5).contains(&cloud.position.x));
            assert!((-4.0..4.0).contains(&cloud.position.y));
            assert!((0.2..0.7).contains(&cloud.scale));
            assert_eq!(cloud.puffs.len(), PUFFS_PER_CLOUD);
            for puff in &cloud.puffs {
                assert_eq!(puff.center.z, -0.5);
                assert!((puff.radius - 0.3 * cloud.scale).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_puff_offsets_scale_with_cloud() {
        let cloud = Cloud::new(Vec2::new(1.0, 2.0), 0.5);
        assert_eq!(cloud.puffs[0].center, Vec3::new(1.0, 2.0, -0.5));
        assert!((cloud.puffs[1].center.x - 1.2).abs() < 1e-6);
        assert!((cloud.puffs[1].center.y - 2.05).abs() < 1e-6);
        assert!((cloud.puffs[4].center.x - 0.9).abs() < 1e-6);
        assert!((cloud.puffs[4].center.y - 1.9).abs() < 1e-6);
    }

    #[test]
    fn test_same_seed_same_sky() {
        let a = BackdropScene::new(123);
        let b = BackdropScene::new(123);
        assert_eq!(a.clouds, b.clouds);
        assert_ne!(a.clouds, BackdropScene::new(124).clouds);
    }

    #[test]
    fn test_camera_centers_origin() {
        let vp = Camera::default().view_proj(1.0);
        let p = vp.project_point3(Vec3::new(0.0, 0.0, -0.5));
        assert!(p.x.abs() < 1e-6 && p.y.abs() < 1e-6);
        assert!(p.z > 0.0 && p.z < 1.0);

        // Up in the world is up on screen
        let up = vp.project_point3(Vec3::new(0.0, 1.0, -0.5));
        assert!(up.y > 0.0);
    }

    #[test]
    fn test_sky_plane_fills_view() {
        let scene = BackdropScene::new(1);
        let verts = scene.vertices(400.0 / 600.0);
        let sky = &verts[..6];
        let max_x = sky.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        let max_y = sky.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert!(max_x > 1.0 && max_y > 1.0);
        assert!(sky.iter().all(|v| v.color == colors::SKY_PLANE));
    }

    #[test]
    fn test_vertex_count() {
        let scene = BackdropScene::new(1);
        let verts = scene.vertices(1.5);
        let per_puff = (PUFF_SEGMENTS * 3) as usize;
        assert_eq!(verts.len(), 6 + CLOUD_COUNT * PUFFS_PER_CLOUD * per_puff);
    }

    #[test]
    fn test_puff_discs_respect_aspect() {
        let scene = BackdropScene::new(9);
        // Wide view squashes discs horizontally in clip space
        let verts = scene.vertices(2.0);
        let disc = &verts[6..6 + (PUFF_SEGMENTS * 3) as usize];
        let center = disc[0].position;
        let rx = disc.iter().map(|v| (v.position[0] - center[0]).abs()).fold(0.0, f32::max);
        let ry = disc.iter().map(|v| (v.position[1] - center[1]).abs()).fold(0.0, f32::max);
        assert!((ry / rx - 2.0).abs() < 1e-3, "rx {rx} ry {ry}");
    }
}
