use glam::{Quat, Vec3};
use log::debug;
use std::f32::consts::TAU;

use crate::config::PipeConfig;
use crate::core::mesh::{quad_indices, PipeMesh};
use crate::error::ConfigError;
use crate::math::Placement;
use crate::traits::RandomSource;

/// Stable identity of a pipe, kept across recycling
pub type PipeId = usize;

/// One curved length of tube, a slice of a torus.
///
/// The centerline lies in the XY plane on a circle of `curve_radius` around
/// the Z axis, starting at `(0, curve_radius, 0)` and bending towards +X as
/// `u` grows. The cross-section circle sits in the plane spanned by the
/// radial direction and Z.
#[derive(Debug, Clone)]
pub struct Pipe {
    id: PipeId,
    config: PipeConfig,
    curve_radius: f32,
    ring_count: usize,
    curve_angle: f32,
    mesh: PipeMesh,
}

impl Pipe {
    /// Draw a curve radius and ring count from `rng` and build the mesh
    pub fn new(
        id: PipeId,
        config: &PipeConfig,
        rng: &mut impl RandomSource,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let curve_radius = rng.uniform_f32(config.min_curve_radius, config.max_curve_radius);
        let ring_count = rng.uniform_usize(config.min_ring_count, config.max_ring_count);
        debug_assert!(curve_radius > 0.0 && ring_count > 0);

        let u_step = config.ring_spacing / curve_radius;
        let curve_angle = (u_step * ring_count as f32).to_degrees();

        let mut pipe = Self {
            id,
            config: *config,
            curve_radius,
            ring_count,
            curve_angle,
            mesh: PipeMesh::new(Vec::new(), Vec::new()),
        };
        pipe.mesh = pipe.build_mesh();

        debug!(
            "pipe {}: curve radius {:.3}, {} rings, {:.2} degrees, {} vertices",
            id,
            curve_radius,
            ring_count,
            curve_angle,
            pipe.mesh.vertex_count()
        );
        Ok(pipe)
    }

    pub fn id(&self) -> PipeId {
        self.id
    }

    pub fn config(&self) -> &PipeConfig {
        &self.config
    }

    pub fn curve_radius(&self) -> f32 {
        self.curve_radius
    }

    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    /// Total bend of the pipe in degrees
    pub fn curve_angle(&self) -> f32 {
        self.curve_angle
    }

    /// Centerline angle between consecutive rings, in radians
    pub fn ring_angle_step(&self) -> f32 {
        self.config.ring_spacing / self.curve_radius
    }

    pub fn mesh(&self) -> &PipeMesh {
        &self.mesh
    }

    /// Point on the torus surface. `u` runs along the centerline and `v`
    /// around the cross-section, both in radians.
    pub fn point_on_torus(&self, u: f32, v: f32) -> Vec3 {
        assert!(
            u.is_finite() && v.is_finite(),
            "torus sample out of domain: u={u}, v={v}"
        );
        let r = self.curve_radius + self.config.tube_radius * v.cos();
        Vec3::new(r * u.sin(), r * u.cos(), self.config.tube_radius * v.sin())
    }

    /// Centerline point at angle `u`, the center of the ring sampled at `u`
    pub fn centerline_point(&self, u: f32) -> Vec3 {
        Vec3::new(self.curve_radius * u.sin(), self.curve_radius * u.cos(), 0.0)
    }

    /// The `radial_divisions` surface points of the ring at angle `u`
    pub fn ring_points(&self, u: f32) -> Vec<Vec3> {
        let v_step = TAU / self.config.radial_divisions as f32;
        (0..self.config.radial_divisions)
            .map(|v| self.point_on_torus(u, v as f32 * v_step))
            .collect()
    }

    /// Placement of this pipe relative to `previous`, with an extra roll of
    /// `twist_degrees` around the shared ring's axis
    pub fn alignment(&self, previous: &Pipe, twist_degrees: f32) -> Placement {
        Placement::from_rotation(Quat::from_rotation_z(-previous.curve_angle.to_radians()))
            .translate_local(Vec3::new(0.0, previous.curve_radius, 0.0))
            .rotate_local(Quat::from_rotation_x(twist_degrees.to_radians()))
            .translate_local(Vec3::new(0.0, -self.curve_radius, 0.0))
    }

    /// Random roll that maps the ring's vertices onto themselves
    pub fn draw_twist(&self, rng: &mut impl RandomSource) -> f32 {
        let divisions = self.config.radial_divisions;
        rng.uniform_usize(0, divisions) as f32 * 360.0 / divisions as f32
    }

    /// Chain-space placement that attaches this pipe's entry ring to the exit
    /// ring of `previous`
    pub fn align_with(
        &self,
        previous: &Pipe,
        previous_placement: &Placement,
        rng: &mut impl RandomSource,
    ) -> Placement {
        let twist = self.draw_twist(rng);
        previous_placement.then(&self.alignment(previous, twist))
    }

    fn build_mesh(&self) -> PipeMesh {
        let divisions = self.config.radial_divisions;
        let u_step = self.ring_angle_step();
        let ring_stride = divisions * 4;

        let mut vertices = vec![Vec3::ZERO; ring_stride * self.ring_count];
        self.fill_first_quad_ring(&mut vertices[..ring_stride], u_step);

        for ring in 1..self.ring_count {
            let (built, rest) = vertices.split_at_mut(ring * ring_stride);
            let previous = &built[(ring - 1) * ring_stride..];
            let u = (ring + 1) as f32 * u_step;
            self.fill_quad_ring(previous, &mut rest[..ring_stride], u);
        }

        PipeMesh::new(vertices, quad_indices(divisions * self.ring_count))
    }

    fn v_step(&self) -> f32 {
        TAU / self.config.radial_divisions as f32
    }

    fn fill_first_quad_ring(&self, ring: &mut [Vec3], u: f32) {
        let v_step = self.v_step();
        let mut inner = self.point_on_torus(0.0, 0.0);
        let mut outer = self.point_on_torus(u, 0.0);

        for (v, quad) in ring.chunks_exact_mut(4).enumerate() {
            let v = (v + 1) as f32 * v_step;
            quad[0] = inner;
            inner = self.point_on_torus(0.0, v);
            quad[1] = inner;
            quad[2] = outer;
            outer = self.point_on_torus(u, v);
            quad[3] = outer;
        }
    }

    // Inner edge of every quad is the outer edge of the same quad one ring back
    fn fill_quad_ring(&self, previous: &[Vec3], ring: &mut [Vec3], u: f32) {
        let v_step = self.v_step();
        let mut outer = self.point_on_torus(u, 0.0);

        for (v, (quad, prev)) in ring
            .chunks_exact_mut(4)
            .zip(previous.chunks_exact(4))
            .enumerate()
        {
            quad[0] = prev[2];
            quad[1] = prev[3];
            quad[2] = outer;
            outer = self.point_on_torus(u, (v + 1) as f32 * v_step);
            quad[3] = outer;
        }
    }
}
