use glam::Vec3;

use crate::math::AABB;
use crate::types::VertexData;

/// Write-once triangle mesh of a single pipe
#[derive(Debug, Clone)]
pub struct PipeMesh {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
    normals: Vec<Vec3>,
}

impl PipeMesh {
    /// Takes ownership of the buffers and derives vertex normals from them
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let normals = recalculate_normals(&vertices, &indices);
        Self {
            vertices,
            indices,
            normals,
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn bounds(&self) -> Option<AABB> {
        AABB::from_points(self.vertices.iter().copied())
    }

    /// Interleaved position/normal records ready for `bytemuck::cast_slice`
    pub fn vertex_data(&self) -> Vec<VertexData> {
        self.vertices
            .iter()
            .zip(&self.normals)
            .map(|(&position, &normal)| VertexData::new(position, normal))
            .collect()
    }
}

/// Two triangles per quad of four consecutive vertices `(i, i+1, i+2, i+3)`
pub fn quad_indices(quad_count: usize) -> Vec<u32> {
    (0..quad_count as u32)
        .flat_map(|quad| {
            let i = quad * 4;
            [i, i + 1, i + 2, i + 1, i + 3, i + 2]
        })
        .collect()
}

/// Per-vertex normals as the normalized sum of the face normals touching each
/// vertex. Vertices that are not shared across quads therefore keep a flat
/// per-face normal.
pub fn recalculate_normals(vertices: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; vertices.len()];

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let face = (vertices[b] - vertices[a]).cross(vertices[c] - vertices[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    normals.iter_mut().for_each(|n| *n = n.normalize_or_zero());
    normals
}
