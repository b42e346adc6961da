use glam::{Mat4, Vec3};

/// Interleaved vertex record for GPU vertex buffers
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VertexData {
    pub position: [f32; 3],
    pub _pad1: f32,
    pub normal: [f32; 3],
    pub _pad2: f32,
}

impl VertexData {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            _pad1: 0.0,
            normal: normal.to_array(),
            _pad2: 0.0,
        }
    }
}

/// Chain root transform uniform, column-major
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub matrix: [[f32; 4]; 4],
}

impl From<Mat4> for TransformUniform {
    fn from(matrix: Mat4) -> Self {
        Self {
            matrix: matrix.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_data_is_32_bytes() {
        assert_eq!(std::mem::size_of::<VertexData>(), 32);
        let vertices = [VertexData::new(Vec3::X, Vec3::Y); 3];
        assert_eq!(bytemuck::cast_slice::<_, u8>(&vertices).len(), 96);
    }

    #[test]
    fn test_transform_uniform_from_identity() {
        let uniform = TransformUniform::from(Mat4::IDENTITY);
        assert_eq!(uniform.matrix[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(uniform.matrix[3], [0.0, 0.0, 0.0, 1.0]);
    }
}
