mod aabb;
mod placement;

pub use aabb::AABB;
pub use placement::Placement;
