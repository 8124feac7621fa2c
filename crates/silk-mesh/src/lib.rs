//! # silk-mesh
//!
//! Render-facing mesh buffers for a cloth grid, stored in
//! Structure-of-Arrays (SoA) layout.
//!
//! ## Key Types
//!
//! - [`ClothMesh`]: Positions, normals, UVs, marker colors and triangle
//!   indices for one `n × n` lattice.
//! - [`generators::lattice`]: Builds the initial lattice mesh.
//! - [`normals::compute_vertex_normals`]: Area-weighted smooth normals.

pub mod generators;
pub mod mesh;
pub mod normals;

pub use mesh::ClothMesh;
