//! A pinnable 2D grid of point masses, packed into line segments for drawing.
//!
//! `drape` simulates a rectangular lattice of Verlet point masses linked to
//! their orthogonal neighbors, pulls it with a uniform constant force, and
//! rewrites a fixed-size vertex buffer each frame with one segment per
//! link. Points can be pinned permanently (anchors) or grabbed and dragged
//! with a pointer.
//!
//! # Features
//!
//! - **Index-arena topology**: neighbor links derived from dimensions, never stale
//! - **Verlet solver**: constant force plus iterative link relaxation
//! - **Serpentine packer**: every link exactly once into a preallocated buffer
//! - **Grab/drag/release**: temporary pin that never clobbers a permanent one
//! - **Observable**: Monitor solver steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use drape::{PointGrid, SolverConfig, VerletSystem, Scene, VertexLayout, WorldTransform};
//! use drape::{PointerEvent, Pick, Vec2};
//!
//! let mut grid = PointGrid::<f32>::new(10, 6, 1.0).unwrap();
//! grid.pin_row(0).unwrap();
//! let solver = SolverConfig::new().with_force(Vec2::new(0.0, 98.0));
//! let transform = WorldTransform::centered(10, 6, 2.4).unwrap();
//! let mut scene = Scene::new(VerletSystem::new(grid, solver), transform, VertexLayout::Xyz);
//!
//! scene.push(PointerEvent::Down(Pick::Plane(Vec2::new(5.0, 5.0))));
//! let segments = scene.tick(1.0 / 60.0);
//! assert_eq!(segments, 9 * 6 + 5 * 10);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod topology;
pub mod link;
pub mod grid;
pub mod system;
pub mod solver;
pub mod packer;
pub mod transform;
pub mod anchor;
pub mod interaction;
pub mod scene;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point::PointMass;
pub use topology::{GridCoord, Topology};
pub use link::Link;
pub use grid::PointGrid;
pub use system::PointMassSystem;
pub use solver::VerletSystem;
pub use packer::{VertexBuffer, VertexLayout, SEGMENT_VERTICES};
pub use transform::WorldTransform;
pub use anchor::{AnchorId, AnchorSet};
pub use interaction::{DragState, Interaction, Pick, PointerEvent};
pub use scene::Scene;
pub use config::{SceneConfig, SolverConfig};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::DrapeError;
