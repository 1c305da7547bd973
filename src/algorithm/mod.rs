/// Progression generator and the `generate` entry point
pub mod generator;
/// Placement strategies for foreground positions
pub mod placement;
/// Seeded random selection
pub mod selection;
