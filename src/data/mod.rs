/// Data layer: core types and CSV loading.
///
/// Pipeline:
/// ```text
///  arm_angles.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → f64 fields
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ AngleMatrix │  [time step][arm], radians
///   └─────────────┘
/// ```
pub mod loader;
pub mod model;
