pub mod collision;
pub mod config;
pub mod constraint;
pub mod engine;
pub mod integrator;
pub mod layout;
pub mod math;
pub mod runtime;
pub mod trace;

pub use collision::{resolve_collisions, resolve_pair};
pub use config::{validate_scene, ConfigError, SimulationConfig};
pub use constraint::keep_on_wire;
pub use engine::{Body, Scene, Wire};
pub use integrator::{begin_substep, end_substep};
pub use layout::build_scene;
pub use runtime::{BodyState, Simulation, Snapshot, WireState};
pub use trace::{TraceError, TraceSink, TraceWriter, TRACE_HEADER};
