//! cge-core: shared data containers for CGE run specifications.
//!
//! Contains:
//! - symbol (cheap, ordered names for set members and model entities)
//! - sets (commodities, activities, factors, institutions)
//! - mappings (activity → output commodity)
//! - closure / scenario (numeraire choice, named shocks)
//! - numeric (Real + tolerances)
//! - error (shared error types)

pub mod closure;
pub mod error;
pub mod mappings;
pub mod numeric;
pub mod scenario;
pub mod sets;
pub mod symbol;

pub use closure::ClosureSpec;
pub use error::{CoreError, CoreResult};
pub use mappings::Mappings;
pub use numeric::*;
pub use scenario::{ScenarioSpec, ShockValue};
pub use sets::{SetKind, Sets};
pub use symbol::{Symbol, symbols};
