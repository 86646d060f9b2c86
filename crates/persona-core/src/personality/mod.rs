pub mod confidence_level;
pub mod trait_kind;
pub mod trait_map;

pub use confidence_level::ConfidenceLevel;
pub use trait_kind::Trait;
pub use trait_map::TraitMap;
