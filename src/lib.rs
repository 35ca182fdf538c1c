pub mod api;
pub mod effect;
pub mod feedback;
pub mod format;
pub mod lookup;
pub mod model;
pub mod quiz;
