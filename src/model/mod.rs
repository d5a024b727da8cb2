pub mod category;
pub mod evidence;
pub mod presets;
pub mod scores;
pub mod signpost;
pub mod snapshot;
