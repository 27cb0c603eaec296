pub mod cursor;
pub mod directory;
pub mod events;
pub mod filter;
pub mod normalize;
pub mod options;
pub mod overlay;
pub mod store;
