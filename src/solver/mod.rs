pub mod packing;
pub use packing::{Disc, Packing, Stats, Termination};
