mod cheby;
mod config;
mod emit;
mod error;
mod fold;
mod sine;
mod table;
mod table_spec;
mod triangles;

pub use config::*;
pub use emit::*;
pub use error::*;
pub use table::*;
pub use table_spec::*;

pub mod generators {
    pub use crate::cheby::generate as cheby;
    pub use crate::fold::generate as fold;
    pub use crate::fold::generate_max as fold_max;
    pub use crate::sine::generate as sine;
    pub use crate::triangles::generate as triangles;
}

pub use fold::{FOLDS, HEADROOM, fold_sample, wrap_unit};
pub use sine::{MagicCircle, Q15_SCALE, quantize_q15};
pub use triangles::TRIANGLES_12THS;
