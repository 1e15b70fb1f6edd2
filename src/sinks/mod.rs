mod typst;
pub use typst::*;
