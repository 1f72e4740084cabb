pub(crate) mod blur;
pub(crate) mod luma;
pub(crate) mod point;
