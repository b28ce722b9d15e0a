pub(crate) mod bitmap;
pub(crate) mod circle;
pub(crate) mod stamp;
