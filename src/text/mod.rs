pub(crate) mod draw;
pub(crate) mod font;
