/// Plan, paint, encode.
pub mod pipeline;
