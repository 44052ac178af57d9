pub mod check;
pub mod compare;
pub mod infer;
pub mod validate;
