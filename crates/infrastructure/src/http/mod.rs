//! HTTP body helpers

mod body_builder;

pub use body_builder::{FORM_CONTENT_TYPE, encode_form};
