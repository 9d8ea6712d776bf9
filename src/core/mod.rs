//! Foundation helpers: tolerant JSON access and text utilities.

pub mod json;
pub mod text_utils;

pub use json::{
    is_present, is_truthy, property, property_string, try_array, try_keys, try_number, try_string,
};
pub use text_utils::{basename, clean_text, name_key, quote_identifier, strip_bom};
