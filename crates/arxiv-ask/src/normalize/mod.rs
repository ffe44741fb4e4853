//! Response normalization engine.
//!
//! The ask-about-papers service answers in one of three incompatible shapes.
//! This module reconciles them into an ordered list of [`Paper`] records.
//!
//! # Pipeline
//!
//! `raw JSON → classify → shape mapper (coerce + identifier) → Vec<Paper>`
//!
//! # Guarantees
//!
//! - **Total**: no input makes it fail or panic; unknown shapes yield `[]`.
//! - **Order preserving**: one record per array element, in order; keyed
//!   answers follow the order of keys in the response body.
//! - **Pure**: no I/O and no shared state.

mod coerce;
pub mod fields;
mod identifier;
mod mappers;
mod shape;

pub use coerce::{coerce, coerce_opt};
pub use identifier::{
    extract_identifier, identifier_from_link, identifier_from_value, pdf_tail, pdf_tail_from_value,
    strip_identifier_noise, strip_pdf_suffix, tail_segment,
};
pub use mappers::{map_array, map_keyed, map_paper_object, map_url_entry, map_url_list};
pub use shape::{Shape, classify};

use serde_json::Value;

use crate::models::Paper;

/// Normalize any service response into canonical paper records.
#[must_use]
pub fn normalize_response(raw: &Value) -> Vec<Paper> {
    let shape = classify(raw);
    tracing::debug!(shape = shape.name(), entries = shape.len(), "normalizing response");

    match shape {
        Shape::ArrayOfObjects(items) => map_array(items),
        Shape::UrlList(urls) => map_url_list(urls),
        Shape::KeyedAnswerMap(entries) => map_keyed(entries),
        Shape::Unrecognized => Vec::new(),
    }
}
