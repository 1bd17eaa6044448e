//! Prelude module for the ASF tag crate.
//!
//! This module re-exports all public types from the tag module for
//! convenient access. You can use `use asf_tag::tag::prelude::*;` to import
//! all tag types at once.

pub use super::{
    Tag,
    attribute::{Attribute, AttributeKind, AttributeList},
    properties::PropertyMap,
    store::AttributeStore,
    translation::{forward_key, reverse_key},
};
