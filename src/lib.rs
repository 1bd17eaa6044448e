//! The ASF (Windows Media) tag data model.
//!
//! This crate provides an in-memory model of the metadata carried by ASF
//! containers (`.wma`/`.asf`): a multi-valued attribute store keyed by the
//! native `WM/...` namespace, typed attribute values, and a generic-property
//! adapter that translates between native keys and the cross-format property
//! vocabulary (`TITLE`, `TRACKNUMBER`, ...).
//!
//! Reading and writing the binary container is out of scope; this crate only
//! models the tag data and the property translation on top of it.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod tag;
