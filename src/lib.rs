// SPDX-License-Identifier: MPL-2.0

#![cfg_attr(doc_cfg, feature(doc_cfg))]

#[macro_use]
pub mod constant;
#[macro_use]
mod facade;

pub mod cdm;
pub mod cim;
pub mod common;
pub mod data;
pub mod error;
pub mod idc;
mod options;

pub use error::{Error, ErrorKind};
pub use options::Options;
pub use xfs_layout as layout;
pub use xfs_layout::{Version, VersionRange};
