// SPDX-License-Identifier: MPL-2.0

//! CEN/XFS 구조체의 버전별 레이아웃을 정의하는 크레이트입니다.
//!
//! 구조체는 기본 필드 목록과 버전에 따라 추가되는 확장 필드 목록으로 구성됩니다.
//! 특정 버전에 대한 레이아웃은 [`StructSpec::layout`]으로 계산합니다.

#![cfg_attr(doc_cfg, feature(doc_cfg))]

pub mod error;
mod layout;
mod tests;
mod version;

pub use error::{Error, ParseVersionError};
pub use layout::{
    Extension, FieldKind, FieldSpec, Placement, StructLayout, StructSpec, POINTER_WIDTH,
};
pub use version::{Version, VersionRange};

/// 레이아웃 관련 결과 타입입니다.
pub type Result<T> = std::result::Result<T, Error>;
