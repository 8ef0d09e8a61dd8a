// SPDX-License-Identifier: MPL-2.0

//! 레이아웃 계산 및 필드 조회에 대한 에러 모듈입니다.

use crate::Version;

use thiserror::Error;

/// 레이아웃을 계산하거나 필드를 찾지 못했을 때 발생하는 에러입니다.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Error)]
pub enum Error {
    /// 구조체에 선언되지 않은 필드입니다.
    #[error("{strukt} has no field named {field}")]
    UnknownField { strukt: &'static str, field: String },

    /// 필드가 선언되었지만 현재 버전에는 존재하지 않습니다.
    #[error("{field} is not available in version {version}; requires {since}")]
    UnsupportedForVersion { field: &'static str, version: Version, since: Version },

    /// 구조체 자체가 해당 버전에 존재하지 않습니다.
    #[error("{strukt} is not available in version {version}; requires {since}")]
    UnsupportedVersion { strukt: &'static str, version: Version, since: Version },

    /// 내장 구조체가 커지는 버전에서 뒤따르는 필드의 오프셋이 바뀝니다.
    #[error("{field} of {strukt} would move when {nested} grows in version {growth}")]
    UnstableOffset {
        strukt: &'static str,
        field: &'static str,
        nested: &'static str,
        growth: Version,
    },
}

/// 버전 문자열을 파싱하지 못했을 때 발생하는 에러입니다.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Error)]
#[error("invalid version: {0:?}")]
pub struct ParseVersionError(pub(crate) String);
