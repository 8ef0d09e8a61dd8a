// SPDX-License-Identifier: MPL-2.0

//! 일반적인 에러 모듈입니다.

use xfs_layout::Version;

use thiserror::Error;

pub use xfs_layout::Error as LayoutError;

/// 에러 종류에 대한 열거형 객체입니다.
///
/// 호출자가 처리해야 하는 에러와 프로그래밍 오류를 쉽게 구분할 수 있습니다.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    /// 알 수 없는 상수 값
    UnknownConstant,
    /// 협상된 버전에 존재하지 않는 필드
    UnsupportedForVersion,
    /// 버퍼의 내용이나 크기가 올바르지 않음
    MalformedInput,
    /// 인수가 올바르지 않음
    InvalidInput,
}

/// 버퍼가 올바르지 않을 때의 상세 정보입니다.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Error)]
pub enum Malformed {
    /// 버퍼가 구조체 크기보다 작습니다.
    #[error("buffer too short; expected at least {expected} bytes, found {actual}")]
    BufferTooShort { expected: usize, actual: usize },
    /// 버퍼 범위를 벗어난 위치를 참조합니다.
    #[error("{width} bytes at offset {offset} exceed buffer length {len}")]
    OutOfBounds { offset: usize, width: usize, len: usize },
    /// 문자열 목록이 빈 문자열로 끝나지 않습니다.
    #[error("string list at offset {offset} is not terminated")]
    UnterminatedString { offset: usize },
    /// 문자열을 디코딩할 수 없습니다.
    #[error("undecodable string at offset {offset}")]
    InvalidString { offset: usize },
}

/// 여러 에러에 대한 열거형 객체입니다.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Error)]
pub enum Error {
    /// 값에 해당하는 상수가 없습니다.
    ///
    /// 비트마스크인 경우 알 수 없는 비트가 포함되어 있습니다.
    #[error("unknown {name} value: {value:#06x}")]
    UnknownConstant { name: &'static str, value: u32 },

    /// 필드가 협상된 버전에 존재하지 않습니다.
    #[error("{field} is not available in version {version}; requires {since}")]
    UnsupportedForVersion { field: &'static str, version: Version, since: Version },

    /// 버퍼가 올바르지 않습니다.
    #[error("malformed input: {0}")]
    Malformed(#[from] Malformed),

    /// 값이 필드 크기를 넘습니다.
    #[error("value {value} does not fit {width} bytes of {field}")]
    ValueOutOfRange { field: &'static str, value: u64, width: usize },

    /// 필드 타입과 맞지 않는 접근입니다.
    #[error("{field} is not {expected}")]
    KindMismatch { field: &'static str, expected: &'static str },

    /// 배열 범위를 벗어난 인덱스입니다.
    #[error("index {index} out of range for {field} of length {len}")]
    IndexOutOfRange { field: &'static str, index: usize, len: usize },

    /// 문자열을 지정된 인코딩으로 표현할 수 없거나 구분자를 포함합니다.
    #[error("cannot encode {text:?}: {reason}")]
    Unencodable { text: String, reason: &'static str },

    /// 목록의 끝을 나타내는 값은 원소로 쓸 수 없습니다.
    #[error("{value} terminates {field} and cannot be an element")]
    ReservedValue { field: &'static str, value: u64 },

    /// 구조체 선언과 맞지 않는 요청입니다.
    #[error("layout error: {0}")]
    Layout(#[source] LayoutError),
}

impl Error {
    /// 에러 종류를 반환합니다.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownConstant { .. } => ErrorKind::UnknownConstant,
            Self::UnsupportedForVersion { .. } => ErrorKind::UnsupportedForVersion,
            Self::Malformed(_) => ErrorKind::MalformedInput,
            Self::ValueOutOfRange { .. }
            | Self::KindMismatch { .. }
            | Self::IndexOutOfRange { .. }
            | Self::Unencodable { .. }
            | Self::ReservedValue { .. }
            | Self::Layout(_) => ErrorKind::InvalidInput,
        }
    }
}

impl From<LayoutError> for Error {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::UnsupportedForVersion { field, version, since } => {
                Self::UnsupportedForVersion { field, version, since }
            }
            err => Self::Layout(err),
        }
    }
}
