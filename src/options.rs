// SPDX-License-Identifier: MPL-2.0

use encoding_rs::{Encoding, WINDOWS_1252};
use xfs_layout::Version;

/// 구조체를 해석하기 위한 설정입니다.
///
/// 서비스 제공자와 협상된 버전과 문자열 인코딩을 지정합니다.
///
/// ## 예제
/// ```rust
/// use xfs::{Options, Version};
///
/// let options = Options::new(Version::V3_10).with_encoding(encoding_rs::EUC_KR);
/// assert_eq!(options.version(), Version::V3_10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options {
    version: Version,
    encoding: &'static Encoding,
}

impl Options {
    /// 지정된 버전과 기본 ANSI 코드 페이지(Windows-1252)로 설정을 생성합니다.
    pub fn new(version: Version) -> Self {
        Self { version, encoding: WINDOWS_1252 }
    }

    /// 협상된 버전을 지정합니다.
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// `lpszExtra`와 같은 문자열의 인코딩을 지정합니다.
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// 협상된 버전을 반환합니다.
    pub fn version(&self) -> Version {
        self.version
    }

    /// 문자열 인코딩을 반환합니다.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}
