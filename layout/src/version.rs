// SPDX-License-Identifier: MPL-2.0

use crate::error::ParseVersionError;

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// XFS 버전입니다.
///
/// 서비스 제공자와 협상된 버전에 따라 구조체에 존재하는 필드가 달라집니다.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Version {
    major: u8,
    minor: u8,
    patch: u8,
}

impl Version {
    /// XFS 3.00
    pub const V3_00: Version = Version::new(3, 0, 0);
    /// XFS 3.10
    pub const V3_10: Version = Version::new(3, 10, 0);
    /// XFS 3.20
    pub const V3_20: Version = Version::new(3, 20, 0);
    /// XFS 3.30
    pub const V3_30: Version = Version::new(3, 30, 0);

    /// 지원하는 가장 낮은 버전
    pub const LOWEST: Version = Self::V3_00;
    /// 지원하는 가장 높은 버전
    pub const HIGHEST: Version = Self::V3_30;

    pub const fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self { major, minor, patch }
    }

    pub fn major(&self) -> u8 {
        self.major
    }

    pub fn minor(&self) -> u8 {
        self.minor
    }

    pub fn patch(&self) -> u8 {
        self.patch
    }

    /// `WFSVERSION::wVersion`과 같은 WORD 표기에서 버전을 가져옵니다.
    ///
    /// 하위 바이트는 major, 상위 바이트는 minor 버전입니다.
    pub fn from_word(word: u16) -> Self {
        Self::new((word & 0xff) as u8, (word >> 8) as u8, 0)
    }

    /// WORD 표기로 변환합니다. patch 버전은 표기되지 않습니다.
    pub fn to_word(&self) -> u16 {
        u16::from(self.major) | u16::from(self.minor) << 8
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.major, self.minor)?;
        if self.patch != 0 {
            write!(f, ".{}", self.patch)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseVersionError(text.to_owned());

        let mut parts = text.split('.');
        let mut next_num = |required: bool| -> Result<u8, ParseVersionError> {
            match parts.next() {
                Some(part) if !part.is_empty() => part.parse().map_err(|_| invalid()),
                Some(_) => Err(invalid()),
                None if required => Err(invalid()),
                None => Ok(0),
            }
        };

        let major = next_num(true)?;
        let minor = next_num(true)?;
        let patch = next_num(false)?;

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(major, minor, patch))
    }
}

/// `dwVersionsRequired`와 같이 최저 버전과 최고 버전으로 표현되는 범위입니다.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VersionRange {
    /// 최저 버전
    pub low: Version,
    /// 최고 버전
    pub high: Version,
}

impl VersionRange {
    /// 이 크레이트가 지원하는 전체 범위
    pub const SUPPORTED: VersionRange =
        VersionRange { low: Version::LOWEST, high: Version::HIGHEST };

    pub fn new(low: Version, high: Version) -> Self {
        Self { low, high }
    }

    /// DWORD 표기에서 범위를 가져옵니다.
    ///
    /// 상위 WORD는 최고 버전, 하위 WORD는 최저 버전입니다.
    pub fn from_dword(dword: u32) -> Self {
        Self {
            low: Version::from_word((dword & 0xffff) as u16),
            high: Version::from_word((dword >> 16) as u16),
        }
    }

    pub fn to_dword(&self) -> u32 {
        u32::from(self.high.to_word()) << 16 | u32::from(self.low.to_word())
    }

    pub fn contains(&self, version: Version) -> bool {
        self.low <= version && version <= self.high
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}
