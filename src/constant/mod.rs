// SPDX-License-Identifier: MPL-2.0

//! 네이티브 정수 상수와 열거형 객체 사이의 변환 모듈입니다.
//!
//! 하나의 값을 나타내는 상수는 [`XfsConstant`], 여러 플래그의 조합을 나타내는 상수는
//! [`XfsBitmask`]를 구현합니다. 두 경우 모두 알 수 없는 값은 에러로 처리합니다.

use crate::error::Error;

use std::{fmt::Debug, hash::Hash};

/// 하나의 값으로 표현되는 상수 집합에 대한 트레이트입니다.
pub trait XfsConstant: Copy + Eq + Hash + Debug + 'static {
    /// 에러 메시지에 사용되는 이름
    const NAME: &'static str;
    /// 모든 상수
    const ALL: &'static [Self];

    /// 네이티브 값을 반환합니다.
    fn value(self) -> u32;

    /// 네이티브 값에 해당하는 상수를 찾습니다.
    fn from_value(value: u32) -> Result<Self, Error> {
        Self::ALL.iter().copied().find(|c| c.value() == value).ok_or_else(|| {
            tracing::debug!(constant = Self::NAME, value, "unknown constant value");
            Error::UnknownConstant { name: Self::NAME, value }
        })
    }
}

/// 플래그의 조합으로 표현되는 상수 집합에 대한 트레이트입니다.
///
/// [`bitflags`]로 선언된 타입에 구현됩니다.
pub trait XfsBitmask: Copy + Eq + Hash + Debug + 'static {
    /// 에러 메시지에 사용되는 이름
    const NAME: &'static str;

    /// 네이티브 값에 설정된 모든 플래그를 가져옵니다.
    ///
    /// 알 수 없는 비트가 하나라도 있으면 실패합니다.
    fn from_raw(raw: u32) -> Result<Self, Error>;

    /// 설정된 플래그의 비트 OR 값을 반환합니다.
    fn raw(self) -> u32;
}

/// 값과 상수를 짝지어 [`XfsConstant`]를 구현하는 열거형을 선언합니다.
macro_rules! constants {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::constant::XfsConstant for $name {
            const NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn value(self) -> u32 {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }
    };
}

/// [`bitflags`]로 선언된 타입에 [`XfsBitmask`]를 구현합니다.
macro_rules! impl_bitmask {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $crate::constant::XfsBitmask for $name {
                const NAME: &'static str = stringify!($name);

                fn from_raw(raw: u32) -> Result<Self, $crate::error::Error> {
                    Self::from_bits(raw).ok_or_else(|| {
                        tracing::debug!(
                            constant = Self::NAME,
                            unknown = raw & !Self::all().bits(),
                            "unknown bits in bitmask"
                        );
                        $crate::error::Error::UnknownConstant { name: Self::NAME, value: raw }
                    })
                }

                fn raw(self) -> u32 {
                    self.bits()
                }
            }
        )+
    };
}
