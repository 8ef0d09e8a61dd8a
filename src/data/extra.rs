// SPDX-License-Identifier: MPL-2.0

use std::{fmt, iter::FromIterator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [`Extra`]를 초기화하는 매크로입니다.
///
/// 매크로의 모든 인자는 묵시적으로 변환됩니다.
///
/// ## 예제
/// ```rust
/// use xfs::extra;
///
/// let extra = extra! {
///     "P6" => "2",
///     "FIRMWARE" => "1.0.3",
/// };
/// assert_eq!(extra.get("P6"), Some("2"));
/// ```
#[macro_export]
macro_rules! extra {
    ($($key:expr => $val:expr),*$(,)?) => {{
        #[allow(unused_mut)]
        let mut extra = $crate::data::Extra::new();
        $(extra.push($key, $val);)*
        extra
    }};
}

/// 서비스 제공자가 확장 정보를 전달하는 `key=value` 목록입니다.
///
/// 순서를 유지하며 같은 키가 여러 번 나올 수 있습니다.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extra {
    pairs: Vec<(String, String)>,
}

impl Extra {
    pub fn new() -> Self {
        Self::default()
    }

    /// 항목을 끝에 추가합니다.
    pub fn push<K: Into<String>, V: Into<String>>(&mut self, key: K, val: V) {
        self.pairs.push((key.into(), val.into()));
    }

    /// 키에 해당하는 첫 번째 값을 반환합니다.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Debug for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Extra {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl IntoIterator for Extra {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}
