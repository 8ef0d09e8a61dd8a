// SPDX-License-Identifier: MPL-2.0

use crate::{error::Error, Result, Version};

/// 포인터 필드의 크기입니다. XFS SDK는 32비트(i686) 환경을 기준으로 합니다.
pub const POINTER_WIDTH: usize = 4;

/// 필드 타입
#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    /// 고정 길이의 부호 없는 정수 (BYTE, WORD, USHORT, DWORD, BOOL 등)
    Unsigned(usize),
    /// 고정 길이 정수 배열
    Array {
        /// 원소 하나의 크기
        width: usize,
        /// 원소 개수
        len: usize,
    },
    /// `key=value` 문자열 목록에 대한 포인터 (`LPSTR lpszExtra`)
    ///
    /// 각 문자열은 null로 끝나고 목록은 빈 문자열로 끝납니다.
    KeyValueList,
    /// 0으로 끝나는 DWORD 배열에 대한 포인터 (`LPDWORD`)
    DWordList,
    /// 같은 버전으로 배치되는 내장 구조체
    ///
    /// 구조체가 상위 버전에서 커지는 경우 그 뒤에 오는 필드는 커지는 버전 이후에
    /// 추가된 것이어야 합니다.
    Struct(&'static StructSpec),
    /// null로 끝나는 구조체 포인터 배열에 대한 포인터
    StructList(&'static StructSpec),
}

impl FieldKind {
    /// 지정된 버전에서 필드가 차지하는 크기를 반환합니다.
    pub fn width(&self, version: Version) -> Result<usize> {
        Ok(match *self {
            Self::Unsigned(width) => width,
            Self::Array { width, len } => width * len,
            Self::KeyValueList | Self::DWordList | Self::StructList(_) => POINTER_WIDTH,
            Self::Struct(spec) => spec.layout(version)?.len(),
        })
    }
}

impl PartialEq for FieldKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unsigned(a), Self::Unsigned(b)) => a == b,
            (Self::Array { width: wa, len: la }, Self::Array { width: wb, len: lb }) => {
                wa == wb && la == lb
            }
            (Self::KeyValueList, Self::KeyValueList) | (Self::DWordList, Self::DWordList) => true,
            (Self::Struct(a), Self::Struct(b)) | (Self::StructList(a), Self::StructList(b)) => {
                std::ptr::eq(*a, *b)
            }
            _ => false,
        }
    }
}

impl Eq for FieldKind {}

/// 필드 선언
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FieldSpec {
    /// 네이티브 구조체의 멤버 이름 (`fwDevice`, `lpszExtra` 등)
    pub name: &'static str,
    /// 필드 타입
    pub kind: FieldKind,
    /// 필드가 존재하지 않는 버전에서 대신 사용되는 값
    ///
    /// 배열인 경우 각 원소의 값입니다.
    pub default: u64,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, default: 0 }
    }

    /// WORD 또는 USHORT
    pub const fn word(name: &'static str) -> Self {
        Self::new(name, FieldKind::Unsigned(2))
    }

    /// DWORD, ULONG 또는 BOOL
    pub const fn dword(name: &'static str) -> Self {
        Self::new(name, FieldKind::Unsigned(4))
    }

    pub const fn array(name: &'static str, width: usize, len: usize) -> Self {
        Self::new(name, FieldKind::Array { width, len })
    }

    pub const fn key_values(name: &'static str) -> Self {
        Self::new(name, FieldKind::KeyValueList)
    }

    pub const fn dword_list(name: &'static str) -> Self {
        Self::new(name, FieldKind::DWordList)
    }

    pub const fn nested(name: &'static str, spec: &'static StructSpec) -> Self {
        Self::new(name, FieldKind::Struct(spec))
    }

    pub const fn list(name: &'static str, spec: &'static StructSpec) -> Self {
        Self::new(name, FieldKind::StructList(spec))
    }

    pub const fn with_default(self, default: u64) -> Self {
        Self { default, ..self }
    }
}

/// 특정 버전부터 구조체 끝에 추가되는 필드 목록
#[derive(Debug)]
pub struct Extension {
    pub since: Version,
    pub fields: &'static [FieldSpec],
}

/// 구조체 선언
///
/// 기본 필드 목록 뒤에 확장 필드 목록이 버전 순서대로 붙습니다. 확장은 항상 끝에
/// 추가되므로 낮은 버전에 존재하는 필드의 오프셋은 버전이 올라가도 바뀌지 않습니다.
#[derive(Debug)]
pub struct StructSpec {
    /// 네이티브 구조체 이름 (`WFSIDCSTATUS` 등)
    pub name: &'static str,
    /// 구조체가 처음 정의된 버전
    pub since: Version,
    /// 기본 필드 목록
    pub fields: &'static [FieldSpec],
    /// 버전 오름차순으로 정렬된 확장 목록
    pub extensions: &'static [Extension],
}

impl StructSpec {
    /// 선언된 모든 필드를 배치 순서대로 반환합니다. 각 필드가 추가된 버전이 함께 반환됩니다.
    pub fn declared(&'static self) -> impl Iterator<Item = (&'static FieldSpec, Version)> {
        let base = self.fields.iter().map(move |f| (f, self.since));
        let extended = self
            .extensions
            .iter()
            .flat_map(|ext| ext.fields.iter().map(move |f| (f, ext.since)));

        base.chain(extended)
    }

    /// 이름으로 선언된 필드를 찾습니다.
    pub fn field(&'static self, name: &str) -> Option<(&'static FieldSpec, Version)> {
        self.declared().find(|(f, _)| f.name == name)
    }

    /// 필드가 추가된 가장 높은 버전을 반환합니다.
    pub fn latest(&self) -> Version {
        self.extensions.last().map_or(self.since, |ext| ext.since)
    }

    /// 구조체 크기가 마지막으로 바뀌는 버전을 반환합니다.
    ///
    /// 내장 구조체가 더 늦게 커지면 그 버전이 반환됩니다.
    pub fn last_growth(&'static self) -> Version {
        self.declared()
            .filter_map(|(field, _)| match field.kind {
                FieldKind::Struct(nested) => Some(nested.last_growth()),
                _ => None,
            })
            .fold(self.latest(), Ord::max)
    }

    /// 커지는 내장 구조체 뒤에 그보다 먼저 존재하던 필드가 오는지 검사합니다.
    ///
    /// 그런 필드는 내장 구조체가 커지는 버전에서 오프셋이 바뀌므로 거부됩니다.
    pub fn validate(&'static self) -> Result<()> {
        let mut growing: Option<(&'static FieldSpec, Version)> = None;

        for (field, since) in self.declared() {
            if let Some((nested, growth)) = growing {
                if since < growth {
                    return Err(Error::UnstableOffset {
                        strukt: self.name,
                        field: field.name,
                        nested: nested.name,
                        growth,
                    });
                }
            }

            if let FieldKind::Struct(spec) = field.kind {
                let growth = spec.last_growth();
                if growing.map_or(true, |(_, prev)| growth > prev) {
                    growing = Some((field, growth));
                }
            }
        }

        Ok(())
    }

    /// 지정된 버전에 대한 레이아웃을 계산합니다.
    ///
    /// [`validate`](Self::validate)를 통과하지 못하는 선언이면 어떤 버전이든 실패합니다.
    pub fn layout(&'static self, version: Version) -> Result<StructLayout> {
        debug_assert!(self.extensions.windows(2).all(|w| w[0].since < w[1].since));
        debug_assert!(self.extensions.iter().all(|ext| ext.since > self.since));

        self.validate()?;

        if version < self.since {
            return Err(Error::UnsupportedVersion { strukt: self.name, version, since: self.since });
        }

        let mut placements = Vec::new();
        let mut offset = 0;

        for (field, _) in self.declared().filter(|&(_, since)| since <= version) {
            let width = field.kind.width(version)?;
            placements.push(Placement { field, offset, width });
            offset += width;
        }

        Ok(StructLayout { spec: self, version, placements, len: offset })
    }
}

/// 레이아웃 안에 배치된 필드
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Placement {
    pub field: &'static FieldSpec,
    /// 구조체 시작 위치로부터의 오프셋
    pub offset: usize,
    /// 필드 크기
    pub width: usize,
}

impl Placement {
    pub fn name(&self) -> &'static str {
        self.field.name
    }

    pub fn kind(&self) -> FieldKind {
        self.field.kind
    }
}

/// 특정 버전으로 계산된 구조체 레이아웃
#[derive(Clone, Debug)]
pub struct StructLayout {
    spec: &'static StructSpec,
    version: Version,
    placements: Vec<Placement>,
    len: usize,
}

impl StructLayout {
    pub fn spec(&self) -> &'static StructSpec {
        self.spec
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// 구조체 전체 크기를 반환합니다.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 배치된 필드 목록
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// 필드가 현재 버전에 배치되어 있으면 반환합니다.
    pub fn get(&self, name: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.field.name == name)
    }

    /// 필드를 찾습니다.
    ///
    /// 상위 버전에서 추가된 필드라면 [`Error::UnsupportedForVersion`]이, 선언되지 않은
    /// 필드라면 [`Error::UnknownField`]가 반환됩니다.
    pub fn locate(&self, name: &str) -> Result<&Placement> {
        if let Some(placement) = self.get(name) {
            return Ok(placement);
        }

        match self.spec.field(name) {
            Some((field, since)) => Err(Error::UnsupportedForVersion {
                field: field.name,
                version: self.version,
                since,
            }),
            None => Err(Error::UnknownField { strukt: self.spec.name, field: name.to_owned() }),
        }
    }

    pub fn offset_of(&self, name: &str) -> Result<usize> {
        self.locate(name).map(|p| p.offset)
    }
}

impl PartialEq for StructLayout {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.spec, other.spec)
            && self.version == other.version
            && self.placements == other.placements
    }
}

impl Eq for StructLayout {}
