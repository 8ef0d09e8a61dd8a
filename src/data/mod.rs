// SPDX-License-Identifier: MPL-2.0

//! 네이티브 레이아웃 버퍼에 대한 뷰 모듈입니다.
//!
//! [`StructView`]는 버퍼의 소유 여부를 타입으로 구분합니다.
//!
//! - `StructView<&[u8]>`: 서비스 제공자가 반환한 버퍼를 읽기만 하는 뷰
//! - `StructView<&mut [u8]>`: 빌린 버퍼의 필드를 바로 수정하는 뷰
//! - `StructView<Vec<u8>>`: 버퍼를 직접 할당하여 소유하는 복사본
//!
//! 버퍼는 구조체 고정 영역과 그 뒤에 이어지는 영역으로 구성됩니다. 포인터 필드는 같은 버퍼
//! 안의 오프셋을 가리키며, 문자열 목록이나 구조체 배열은 뒤쪽 영역에 위치합니다.

pub mod codec;
mod extra;

pub use self::extra::Extra;

use crate::{
    constant::{XfsBitmask, XfsConstant},
    error::{Error, LayoutError, Malformed},
    Options,
};

use std::{
    convert::TryFrom,
    fmt,
    hash::{Hash, Hasher},
};
use xfs_layout::{FieldKind, FieldSpec, Placement, StructLayout, StructSpec, Version, POINTER_WIDTH};

/// 기본값이 반영된 필드 값입니다.
///
/// 구조체의 동등성 비교와 해시, 디버그 출력에 사용됩니다.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// 정수
    Unsigned(u64),
    /// 정수 배열
    Array(Vec<u64>),
    /// 0으로 끝나는 DWORD 목록
    List(Vec<u32>),
    /// `key=value` 목록
    KeyValues(Extra),
    /// 내장 구조체
    Struct(Vec<(&'static str, Value)>),
    /// 구조체 배열
    Structs(Vec<Vec<(&'static str, Value)>>),
    /// 디코딩에 실패한 필드
    Malformed(Error),
}

struct Fields<'a>(&'a [(&'static str, Value)]);

struct Hex(u64);

impl fmt::Debug for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::Debug for Fields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter().map(|(k, v)| (k, v))).finish()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(value) => write!(f, "{:#x}", value),
            Self::Array(values) => f.debug_list().entries(values.iter().map(|&v| Hex(v))).finish(),
            Self::List(values) => {
                f.debug_list().entries(values.iter().map(|&v| Hex(v.into()))).finish()
            }
            Self::KeyValues(extra) => fmt::Debug::fmt(extra, f),
            Self::Struct(fields) => fmt::Debug::fmt(&Fields(fields), f),
            Self::Structs(items) => f.debug_list().entries(items.iter().map(|i| Fields(i))).finish(),
            Self::Malformed(err) => write!(f, "<{}>", err),
        }
    }
}

enum Slot<'a> {
    Present(&'a Placement),
    Absent(&'static FieldSpec),
}

fn mismatch(field: &'static FieldSpec, expected: &'static str) -> Error {
    Error::KindMismatch { field: field.name, expected }
}

fn narrow(field: &'static FieldSpec, value: u64) -> Result<u32, Error> {
    u32::try_from(value).map_err(|_| Error::ValueOutOfRange { field: field.name, value, width: 4 })
}

/// 특정 버전의 레이아웃으로 버퍼를 해석하는 뷰입니다.
pub struct StructView<B> {
    buf: B,
    base: usize,
    layout: StructLayout,
    options: Options,
}

impl<B: AsRef<[u8]>> StructView<B> {
    /// 버퍼의 시작 위치에 있는 구조체에 대한 뷰를 생성합니다.
    pub fn new(buf: B, spec: &'static StructSpec, options: Options) -> Result<Self, Error> {
        Self::at(buf, 0, spec, options)
    }

    /// 버퍼의 `base` 위치에 있는 구조체에 대한 뷰를 생성합니다.
    ///
    /// 버퍼가 레이아웃 크기보다 작으면 실패합니다.
    pub fn at(
        buf: B,
        base: usize,
        spec: &'static StructSpec,
        options: Options,
    ) -> Result<Self, Error> {
        let layout = spec.layout(options.version())?;
        let actual = buf.as_ref().len();
        let expected = base.checked_add(layout.len()).ok_or(Malformed::OutOfBounds {
            offset: base,
            width: layout.len(),
            len: actual,
        })?;

        if actual < expected {
            return Err(Malformed::BufferTooShort { expected, actual }.into());
        }

        Ok(Self { buf, base, layout, options })
    }

    pub fn spec(&self) -> &'static StructSpec {
        self.layout.spec()
    }

    pub fn layout(&self) -> &StructLayout {
        &self.layout
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// 협상된 버전을 반환합니다.
    pub fn version(&self) -> Version {
        self.options.version()
    }

    /// 구조체가 시작하는 위치를 반환합니다.
    pub fn base(&self) -> usize {
        self.base
    }

    /// 포인터가 가리키는 영역을 포함한 버퍼 전체를 반환합니다.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_ref()
    }

    /// 구조체 고정 영역만 반환합니다.
    pub fn struct_bytes(&self) -> &[u8] {
        &self.buf.as_ref()[self.base..self.base + self.layout.len()]
    }

    pub fn into_inner(self) -> B {
        self.buf
    }

    fn slot(&self, name: &str) -> Result<Slot<'_>, Error> {
        if let Some(placement) = self.layout.get(name) {
            return Ok(Slot::Present(placement));
        }

        match self.spec().field(name) {
            Some((field, since)) => {
                tracing::trace!(
                    field = field.name,
                    version = %self.version(),
                    since = %since,
                    "field not laid out; using default"
                );
                Ok(Slot::Absent(field))
            }
            None => Err(Error::Layout(LayoutError::UnknownField {
                strukt: self.spec().name,
                field: name.to_owned(),
            })),
        }
    }

    fn placement(&self, name: &str) -> Result<Placement, Error> {
        Ok(*self.layout.locate(name)?)
    }

    fn read_scalar(&self, placement: &Placement) -> Result<u64, Error> {
        match placement.kind() {
            FieldKind::Unsigned(width) => {
                codec::read_uint(self.as_bytes(), self.base + placement.offset, width)
            }
            _ => Err(mismatch(placement.field, "an integer")),
        }
    }

    /// 정수 필드를 읽습니다.
    ///
    /// 필드가 현재 버전에 없으면 선언된 기본값을 반환합니다.
    pub fn raw(&self, name: &str) -> Result<u64, Error> {
        match self.slot(name)? {
            Slot::Present(placement) => self.read_scalar(placement),
            Slot::Absent(field) => match field.kind {
                FieldKind::Unsigned(_) => Ok(field.default),
                _ => Err(mismatch(field, "an integer")),
            },
        }
    }

    /// 정수 필드를 읽습니다.
    ///
    /// [`raw`](Self::raw)와 달리 필드가 현재 버전에 없으면
    /// [`Error::UnsupportedForVersion`]을 반환합니다.
    pub fn try_raw(&self, name: &str) -> Result<u64, Error> {
        let placement = self.placement(name)?;
        self.read_scalar(&placement)
    }

    fn raw_u32(&self, name: &str) -> Result<u32, Error> {
        let value = self.raw(name)?;
        u32::try_from(value).map_err(|_| Error::ValueOutOfRange {
            field: self.spec().field(name).map_or("", |(f, _)| f.name),
            value,
            width: 4,
        })
    }

    /// 필드를 상수로 읽습니다.
    pub fn constant<T: XfsConstant>(&self, name: &str) -> Result<T, Error> {
        T::from_value(self.raw_u32(name)?)
    }

    /// 필드를 플래그 조합으로 읽습니다.
    pub fn bitmask<T: XfsBitmask>(&self, name: &str) -> Result<T, Error> {
        T::from_raw(self.raw_u32(name)?)
    }

    /// `BOOL` 필드를 읽습니다. 0이 아니면 참입니다.
    pub fn flag(&self, name: &str) -> Result<bool, Error> {
        Ok(self.raw(name)? != 0)
    }

    /// 필드가 현재 버전의 레이아웃에 있는지 확인합니다.
    ///
    /// 선언되지 않은 필드는 `false`입니다.
    pub fn is_available(&self, name: &str) -> bool {
        self.layout.get(name).is_some()
    }

    pub fn try_constant<T: XfsConstant>(&self, name: &str) -> Result<T, Error> {
        let placement = self.placement(name)?;
        T::from_value(narrow(placement.field, self.read_scalar(&placement)?)?)
    }

    pub fn try_bitmask<T: XfsBitmask>(&self, name: &str) -> Result<T, Error> {
        let placement = self.placement(name)?;
        T::from_raw(narrow(placement.field, self.read_scalar(&placement)?)?)
    }

    /// 배열 필드를 읽습니다. 필드가 현재 버전에 없으면 모든 원소가 기본값입니다.
    pub fn array(&self, name: &str) -> Result<Vec<u64>, Error> {
        match self.slot(name)? {
            Slot::Present(placement) => self.read_array(placement),
            Slot::Absent(field) => match field.kind {
                FieldKind::Array { len, .. } => Ok(vec![field.default; len]),
                _ => Err(mismatch(field, "an array")),
            },
        }
    }

    pub fn try_array(&self, name: &str) -> Result<Vec<u64>, Error> {
        let placement = self.placement(name)?;
        self.read_array(&placement)
    }

    fn read_array(&self, placement: &Placement) -> Result<Vec<u64>, Error> {
        match placement.kind() {
            FieldKind::Array { width, len } => {
                let offset = self.base + placement.offset;
                (0..len)
                    .map(|i| codec::read_uint(self.as_bytes(), offset + i * width, width))
                    .collect()
            }
            _ => Err(mismatch(placement.field, "an array")),
        }
    }

    /// `key=value` 목록 필드를 읽습니다.
    ///
    /// 포인터가 null이거나 필드가 현재 버전에 없으면 빈 목록을 반환합니다.
    pub fn key_values(&self, name: &str) -> Result<Extra, Error> {
        match self.slot(name)? {
            Slot::Present(placement) => self.read_key_values(placement),
            Slot::Absent(field) => match field.kind {
                FieldKind::KeyValueList => Ok(Extra::new()),
                _ => Err(mismatch(field, "a key/value list")),
            },
        }
    }

    pub fn try_key_values(&self, name: &str) -> Result<Extra, Error> {
        let placement = self.placement(name)?;
        self.read_key_values(&placement)
    }

    fn read_key_values(&self, placement: &Placement) -> Result<Extra, Error> {
        match placement.kind() {
            FieldKind::KeyValueList => {
                match codec::read_pointer(self.as_bytes(), self.base + placement.offset)? {
                    Some(target) => {
                        codec::decode_key_values(self.as_bytes(), target, self.options.encoding())
                    }
                    None => Ok(Extra::new()),
                }
            }
            _ => Err(mismatch(placement.field, "a key/value list")),
        }
    }

    /// 0으로 끝나는 DWORD 목록 필드를 읽습니다.
    ///
    /// 포인터가 null이거나 필드가 현재 버전에 없으면 빈 목록을 반환합니다.
    pub fn dword_list(&self, name: &str) -> Result<Vec<u32>, Error> {
        match self.slot(name)? {
            Slot::Present(placement) => self.read_dword_list(placement),
            Slot::Absent(field) => match field.kind {
                FieldKind::DWordList => Ok(Vec::new()),
                _ => Err(mismatch(field, "a DWORD list")),
            },
        }
    }

    pub fn try_dword_list(&self, name: &str) -> Result<Vec<u32>, Error> {
        let placement = self.placement(name)?;
        self.read_dword_list(&placement)
    }

    fn read_dword_list(&self, placement: &Placement) -> Result<Vec<u32>, Error> {
        match placement.kind() {
            FieldKind::DWordList => {
                match codec::read_pointer(self.as_bytes(), self.base + placement.offset)? {
                    Some(target) => codec::read_dword_list(self.as_bytes(), target),
                    None => Ok(Vec::new()),
                }
            }
            _ => Err(mismatch(placement.field, "a DWORD list")),
        }
    }

    /// 내장 구조체에 대한 뷰를 반환합니다.
    ///
    /// 빌린 버퍼에는 기본값을 만들 수 없으므로 필드가 현재 버전에 없으면 실패합니다.
    pub fn nested(&self, name: &str) -> Result<StructView<&[u8]>, Error> {
        let placement = self.placement(name)?;
        match placement.kind() {
            FieldKind::Struct(spec) => {
                StructView::at(self.as_bytes(), self.base + placement.offset, spec, self.options)
            }
            _ => Err(mismatch(placement.field, "a nested struct")),
        }
    }

    /// 구조체 포인터 배열이 가리키는 구조체들에 대한 뷰를 반환합니다.
    ///
    /// 포인터가 null이거나 필드가 현재 버전에 없으면 빈 목록을 반환합니다.
    pub fn structs(&self, name: &str) -> Result<Vec<StructView<&[u8]>>, Error> {
        let (spec, placement) = match self.slot(name)? {
            Slot::Present(placement) => match placement.kind() {
                FieldKind::StructList(spec) => (spec, placement),
                _ => return Err(mismatch(placement.field, "a struct list")),
            },
            Slot::Absent(field) => match field.kind {
                FieldKind::StructList(_) => return Ok(Vec::new()),
                _ => return Err(mismatch(field, "a struct list")),
            },
        };

        let table = match codec::read_pointer(self.as_bytes(), self.base + placement.offset)? {
            Some(table) => table,
            None => return Ok(Vec::new()),
        };

        codec::read_pointer_list(self.as_bytes(), table)?
            .into_iter()
            .map(|target| StructView::at(self.as_bytes(), target, spec, self.options))
            .collect()
    }

    /// 선언된 모든 필드를 배치 순서대로 읽습니다.
    ///
    /// 기본 필드가 먼저 나오고 확장 필드가 버전 순서대로 이어집니다. 현재 버전에 없는
    /// 필드는 기본값으로 채워집니다.
    pub fn fields(&self) -> Vec<(&'static str, Value)> {
        self.spec().declared().map(|(field, _)| (field.name, self.value_of(field))).collect()
    }

    fn value_of(&self, field: &'static FieldSpec) -> Value {
        let value = match field.kind {
            FieldKind::Unsigned(_) => self.raw(field.name).map(Value::Unsigned),
            FieldKind::Array { .. } => self.array(field.name).map(Value::Array),
            FieldKind::KeyValueList => self.key_values(field.name).map(Value::KeyValues),
            FieldKind::DWordList => self.dword_list(field.name).map(Value::List),
            FieldKind::Struct(spec) => {
                if self.layout.get(field.name).is_some() {
                    self.nested(field.name).map(|nested| Value::Struct(nested.fields()))
                } else {
                    Ok(Value::Struct(default_fields(spec)))
                }
            }
            FieldKind::StructList(_) => self.structs(field.name).map(|items| {
                Value::Structs(items.iter().map(|item| item.fields()).collect())
            }),
        };

        value.unwrap_or_else(Value::Malformed)
    }
}

fn default_fields(spec: &'static StructSpec) -> Vec<(&'static str, Value)> {
    spec.declared()
        .map(|(field, _)| {
            let value = match field.kind {
                FieldKind::Unsigned(_) => Value::Unsigned(field.default),
                FieldKind::Array { len, .. } => Value::Array(vec![field.default; len]),
                FieldKind::KeyValueList => Value::KeyValues(Extra::new()),
                FieldKind::DWordList => Value::List(Vec::new()),
                FieldKind::Struct(nested) => Value::Struct(default_fields(nested)),
                FieldKind::StructList(_) => Value::Structs(Vec::new()),
            };
            (field.name, value)
        })
        .collect()
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> StructView<B> {
    /// 정수 필드를 버퍼에 바로 씁니다.
    ///
    /// 필드가 현재 버전에 없으면 [`Error::UnsupportedForVersion`]을 반환합니다.
    pub fn set_raw(&mut self, name: &str, value: u64) -> Result<(), Error> {
        let placement = self.placement(name)?;
        match placement.kind() {
            FieldKind::Unsigned(width) => codec::write_uint(
                self.buf.as_mut(),
                self.base + placement.offset,
                width,
                value,
                placement.name(),
            ),
            _ => Err(mismatch(placement.field, "an integer")),
        }
    }

    pub fn set_constant<T: XfsConstant>(&mut self, name: &str, constant: T) -> Result<(), Error> {
        self.set_raw(name, u64::from(constant.value()))
    }

    pub fn set_bitmask<T: XfsBitmask>(&mut self, name: &str, flags: T) -> Result<(), Error> {
        self.set_raw(name, u64::from(flags.raw()))
    }

    pub fn set_flag(&mut self, name: &str, value: bool) -> Result<(), Error> {
        self.set_raw(name, u64::from(value))
    }

    /// 배열 필드의 원소 하나를 버퍼에 바로 씁니다.
    pub fn set_array_element(&mut self, name: &str, index: usize, value: u64) -> Result<(), Error> {
        let placement = self.placement(name)?;
        match placement.kind() {
            FieldKind::Array { width, len } => {
                if index >= len {
                    return Err(Error::IndexOutOfRange { field: placement.name(), index, len });
                }
                codec::write_uint(
                    self.buf.as_mut(),
                    self.base + placement.offset + index * width,
                    width,
                    value,
                    placement.name(),
                )
            }
            _ => Err(mismatch(placement.field, "an array")),
        }
    }
}

impl StructView<Vec<u8>> {
    /// 모든 필드가 기본값인 구조체를 할당합니다.
    ///
    /// 포인터 필드는 null로 초기화됩니다.
    pub fn alloc(spec: &'static StructSpec, options: Options) -> Result<Self, Error> {
        let layout = spec.layout(options.version())?;
        let mut buf = vec![0; layout.len()];
        write_defaults(&mut buf, 0, &layout)?;

        Ok(Self { buf, base: 0, layout, options })
    }

    /// 다른 뷰의 내용을 지정된 설정으로 복사합니다.
    ///
    /// 원본에 없는 필드는 기본값을 갖게 되며, 원본에만 있는 필드는 버려집니다.
    /// 포인터가 가리키는 내용도 모두 새 버퍼로 복사됩니다.
    pub fn copy_from<C: AsRef<[u8]>>(src: &StructView<C>, options: Options) -> Result<Self, Error> {
        tracing::trace!(
            strukt = src.spec().name,
            from = %src.version(),
            to = %options.version(),
            "copying struct"
        );

        let mut copy = Self::alloc(src.spec(), options)?;
        let layout = copy.layout.clone();
        copy_fields(&mut copy.buf, 0, &layout, src, options)?;

        Ok(copy)
    }

    /// `key=value` 목록을 버퍼 끝에 인코딩하고 필드가 이를 가리키도록 합니다.
    pub fn set_key_values(&mut self, name: &str, extra: &Extra) -> Result<(), Error> {
        let placement = self.placement(name)?;
        if placement.kind() != FieldKind::KeyValueList {
            return Err(mismatch(placement.field, "a key/value list"));
        }

        let encoding = self.options.encoding();
        write_key_values(&mut self.buf, self.base + placement.offset, placement.name(), extra, encoding)
    }

    /// 구조체들을 버퍼 끝에 복사하고 필드가 이를 가리키도록 합니다.
    pub fn set_structs<'i, C, I>(&mut self, name: &str, items: I) -> Result<(), Error>
    where
        C: AsRef<[u8]> + 'i,
        I: IntoIterator<Item = &'i StructView<C>>,
    {
        let placement = self.placement(name)?;
        let spec = match placement.kind() {
            FieldKind::StructList(spec) => spec,
            _ => return Err(mismatch(placement.field, "a struct list")),
        };

        let slot = self.base + placement.offset;
        write_struct_list(&mut self.buf, slot, placement.name(), spec, items, self.options)
    }

    /// DWORD 목록을 버퍼 끝에 0으로 끝나도록 쓰고 필드가 이를 가리키도록 합니다.
    ///
    /// 0은 종결자이므로 원소가 될 수 없습니다.
    pub fn set_dword_list(&mut self, name: &str, values: &[u32]) -> Result<(), Error> {
        let placement = self.placement(name)?;
        if placement.kind() != FieldKind::DWordList {
            return Err(mismatch(placement.field, "a DWORD list"));
        }

        write_dword_list(&mut self.buf, self.base + placement.offset, placement.name(), values)
    }
}

fn write_defaults(buf: &mut [u8], base: usize, layout: &StructLayout) -> Result<(), Error> {
    for placement in layout.placements() {
        let offset = base + placement.offset;
        let (name, default) = (placement.name(), placement.field.default);

        match placement.kind() {
            FieldKind::Unsigned(width) => codec::write_uint(buf, offset, width, default, name)?,
            FieldKind::Array { width, len } => {
                for i in 0..len {
                    codec::write_uint(buf, offset + i * width, width, default, name)?;
                }
            }
            FieldKind::KeyValueList | FieldKind::DWordList | FieldKind::StructList(_) => {
                codec::write_pointer(buf, offset, None, name)?
            }
            FieldKind::Struct(spec) => {
                write_defaults(buf, offset, &spec.layout(layout.version())?)?
            }
        }
    }

    Ok(())
}

fn write_key_values(
    buf: &mut Vec<u8>,
    slot: usize,
    name: &'static str,
    extra: &Extra,
    encoding: &'static encoding_rs::Encoding,
) -> Result<(), Error> {
    let target = codec::append(buf, &codec::encode_key_values(extra, encoding)?);
    codec::write_pointer(buf, slot, Some(target), name)
}

fn write_dword_list(
    buf: &mut Vec<u8>,
    slot: usize,
    name: &'static str,
    values: &[u32],
) -> Result<(), Error> {
    let target = codec::append(buf, &codec::encode_dword_list(values, name)?);
    codec::write_pointer(buf, slot, Some(target), name)
}

fn write_struct_list<'i, C, I>(
    buf: &mut Vec<u8>,
    slot: usize,
    name: &'static str,
    spec: &'static StructSpec,
    items: I,
    options: Options,
) -> Result<(), Error>
where
    C: AsRef<[u8]> + 'i,
    I: IntoIterator<Item = &'i StructView<C>>,
{
    let layout = spec.layout(options.version())?;
    let mut targets = Vec::new();

    for item in items {
        if !std::ptr::eq(item.spec(), spec) {
            return Err(Error::KindMismatch { field: name, expected: spec.name });
        }

        let target = codec::append(buf, &vec![0; layout.len()]);
        write_defaults(buf, target, &layout)?;
        copy_fields(buf, target, &layout, item, options)?;
        targets.push(target);
    }

    let table = codec::append(buf, &vec![0; (targets.len() + 1) * POINTER_WIDTH]);
    for (i, &target) in targets.iter().enumerate() {
        codec::write_pointer(buf, table + i * POINTER_WIDTH, Some(target), name)?;
    }

    codec::write_pointer(buf, slot, Some(table), name)
}

fn copy_fields<C: AsRef<[u8]>>(
    buf: &mut Vec<u8>,
    base: usize,
    layout: &StructLayout,
    src: &StructView<C>,
    options: Options,
) -> Result<(), Error> {
    for placement in layout.placements() {
        let offset = base + placement.offset;
        let name = placement.name();

        match placement.kind() {
            FieldKind::Unsigned(width) => {
                codec::write_uint(buf, offset, width, src.raw(name)?, name)?
            }
            FieldKind::Array { width, .. } => {
                for (i, value) in src.array(name)?.into_iter().enumerate() {
                    codec::write_uint(buf, offset + i * width, width, value, name)?;
                }
            }
            FieldKind::KeyValueList => {
                write_key_values(buf, offset, name, &src.key_values(name)?, options.encoding())?
            }
            FieldKind::DWordList => {
                let values = src.dword_list(name)?;
                if !values.is_empty() {
                    write_dword_list(buf, offset, name, &values)?
                }
            }
            FieldKind::Struct(spec) => {
                if src.layout().get(name).is_some() {
                    let nested = src.nested(name)?;
                    copy_fields(buf, offset, &spec.layout(layout.version())?, &nested, options)?;
                }
            }
            FieldKind::StructList(spec) => {
                write_struct_list(buf, offset, name, spec, &src.structs(name)?, options)?
            }
        }
    }

    Ok(())
}

impl<B: AsRef<[u8]>, C: AsRef<[u8]>> PartialEq<StructView<C>> for StructView<B> {
    fn eq(&self, other: &StructView<C>) -> bool {
        std::ptr::eq(self.spec(), other.spec()) && self.fields() == other.fields()
    }
}

impl<B: AsRef<[u8]>> Eq for StructView<B> {}

impl<B: AsRef<[u8]>> Hash for StructView<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.spec().name.hash(state);
        self.fields().hash(state);
    }
}

impl<B: AsRef<[u8]>> fmt::Debug for StructView<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.spec().name);
        s.field("version", &format_args!("{}", self.version()));
        for (name, value) in self.fields() {
            s.field(name, &value);
        }
        s.finish()
    }
}

impl<B: AsRef<[u8]> + Clone> Clone for StructView<B> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            base: self.base,
            layout: self.layout.clone(),
            options: self.options,
        }
    }
}
