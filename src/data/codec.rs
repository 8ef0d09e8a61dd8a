// SPDX-License-Identifier: MPL-2.0

//! 버퍼의 지정된 위치에 필드를 인코딩하거나 디코딩합니다.
//!
//! 정수는 모두 리틀 엔디언입니다. 포인터 필드에는 같은 버퍼 안에서의 오프셋이 저장되며
//! 0은 null을 의미합니다.

use super::Extra;
use crate::error::{Error, Malformed};

use encoding_rs::Encoding;
use xfs_layout::POINTER_WIDTH;

fn check_bounds(buf: &[u8], offset: usize, width: usize) -> Result<(), Malformed> {
    match offset.checked_add(width) {
        Some(end) if end <= buf.len() => Ok(()),
        _ => Err(Malformed::OutOfBounds { offset, width, len: buf.len() }),
    }
}

/// 부호 없는 정수를 읽습니다.
pub fn read_uint(buf: &[u8], offset: usize, width: usize) -> Result<u64, Error> {
    debug_assert!(width <= 8);
    check_bounds(buf, offset, width)?;

    let mut bytes = [0u8; 8];
    bytes[..width].copy_from_slice(&buf[offset..offset + width]);

    Ok(u64::from_le_bytes(bytes))
}

/// 부호 없는 정수를 씁니다.
///
/// `field`는 값이 크기를 넘었을 때 에러에 기록됩니다.
pub fn write_uint(
    buf: &mut [u8],
    offset: usize,
    width: usize,
    value: u64,
    field: &'static str,
) -> Result<(), Error> {
    debug_assert!(width <= 8);
    if width < 8 && value >> (width * 8) != 0 {
        return Err(Error::ValueOutOfRange { field, value, width });
    }
    check_bounds(buf, offset, width)?;

    buf[offset..offset + width].copy_from_slice(&value.to_le_bytes()[..width]);

    Ok(())
}

/// 포인터를 읽습니다. null이면 `None`을 반환합니다.
pub fn read_pointer(buf: &[u8], offset: usize) -> Result<Option<usize>, Error> {
    let value = read_uint(buf, offset, POINTER_WIDTH)? as usize;
    Ok(if value == 0 { None } else { Some(value) })
}

/// 포인터를 씁니다.
pub fn write_pointer(
    buf: &mut [u8],
    offset: usize,
    target: Option<usize>,
    field: &'static str,
) -> Result<(), Error> {
    let value = target.map_or(0, |t| t as u64);
    write_uint(buf, offset, POINTER_WIDTH, value, field)
}

/// 지정된 위치의 `key=value` 문자열 목록을 디코딩합니다.
///
/// 각 문자열은 null로 끝나며 빈 문자열이 목록의 끝을 나타냅니다. `=`가 없는 문자열은
/// 값이 빈 문자열인 키로 취급합니다.
pub fn decode_key_values(
    buf: &[u8],
    offset: usize,
    encoding: &'static Encoding,
) -> Result<Extra, Error> {
    if offset > buf.len() {
        return Err(Malformed::OutOfBounds { offset, width: 1, len: buf.len() }.into());
    }

    let mut extra = Extra::new();
    let mut pos = offset;

    loop {
        let len = buf[pos..]
            .iter()
            .position(|&ch| ch == b'\0')
            .ok_or(Malformed::UnterminatedString { offset })?;

        if len == 0 {
            return Ok(extra);
        }

        let text = encoding
            .decode_without_bom_handling_and_without_replacement(&buf[pos..pos + len])
            .ok_or(Malformed::InvalidString { offset: pos })?;

        match text.split_once('=') {
            Some((key, val)) => extra.push(key, val),
            None => extra.push(&*text, ""),
        }

        pos += len + 1;
    }
}

/// `key=value` 문자열 목록을 인코딩합니다.
///
/// 키에 `=`가 있거나 키와 값에 null 문자가 있으면 실패합니다. 인코딩으로 표현할 수 없는
/// 문자가 있어도 실패합니다.
pub fn encode_key_values(extra: &Extra, encoding: &'static Encoding) -> Result<Vec<u8>, Error> {
    let mut raw_data = Vec::new();

    for (key, val) in extra.iter() {
        if key.contains(&['=', '\0'][..]) || val.contains('\0') {
            return Err(Error::Unencodable {
                text: format!("{}={}", key, val),
                reason: "key=value entries cannot contain a null or a '=' in the key",
            });
        }

        let entry = format!("{}={}", key, val);
        let (bytes, _, unmappable) = encoding.encode(&entry);
        if unmappable {
            tracing::debug!(entry = %entry, encoding = encoding.name(), "unmappable characters");
            return Err(Error::Unencodable { text: entry, reason: "unmappable characters" });
        }

        raw_data.extend_from_slice(&bytes);
        raw_data.push(b'\0');
    }
    raw_data.push(b'\0');

    Ok(raw_data)
}

/// `key=value` 문자열 목록을 버퍼의 지정된 위치에 인코딩하고 기록한 크기를 반환합니다.
pub fn encode_key_values_into(
    buf: &mut [u8],
    offset: usize,
    extra: &Extra,
    encoding: &'static Encoding,
) -> Result<usize, Error> {
    let raw_data = encode_key_values(extra, encoding)?;
    check_bounds(buf, offset, raw_data.len())?;

    buf[offset..offset + raw_data.len()].copy_from_slice(&raw_data);

    Ok(raw_data.len())
}

/// 0으로 끝나는 DWORD 배열을 읽습니다.
pub fn read_dword_list(buf: &[u8], offset: usize) -> Result<Vec<u32>, Error> {
    let mut values = Vec::new();
    let mut pos = offset;

    loop {
        match read_uint(buf, pos, 4)? {
            0 => return Ok(values),
            value => values.push(value as u32),
        }
        pos += 4;
    }
}

/// DWORD 배열을 0으로 끝나도록 인코딩합니다.
pub fn encode_dword_list(values: &[u32], field: &'static str) -> Result<Vec<u8>, Error> {
    let mut raw_data = Vec::with_capacity((values.len() + 1) * 4);

    for &value in values {
        if value == 0 {
            return Err(Error::ReservedValue { field, value: 0 });
        }
        raw_data.extend_from_slice(&value.to_le_bytes());
    }
    raw_data.extend_from_slice(&[0; 4]);

    Ok(raw_data)
}

/// null 포인터로 끝나는 포인터 배열을 읽습니다.
pub fn read_pointer_list(buf: &[u8], offset: usize) -> Result<Vec<usize>, Error> {
    let mut targets = Vec::new();
    let mut pos = offset;

    while let Some(target) = read_pointer(buf, pos)? {
        targets.push(target);
        pos += POINTER_WIDTH;
    }

    Ok(targets)
}

/// 버퍼 끝에 바이트를 덧붙이고 그 오프셋을 반환합니다.
pub fn append(buf: &mut Vec<u8>, bytes: &[u8]) -> usize {
    let offset = buf.len();
    buf.extend_from_slice(bytes);
    offset
}
