//! Contract ABI encoding for the todo contract.
//!
//! Covers exactly the shapes the contract uses: `uint256`, `bool`, `string`,
//! and the `tuple(uint256,string,string,bool)[]` returned by `fetchTasks()`.
//! Words are 32 bytes, big-endian; dynamic values are referenced by byte
//! offsets relative to the start of their enclosing block.

use crate::task::domain::{ChainTaskRecord, TaskId};
use thiserror::Error;

const WORD: usize = 32;

/// Selector of `fetchTasks()`.
pub const FETCH_TASKS_SELECTOR: [u8; 4] = [0xce, 0x08, 0xbb, 0x63];
/// Selector of `createTask(string,string)`.
pub const CREATE_TASK_SELECTOR: [u8; 4] = [0x29, 0x2a, 0x45, 0x85];
/// Selector of `deleteTask(uint256)`.
pub const DELETE_TASK_SELECTOR: [u8; 4] = [0x56, 0x0f, 0x31, 0x92];

/// Errors raised while decoding ABI data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AbiError {
    /// A read would run past the end of the data.
    #[error("read of {len} bytes at offset {offset} is out of bounds")]
    OutOfBounds {
        /// Offset of the attempted read.
        offset: usize,
        /// Length of the attempted read.
        len: usize,
    },
    /// A word does not fit the expected integer width.
    #[error("integer at offset {0} does not fit")]
    Overflow(usize),
    /// A `bool` word holds something other than 0 or 1.
    #[error("invalid bool at offset {0}")]
    InvalidBool(usize),
    /// A `string` value is not UTF-8.
    #[error("string at offset {0} is not valid UTF-8")]
    InvalidUtf8(usize),
}

/// Calldata for `fetchTasks()`.
#[must_use]
pub fn encode_fetch_tasks() -> Vec<u8> {
    FETCH_TASKS_SELECTOR.to_vec()
}

/// Calldata for `createTask(title, contentPath)`.
#[must_use]
pub fn encode_create_task(title: &str, content_path: &str) -> Vec<u8> {
    let title_tail = encode_string(title);
    let path_tail = encode_string(content_path);

    let mut calldata = Vec::with_capacity(4 + 2 * WORD + title_tail.len() + path_tail.len());
    calldata.extend_from_slice(&CREATE_TASK_SELECTOR);
    calldata.extend_from_slice(&uint_word((2 * WORD) as u128));
    calldata.extend_from_slice(&uint_word((2 * WORD + title_tail.len()) as u128));
    calldata.extend_from_slice(&title_tail);
    calldata.extend_from_slice(&path_tail);
    calldata
}

/// Calldata for `deleteTask(id)`.
#[must_use]
pub fn encode_delete_task(id: TaskId) -> Vec<u8> {
    let mut calldata = Vec::with_capacity(4 + WORD);
    calldata.extend_from_slice(&DELETE_TASK_SELECTOR);
    calldata.extend_from_slice(&uint_word(id.value()));
    calldata
}

/// Decodes the return data of `fetchTasks()`.
///
/// # Errors
///
/// Returns [`AbiError`] when the data is truncated or malformed.
pub fn decode_task_records(data: &[u8]) -> Result<Vec<ChainTaskRecord>, AbiError> {
    let array_offset = read_offset(data, 0)?;
    let length = read_offset(data, array_offset)?;
    let elements = advance(array_offset, WORD)?;

    // Every element needs at least its head offset word.
    let heads_len = length.checked_mul(WORD).ok_or(AbiError::Overflow(array_offset))?;
    if advance(elements, heads_len)? > data.len() {
        return Err(AbiError::OutOfBounds {
            offset: elements,
            len: heads_len,
        });
    }

    let mut records = Vec::with_capacity(length);
    for index in 0..length {
        let head = advance(elements, index * WORD)?;
        let tuple = advance(elements, read_offset(data, head)?)?;
        records.push(decode_task_tuple(data, tuple)?);
    }
    Ok(records)
}

fn decode_task_tuple(data: &[u8], tuple: usize) -> Result<ChainTaskRecord, AbiError> {
    let id = read_u128(data, tuple)?;
    let title_at = advance(tuple, read_offset(data, advance(tuple, WORD)?)?)?;
    let description_at = advance(tuple, read_offset(data, advance(tuple, 2 * WORD)?)?)?;
    let completed = read_bool(data, advance(tuple, 3 * WORD)?)?;

    Ok(ChainTaskRecord {
        id: TaskId::from_chain(id),
        title: read_string(data, title_at)?,
        description: read_string(data, description_at)?,
        completed,
    })
}

fn uint_word(value: u128) -> [u8; WORD] {
    let mut word = [0_u8; WORD];
    let mut remaining = value;
    for slot in word.iter_mut().rev() {
        *slot = u8::try_from(remaining & 0xff).unwrap_or_default();
        remaining >>= 8;
    }
    word
}

fn encode_string(value: &str) -> Vec<u8> {
    let bytes = value.as_bytes();
    let padded = bytes.len().next_multiple_of(WORD);
    let mut encoded = Vec::with_capacity(WORD + padded);
    encoded.extend_from_slice(&uint_word(bytes.len() as u128));
    encoded.extend_from_slice(bytes);
    encoded.resize(WORD + padded, 0);
    encoded
}

fn advance(base: usize, by: usize) -> Result<usize, AbiError> {
    base.checked_add(by).ok_or(AbiError::Overflow(base))
}

fn read_bytes(data: &[u8], offset: usize, len: usize) -> Result<&[u8], AbiError> {
    advance(offset, len)
        .ok()
        .and_then(|end| data.get(offset..end))
        .ok_or(AbiError::OutOfBounds { offset, len })
}

fn read_u128(data: &[u8], offset: usize) -> Result<u128, AbiError> {
    let word = read_bytes(data, offset, WORD)?;
    let (high, low) = word.split_at(WORD - 16);
    if high.iter().any(|byte| *byte != 0) {
        return Err(AbiError::Overflow(offset));
    }
    Ok(low
        .iter()
        .fold(0_u128, |acc, byte| (acc << 8) | u128::from(*byte)))
}

fn read_offset(data: &[u8], offset: usize) -> Result<usize, AbiError> {
    let value = read_u128(data, offset)?;
    usize::try_from(value).map_err(|_| AbiError::Overflow(offset))
}

fn read_bool(data: &[u8], offset: usize) -> Result<bool, AbiError> {
    match read_u128(data, offset)? {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(AbiError::InvalidBool(offset)),
    }
}

fn read_string(data: &[u8], offset: usize) -> Result<String, AbiError> {
    let len = read_offset(data, offset)?;
    let bytes = read_bytes(data, advance(offset, WORD)?, len)?;
    String::from_utf8(bytes.to_vec()).map_err(|_| AbiError::InvalidUtf8(offset))
}
