//! Solidity ABI encoding for `createRequestTo`
//!
//! 只涵蓋這個呼叫需要的型別: address, bytes32, uint256, int256, string.

use crate::utils::error::{AdapterError, Result};
use primitive_types::U256;
use sha3::{Digest, Keccak256};

pub const CREATE_REQUEST_TO_SIGNATURE: &str =
    "createRequestTo(address,bytes32,uint256,string,string,int256)";

const WORD: usize = 32;

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

fn encoding_error(message: impl Into<String>) -> AdapterError {
    AdapterError::EncodingError {
        message: message.into(),
    }
}

pub fn encode_address(address: &str) -> Result<[u8; WORD]> {
    let digits = address
        .strip_prefix("0x")
        .ok_or_else(|| encoding_error(format!("address {} must start with 0x", address)))?;
    let bytes = hex::decode(digits)
        .map_err(|e| encoding_error(format!("address {}: {}", address, e)))?;
    if bytes.len() != 20 {
        return Err(encoding_error(format!(
            "address {} must be 20 bytes, got {}",
            address,
            bytes.len()
        )));
    }

    let mut word = [0u8; WORD];
    word[WORD - 20..].copy_from_slice(&bytes);
    Ok(word)
}

/// 依 `web3.utils.toHex` 的規則把 job id 轉成位元組，靠左放入 bytes32，右側補零
///
/// - `0x` 開頭的十六進位: 原樣當作位元組
/// - 十進位整數: 去掉前導零的 big-endian 位元組
/// - 其他文字: UTF-8
pub fn encode_job_id(job_id: &str) -> Result<[u8; WORD]> {
    let bytes = job_id_bytes(job_id)?;
    if bytes.len() > WORD {
        return Err(encoding_error(format!(
            "'{}' does not fit in bytes32 ({} bytes)",
            job_id,
            bytes.len()
        )));
    }

    let mut word = [0u8; WORD];
    word[..bytes.len()].copy_from_slice(&bytes);
    Ok(word)
}

fn job_id_bytes(job_id: &str) -> Result<Vec<u8>> {
    if let Some(digits) = strip_hex_prefix(job_id) {
        if digits.chars().all(|c| c.is_ascii_hexdigit()) {
            // 奇數長度時補一個前導 0 湊滿位元組
            let digits = if digits.len() % 2 == 1 {
                format!("0{}", digits)
            } else {
                digits.to_string()
            };
            return hex::decode(&digits)
                .map_err(|e| encoding_error(format!("job id {}: {}", job_id, e)));
        }
    }

    let trimmed = job_id.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        let value = U256::from_dec_str(trimmed)
            .map_err(|e| encoding_error(format!("job id '{}': {:?}", job_id, e)))?;
        let mut word = [0u8; WORD];
        value.to_big_endian(&mut word);
        let first = word.iter().position(|b| *b != 0).unwrap_or(WORD - 1);
        return Ok(word[first..].to_vec());
    }

    if trimmed.parse::<f64>().is_ok_and(f64::is_finite) {
        return Err(encoding_error(format!(
            "job id '{}' must be a non-negative integer, hex, or text",
            job_id
        )));
    }

    Ok(job_id.as_bytes().to_vec())
}

fn strip_hex_prefix(value: &str) -> Option<&str> {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
}

pub fn encode_uint256(decimal: &str) -> Result<[u8; WORD]> {
    let value = U256::from_dec_str(decimal.trim())
        .map_err(|e| encoding_error(format!("uint256 '{}': {:?}", decimal, e)))?;
    let mut word = [0u8; WORD];
    value.to_big_endian(&mut word);
    Ok(word)
}

/// 二補數，負數以 0xff 補滿高位
pub fn encode_int256(decimal: &str) -> Result<[u8; WORD]> {
    let value: i128 = decimal
        .trim()
        .parse()
        .map_err(|e| encoding_error(format!("int256 '{}': {}", decimal, e)))?;
    let mut word = if value < 0 { [0xffu8; WORD] } else { [0u8; WORD] };
    word[WORD - 16..].copy_from_slice(&value.to_be_bytes());
    Ok(word)
}

/// 動態字串: 長度 word 接上內容，補齊到 32 的倍數
pub fn encode_string(text: &str) -> Vec<u8> {
    let bytes = text.as_bytes();
    let padded = bytes.len().div_ceil(WORD) * WORD;

    let mut out = Vec::with_capacity(WORD + padded);
    out.extend_from_slice(&length_word(bytes.len()));
    out.extend_from_slice(bytes);
    out.resize(WORD + padded, 0);
    out
}

fn length_word(len: usize) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    U256::from(len as u64).to_big_endian(&mut word);
    word
}

/// `createRequestTo` 的六個參數，值保持字串形式直到編碼
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequestTo<'a> {
    pub oracle: &'a str,
    pub job_id: &'a str,
    pub payment: &'a str,
    pub url: &'a str,
    pub path: &'a str,
    pub times: &'a str,
}

impl CreateRequestTo<'_> {
    pub fn encode(&self) -> Result<Vec<u8>> {
        let url = encode_string(self.url);
        let path = encode_string(self.path);

        let head_len = 6 * WORD;
        let url_offset = head_len;
        let path_offset = head_len + url.len();

        let mut calldata = Vec::with_capacity(4 + head_len + url.len() + path.len());
        calldata.extend_from_slice(&function_selector(CREATE_REQUEST_TO_SIGNATURE));
        calldata.extend_from_slice(&encode_address(self.oracle)?);
        calldata.extend_from_slice(&encode_job_id(self.job_id)?);
        calldata.extend_from_slice(&encode_uint256(self.payment)?);
        calldata.extend_from_slice(&length_word(url_offset));
        calldata.extend_from_slice(&length_word(path_offset));
        calldata.extend_from_slice(&encode_int256(self.times)?);
        calldata.extend_from_slice(&url);
        calldata.extend_from_slice(&path);
        Ok(calldata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_selector() {
        assert_eq!(
            hex::encode(function_selector("transfer(address,uint256)")),
            "a9059cbb"
        );
    }

    #[test]
    fn test_encode_address_left_pads() {
        let word = encode_address("0x14301ce4eb78b591a5437bf4d6e592ba3ab1d742").unwrap();
        assert_eq!(&word[..12], &[0u8; 12]);
        assert_eq!(hex::encode(&word[12..]), "14301ce4eb78b591a5437bf4d6e592ba3ab1d742");
        assert!(encode_address("0x1234").is_err());
        assert!(encode_address("14301ce4eb78b591a5437bf4d6e592ba3ab1d742").is_err());
    }

    #[test]
    fn test_text_job_id_is_utf8() {
        let word = encode_job_id("6a2662fb442142e997257e7fc7fa1fe9").unwrap();
        assert_eq!(&word[..], b"6a2662fb442142e997257e7fc7fa1fe9");

        let word = encode_job_id("job").unwrap();
        assert_eq!(&word[..3], b"job");
        assert!(word[3..].iter().all(|b| *b == 0));

        assert!(encode_job_id(&"x".repeat(33)).is_err());
    }

    #[test]
    fn test_hex_job_id_is_raw_bytes() {
        let hex_id = "0x3661323636326662343432313432653939373235376537666337666131666539";
        let word = encode_job_id(hex_id).unwrap();
        assert_eq!(&word[..], b"6a2662fb442142e997257e7fc7fa1fe9");

        let word = encode_job_id("0XABcd").unwrap();
        assert_eq!(&word[..2], &[0xab, 0xcd]);
        assert!(word[2..].iter().all(|b| *b == 0));

        assert_eq!(encode_job_id("0xf").unwrap()[0], 0x0f);
        assert_eq!(encode_job_id("0x").unwrap(), [0u8; 32]);
        assert!(encode_job_id(&format!("0x{}", "ab".repeat(33))).is_err());
    }

    #[test]
    fn test_numeric_job_id_is_big_endian() {
        let word = encode_job_id("12345").unwrap();
        assert_eq!(&word[..2], &[0x30, 0x39]);
        assert!(word[2..].iter().all(|b| *b == 0));

        assert_eq!(encode_job_id("0").unwrap(), [0u8; 32]);
        assert_eq!(encode_job_id("255").unwrap()[0], 0xff);
        assert!(encode_job_id("-5").is_err());
        assert!(encode_job_id("1.5").is_err());
    }

    #[test]
    fn test_encode_numbers() {
        let one_link = encode_uint256("1000000000000000000").unwrap();
        assert_eq!(hex::encode(&one_link[24..]), "0de0b6b3a7640000");
        assert!(encode_uint256("-1").is_err());

        assert_eq!(encode_int256("2").unwrap()[31], 2);
        assert_eq!(encode_int256("-1").unwrap(), [0xffu8; 32]);
        assert!(encode_int256("two").is_err());
    }

    #[test]
    fn test_encode_string_pads_to_word() {
        let encoded = encode_string("data.current.pollution.aqius");
        assert_eq!(encoded.len(), 64);
        assert_eq!(encoded[31], 28);
        assert_eq!(&encoded[32..60], b"data.current.pollution.aqius");
        assert!(encoded[60..].iter().all(|b| *b == 0));

        assert_eq!(encode_string("").len(), 32);
    }

    #[test]
    fn test_create_request_to_layout() {
        let call = CreateRequestTo {
            oracle: "0x14301ce4eb78b591a5437bf4d6e592ba3ab1d742",
            job_id: "6a2662fb442142e997257e7fc7fa1fe9",
            payment: "1000000000000000000",
            url: "http://api.airvisual.com/v2/",
            path: "data.current.pollution.aqius",
            times: "2",
        };
        let calldata = call.encode().unwrap();

        // selector + 6 head words + (len + 1 word) * 2
        assert_eq!(calldata.len(), 4 + 6 * 32 + 64 + 64);
        assert_eq!(&calldata[..4], &function_selector(CREATE_REQUEST_TO_SIGNATURE));
        assert_eq!(calldata[4 + 3 * 32 + 31], 192);
        assert_eq!(calldata[4 + 4 * 32 + 31], 0);
        assert_eq!(calldata[4 + 4 * 32 + 30], 1);
        assert_eq!(calldata[4 + 5 * 32 + 31], 2);
        assert_eq!(calldata[4 + 192 + 31], 28);
    }
}
