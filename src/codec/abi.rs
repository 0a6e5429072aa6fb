// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Minimal Solidity ABI encoder for static tuples of dynamic arrays.
//!
//! Layout of `encode(&[t0, t1, ...])`:
//! ```text
//! head:  one word per token
//!          dynamic token -> offset of its tail, from the start of the encoding
//!          static token  -> the value itself
//! tails: for each dynamic token, in order
//!          length word, then one word per element
//! ```
//! Every word is 32 bytes, big-endian, left-padded.

use byteorder::{BigEndian, ByteOrder};

use crate::config::WORD_LEN;
use crate::error::{GovernanceError, Result};
use crate::types::id::{Address, Digest};

#[derive(Clone, Copy, Debug)]
pub enum Token<'a> {
    /// `address[]`
    Addresses(&'a [Address]),
    /// `bytes32[]`
    Digests(&'a [Digest]),
    /// `uint256[]`, values limited to 128 bits
    Uints(&'a [u128]),
    /// `uint256`
    Uint(u128),
}

impl Token<'_> {
    fn is_dynamic(&self) -> bool {
        !matches!(self, Token::Uint(_))
    }

    fn len(&self) -> usize {
        match self {
            Token::Addresses(v) => v.len(),
            Token::Digests(v) => v.len(),
            Token::Uints(v) => v.len(),
            Token::Uint(_) => 0,
        }
    }

    fn tail_len(&self) -> usize {
        if self.is_dynamic() {
            WORD_LEN * (1 + self.len())
        } else {
            0
        }
    }
}

fn write_u128(buf: &mut Vec<u8>, val: u128) {
    let mut word = [0u8; WORD_LEN];
    BigEndian::write_u128(&mut word[16..], val);
    buf.extend_from_slice(&word);
}

fn write_usize(buf: &mut Vec<u8>, val: usize) -> Result<()> {
    let val = u64::try_from(val).map_err(|_| GovernanceError::Overflow)?;
    write_u128(buf, val as u128);
    Ok(())
}

fn write_address(buf: &mut Vec<u8>, addr: &Address) {
    buf.extend_from_slice(&[0u8; WORD_LEN - 20]);
    buf.extend_from_slice(addr.as_bytes());
}

fn write_tail(buf: &mut Vec<u8>, token: &Token<'_>) -> Result<()> {
    write_usize(buf, token.len())?;
    match token {
        Token::Addresses(v) => v.iter().for_each(|a| write_address(buf, a)),
        Token::Digests(v) => v.iter().for_each(|d| buf.extend_from_slice(d.as_bytes())),
        Token::Uints(v) => v.iter().for_each(|x| write_u128(buf, *x)),
        Token::Uint(_) => {}
    }
    Ok(())
}

/// Encodes `tokens` as one ABI tuple.
pub fn encode(tokens: &[Token<'_>]) -> Result<Vec<u8>> {
    let head_len = WORD_LEN * tokens.len();
    let total_len = head_len + tokens.iter().map(Token::tail_len).sum::<usize>();
    let mut buf = Vec::with_capacity(total_len);

    let mut offset = head_len;
    for token in tokens {
        match token {
            Token::Uint(val) => write_u128(&mut buf, *val),
            dynamic => {
                write_usize(&mut buf, offset)?;
                offset += dynamic.tail_len();
            }
        }
    }

    for token in tokens.iter().filter(|t| t.is_dynamic()) {
        write_tail(&mut buf, token)?;
    }

    debug_assert_eq!(buf.len(), total_len);
    Ok(buf)
}
