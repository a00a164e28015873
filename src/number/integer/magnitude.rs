//! Unsigned word-vector arithmetic.
//!
//! A magnitude is a little-endian `[u32]`. Every function that returns a `Vec<u32>`
//! returns it canonical: without high-order zero words (zero is the empty vector).

use std::cmp::Ordering;

use super::WORD_BITS;

pub(super) const BASE: u64 = 1 << 32;

/// Strip high-order zero words.
pub(super) fn normalize(words: &mut Vec<u32>) {
    while let Some(&0) = words.last() {
        words.pop();
    }
}

pub(super) fn cmp(lhs: &[u32], rhs: &[u32]) -> Ordering {
    match lhs.len().cmp(&rhs.len()) {
        Ordering::Equal => {
            for (l, r) in lhs.iter().rev().zip(rhs.iter().rev()) {
                match l.cmp(r) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
            Ordering::Equal
        }
        ord => ord,
    }
}

pub(super) fn add(lhs: &[u32], rhs: &[u32]) -> Vec<u32> {
    let (long, short) = if lhs.len() >= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    let mut res = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;
    for (i, &word) in long.iter().enumerate() {
        let sum = word as u64 + *short.get(i).unwrap_or(&0) as u64 + carry;
        res.push(sum as u32);
        carry = sum >> 32;
    }
    if carry != 0 {
        res.push(carry as u32);
    }
    normalize(&mut res);
    res
}

/// `lhs - rhs`, requires `lhs >= rhs`.
pub(super) fn sub(lhs: &[u32], rhs: &[u32]) -> Vec<u32> {
    debug_assert!(cmp(lhs, rhs) != Ordering::Less);
    let mut res = Vec::with_capacity(lhs.len());
    let mut borrow = 0i64;
    for (i, &word) in lhs.iter().enumerate() {
        let mut diff = word as i64 - *rhs.get(i).unwrap_or(&0) as i64 - borrow;
        if diff < 0 {
            diff += BASE as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        res.push(diff as u32);
    }
    debug_assert_eq!(borrow, 0);
    normalize(&mut res);
    res
}

/// Schoolbook multiplication.
pub(super) fn mul(lhs: &[u32], rhs: &[u32]) -> Vec<u32> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }
    let mut res = vec![0u32; lhs.len() + rhs.len()];
    for (i, &l) in lhs.iter().enumerate() {
        if l == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &r) in rhs.iter().enumerate() {
            // l * r + res + carry <= (2^32 - 1)^2 + 2 * (2^32 - 1) = 2^64 - 1
            let t = l as u64 * r as u64 + res[i + j] as u64 + carry;
            res[i + j] = t as u32;
            carry = t >> 32;
        }
        res[i + rhs.len()] = carry as u32;
    }
    normalize(&mut res);
    res
}

/// Divide by a single non-zero word, returning the quotient and the remainder word.
pub(super) fn div_rem_word(lhs: &[u32], divisor: u32) -> (Vec<u32>, u32) {
    debug_assert!(divisor != 0);
    let mut quotient = vec![0u32; lhs.len()];
    let mut rem = 0u64;
    for (i, &word) in lhs.iter().enumerate().rev() {
        let cur = (rem << 32) | word as u64;
        quotient[i] = (cur / divisor as u64) as u32;
        rem = cur % divisor as u64;
    }
    normalize(&mut quotient);
    (quotient, rem as u32)
}

/// Long division (Knuth, TAOCP vol. 2, algorithm D).
/// Requires a non-empty divisor.
pub(super) fn div_rem(lhs: &[u32], rhs: &[u32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(!rhs.is_empty());
    if cmp(lhs, rhs) == Ordering::Less {
        return (Vec::new(), lhs.to_vec());
    }
    if rhs.len() == 1 {
        let (q, r) = div_rem_word(lhs, rhs[0]);
        let r = if r == 0 { Vec::new() } else { vec![r] };
        return (q, r);
    }

    // Normalize so the top bit of the divisor is set, this bounds the qhat estimate error to 2
    let shift = rhs[rhs.len() - 1].leading_zeros();
    let vn = shl_bits(rhs, shift, false);
    let mut un = shl_bits(lhs, shift, true);
    let n = vn.len();
    let m = lhs.len() - n;
    let mut quotient = vec![0u32; m + 1];

    let top = vn[n - 1] as u64;
    let second = vn[n - 2] as u64;
    for j in (0..=m).rev() {
        let num = ((un[j + n] as u64) << 32) | un[j + n - 1] as u64;
        let mut qhat = num / top;
        let mut rhat = num % top;
        while qhat >= BASE || qhat * second > ((rhat << 32) | un[j + n - 2] as u64) {
            qhat -= 1;
            rhat += top;
            if rhat >= BASE {
                break;
            }
        }

        // Multiply and subtract
        let mut k = 0i64;
        for i in 0..n {
            let p = qhat * vn[i] as u64;
            let t = un[i + j] as i64 - k - (p & 0xFFFF_FFFF) as i64;
            un[i + j] = t as u32;
            k = (p >> 32) as i64 - (t >> 32);
        }
        let t = un[j + n] as i64 - k;
        un[j + n] = t as u32;

        if t < 0 {
            // qhat was one too large, add the divisor back
            quotient[j] = (qhat - 1) as u32;
            let mut carry = 0u64;
            for i in 0..n {
                let s = un[i + j] as u64 + vn[i] as u64 + carry;
                un[i + j] = s as u32;
                carry = s >> 32;
            }
            un[j + n] = un[j + n].wrapping_add(carry as u32);
        } else {
            quotient[j] = qhat as u32;
        }
    }

    normalize(&mut quotient);
    un.truncate(n);
    let mut rem = shr_bits(&un, shift);
    normalize(&mut rem);
    (quotient, rem)
}

/// Shift left by less than a word. With `extend` an extra high word is always appended.
fn shl_bits(words: &[u32], shift: u32, extend: bool) -> Vec<u32> {
    let mut res = Vec::with_capacity(words.len() + 1);
    if shift == 0 {
        res.extend_from_slice(words);
        if extend {
            res.push(0);
        }
        return res;
    }
    let mut carry = 0u32;
    for &word in words {
        res.push((word << shift) | carry);
        carry = word >> (32 - shift);
    }
    if extend || carry != 0 {
        res.push(carry);
    }
    res
}

/// Shift right by less than a word.
fn shr_bits(words: &[u32], shift: u32) -> Vec<u32> {
    if shift == 0 {
        return words.to_vec();
    }
    let mut res = vec![0u32; words.len()];
    for i in 0..words.len() {
        let high = words.get(i + 1).map_or(0, |&w| w << (32 - shift));
        res[i] = (words[i] >> shift) | high;
    }
    res
}

pub(super) fn shl(words: &[u32], bits: usize) -> Vec<u32> {
    if words.is_empty() {
        return Vec::new();
    }
    let mut res = vec![0u32; bits / WORD_BITS];
    res.extend(shl_bits(words, (bits % WORD_BITS) as u32, false));
    normalize(&mut res);
    res
}

pub(super) fn shr(words: &[u32], bits: usize) -> Vec<u32> {
    let skip = bits / WORD_BITS;
    if skip >= words.len() {
        return Vec::new();
    }
    let mut res = shr_bits(&words[skip..], (bits % WORD_BITS) as u32);
    normalize(&mut res);
    res
}

/// Number of significant bits.
pub(super) fn bits(words: &[u32]) -> usize {
    match words.last() {
        Some(&top) => words.len() * WORD_BITS - top.leading_zeros() as usize,
        None => 0,
    }
}

/// True if any of the lowest `bits` bits are set.
pub(super) fn any_low_bits(words: &[u32], bits: usize) -> bool {
    let full = bits / WORD_BITS;
    if words.iter().take(full).any(|&w| w != 0) {
        return true;
    }
    let part = (bits % WORD_BITS) as u32;
    part != 0 && words.get(full).is_some_and(|&w| w & ((1u32 << part) - 1) != 0)
}

pub(super) fn from_u128(value: u128) -> Vec<u32> {
    let mut res = Vec::with_capacity(4);
    let mut v = value;
    while v != 0 {
        res.push(v as u32);
        v >>= 32;
    }
    res
}

/// Value of the magnitude if it fits in 64 bits.
pub(super) fn to_u64(words: &[u32]) -> Option<u64> {
    match words.len() {
        0 => Some(0),
        1 => Some(words[0] as u64),
        2 => Some(((words[1] as u64) << 32) | words[0] as u64),
        _ => None,
    }
}
