//! Utilities for the values of textual value representations.

use crate::{InvalidCharacterSnafu, InvalidVmRangeSnafu, MaxLengthViolatedSnafu, Result, VmViolatedSnafu};
use dcmcodec_core::dictionary::VmRange;
use dcmcodec_core::VR;
use snafu::{ensure, ResultExt};

/// Retrieve the component at index `pos` of a backslash separated value,
/// or `None` if the value has fewer components.
pub fn get_string_part(value: &[u8], pos: usize) -> Option<&[u8]> {
    value.split(|&c| c == b'\\').nth(pos)
}

/// Count the values of a textual value.
///
/// An empty value has no values.
/// `LT`, `ST`, `UT` and `UR` hold a single value,
/// where a backslash is an ordinary character.
pub fn count_values(vr: VR, value: &[u8]) -> usize {
    if value.is_empty() {
        0
    } else if !vr.info().multi_valued {
        1
    } else {
        value.iter().filter(|&&c| c == b'\\').count() + 1
    }
}

/// Remove the padding and insignificant spaces of a single value.
///
/// Leading spaces are significant in `LT`, `ST`, `UT` and `UR`,
/// so only trailing ones are removed there.
pub fn normalize(vr: VR, value: &[u8]) -> &[u8] {
    let end = value
        .iter()
        .rposition(|&c| c != b' ' && c != 0)
        .map(|i| i + 1)
        .unwrap_or(0);
    let value = &value[..end];
    if vr.info().multi_valued {
        let start = value.iter().position(|&c| c != b' ').unwrap_or(value.len());
        &value[start..]
    } else {
        value
    }
}

/// Split a textual value into its normalized components.
pub fn split_values(vr: VR, value: &[u8]) -> Vec<&[u8]> {
    match count_values(vr, value) {
        0 => Vec::new(),
        1 if !vr.info().multi_valued => vec![normalize(vr, value)],
        _ => value.split(|&c| c == b'\\').map(|part| normalize(vr, part)).collect(),
    }
}

/// Whether the character set named by a Specific Character Set value
/// is one for which values are checked.
fn checked_charset(charset: &str) -> Option<bool> {
    match charset.trim() {
        // default repertoire
        "" | "ISO_IR 6" => Some(false),
        // Latin alphabet No. 1
        "ISO_IR 100" => Some(true),
        _ => None,
    }
}

fn is_allowed_char(vr: VR, c: u8, latin1: bool) -> bool {
    match c {
        0x20..=0x7E => true,
        // control characters of the free text VRs
        0x09 | 0x0A | 0x0C | 0x0D => matches!(vr, VR::LT | VR::ST | VR::UT),
        0x1B => vr.info().charset_sensitive,
        0xA0..=0xFF => latin1,
        _ => false,
    }
}

/// Check a string value against the rules of its value representation.
///
/// - each component must fit the maximum length of the VR;
/// - when `charset` is the default repertoire or Latin-1,
///   every character must belong to it;
///   other character sets are not checked;
/// - when `vm` is not empty,
///   the number of values must be within that range (such as `"1-n"`).
pub fn check_string_value(vr: VR, value: &[u8], vm: &str, charset: &str) -> Result<()> {
    let info = vr.info();
    let parts: Vec<&[u8]> = if info.multi_valued {
        value.split(|&c| c == b'\\').collect()
    } else {
        vec![value]
    };

    if let Some(max) = info.max_length {
        for (pos, part) in parts.iter().enumerate() {
            let len = normalize(vr, part).len();
            ensure!(len <= max as usize, MaxLengthViolatedSnafu { pos, len, max });
        }
    }

    if let Some(latin1) = checked_charset(charset) {
        if let Some(position) = value.iter().position(|&c| !is_allowed_char(vr, c, latin1)) {
            return InvalidCharacterSnafu { position }.fail();
        }
    }

    if !vm.trim().is_empty() {
        let range: VmRange = vm.parse().context(InvalidVmRangeSnafu)?;
        let vm = count_values(vr, value);
        ensure!(
            vm == 0 || range.contains(vm as u32),
            VmViolatedSnafu { vm, range }
        );
    }
    Ok(())
}
