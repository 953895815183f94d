//! Attribute matching for DICOM queries.
//!
//! The functions in this module implement the matching semantics of
//! DICOM query keys (PS3.4 C.2.2.2) over raw value buffers:
//! single value matching, wild card matching, range matching of dates,
//! times and date-times, and list of UID matching.
//! A zero length query is a universal match in every case.
//!
//! [`AttributeMatching`] selects the right function for a value
//! representation once and applies it on request:
//!
//! ```
//! # use dcmcodec_core::{VR, matching::AttributeMatching};
//! let matching = AttributeMatching::new(VR::DA);
//! assert!(matching.matches(b"20160101-20181231", b"20170713").unwrap());
//! ```

use crate::header::VR;
use chrono::{Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use snafu::{Backtrace, Snafu};

/// Error type for attribute matching.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum MatchingError {
    /// The matching function was applied before one was selected.
    #[snafu(display("No matching function was selected"))]
    Unselected { backtrace: Backtrace },
}

/// The matching algorithm selected for a value representation.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum AttributeMatching {
    /// No algorithm selected yet.
    #[default]
    Unselected,
    /// Byte-wise equality.
    SingleValue,
    /// Wild card matching with `*` and `?`.
    WildCard,
    /// Range matching of dates (DA).
    RangeDate,
    /// Range matching of times (TM).
    RangeTime,
    /// Range matching of date-times (DT).
    RangeDateTime,
    /// Matching against a backslash separated list of UIDs.
    ListOfUid,
}

impl From<VR> for AttributeMatching {
    fn from(vr: VR) -> Self {
        AttributeMatching::new(vr)
    }
}

impl AttributeMatching {
    /// Select the matching algorithm for attributes of the given VR.
    pub fn new(vr: VR) -> Self {
        match vr {
            VR::AE
            | VR::CS
            | VR::LO
            | VR::LT
            | VR::PN
            | VR::SH
            | VR::ST
            | VR::UC
            | VR::UR
            | VR::UT => AttributeMatching::WildCard,
            VR::DA => AttributeMatching::RangeDate,
            VR::TM => AttributeMatching::RangeTime,
            VR::DT => AttributeMatching::RangeDateTime,
            VR::UI => AttributeMatching::ListOfUid,
            _ => AttributeMatching::SingleValue,
        }
    }

    /// Whether a matching algorithm was selected.
    pub fn is_selected(&self) -> bool {
        *self != AttributeMatching::Unselected
    }

    /// Match the candidate value against the query.
    ///
    /// Fails only if no algorithm was selected.
    pub fn matches(&self, query: &[u8], candidate: &[u8]) -> Result<bool, MatchingError> {
        let f: fn(&[u8], &[u8]) -> bool = match self {
            AttributeMatching::Unselected => return UnselectedSnafu.fail(),
            AttributeMatching::SingleValue => single_value_matching,
            AttributeMatching::WildCard => wildcard_matching,
            AttributeMatching::RangeDate => range_matching_date,
            AttributeMatching::RangeTime => range_matching_time,
            AttributeMatching::RangeDateTime => range_matching_datetime,
            AttributeMatching::ListOfUid => list_of_uid_matching,
        };
        Ok(f(query, candidate))
    }
}

/// Single value matching: the candidate must equal the query byte for byte.
pub fn single_value_matching(query: &[u8], candidate: &[u8]) -> bool {
    query.is_empty() || query == candidate
}

/// Wild card matching: `*` matches any sequence of characters
/// (including none) and `?` matches exactly one character.
pub fn wildcard_matching(query: &[u8], candidate: &[u8]) -> bool {
    if query.is_empty() {
        return true;
    }

    let (mut q, mut c) = (0, 0);
    // position of the last `*` in the query
    // and the candidate position it is currently matched up to
    let mut backtrack: Option<(usize, usize)> = None;
    while c < candidate.len() {
        match query.get(q) {
            Some(b'*') => {
                backtrack = Some((q, c));
                q += 1;
            }
            Some(&b) if b == b'?' || b == candidate[c] => {
                q += 1;
                c += 1;
            }
            _ => match backtrack {
                // let the last `*` absorb one more character
                Some((star, consumed)) => {
                    backtrack = Some((star, consumed + 1));
                    q = star + 1;
                    c = consumed + 1;
                }
                None => return false,
            },
        }
    }
    query[q..].iter().all(|&b| b == b'*')
}

/// List of UID matching: the candidate must equal one of the
/// backslash separated UIDs in the query.
pub fn list_of_uid_matching(query: &[u8], candidate: &[u8]) -> bool {
    if query.is_empty() {
        return true;
    }
    let candidate = trim_value(candidate);
    query
        .split(|&b| b == b'\\')
        .any(|uid| trim_value(uid) == candidate)
}

/// Range matching of dates (DA).
///
/// The query is a single date, or a range `first-second`
/// where either side may be empty for an open range.
pub fn range_matching_date(query: &[u8], candidate: &[u8]) -> bool {
    range_matching(query, candidate, split_first_dash, parse_date, parse_date)
}

/// Range matching of times (TM).
pub fn range_matching_time(query: &[u8], candidate: &[u8]) -> bool {
    range_matching(query, candidate, split_first_dash, parse_time, parse_time)
}

/// Range matching of date-times (DT).
///
/// Values carrying a UTC offset are normalized to UTC before comparing.
pub fn range_matching_datetime(query: &[u8], candidate: &[u8]) -> bool {
    range_matching(
        query,
        candidate,
        split_datetime_range,
        parse_datetime,
        parse_datetime,
    )
}

/// Combined range matching of a date attribute and a time attribute
/// as a single point in time
/// (e.g. Study Date and Study Time).
///
/// If only one of the queries is empty the other is matched on its own.
/// When both are given their structure must agree:
/// either both are single values or both are ranges,
/// and each open side of the date range must also be open in the time range.
/// Any other combination is a non-match.
pub fn range_matching_date_and_time(
    date_query: &[u8],
    time_query: &[u8],
    date_candidate: &[u8],
    time_candidate: &[u8],
) -> bool {
    let date_query = trim_value(date_query);
    let time_query = trim_value(time_query);
    match (date_query.is_empty(), time_query.is_empty()) {
        (true, true) => return true,
        (false, true) => return range_matching_date(date_query, date_candidate),
        (true, false) => return range_matching_time(time_query, time_candidate),
        (false, false) => {}
    }

    let candidate = match combine_candidate(date_candidate, time_candidate) {
        Some(c) => c,
        None => return false,
    };

    match (split_first_dash(date_query), split_first_dash(time_query)) {
        (Some(Bounds::Single(date)), Some(Bounds::Single(time))) => {
            match (parse_date(date), parse_time(time)) {
                (Some(date), Some(time)) => date.and_time(time) == candidate,
                _ => false,
            }
        }
        (Some(Bounds::Range(d1, d2)), Some(Bounds::Range(t1, t2))) => {
            let lower = match combine_bound(d1, t1, NaiveTime::from_hms_opt(0, 0, 0)) {
                Bound::Open => true,
                Bound::At(lower) => lower <= candidate,
                Bound::Invalid => return false,
            };
            let upper = match combine_bound(d2, t2, NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999)) {
                Bound::Open => true,
                Bound::At(upper) => candidate <= upper,
                Bound::Invalid => return false,
            };
            lower && upper
        }
        // one attribute is ranged and the other is not
        _ => false,
    }
}

/// The parsed structure of a range query.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Bounds<'a> {
    Single(&'a [u8]),
    Range(&'a [u8], &'a [u8]),
}

enum Bound {
    Open,
    At(NaiveDateTime),
    Invalid,
}

fn combine_bound(date: &[u8], time: &[u8], default_time: Option<NaiveTime>) -> Bound {
    match (date.is_empty(), time.is_empty()) {
        (true, true) => Bound::Open,
        // a time bound without a date bound
        (true, false) => Bound::Invalid,
        (false, time_empty) => {
            let time = if time_empty {
                default_time
            } else {
                parse_time(time)
            };
            match (parse_date(date), time) {
                (Some(date), Some(time)) => Bound::At(date.and_time(time)),
                _ => Bound::Invalid,
            }
        }
    }
}

fn combine_candidate(date: &[u8], time: &[u8]) -> Option<NaiveDateTime> {
    let date = parse_date(date)?;
    let time = trim_value(time);
    let time = if time.is_empty() {
        NaiveTime::from_hms_opt(0, 0, 0)?
    } else {
        parse_time(time)?
    };
    Some(date.and_time(time))
}

fn range_matching<Q, C>(
    query: &[u8],
    candidate: &[u8],
    split: fn(&[u8]) -> Option<Bounds>,
    parse_query: fn(&[u8]) -> Option<Q>,
    parse_candidate: fn(&[u8]) -> Option<C>,
) -> bool
where
    Q: PartialOrd<C>,
    C: PartialOrd<Q>,
{
    let query = trim_value(query);
    if query.is_empty() {
        return true;
    }
    let candidate = match parse_candidate(candidate) {
        Some(c) => c,
        None => return false,
    };
    match split(query) {
        Some(Bounds::Single(value)) => match parse_query(value) {
            Some(value) => value == candidate,
            None => false,
        },
        Some(Bounds::Range(first, second)) => {
            let lower = if first.is_empty() {
                true
            } else {
                match parse_query(first) {
                    Some(first) => first <= candidate,
                    None => return false,
                }
            };
            let upper = if second.is_empty() {
                true
            } else {
                match parse_query(second) {
                    Some(second) => candidate <= second,
                    None => return false,
                }
            };
            lower && upper
        }
        None => false,
    }
}

/// Split a DA or TM range query at its dash.
/// More than one dash is malformed.
fn split_first_dash(query: &[u8]) -> Option<Bounds> {
    let mut parts = query.splitn(3, |&b| b == b'-');
    let first = parts.next()?;
    match (parts.next(), parts.next()) {
        (None, _) => Some(Bounds::Single(first)),
        (Some(second), None) => Some(Bounds::Range(first, second)),
        (Some(_), Some(_)) => None,
    }
}

/// Split a DT range query.
///
/// Dashes may also introduce a UTC offset.
/// A dash between two date-times without offsets reads as a range
/// when its bounds are in order, as does a dash with an empty side.
/// Otherwise the query is a single value if it parses as one,
/// or a range at the first dash whose sides both parse.
fn split_datetime_range(query: &[u8]) -> Option<Bounds> {
    let splits = || {
        query
            .iter()
            .enumerate()
            .filter(|(_, &b)| b == b'-')
            .map(move |(i, _)| (&query[..i], &query[i + 1..]))
    };
    let plain = |side: &[u8]| {
        if side.iter().any(|&b| b == b'+' || b == b'-') {
            None
        } else {
            parse_datetime(side)
        }
    };
    let ordered_range = splits().find(|(first, second)| {
        match (first.is_empty(), second.is_empty()) {
            (true, true) => false,
            (true, false) => plain(second).is_some(),
            (false, true) => plain(first).is_some(),
            (false, false) => match (plain(first), plain(second)) {
                (Some(lower), Some(upper)) => lower <= upper,
                _ => false,
            },
        }
    });
    if let Some((first, second)) = ordered_range {
        return Some(Bounds::Range(first, second));
    }
    if parse_datetime(query).is_some() {
        return Some(Bounds::Single(query));
    }
    let valid = |side: &[u8]| side.is_empty() || parse_datetime(side).is_some();
    splits()
        .find(|(first, second)| valid(first) && valid(second))
        .map(|(first, second)| Bounds::Range(first, second))
        .or(Some(Bounds::Single(query)))
}

/// Remove the padding and surrounding spaces of a value.
fn trim_value(value: &[u8]) -> &[u8] {
    let is_pad = |b: &u8| *b == b' ' || *b == 0;
    let start = value.iter().position(|b| !is_pad(b)).unwrap_or(value.len());
    let end = value
        .iter()
        .rposition(|b| !is_pad(b))
        .map(|p| p + 1)
        .unwrap_or(start);
    &value[start..end.max(start)]
}

fn parse_digits(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    digits
        .iter()
        .try_fold(0u32, |acc, &d| acc.checked_mul(10)?.checked_add(u32::from(d - b'0')))
}

/// Parse a DA value, `YYYYMMDD`, also admitting the older `YYYY.MM.DD` form.
pub fn parse_date(value: &[u8]) -> Option<NaiveDate> {
    let value = trim_value(value);
    let (y, m, d) = match value.len() {
        8 => (&value[0..4], &value[4..6], &value[6..8]),
        10 if value[4] == b'.' && value[7] == b'.' => (&value[0..4], &value[5..7], &value[8..10]),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(parse_digits(y)? as i32, parse_digits(m)?, parse_digits(d)?)
}

/// Parse a TM value, `HH[MM[SS[.F{1,6}]]]`.
/// Omitted components are zero.
pub fn parse_time(value: &[u8]) -> Option<NaiveTime> {
    let value = trim_value(value);
    let (main, fraction) = match value.iter().position(|&b| b == b'.') {
        Some(p) => (&value[..p], Some(&value[p + 1..])),
        None => (value, None),
    };
    let (h, m, s) = match main.len() {
        2 => (parse_digits(main)?, 0, 0),
        4 => (parse_digits(&main[0..2])?, parse_digits(&main[2..4])?, 0),
        6 => (
            parse_digits(&main[0..2])?,
            parse_digits(&main[2..4])?,
            parse_digits(&main[4..6])?,
        ),
        _ => return None,
    };
    let micro = match fraction {
        None => 0,
        // a fraction is only admitted after the seconds
        Some(f) if main.len() == 6 && !f.is_empty() && f.len() <= 6 => {
            parse_digits(f)? * 10u32.pow(6 - f.len() as u32)
        }
        Some(_) => return None,
    };
    time_from_components(h, m, s, micro)
}

fn time_from_components(h: u32, m: u32, s: u32, micro: u32) -> Option<NaiveTime> {
    if s == 60 {
        // leap second
        NaiveTime::from_hms_micro_opt(h, m, 59, 1_000_000 + micro)
    } else {
        NaiveTime::from_hms_micro_opt(h, m, s, micro)
    }
}

/// Parse a DT value, `YYYY[MM[DD[HH[MM[SS[.F{1,6}]]]]]][&ZZXX]`,
/// normalized to UTC when an offset is present.
/// Omitted components take their lowest value.
pub fn parse_datetime(value: &[u8]) -> Option<NaiveDateTime> {
    let value = trim_value(value);
    let (main, offset) = match value.iter().rposition(|&b| b == b'+' || b == b'-') {
        Some(p) => (&value[..p], Some(&value[p..])),
        None => (value, None),
    };
    let (digits, fraction) = match main.iter().position(|&b| b == b'.') {
        Some(p) => (&main[..p], Some(&main[p + 1..])),
        None => (main, None),
    };
    if ![4, 6, 8, 10, 12, 14].contains(&digits.len()) {
        return None;
    }
    let component = |range: std::ops::Range<usize>, default: u32| -> Option<u32> {
        if digits.len() >= range.end {
            parse_digits(&digits[range])
        } else {
            Some(default)
        }
    };
    let year = component(0..4, 0)?;
    let month = component(4..6, 1)?;
    let day = component(6..8, 1)?;
    let hour = component(8..10, 0)?;
    let minute = component(10..12, 0)?;
    let second = component(12..14, 0)?;
    let micro = match fraction {
        None => 0,
        Some(f) if digits.len() == 14 && !f.is_empty() && f.len() <= 6 => {
            parse_digits(f)? * 10u32.pow(6 - f.len() as u32)
        }
        Some(_) => return None,
    };
    let date = NaiveDate::from_ymd_opt(year as i32, month, day)?;
    let time = time_from_components(hour, minute, second, micro)?;
    let datetime = date.and_time(time);

    match offset {
        None => Some(datetime),
        Some(offset) => {
            if offset.len() != 5 {
                return None;
            }
            let hh = parse_digits(&offset[1..3])?;
            let mm = parse_digits(&offset[3..5])?;
            // offsets range from -1200 to +1400
            let west = offset[0] == b'-';
            let limit = if west { 1200 } else { 1400 };
            if mm >= 60 || hh * 100 + mm > limit {
                return None;
            }
            let seconds = (hh * 3600 + mm * 60) as i32;
            let offset = if west {
                FixedOffset::west_opt(seconds)?
            } else {
                FixedOffset::east_opt(seconds)?
            };
            datetime.checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unselected_matching_is_an_error() {
        let matching = AttributeMatching::default();
        assert!(!matching.is_selected());
        assert!(matches!(
            matching.matches(b"", b""),
            Err(MatchingError::Unselected { .. })
        ));
    }

    #[test]
    fn selection_by_vr() {
        assert_eq!(AttributeMatching::new(VR::PN), AttributeMatching::WildCard);
        assert_eq!(AttributeMatching::new(VR::DA), AttributeMatching::RangeDate);
        assert_eq!(AttributeMatching::new(VR::TM), AttributeMatching::RangeTime);
        assert_eq!(AttributeMatching::new(VR::DT), AttributeMatching::RangeDateTime);
        assert_eq!(AttributeMatching::new(VR::UI), AttributeMatching::ListOfUid);
        assert_eq!(AttributeMatching::new(VR::US), AttributeMatching::SingleValue);
        assert_eq!(AttributeMatching::new(VR::IS), AttributeMatching::SingleValue);
        assert!(AttributeMatching::from(VR::OB).is_selected());
    }

    #[test]
    fn single_value() {
        assert!(single_value_matching(b"", b"ANYTHING"));
        assert!(single_value_matching(b"MR", b"MR"));
        assert!(!single_value_matching(b"MR", b"MR "));
        assert!(!single_value_matching(b"MR", b"CT"));
    }

    #[test]
    fn wildcards() {
        assert!(wildcard_matching(b"", b"Doe^John"));
        assert!(wildcard_matching(b"*", b""));
        assert!(wildcard_matching(b"*", b"Doe^John"));
        assert!(!wildcard_matching(b"?", b""));
        assert!(wildcard_matching(b"?", b"D"));
        assert!(wildcard_matching(b"Doe*", b"Doe^John"));
        assert!(wildcard_matching(b"*John", b"Doe^John"));
        assert!(wildcard_matching(b"D*^J*n", b"Doe^John"));
        assert!(wildcard_matching(b"D?e^*", b"Doe^John"));
        assert!(wildcard_matching(b"**a**", b"banana"));
        assert!(wildcard_matching(b"*ana", b"banana"));
        assert!(!wildcard_matching(b"*anab", b"banana"));
        assert!(!wildcard_matching(b"M?ller", b"^Martin"));
        assert!(wildcard_matching(b"M?ller", b"Muller"));
        // without wild cards, equivalent to single value matching
        assert!(wildcard_matching(b"Doe^John", b"Doe^John"));
        assert!(!wildcard_matching(b"Doe^John", b"Doe^Joh"));
        assert!(!wildcard_matching(b"Doe", b"Doe^John"));
    }

    #[test]
    fn date_ranges() {
        assert!(range_matching_date(b"", b"19990101"));
        assert!(range_matching_date(b"20000101-20000102", b"20000101"));
        assert!(range_matching_date(b"20000101-20000102", b"20000102"));
        assert!(!range_matching_date(b"20000101-20000102", b"20000103"));
        assert!(range_matching_date(b"20160101-20181231", b"20170713"));
        assert!(range_matching_date(b"-20000102", b"19000101"));
        assert!(range_matching_date(b"20000102-", b"20500101"));
        assert!(!range_matching_date(b"20000102-", b"19991231"));
        // a single value is an exact match, not a containment
        assert!(range_matching_date(b"20000101", b"20000101"));
        assert!(!range_matching_date(b"20000101", b"20000102"));
        // parse failures are non-matches
        assert!(!range_matching_date(b"2000XX01-20000102", b"20000101"));
        assert!(!range_matching_date(b"20000101-2000", b"20000101"));
        assert!(!range_matching_date(b"20000101-20000102", b"garbage"));
        assert!(!range_matching_date(b"20000101-20000102-20000103", b"20000101"));
        assert!(!range_matching_date(b"20001301", b"20001301"));
        // legacy form and padding
        assert!(range_matching_date(b"2000.01.01", b"20000101 "));
    }

    #[test]
    fn time_ranges() {
        assert!(range_matching_time(b"-12", b"11"));
        assert!(range_matching_time(b"-12", b"12"));
        assert!(!range_matching_time(b"-12", b"1201"));
        assert!(range_matching_time(b"1030-1100", b"103059.123"));
        assert!(!range_matching_time(b"1030-1100", b"110001"));
        assert!(range_matching_time(b"235959.5-", b"235960"));
        assert!(!range_matching_time(b"25-", b"11"));
        assert!(!range_matching_time(b"12.5", b"12"));
    }

    #[test]
    fn datetime_ranges() {
        assert!(range_matching_datetime(b"", b"2000"));
        assert!(range_matching_datetime(
            b"20000101120000-20000101130000",
            b"20000101123000"
        ));
        assert!(!range_matching_datetime(
            b"20000101120000-20000101130000",
            b"20000101130001"
        ));
        // offsets are normalized to UTC
        assert!(range_matching_datetime(
            b"20000101120000+0100",
            b"20000101110000+0000"
        ));
        assert!(range_matching_datetime(
            b"20000101120000-0500-20000101180000+0000",
            b"20000101173000"
        ));
        assert!(range_matching_datetime(b"-2000", b"199912"));
        assert!(!range_matching_datetime(b"2000-", b"199912"));
        assert!(!range_matching_datetime(b"200001011200-", b"garbage"));
    }

    #[test]
    fn datetime_ranges_of_years() {
        assert!(range_matching_datetime(b"1990-2000", b"1995"));
        assert!(!range_matching_datetime(b"1990-2000", b"2001"));
        assert!(range_matching_datetime(b"2000-2020", b"2010"));
        assert!(range_matching_datetime(b"199001-200012", b"1995"));
        assert!(range_matching_datetime(b"1990-", b"2010"));
        assert!(!range_matching_datetime(b"-1990", b"2010"));
    }

    #[test]
    fn datetime_single_values_with_offsets() {
        assert!(range_matching_datetime(
            b"20000101120000+0100",
            b"20000101110000"
        ));
        assert!(!range_matching_datetime(
            b"20000101120000+0100",
            b"20000101120000"
        ));
        // a negative offset is not mistaken for the upper bound of a range
        assert!(range_matching_datetime(
            b"20000101120000-0500",
            b"20000101170000"
        ));
    }

    #[test]
    fn offsets_out_of_range() {
        assert!(parse_datetime(b"2000+1400").is_some());
        assert!(parse_datetime(b"2000-1200").is_some());
        assert!(parse_datetime(b"2000+1401").is_none());
        assert!(parse_datetime(b"2000-1300").is_none());
        assert!(parse_datetime(b"2000+0160").is_none());
        assert!(parse_datetime(b"1990-2000").is_none());
    }

    #[test]
    fn combined_date_and_time() {
        assert!(range_matching_date_and_time(b"", b"", b"20000101", b"1200"));
        assert!(range_matching_date_and_time(
            b"20000101",
            b"1200",
            b"20000101",
            b"1200"
        ));
        assert!(range_matching_date_and_time(
            b"20000101-20000102",
            b"1200-0800",
            b"20000101",
            b"2300"
        ));
        assert!(!range_matching_date_and_time(
            b"20000101-20000102",
            b"1200-0800",
            b"20000102",
            b"0900"
        ));
        assert!(range_matching_date_and_time(
            b"20000101-",
            b"1200-",
            b"20100101",
            b"0000"
        ));
        // mismatched structures never match
        assert!(!range_matching_date_and_time(
            b"20000101-20000102",
            b"1200",
            b"20000101",
            b"1200"
        ));
        assert!(!range_matching_date_and_time(
            b"20000101",
            b"1100-1300",
            b"20000101",
            b"1200"
        ));
        // only one query given
        assert!(range_matching_date_and_time(b"", b"-12", b"20000101", b"11"));
        assert!(range_matching_date_and_time(b"20000101", b"", b"20000101", b"11"));
    }

    #[test]
    fn uid_lists() {
        assert!(list_of_uid_matching(b"1.2\\3.4", b"3.4"));
        assert!(list_of_uid_matching(b"1.2\\3.4", b"1.2\0"));
        assert!(!list_of_uid_matching(b"1.2\\3.4", b"5.6"));
        assert!(list_of_uid_matching(b"", b"anything"));
        assert!(!list_of_uid_matching(b"1.2", b"1.23"));
    }

    #[test]
    fn through_the_selector() {
        let da = AttributeMatching::new(VR::DA);
        assert!(da.matches(b"20160101-20181231", b"20170713").unwrap());
        let tm = AttributeMatching::new(VR::TM);
        assert!(tm.matches(b"-12", b"11").unwrap());
        let pn = AttributeMatching::new(VR::PN);
        assert!(!pn.matches(b"M?ller", b"^Martin").unwrap());
    }
}
