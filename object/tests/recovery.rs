//! Reading malformed or unusual data sets:
//! the reader recovers where it can and keeps what it has read.

use dcmcodec_core::dictionary::empty::EmptyDataDictionary;
use dcmcodec_dictionary_std::tags;
use dcmcodec_object::{
    Condition, Dataset, InputStream, ReadOptions, ReadProgress, WriteOptions, VR,
};
use dcmcodec_transfer_syntax_registry::entries::{
    EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
};

fn read_implicit(bytes: &[u8], options: &ReadOptions) -> dcmcodec_object::Result<Dataset> {
    let mut ds = Dataset::new();
    let mut stream = InputStream::from_bytes(bytes);
    let progress = ds.read(&mut stream, Some(&IMPLICIT_VR_LITTLE_ENDIAN), options)?;
    assert_eq!(progress, ReadProgress::Complete);
    Ok(ds)
}

#[test]
fn unknown_of_undefined_length_is_a_sequence() {
    #[rustfmt::skip]
    static DATA: &[u8] = &[
        // (0008,2218) Anatomic Region Sequence, UN of undefined length
        0x08, 0x00, 0x18, 0x22, b'U', b'N', 0x00, 0x00,
        0xFF, 0xFF, 0xFF, 0xFF,
            // item, undefined length
            0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
                // (0008,0100) Code Value, implicit VR, length 4
                0x08, 0x00, 0x00, 0x01, 0x04, 0x00, 0x00, 0x00,
                b'T', b'-', b'1', b'0',
            // item delimiter
            0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // sequence delimiter
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // (0010,0010) Patient Name PN, length 4
        0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x04, 0x00,
        b'D', b'o', b'e', b'^',
    ];

    let mut ds = Dataset::new();
    let mut stream = InputStream::from_bytes(DATA);
    assert_eq!(
        ds.read(&mut stream, Some(&EXPLICIT_VR_LITTLE_ENDIAN), &ReadOptions::new())
            .unwrap(),
        ReadProgress::Complete
    );
    let sequence = ds.sequence(tags::ANATOMIC_REGION_SEQUENCE).unwrap();
    assert_eq!(sequence.len(), 1);
    let code = sequence.items()[0].element(tags::CODE_VALUE).unwrap();
    assert_eq!(code.vr(), VR::SH);
    assert_eq!(code.get_string(0).unwrap(), "T-10");
    assert_eq!(ds.get_string(tags::PATIENT_NAME).unwrap(), "Doe^");
}

#[test]
fn odd_length_is_padded_on_write() {
    #[rustfmt::skip]
    static DATA: &[u8] = &[
        // (0010,0010) Patient Name, length 3
        0x10, 0x00, 0x10, 0x00, 0x03, 0x00, 0x00, 0x00,
        b'D', b'o', b'e',
    ];

    let mut ds = read_implicit(DATA, &ReadOptions::new()).unwrap();
    assert_eq!(ds.get_string(tags::PATIENT_NAME).unwrap(), "Doe");

    let mut out = Vec::new();
    ds.write(&mut out, Some(&EXPLICIT_VR_LITTLE_ENDIAN), &WriteOptions::new())
        .unwrap();
    #[rustfmt::skip]
    let expected: &[u8] = &[
        0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x04, 0x00,
        b'D', b'o', b'e', b' ',
    ];
    assert_eq!(out, expected);
}

#[test]
fn sequence_of_explicit_length() {
    #[rustfmt::skip]
    static DATA: &[u8] = &[
        // (0008,2218) Anatomic Region Sequence, length 20
        0x08, 0x00, 0x18, 0x22, 0x14, 0x00, 0x00, 0x00,
            // item, length 12
            0xFE, 0xFF, 0x00, 0xE0, 0x0C, 0x00, 0x00, 0x00,
                // (0008,0100) Code Value, length 4
                0x08, 0x00, 0x00, 0x01, 0x04, 0x00, 0x00, 0x00,
                b'T', b'-', b'1', b'0',
        // (0010,0010) Patient Name, length 4
        0x10, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00,
        b'D', b'o', b'e', b'^',
    ];

    let ds = read_implicit(DATA, &ReadOptions::new()).unwrap();
    assert_eq!(ds.len(), 2);
    let sequence = ds.sequence(tags::ANATOMIC_REGION_SEQUENCE).unwrap();
    assert_eq!(sequence.len(), 1);
    assert_eq!(
        sequence.items()[0].get_string(tags::CODE_VALUE).unwrap(),
        "T-10"
    );
    assert_eq!(ds.get_string(tags::PATIENT_NAME).unwrap(), "Doe^");
}

#[test]
fn truncated_value_keeps_what_was_read() {
    #[rustfmt::skip]
    static DATA: &[u8] = &[
        // (0010,0020) Patient ID, length 4
        0x10, 0x00, 0x20, 0x00, 0x04, 0x00, 0x00, 0x00,
        b'1', b'2', b'3', b'4',
        // (0010,1010) Patient Age, length 4, only 3 bytes follow
        0x10, 0x00, 0x10, 0x10, 0x04, 0x00, 0x00, 0x00,
        b'0', b'4', b'2',
    ];

    let ds = read_implicit(DATA, &ReadOptions::new()).unwrap();
    assert_eq!(ds.get_string(tags::PATIENT_ID).unwrap(), "1234");
    let age = ds.element(tags::PATIENT_AGE).unwrap();
    assert_eq!(age.length(), 3);
    assert_eq!(age.get_string(0).unwrap(), "042");
}

#[test]
fn truncated_header_is_ignored() {
    #[rustfmt::skip]
    static DATA: &[u8] = &[
        // (0010,0020) Patient ID, length 2
        0x10, 0x00, 0x20, 0x00, 0x02, 0x00, 0x00, 0x00,
        b'4', b'2',
        // three bytes of a header
        0x10, 0x00, 0x30,
    ];

    let ds = read_implicit(DATA, &ReadOptions::new()).unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.get_string(tags::PATIENT_ID).unwrap(), "42");
}

#[test]
fn stream_ends_within_a_sequence() {
    #[rustfmt::skip]
    static DATA: &[u8] = &[
        // (0008,2218) Anatomic Region Sequence, undefined length
        0x08, 0x00, 0x18, 0x22, 0xFF, 0xFF, 0xFF, 0xFF,
            // item, undefined length
            0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
                // (0008,0100) Code Value, length 4
                0x08, 0x00, 0x00, 0x01, 0x04, 0x00, 0x00, 0x00,
                b'T', b'-', b'1', b'0',
        // no delimiters
    ];

    let ds = read_implicit(DATA, &ReadOptions::new()).unwrap();
    let sequence = ds.sequence(tags::ANATOMIC_REGION_SEQUENCE).unwrap();
    assert_eq!(sequence.len(), 1);
    assert_eq!(
        sequence.items()[0].get_string(tags::CODE_VALUE).unwrap(),
        "T-10"
    );
}

#[test]
fn item_outside_of_a_sequence() {
    #[rustfmt::skip]
    static DATA: &[u8] = &[
        // item, length 0
        0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];

    let err = read_implicit(DATA, &ReadOptions::new()).unwrap_err();
    assert_eq!(err.condition(), Condition::CorruptedData);
}

#[test]
fn stray_delimiters_are_skipped() {
    #[rustfmt::skip]
    static DATA: &[u8] = &[
        // item delimiter
        0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // sequence delimiter
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // (0010,0010) Patient Name, length 4
        0x10, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00,
        b'D', b'o', b'e', b'^',
    ];

    let ds = read_implicit(DATA, &ReadOptions::new()).unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.get_string(tags::PATIENT_NAME).unwrap(), "Doe^");
}

#[test]
fn repeated_and_unordered_elements() {
    #[rustfmt::skip]
    static DATA: &[u8] = &[
        // (0010,0020) Patient ID, length 2
        0x10, 0x00, 0x20, 0x00, 0x02, 0x00, 0x00, 0x00,
        b'4', b'2',
        // (0010,0010) Patient Name, length 4
        0x10, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00,
        b'D', b'o', b'e', b'^',
        // (0010,0010) Patient Name again, length 4
        0x10, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00,
        b'R', b'o', b'e', b'^',
    ];

    let ds = read_implicit(DATA, &ReadOptions::new()).unwrap();
    let order: Vec<_> = ds.iter().map(|o| o.tag()).collect();
    assert_eq!(order, vec![tags::PATIENT_NAME, tags::PATIENT_ID]);
    assert_eq!(ds.get_string(tags::PATIENT_NAME).unwrap(), "Doe^");
}

#[test]
fn implicit_values_without_dictionary_are_unknown() {
    #[rustfmt::skip]
    static DATA: &[u8] = &[
        // (0028,0010) Rows, length 2
        0x28, 0x00, 0x10, 0x00, 0x02, 0x00, 0x00, 0x00,
        0x00, 0x02,
    ];

    let ds = read_implicit(DATA, &ReadOptions::new()).unwrap();
    assert_eq!(ds.get(tags::ROWS).map(|o| o.vr()), Some(VR::US));
    assert_eq!(ds.get_u16(tags::ROWS).unwrap(), 512);

    let options = ReadOptions::new().dictionary(EmptyDataDictionary);
    let ds = read_implicit(DATA, &options).unwrap();
    let rows = ds.element(tags::ROWS).unwrap();
    assert_eq!(rows.vr(), VR::UN);
    assert_eq!(rows.value_bytes(), Some(&[0x00, 0x02][..]));
}
