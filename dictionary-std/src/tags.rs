//! Tag constants and the attribute entries known to the standard dictionary.
//!
//! Only the attributes the codec itself depends on are catalogued,
//! together with a selection of common patient, study, series and image
//! attributes.

use dcmcodec_core::dictionary::{DictionaryEntry, TagRange::Group100, VmRange};
use dcmcodec_core::{Tag, VR};

/// FileMetaInformationGroupLength (0002,0000) UL 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI 1
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI 1
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH 1
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE 1
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SendingApplicationEntityTitle (0002,0017) AE 1
#[rustfmt::skip]
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// ReceivingApplicationEntityTitle (0002,0018) AE 1
#[rustfmt::skip]
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// PrivateInformationCreatorUID (0002,0100) UI 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// PrivateInformation (0002,0102) OB 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// FileSetID (0004,1130) CS 1
#[rustfmt::skip]
pub const FILE_SET_ID: Tag = Tag(0x0004, 0x1130);
/// OffsetOfTheFirstDirectoryRecordOfTheRootDirectoryEntity (0004,1200) UL 1
#[rustfmt::skip]
pub const OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1200);
/// OffsetOfTheLastDirectoryRecordOfTheRootDirectoryEntity (0004,1202) UL 1
#[rustfmt::skip]
pub const OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1202);
/// FileSetConsistencyFlag (0004,1212) US 1
#[rustfmt::skip]
pub const FILE_SET_CONSISTENCY_FLAG: Tag = Tag(0x0004, 0x1212);
/// DirectoryRecordSequence (0004,1220) SQ 1
#[rustfmt::skip]
pub const DIRECTORY_RECORD_SEQUENCE: Tag = Tag(0x0004, 0x1220);
/// OffsetOfTheNextDirectoryRecord (0004,1400) UL 1
#[rustfmt::skip]
pub const OFFSET_OF_THE_NEXT_DIRECTORY_RECORD: Tag = Tag(0x0004, 0x1400);
/// RecordInUseFlag (0004,1410) US 1
#[rustfmt::skip]
pub const RECORD_IN_USE_FLAG: Tag = Tag(0x0004, 0x1410);
/// OffsetOfReferencedLowerLevelDirectoryEntity (0004,1420) UL 1
#[rustfmt::skip]
pub const OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1420);
/// DirectoryRecordType (0004,1430) CS 1
#[rustfmt::skip]
pub const DIRECTORY_RECORD_TYPE: Tag = Tag(0x0004, 0x1430);
/// ReferencedFileID (0004,1500) CS 1-8
#[rustfmt::skip]
pub const REFERENCED_FILE_ID: Tag = Tag(0x0004, 0x1500);
/// ReferencedSOPClassUIDInFile (0004,1510) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x1510);
/// ReferencedSOPInstanceUIDInFile (0004,1511) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID_IN_FILE: Tag = Tag(0x0004, 0x1511);
/// ReferencedTransferSyntaxUIDInFile (0004,1512) UI 1
#[rustfmt::skip]
pub const REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE: Tag = Tag(0x0004, 0x1512);
/// SpecificCharacterSet (0008,0005) CS 1-n
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008) CS 2-n
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012) DA 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// SOPClassUID (0008,0016) UI 1
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI 1
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020) DA 1
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA 1
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA 1
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA 1
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// AcquisitionDateTime (0008,002A) DT 1
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime (0008,0030) TM 1
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM 1
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM 1
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033) TM 1
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber (0008,0050) SH 1
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// QueryRetrieveLevel (0008,0052) CS 1
#[rustfmt::skip]
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// Modality (0008,0060) CS 1
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ModalitiesInStudy (0008,0061) CS 1-n
#[rustfmt::skip]
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// Manufacturer (0008,0070) LO 1
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO 1
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// ReferringPhysicianName (0008,0090) PN 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// CodeValue (0008,0100) SH 1
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102) SH 1
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodeMeaning (0008,0104) LO 1
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// StudyDescription (0008,1030) LO 1
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// SeriesDescription (0008,103E) LO 1
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// ReferencedStudySequence (0008,1110) SQ 1
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedSeriesSequence (0008,1115) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedImageSequence (0008,1140) SQ 1
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedSOPClassUID (0008,1150) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// RetrieveURL (0008,1190) UR 1
#[rustfmt::skip]
pub const RETRIEVE_URL: Tag = Tag(0x0008, 0x1190);
/// AnatomicRegionSequence (0008,2218) SQ 1
#[rustfmt::skip]
pub const ANATOMIC_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2218);
/// PatientName (0010,0010) PN 1
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO 1
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// PatientBirthDate (0010,0030) DA 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientBirthTime (0010,0032) TM 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// PatientSex (0010,0040) CS 1
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// PatientAge (0010,1010) AS 1
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS 1
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight (0010,1030) DS 1
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// EthnicGroup (0010,2160) SH 1
#[rustfmt::skip]
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// PatientComments (0010,4000) LT 1
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// BodyPartExamined (0018,0015) CS 1
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// SliceThickness (0018,0050) DS 1
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// SpacingBetweenSlices (0018,0088) DS 1
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// SoftwareVersions (0018,1020) LO 1-n
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// StudyInstanceUID (0020,000D) UI 1
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI 1
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH 1
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS 1
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// InstanceNumber (0020,0013) IS 1
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation (0020,0020) CS 2
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// ImagePositionPatient (0020,0032) DS 3
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS 6
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID (0020,0052) UI 1
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// SliceLocation (0020,1041) DS 1
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// ImageComments (0020,4000) LT 1
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// SamplesPerPixel (0028,0002) US 1
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS 1
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006) US 1
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// FrameIncrementPointer (0028,0009) AT 1-n
#[rustfmt::skip]
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Rows (0028,0010) US 1
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US 1
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS 2
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// BitsAllocated (0028,0100) US 1
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US 1
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US 1
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US 1
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue (0028,0106) US 1
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) US 1
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// WindowCenter (0028,1050) DS 1-n
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS 1-n
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS 1
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS 1
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RedPaletteColorLookupTableData (0028,1201) OW 1
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// LossyImageCompression (0028,2110) CS 1
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// ScheduledProcedureStepSequence (0040,0100) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0100);
/// ScheduledProcedureStepStartDate (0040,0002) DA 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0002);
/// ScheduledProcedureStepStartTime (0040,0003) TM 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0003);
/// ContentSequence (0040,A730) SQ 1
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// NumberOfSlices (0054,0081) US 1
#[rustfmt::skip]
pub const NUMBER_OF_SLICES: Tag = Tag(0x0054, 0x0081);
/// FloatPixelData (7FE0,0008) OF 1
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// DoubleFloatPixelData (7FE0,0009) OD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// PixelData (7FE0,0010) OW 1
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// OverlayData (60xx,3000) OW 1
#[rustfmt::skip]
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// DigitalSignaturesSequence (FFFA,FFFA) SQ 1
#[rustfmt::skip]
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// DataSetTrailingPadding (FFFC,FFFC) OB 1
#[rustfmt::skip]
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);
/// Item (FFFE,E000)
pub const ITEM: Tag = Tag::ITEM;
/// Item Delimitation Item (FFFE,E00D)
pub const ITEM_DELIMITATION_ITEM: Tag = Tag::ITEM_DELIMITER;
/// Sequence Delimitation Item (FFFE,E0DD)
pub const SEQUENCE_DELIMITATION_ITEM: Tag = Tag::SEQUENCE_DELIMITER;

type E = DictionaryEntry;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E::new(FILE_META_INFORMATION_GROUP_LENGTH, "FileMetaInformationGroupLength", VR::UL, VmRange::exactly(1)),
    E::new(FILE_META_INFORMATION_VERSION, "FileMetaInformationVersion", VR::OB, VmRange::exactly(1)),
    E::new(MEDIA_STORAGE_SOP_CLASS_UID, "MediaStorageSOPClassUID", VR::UI, VmRange::exactly(1)),
    E::new(MEDIA_STORAGE_SOP_INSTANCE_UID, "MediaStorageSOPInstanceUID", VR::UI, VmRange::exactly(1)),
    E::new(TRANSFER_SYNTAX_UID, "TransferSyntaxUID", VR::UI, VmRange::exactly(1)),
    E::new(IMPLEMENTATION_CLASS_UID, "ImplementationClassUID", VR::UI, VmRange::exactly(1)),
    E::new(IMPLEMENTATION_VERSION_NAME, "ImplementationVersionName", VR::SH, VmRange::exactly(1)),
    E::new(SOURCE_APPLICATION_ENTITY_TITLE, "SourceApplicationEntityTitle", VR::AE, VmRange::exactly(1)),
    E::new(SENDING_APPLICATION_ENTITY_TITLE, "SendingApplicationEntityTitle", VR::AE, VmRange::exactly(1)),
    E::new(RECEIVING_APPLICATION_ENTITY_TITLE, "ReceivingApplicationEntityTitle", VR::AE, VmRange::exactly(1)),
    E::new(PRIVATE_INFORMATION_CREATOR_UID, "PrivateInformationCreatorUID", VR::UI, VmRange::exactly(1)),
    E::new(PRIVATE_INFORMATION, "PrivateInformation", VR::OB, VmRange::exactly(1)),
    E::new(FILE_SET_ID, "FileSetID", VR::CS, VmRange::exactly(1)),
    E::new(OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY, "OffsetOfTheFirstDirectoryRecordOfTheRootDirectoryEntity", VR::UL, VmRange::exactly(1)),
    E::new(OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY, "OffsetOfTheLastDirectoryRecordOfTheRootDirectoryEntity", VR::UL, VmRange::exactly(1)),
    E::new(FILE_SET_CONSISTENCY_FLAG, "FileSetConsistencyFlag", VR::US, VmRange::exactly(1)),
    E::new(DIRECTORY_RECORD_SEQUENCE, "DirectoryRecordSequence", VR::SQ, VmRange::exactly(1)),
    E::new(OFFSET_OF_THE_NEXT_DIRECTORY_RECORD, "OffsetOfTheNextDirectoryRecord", VR::UL, VmRange::exactly(1)),
    E::new(RECORD_IN_USE_FLAG, "RecordInUseFlag", VR::US, VmRange::exactly(1)),
    E::new(OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY, "OffsetOfReferencedLowerLevelDirectoryEntity", VR::UL, VmRange::exactly(1)),
    E::new(DIRECTORY_RECORD_TYPE, "DirectoryRecordType", VR::CS, VmRange::exactly(1)),
    E::new(REFERENCED_FILE_ID, "ReferencedFileID", VR::CS, VmRange::between(1, 8)),
    E::new(REFERENCED_SOP_CLASS_UID_IN_FILE, "ReferencedSOPClassUIDInFile", VR::UI, VmRange::exactly(1)),
    E::new(REFERENCED_SOP_INSTANCE_UID_IN_FILE, "ReferencedSOPInstanceUIDInFile", VR::UI, VmRange::exactly(1)),
    E::new(REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE, "ReferencedTransferSyntaxUIDInFile", VR::UI, VmRange::exactly(1)),
    E::new(SPECIFIC_CHARACTER_SET, "SpecificCharacterSet", VR::CS, VmRange::unbounded(1, 1)),
    E::new(IMAGE_TYPE, "ImageType", VR::CS, VmRange::unbounded(2, 1)),
    E::new(INSTANCE_CREATION_DATE, "InstanceCreationDate", VR::DA, VmRange::exactly(1)),
    E::new(INSTANCE_CREATION_TIME, "InstanceCreationTime", VR::TM, VmRange::exactly(1)),
    E::new(SOP_CLASS_UID, "SOPClassUID", VR::UI, VmRange::exactly(1)),
    E::new(SOP_INSTANCE_UID, "SOPInstanceUID", VR::UI, VmRange::exactly(1)),
    E::new(STUDY_DATE, "StudyDate", VR::DA, VmRange::exactly(1)),
    E::new(SERIES_DATE, "SeriesDate", VR::DA, VmRange::exactly(1)),
    E::new(ACQUISITION_DATE, "AcquisitionDate", VR::DA, VmRange::exactly(1)),
    E::new(CONTENT_DATE, "ContentDate", VR::DA, VmRange::exactly(1)),
    E::new(ACQUISITION_DATE_TIME, "AcquisitionDateTime", VR::DT, VmRange::exactly(1)),
    E::new(STUDY_TIME, "StudyTime", VR::TM, VmRange::exactly(1)),
    E::new(SERIES_TIME, "SeriesTime", VR::TM, VmRange::exactly(1)),
    E::new(ACQUISITION_TIME, "AcquisitionTime", VR::TM, VmRange::exactly(1)),
    E::new(CONTENT_TIME, "ContentTime", VR::TM, VmRange::exactly(1)),
    E::new(ACCESSION_NUMBER, "AccessionNumber", VR::SH, VmRange::exactly(1)),
    E::new(QUERY_RETRIEVE_LEVEL, "QueryRetrieveLevel", VR::CS, VmRange::exactly(1)),
    E::new(MODALITY, "Modality", VR::CS, VmRange::exactly(1)),
    E::new(MODALITIES_IN_STUDY, "ModalitiesInStudy", VR::CS, VmRange::unbounded(1, 1)),
    E::new(MANUFACTURER, "Manufacturer", VR::LO, VmRange::exactly(1)),
    E::new(INSTITUTION_NAME, "InstitutionName", VR::LO, VmRange::exactly(1)),
    E::new(REFERRING_PHYSICIAN_NAME, "ReferringPhysicianName", VR::PN, VmRange::exactly(1)),
    E::new(CODE_VALUE, "CodeValue", VR::SH, VmRange::exactly(1)),
    E::new(CODING_SCHEME_DESIGNATOR, "CodingSchemeDesignator", VR::SH, VmRange::exactly(1)),
    E::new(CODE_MEANING, "CodeMeaning", VR::LO, VmRange::exactly(1)),
    E::new(STUDY_DESCRIPTION, "StudyDescription", VR::LO, VmRange::exactly(1)),
    E::new(SERIES_DESCRIPTION, "SeriesDescription", VR::LO, VmRange::exactly(1)),
    E::new(REFERENCED_STUDY_SEQUENCE, "ReferencedStudySequence", VR::SQ, VmRange::exactly(1)),
    E::new(REFERENCED_SERIES_SEQUENCE, "ReferencedSeriesSequence", VR::SQ, VmRange::exactly(1)),
    E::new(REFERENCED_IMAGE_SEQUENCE, "ReferencedImageSequence", VR::SQ, VmRange::exactly(1)),
    E::new(REFERENCED_SOP_CLASS_UID, "ReferencedSOPClassUID", VR::UI, VmRange::exactly(1)),
    E::new(REFERENCED_SOP_INSTANCE_UID, "ReferencedSOPInstanceUID", VR::UI, VmRange::exactly(1)),
    E::new(RETRIEVE_URL, "RetrieveURL", VR::UR, VmRange::exactly(1)),
    E::new(ANATOMIC_REGION_SEQUENCE, "AnatomicRegionSequence", VR::SQ, VmRange::exactly(1)),
    E::new(PATIENT_NAME, "PatientName", VR::PN, VmRange::exactly(1)),
    E::new(PATIENT_ID, "PatientID", VR::LO, VmRange::exactly(1)),
    E::new(PATIENT_BIRTH_DATE, "PatientBirthDate", VR::DA, VmRange::exactly(1)),
    E::new(PATIENT_BIRTH_TIME, "PatientBirthTime", VR::TM, VmRange::exactly(1)),
    E::new(PATIENT_SEX, "PatientSex", VR::CS, VmRange::exactly(1)),
    E::new(PATIENT_AGE, "PatientAge", VR::AS, VmRange::exactly(1)),
    E::new(PATIENT_SIZE, "PatientSize", VR::DS, VmRange::exactly(1)),
    E::new(PATIENT_WEIGHT, "PatientWeight", VR::DS, VmRange::exactly(1)),
    E::new(ETHNIC_GROUP, "EthnicGroup", VR::SH, VmRange::exactly(1)),
    E::new(PATIENT_COMMENTS, "PatientComments", VR::LT, VmRange::exactly(1)),
    E::new(BODY_PART_EXAMINED, "BodyPartExamined", VR::CS, VmRange::exactly(1)),
    E::new(SLICE_THICKNESS, "SliceThickness", VR::DS, VmRange::exactly(1)),
    E::new(SPACING_BETWEEN_SLICES, "SpacingBetweenSlices", VR::DS, VmRange::exactly(1)),
    E::new(SOFTWARE_VERSIONS, "SoftwareVersions", VR::LO, VmRange::unbounded(1, 1)),
    E::new(STUDY_INSTANCE_UID, "StudyInstanceUID", VR::UI, VmRange::exactly(1)),
    E::new(SERIES_INSTANCE_UID, "SeriesInstanceUID", VR::UI, VmRange::exactly(1)),
    E::new(STUDY_ID, "StudyID", VR::SH, VmRange::exactly(1)),
    E::new(SERIES_NUMBER, "SeriesNumber", VR::IS, VmRange::exactly(1)),
    E::new(INSTANCE_NUMBER, "InstanceNumber", VR::IS, VmRange::exactly(1)),
    E::new(PATIENT_ORIENTATION, "PatientOrientation", VR::CS, VmRange::exactly(2)),
    E::new(IMAGE_POSITION_PATIENT, "ImagePositionPatient", VR::DS, VmRange::exactly(3)),
    E::new(IMAGE_ORIENTATION_PATIENT, "ImageOrientationPatient", VR::DS, VmRange::exactly(6)),
    E::new(FRAME_OF_REFERENCE_UID, "FrameOfReferenceUID", VR::UI, VmRange::exactly(1)),
    E::new(SLICE_LOCATION, "SliceLocation", VR::DS, VmRange::exactly(1)),
    E::new(IMAGE_COMMENTS, "ImageComments", VR::LT, VmRange::exactly(1)),
    E::new(SAMPLES_PER_PIXEL, "SamplesPerPixel", VR::US, VmRange::exactly(1)),
    E::new(PHOTOMETRIC_INTERPRETATION, "PhotometricInterpretation", VR::CS, VmRange::exactly(1)),
    E::new(PLANAR_CONFIGURATION, "PlanarConfiguration", VR::US, VmRange::exactly(1)),
    E::new(NUMBER_OF_FRAMES, "NumberOfFrames", VR::IS, VmRange::exactly(1)),
    E::new(FRAME_INCREMENT_POINTER, "FrameIncrementPointer", VR::AT, VmRange::unbounded(1, 1)),
    E::new(ROWS, "Rows", VR::US, VmRange::exactly(1)),
    E::new(COLUMNS, "Columns", VR::US, VmRange::exactly(1)),
    E::new(PIXEL_SPACING, "PixelSpacing", VR::DS, VmRange::exactly(2)),
    E::new(BITS_ALLOCATED, "BitsAllocated", VR::US, VmRange::exactly(1)),
    E::new(BITS_STORED, "BitsStored", VR::US, VmRange::exactly(1)),
    E::new(HIGH_BIT, "HighBit", VR::US, VmRange::exactly(1)),
    E::new(PIXEL_REPRESENTATION, "PixelRepresentation", VR::US, VmRange::exactly(1)),
    E::new(SMALLEST_IMAGE_PIXEL_VALUE, "SmallestImagePixelValue", VR::US, VmRange::exactly(1)),
    E::new(LARGEST_IMAGE_PIXEL_VALUE, "LargestImagePixelValue", VR::US, VmRange::exactly(1)),
    E::new(WINDOW_CENTER, "WindowCenter", VR::DS, VmRange::unbounded(1, 1)),
    E::new(WINDOW_WIDTH, "WindowWidth", VR::DS, VmRange::unbounded(1, 1)),
    E::new(RESCALE_INTERCEPT, "RescaleIntercept", VR::DS, VmRange::exactly(1)),
    E::new(RESCALE_SLOPE, "RescaleSlope", VR::DS, VmRange::exactly(1)),
    E::new(RED_PALETTE_COLOR_LOOKUP_TABLE_DATA, "RedPaletteColorLookupTableData", VR::OW, VmRange::exactly(1)),
    E::new(LOSSY_IMAGE_COMPRESSION, "LossyImageCompression", VR::CS, VmRange::exactly(1)),
    E::new(SCHEDULED_PROCEDURE_STEP_SEQUENCE, "ScheduledProcedureStepSequence", VR::SQ, VmRange::exactly(1)),
    E::new(SCHEDULED_PROCEDURE_STEP_START_DATE, "ScheduledProcedureStepStartDate", VR::DA, VmRange::exactly(1)),
    E::new(SCHEDULED_PROCEDURE_STEP_START_TIME, "ScheduledProcedureStepStartTime", VR::TM, VmRange::exactly(1)),
    E::new(CONTENT_SEQUENCE, "ContentSequence", VR::SQ, VmRange::exactly(1)),
    E::new(NUMBER_OF_SLICES, "NumberOfSlices", VR::US, VmRange::exactly(1)),
    E::new(FLOAT_PIXEL_DATA, "FloatPixelData", VR::OF, VmRange::exactly(1)),
    E::new(DOUBLE_FLOAT_PIXEL_DATA, "DoubleFloatPixelData", VR::OD, VmRange::exactly(1)),
    E::new(PIXEL_DATA, "PixelData", VR::OW, VmRange::exactly(1)),
    E { tag: Group100(OVERLAY_DATA), alias: "OverlayData", vr: VR::OW, vm: VmRange::exactly(1) },
    E::new(DIGITAL_SIGNATURES_SEQUENCE, "DigitalSignaturesSequence", VR::SQ, VmRange::exactly(1)),
    E::new(DATA_SET_TRAILING_PADDING, "DataSetTrailingPadding", VR::OB, VmRange::exactly(1)),
];
