//! Egyptian National ID Domain
//!
//! This crate validates 14-digit Egyptian National ID numbers and decodes
//! them into demographic information.
//!
//! # ID Layout
//!
//! | Digits | Field |
//! |---|---|
//! | 0 | Century (`2` = 1900s, `3` = 2000s) |
//! | 1-2 | Birth year within the century |
//! | 3-4 | Birth month |
//! | 5-6 | Birth day |
//! | 7-8 | Governorate code |
//! | 9-12 | Serial number; digit 12 is odd for males, even for females |
//! | 13 | Check digit (not verified) |
//!
//! # Pipeline
//!
//! - **Format**: digits only, exactly 14 of them. Failure stops here.
//! - **Fields**: century, birth date, governorate. All errors are collected.
//! - **Extract**: a valid ID is decoded into a [`DecodedRecord`].
//!
//! # Examples
//!
//! ```rust
//! use domain_national_id::NationalIdCodec;
//!
//! let codec = NationalIdCodec::bundled().unwrap();
//!
//! let result = codec.validate("29801019901891");
//! assert!(!result.is_valid);
//! assert_eq!(
//!     result.messages().unwrap(),
//!     vec!["Invalid governorate code: 99".to_string()]
//! );
//!
//! let record = codec.extract_info("29801011401891").unwrap();
//! assert_eq!(record.gender.as_str(), "Male");
//! assert_eq!(record.generation.name, "Generation Z");
//! ```

pub mod codec;
pub mod error;
pub mod fields;
pub mod layout;
pub mod record;
pub mod reference;
pub mod validation;

pub use codec::{mask, NationalIdCodec};
pub use error::{ErrorCategory, NationalIdError, ReferenceDataError};
pub use fields::{Century, Gender, IdFields};
pub use layout::{Field, ID_LENGTH, LAYOUT};
pub use record::{DecodedRecord, GenerationInfo, GovernorateInfo, NationalIdResponse};
pub use reference::{Generation, GenerationTable, Governorate, GovernorateTable, ReferenceTables};
pub use validation::{normalize, FieldValidator, FormatValidator, ValidationResult};
