//! Comprehensive tests for domain_national_id
//!
//! Tests cover format validation, field validation, info extraction, the
//! response envelope, and codec behaviour with injected tables and clocks.

use chrono::{Days, NaiveDate};
use core_kernel::{CalendarError, Clock, SystemClock};

use domain_national_id::{Gender, NationalIdCodec, NationalIdError, NationalIdResponse};
use test_utils::{
    assert_birth_date, assert_invalid_with, assert_only_format_errors, assert_valid,
    ClockFixtures, CodecFixtures, IdFixtures, NationalIdBuilder, TableFixtures,
};

// ============================================================================
// Format Validation
// ============================================================================

mod format_tests {
    use super::*;

    #[test]
    fn test_too_short() {
        let codec = CodecFixtures::reference();
        let result = codec.validate(IdFixtures::too_short());

        assert_invalid_with(&result, "must be exactly 14 digits (got 9)");
        assert_eq!(result.errors, vec![NationalIdError::InvalidLength { got: 9 }]);
        assert!(codec.extract_info(IdFixtures::too_short()).is_none());
    }

    #[test]
    fn test_non_numeric() {
        let codec = CodecFixtures::reference();
        let result = codec.validate(IdFixtures::non_numeric());

        assert_invalid_with(&result, "only digits");
        assert_eq!(result.errors, vec![NationalIdError::NonDigit]);
    }

    #[test]
    fn test_non_numeric_and_wrong_length() {
        let codec = CodecFixtures::reference();
        let result = codec.validate("abc");

        assert_eq!(
            result.messages().unwrap(),
            vec![
                "National ID must contain only digits".to_string(),
                "National ID must be exactly 14 digits (got 3)".to_string(),
            ]
        );
    }

    #[test]
    fn test_format_error_short_circuits_field_checks() {
        // Century 1 and governorate 99, but one digit too many
        let codec = CodecFixtures::reference();
        let result = codec.validate("198010199018910");

        assert_only_format_errors(&result);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_empty_and_blank_input() {
        let codec = CodecFixtures::reference();
        for raw in ["", "   ", "\t\n"] {
            let result = codec.validate(raw);
            assert_eq!(
                result.errors,
                vec![NationalIdError::NonDigit, NationalIdError::InvalidLength { got: 0 }]
            );
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let codec = CodecFixtures::reference();
        let raw = format!("  {}\n", IdFixtures::valid_male_1998());

        assert_valid(&codec.validate(&raw));
        let record = codec.extract_info(&raw).unwrap();
        assert_eq!(record.national_id, IdFixtures::valid_male_1998());
    }

    #[test]
    fn test_inner_whitespace_is_rejected() {
        let codec = CodecFixtures::reference();
        let result = codec.validate("2980101 1401891");
        assert_invalid_with(&result, "only digits");
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        let codec = CodecFixtures::reference();
        // Arabic-Indic digits
        let result = codec.validate("٢٩٨٠١٠١١٤٠١٨٩١");
        assert_eq!(result.errors, vec![NationalIdError::NonDigit]);
    }
}

// ============================================================================
// Field Validation
// ============================================================================

mod field_tests {
    use super::*;

    #[test]
    fn test_valid_centuries() {
        let codec = CodecFixtures::reference();
        for (id, label) in [
            ("21801011401891", "20th century (1900-1999)"),
            ("31801011401891", "21st century (2000+)"),
        ] {
            assert_valid(&codec.validate(id));
            assert_eq!(codec.extract_info(id).unwrap().century, label);
        }
    }

    #[test]
    fn test_invalid_century() {
        let codec = CodecFixtures::reference();
        let result = codec.validate(IdFixtures::invalid_century());

        assert_invalid_with(&result, "Invalid century digit: 1 (must be 2 or 3)");
        assert_eq!(result.errors[0], NationalIdError::InvalidCentury { digit: '1' });
    }

    #[test]
    fn test_invalid_century_always_rejected() {
        let codec = CodecFixtures::reference();
        for digit in ['0', '1', '4', '5', '6', '7', '8', '9'] {
            let id = NationalIdBuilder::new().with_century_digit(digit).with_year(0).build();
            let result = codec.validate(&id);
            assert!(!result.is_valid, "century digit {} accepted", digit);
            assert_eq!(result.errors[0], NationalIdError::InvalidCentury { digit });
        }
    }

    #[test]
    fn test_invalid_century_still_checks_date_speculatively() {
        // Digit 1 is read as the 2000s, so year 98 lands in 2098
        let codec = CodecFixtures::reference();
        let result = codec.validate(IdFixtures::invalid_century());

        assert_eq!(
            result.errors,
            vec![
                NationalIdError::InvalidCentury { digit: '1' },
                NationalIdError::FutureBirthDate {
                    date: NaiveDate::from_ymd_opt(2098, 1, 1).unwrap()
                },
            ]
        );
    }

    #[test]
    fn test_invalid_month() {
        let codec = CodecFixtures::reference();
        let result = codec.validate(IdFixtures::invalid_month());

        assert_invalid_with(&result, "Invalid date of birth");
        assert_eq!(
            result.messages().unwrap(),
            vec!["Invalid date of birth: month must be in 1..12".to_string()]
        );
    }

    #[test]
    fn test_invalid_day() {
        let codec = CodecFixtures::reference();
        let result = codec.validate(IdFixtures::invalid_day());

        assert_eq!(
            result.errors,
            vec![NationalIdError::InvalidDate(CalendarError::DayOutOfRange)]
        );
        assert_eq!(
            result.errors[0].to_string(),
            "Invalid date of birth: day is out of range for month"
        );
    }

    #[test]
    fn test_leap_years() {
        let codec = CodecFixtures::reference();
        let leap_2000 = NationalIdBuilder::new().with_century_digit('3').with_year(0).with_month(2).with_day(29).build();
        let leap_1996 = NationalIdBuilder::new().with_year(96).with_month(2).with_day(29).build();
        let not_leap_1900 = NationalIdBuilder::new().with_year(0).with_month(2).with_day(29).build();
        let not_leap_1999 = NationalIdBuilder::new().with_year(99).with_month(2).with_day(29).build();

        assert_valid(&codec.validate(&leap_2000));
        assert_valid(&codec.validate(&leap_1996));
        assert_invalid_with(&codec.validate(&not_leap_1900), "day is out of range for month");
        assert_invalid_with(&codec.validate(&not_leap_1999), "day is out of range for month");
    }

    #[test]
    fn test_unknown_governorate() {
        let codec = CodecFixtures::reference();
        let result = codec.validate(IdFixtures::unknown_governorate());

        assert_invalid_with(&result, "Invalid governorate code: 99");
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_future_birth_date() {
        let today = ClockFixtures::reference_date();
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap();
        let codec = CodecFixtures::at(today);
        let id = NationalIdBuilder::new().with_birth_date(tomorrow).build();

        let result = codec.validate(&id);
        assert_invalid_with(&result, "Birth date cannot be in the future");
        assert_eq!(
            result.messages().unwrap(),
            vec!["Birth date cannot be in the future: 2024-06-16".to_string()]
        );
        assert!(codec.extract_info(&id).is_none());
    }

    #[test]
    fn test_future_birth_date_with_system_clock() {
        let codec = NationalIdCodec::new(TableFixtures::bundled(), SystemClock::default());
        let tomorrow = codec.clock().today().checked_add_days(Days::new(1)).unwrap();
        let id = NationalIdBuilder::new().with_birth_date(tomorrow).build();

        assert_invalid_with(&codec.validate(&id), "Birth date cannot be in the future");
        assert!(codec.extract_info(&id).is_none());
    }

    #[test]
    fn test_born_today_is_valid() {
        let today = ClockFixtures::reference_date();
        let codec = CodecFixtures::at(today);
        let id = NationalIdBuilder::new().with_birth_date(today).build();

        assert_valid(&codec.validate(&id));
        assert_eq!(codec.extract_info(&id).unwrap().age, 0);
    }

    #[test]
    fn test_all_field_errors_reported_together() {
        let codec = CodecFixtures::reference();
        let id = NationalIdBuilder::new()
            .with_century_digit('9')
            .with_month(0)
            .with_governorate("99")
            .build();

        let result = codec.validate(&id);
        assert_eq!(
            result.errors,
            vec![
                NationalIdError::InvalidCentury { digit: '9' },
                NationalIdError::InvalidDate(CalendarError::MonthOutOfRange),
                NationalIdError::UnknownGovernorate { code: "99".to_string() },
            ]
        );
        assert!(result.errors.iter().all(|e| !e.is_format_error()));
    }

    #[test]
    fn test_check_digit_is_not_verified() {
        let codec = CodecFixtures::reference();
        for check in 0..10 {
            let id = NationalIdBuilder::new().with_check_digit(check).build();
            assert_valid(&codec.validate(&id));
        }
    }
}

// ============================================================================
// Info Extraction
// ============================================================================

mod extraction_tests {
    use super::*;

    #[test]
    fn test_valid_id_male_20th_century() {
        let codec = CodecFixtures::reference();
        let record = codec.extract_info(IdFixtures::valid_male_1998()).unwrap();

        assert_eq!(record.national_id, "29801011401891");
        assert!(record.is_valid);
        assert_birth_date(&record, 1998, 1, 1);
        assert_eq!(record.century, "20th century (1900-1999)");
        assert_eq!(record.gender, Gender::Male);
        assert_eq!(record.governorate.code, "14");
        assert_eq!(record.governorate.name_english, "Qalyubia");
        assert_eq!(record.governorate.name_arabic, "القليوبية");
        assert_eq!(record.generation.name, "Generation Z");
        assert_eq!(record.generation.year_range, "1997-2012");
        assert_eq!(record.serial_number, "0189");
        assert_eq!(record.age, 26);
    }

    #[test]
    fn test_valid_date_21st_century() {
        let codec = CodecFixtures::reference();
        let record = codec.extract_info(IdFixtures::valid_2018()).unwrap();

        assert_birth_date(&record, 2018, 11, 21);
        assert_eq!(record.century, "21st century (2000+)");
        assert_eq!(record.age, 5);
    }

    #[test]
    fn test_gender_over_all_digits() {
        let codec = CodecFixtures::reference();
        for digit in 0..10 {
            let id = NationalIdBuilder::new().with_gender_digit(digit).build();
            let record = codec.extract_info(&id).unwrap();
            let expected = if digit % 2 == 1 { "Male" } else { "Female" };
            assert_eq!(record.gender.as_str(), expected, "gender digit {}", digit);
        }
    }

    #[test]
    fn test_female_fixture() {
        let codec = CodecFixtures::reference();
        let record = codec.extract_info(IdFixtures::valid_female_2018()).unwrap();
        assert_eq!(record.gender, Gender::Female);
    }

    #[test]
    fn test_serial_keeps_leading_zeros() {
        let codec = CodecFixtures::reference();
        let id = NationalIdBuilder::new().with_serial_prefix(0).with_gender_digit(2).build();
        assert_eq!(codec.extract_info(&id).unwrap().serial_number, "0002");
    }

    #[test]
    fn test_generation_extraction() {
        let codec = CodecFixtures::reference();
        let cases = [
            ("29001011401891", "Millennials (Gen Y)", "1981-1996"),
            ("29801011401891", "Generation Z", "1997-2012"),
            ("30001011401891", "Generation Z", "1997-2012"),
            ("31501011401891", "Generation Alpha", "2013-2025"),
        ];
        for (id, name, range) in cases {
            let record = codec.extract_info(id).unwrap();
            assert_eq!(record.generation.name, name, "{}", id);
            assert_eq!(record.generation.year_range, range, "{}", id);
        }
    }

    #[test]
    fn test_generation_unknown_outside_table() {
        // 1900 predates the first bundled generation
        let codec = CodecFixtures::reference();
        let record = codec.extract_info("20001011401891").unwrap();

        assert_eq!(record.generation.name, "Unknown");
        assert_eq!(record.generation.year_range, "N/A");
    }

    #[test]
    fn test_age_thirty_years_ago_today() {
        let today = ClockFixtures::reference_date();
        let birth = NaiveDate::from_ymd_opt(1994, 6, 15).unwrap();
        let codec = CodecFixtures::at(today);
        let id = NationalIdBuilder::new().with_birth_date(birth).build();

        assert_eq!(codec.extract_info(&id).unwrap().age, 30);
    }

    #[test]
    fn test_age_day_before_birthday() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let birth = NaiveDate::from_ymd_opt(1994, 6, 15).unwrap();
        let codec = CodecFixtures::at(today);
        let id = NationalIdBuilder::new().with_birth_date(birth).build();

        assert_eq!(codec.extract_info(&id).unwrap().age, 29);
    }

    #[test]
    fn test_extract_info_on_explicit_date() {
        let codec = CodecFixtures::reference();
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let record = codec.extract_info_on(IdFixtures::valid_male_1998(), today).unwrap();
        assert_eq!(record.age, 32);
    }

    #[test]
    fn test_invalid_ids_extract_nothing() {
        let codec = CodecFixtures::reference();
        for id in [
            IdFixtures::invalid_century(),
            IdFixtures::invalid_month(),
            IdFixtures::invalid_day(),
            IdFixtures::unknown_governorate(),
            IdFixtures::too_short(),
            IdFixtures::non_numeric(),
        ] {
            assert!(codec.extract_info(id).is_none(), "{} decoded", id);
        }
    }

    #[test]
    fn test_record_json_shape() {
        let codec = CodecFixtures::reference();
        let record = codec.extract_info(IdFixtures::valid_male_1998()).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "national_id": "29801011401891",
                "is_valid": true,
                "birth_date": "1998-01-01",
                "birth_year": 1998,
                "birth_month": 1,
                "birth_day": 1,
                "age": 26,
                "century": "20th century (1900-1999)",
                "generation": { "name": "Generation Z", "year_range": "1997-2012" },
                "governorate": {
                    "code": "14",
                    "name_english": "Qalyubia",
                    "name_arabic": "القليوبية"
                },
                "gender": "Male",
                "serial_number": "0189"
            })
        );
    }
}

// ============================================================================
// Response Envelope
// ============================================================================

mod response_tests {
    use super::*;

    #[test]
    fn test_check_valid() {
        let codec = CodecFixtures::reference();
        let response = codec.check(IdFixtures::valid_male_1998());

        assert!(response.is_valid());
        assert_eq!(response.national_id(), "29801011401891");
        assert!(response.errors().is_empty());
        assert_eq!(response.record().unwrap().birth_year, 1998);
    }

    #[test]
    fn test_check_invalid_json_shape() {
        let codec = CodecFixtures::reference();
        let response = codec.check(" 29801019901891 ");

        assert!(matches!(response, NationalIdResponse::Invalid { .. }));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "national_id": "29801019901891",
                "is_valid": false,
                "errors": ["Invalid governorate code: 99"]
            })
        );
    }
}

// ============================================================================
// Injected Tables
// ============================================================================

mod injected_table_tests {
    use super::*;

    #[test]
    fn test_synthetic_governorates_limit_accepted_codes() {
        let codec = CodecFixtures::synthetic();

        assert_valid(&codec.validate("29801010101891"));
        // Giza exists in the bundled table but not in the synthetic one
        assert_invalid_with(&codec.validate("29801012101891"), "Invalid governorate code: 21");
    }

    #[test]
    fn test_first_matching_generation_wins() {
        let codec = CodecFixtures::synthetic();

        // 1998 is inside both synthetic ranges
        let record = codec.extract_info("29801010101891").unwrap();
        assert_eq!(record.generation.name, "Early Cohort");
        assert_eq!(record.generation.year_range, "1990-2000");

        let record = codec.extract_info("30501010101891").unwrap();
        assert_eq!(record.generation.name, "Late Cohort");

        let record = codec.extract_info("28001010101891").unwrap();
        assert_eq!(record.generation.name, "Unknown");
    }

    #[test]
    fn test_codec_shared_across_threads() {
        let codec = std::sync::Arc::new(CodecFixtures::reference());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let codec = std::sync::Arc::clone(&codec);
                std::thread::spawn(move || codec.extract_info(IdFixtures::valid_male_1998()))
            })
            .collect();

        for handle in handles {
            let record = handle.join().unwrap().unwrap();
            assert_eq!(record.governorate.code, "14");
        }
    }
}
