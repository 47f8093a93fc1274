use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use docling_extract::application::services::{ClientInputError, IntakeError, accept};
use docling_extract::domain::{ExtractionProfile, Submission, Upload};

fn upload(name: Option<&str>, bytes: &'static [u8]) -> Option<Upload> {
    Some(Upload {
        file_name: name.map(str::to_string),
        bytes: Bytes::from_static(bytes),
    })
}

#[test]
fn given_nothing_when_accepting_then_reports_missing_content() {
    let result = accept(Submission::default(), ExtractionProfile::General);

    assert_eq!(result, Err(IntakeError::Client(ClientInputError::MissingContent)));
}

#[test]
fn given_empty_base64_when_accepting_then_reports_missing_content() {
    let submission = Submission {
        file_base64: Some(String::new()),
        ..Submission::default()
    };

    let result = accept(submission, ExtractionProfile::Invoice);

    assert_eq!(result, Err(IntakeError::Client(ClientInputError::MissingContent)));
}

#[test]
fn given_base64_of_nothing_but_whitespace_when_accepting_then_reports_empty_file() {
    let submission = Submission {
        file_base64: Some("  \n".to_string()),
        ..Submission::default()
    };

    let result = accept(submission, ExtractionProfile::General);

    assert_eq!(result, Err(IntakeError::Client(ClientInputError::EmptyContent)));
}

#[test]
fn given_empty_upload_when_accepting_then_reports_empty_file() {
    let submission = Submission {
        upload: upload(Some("a.pdf"), b""),
        ..Submission::default()
    };

    let result = accept(submission, ExtractionProfile::BankStatement);

    assert_eq!(result, Err(IntakeError::Client(ClientInputError::EmptyContent)));
}

#[test]
fn given_line_wrapped_base64_when_accepting_then_decodes() {
    let encoded = STANDARD.encode(b"hello world");
    let wrapped = format!("{}\r\n{}\n", &encoded[..8], &encoded[8..]);
    let submission = Submission {
        file_base64: Some(wrapped),
        ..Submission::default()
    };

    let request = accept(submission, ExtractionProfile::General).unwrap();

    assert_eq!(&request.content[..], b"hello world");
    assert_eq!(request.file_name, "document.pdf");
}

#[test]
fn given_unpadded_base64_when_accepting_then_reports_decode_error() {
    let submission = Submission {
        file_base64: Some("abc".to_string()),
        ..Submission::default()
    };

    let result = accept(submission, ExtractionProfile::General);

    let error = result.unwrap_err();
    assert!(matches!(error, IntakeError::Decode(_)));
    assert_eq!(error.kind(), "DecodeError");
}

#[test]
fn given_invalid_base64_alphabet_when_accepting_then_reports_decode_error() {
    let submission = Submission {
        file_base64: Some("@@@@".to_string()),
        ..Submission::default()
    };

    let result = accept(submission, ExtractionProfile::General);

    assert!(matches!(result, Err(IntakeError::Decode(_))));
}

#[test]
fn given_upload_and_base64_when_accepting_then_upload_wins() {
    let submission = Submission {
        upload: upload(Some("scan.png"), b"png"),
        file_base64: Some(STANDARD.encode(b"ignored")),
        file_name: Some("other.pdf".to_string()),
        ..Submission::default()
    };

    let request = accept(submission, ExtractionProfile::General).unwrap();

    assert_eq!(request.file_name, "scan.png");
    assert_eq!(&request.content[..], b"png");
}

#[test]
fn given_unnamed_upload_when_accepting_then_falls_back_to_file_name_field() {
    let submission = Submission {
        upload: upload(None, b"data"),
        file_name: Some("named.docx".to_string()),
        ..Submission::default()
    };

    let request = accept(submission, ExtractionProfile::General).unwrap();

    assert_eq!(request.file_name, "named.docx");
}

#[test]
fn given_no_name_when_accepting_then_uses_profile_default() {
    let submission = Submission {
        upload: upload(Some(""), b"data"),
        ..Submission::default()
    };

    let request = accept(submission, ExtractionProfile::Invoice).unwrap();

    assert_eq!(request.file_name, "invoice.pdf");
}

#[test]
fn given_options_when_accepting_for_general_then_applies_them() {
    let submission = Submission {
        upload: upload(Some("a.pdf"), b"data"),
        extract_tables: Some(false),
        extract_images: Some(true),
        ..Submission::default()
    };

    let request = accept(submission, ExtractionProfile::General).unwrap();

    assert!(!request.options.extract_tables);
    assert!(request.options.extract_images);
}

#[test]
fn given_options_when_accepting_for_bank_statement_then_ignores_them() {
    let submission = Submission {
        upload: upload(Some("a.pdf"), b"data"),
        extract_tables: Some(false),
        extract_images: Some(true),
        ..Submission::default()
    };

    let request = accept(submission, ExtractionProfile::BankStatement).unwrap();

    assert!(request.options.extract_tables);
    assert!(!request.options.extract_images);
}
