use nom::{Err, IResult, Parser, error::ErrorKind};

use crate::framing::{LineEndingMode, crlf};

#[test]
fn test_crlf_optional() {
    let cases = ["12345", "12345\r\n", "12345\n", "12345\r", "12345\r\n\r\n"];

    for input in cases {
        let res: IResult<_, _> = crlf(LineEndingMode::Optional).parse(input);
        assert!(res.is_ok(), "Failed: {input:?}");
        let (data, _) = res.unwrap();
        assert_eq!(data, "12345");
    }
}

#[test]
fn test_crlf_required() {
    let res: IResult<_, _> = crlf(LineEndingMode::Required).parse("12345\r\n");
    assert!(res.is_ok());
    let (data, _) = res.unwrap();
    assert_eq!(data, "12345");

    for input in ["12345", "12345\n", "12345\r\nabc"] {
        let res: IResult<_, _> = crlf(LineEndingMode::Required).parse(input);
        assert!(res.is_err(), "Failed: {input:?}");
        let err = res.unwrap_err();
        if let Err::Error(e) = err {
            assert_eq!(e.code, ErrorKind::CrLf);
        } else {
            panic!("Unexpected error")
        }
    }
}

#[test]
fn test_crlf_forbidden() {
    let res: IResult<_, _> = crlf(LineEndingMode::Forbidden).parse("12345");
    assert!(res.is_ok());
    let (data, _) = res.unwrap();
    assert_eq!(data, "12345");

    for input in ["12345\r\n", "12345\n", "12345\r"] {
        let res: IResult<_, _> = crlf(LineEndingMode::Forbidden).parse(input);
        assert!(res.is_err(), "Failed: {input:?}");
        let err = res.unwrap_err();
        if let Err::Error(e) = err {
            assert_eq!(e.code, ErrorKind::CrLf);
        } else {
            panic!("Unexpected error")
        }
    }
}
