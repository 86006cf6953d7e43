use super::*;
use std::io;

#[test]
fn test_capture_passes_value_through() {
    let result = capture(|| Ok::<_, io::Error>(42));
    assert!(matches!(result, Ok(42)));
}

#[test]
fn test_capture_converts_returned_error() {
    let result: Result<i32, Fault> = capture(|| Err("boom"));

    let fault = result.unwrap_err();
    assert!(matches!(fault, Fault::Raised(_)));
    assert_eq!(fault.message(), "boom");
    assert_eq!(fault.to_string(), "boom");
    assert!(!fault.is_panic());
}

#[test]
fn test_capture_converts_panic_with_str_payload() {
    let result: Result<i32, Fault> = capture(|| -> Result<i32, io::Error> {
        panic!("something went wrong!");
    });

    let fault = result.unwrap_err();
    assert!(fault.is_panic());
    assert_eq!(fault.message(), "something went wrong!");
    assert_eq!(fault.to_string(), "panicked: something went wrong!");
}

#[test]
fn test_capture_converts_panic_with_formatted_payload() {
    let limit = 3;
    let result: Result<(), Fault> = capture(|| -> Result<(), io::Error> {
        panic!("index {} out of range", limit);
    });

    assert_eq!(result.unwrap_err().message(), "index 3 out of range");
}

#[test]
fn test_capture_keeps_concrete_error_type() {
    let result: Result<(), Fault> = capture(|| {
        Err(io::Error::new(io::ErrorKind::InvalidInput, "bad argument"))
    });

    let fault = result.unwrap_err();
    let io_err = fault.downcast_ref::<io::Error>().expect("io::Error source");
    assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    assert!(fault.downcast_ref::<std::fmt::Error>().is_none());
}

#[test]
fn test_fault_from_anyhow() {
    let fault: Fault = anyhow::anyhow!("context lost").into();
    assert_eq!(fault.message(), "context lost");
}

#[test]
fn test_panicked_fault_has_no_downcast() {
    let fault = Fault::Panicked("oops".to_string());
    assert!(fault.downcast_ref::<io::Error>().is_none());
}

#[test]
fn test_raised_constructor_accepts_strings() {
    let fault = Fault::raised(format!("code {}", 7));
    assert_eq!(fault.message(), "code 7");
    assert!(!fault.is_panic());
}
