use anyhow::Result;
use scorm_duration::{compare, parse, validate, DurationValidator, ErrorCode, TypeValidator};
use std::sync::Arc;

const CASES: [(&str, ErrorCode); 6] = [
    ("P1D", ErrorCode::NoError),
    ("PT1.5S", ErrorCode::NoError),
    ("P1Y2M3DT4H5M6S", ErrorCode::NoError),
    ("P", ErrorCode::TypeMismatch),
    ("PT", ErrorCode::TypeMismatch),
    ("PXY", ErrorCode::TypeMismatch),
];

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_validation() -> Result<()> {
    let validator: Arc<dyn TypeValidator> = Arc::new(DurationValidator::new());

    let mut handles = vec![];
    for i in 0..64 {
        let validator = validator.clone();
        let handle = tokio::spawn(async move {
            let (value, _) = CASES[i % CASES.len()];
            (i, validator.validate(Some(value)))
        });
        handles.push(handle);
    }

    for handle in handles {
        let (i, code) = handle.await?;
        let (value, expected) = CASES[i % CASES.len()];
        assert_eq!(code, expected, "Validation of {} in task {} changed", value, i);
    }

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_comparison() -> Result<()> {
    let mut handles = vec![];

    for hours in 0..48u64 {
        let handle = tokio::task::spawn_blocking(move || {
            let first = format!("PT{hours}H");
            let second = format!("PT{}M", hours * 60);
            compare(Some(first.as_str()), Some(second.as_str()), None)
        });
        handles.push(handle);
    }

    for handle in handles {
        assert!(handle.await?);
    }

    Ok(())
}

#[test]
fn test_threads_share_one_validator() {
    let validator = DurationValidator::new();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for (value, expected) in CASES {
                    assert_eq!(validator.validate(Some(value)), expected);
                    assert_eq!(validate(Some(value)), expected);
                }
                assert_eq!(parse("P1M"), Some(2_628_029.0));
            });
        }
    });
}
