//! Batch evaluation of [`CheckCase`]s.
//!
//! Cases run concurrently on tokio's blocking pool. The validator keeps no
//! state, so the order in which cases finish has no effect on their outcome;
//! the report still lists results in input order.

use futures::future::join_all;
use serde::Serialize;
use tokio::task;

use crate::config::CheckCase;
use crate::duration::parse;
use crate::utils::logging::log_case_result;
use crate::validator::{compare, validate};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseResult {
    pub index: usize,
    pub kind: &'static str,
    pub name: Option<String>,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<CaseResult>,
}

impl CheckReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Evaluates one case synchronously.
pub fn evaluate(index: usize, case: &CheckCase) -> CaseResult {
    let (passed, expected, actual) = match case {
        CheckCase::Validate { value, expect, .. } => {
            let actual = validate(value.as_deref());
            (actual == *expect, expect.to_string(), actual.to_string())
        }
        CheckCase::Compare {
            first,
            second,
            delimiters,
            expect,
            ..
        } => {
            let actual = compare(first.as_deref(), second.as_deref(), delimiters.as_deref());
            (actual == *expect, expect.to_string(), actual.to_string())
        }
        CheckCase::Parse { value, expect, .. } => {
            let actual = parse(value);
            (actual == *expect, format_seconds(*expect), format_seconds(actual))
        }
    };

    let name = case.name().map(str::to_string);
    log_case_result(index, name.as_deref().unwrap_or("-"), case.kind(), passed, &actual, &expected);

    CaseResult {
        index,
        kind: case.kind(),
        name,
        passed,
        expected,
        actual,
    }
}

/// Evaluates every case concurrently and gathers the results in input order.
pub async fn run_cases(cases: Vec<CheckCase>) -> Result<CheckReport, anyhow::Error> {
    let handles = cases
        .into_iter()
        .enumerate()
        .map(|(index, case)| task::spawn_blocking(move || evaluate(index, &case)));

    let mut results = Vec::new();
    for joined in join_all(handles).await {
        results.push(joined?);
    }

    let passed = results.iter().filter(|r| r.passed).count();
    Ok(CheckReport {
        passed,
        failed: results.len() - passed,
        results,
    })
}

fn format_seconds(seconds: Option<f64>) -> String {
    match seconds {
        Some(seconds) => seconds.to_string(),
        None => "unparsable".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_evaluate_validate_case() {
        let case = CheckCase::Validate {
            name: Some("bare time separator".to_string()),
            value: Some("PT".to_string()),
            expect: ErrorCode::TypeMismatch,
        };
        let result = evaluate(0, &case);
        assert!(result.passed);
        assert_eq!(result.actual, "TYPE_MISMATCH");
        assert_eq!(result.name.as_deref(), Some("bare time separator"));
    }

    #[test]
    fn test_evaluate_parse_case_mismatch() {
        let case = CheckCase::Parse {
            name: None,
            value: "P1M".to_string(),
            expect: Some(60.0),
        };
        let result = evaluate(3, &case);
        assert!(!result.passed);
        assert_eq!(result.index, 3);
        assert_eq!(result.expected, "60");
        assert_eq!(result.actual, "2628029");
    }

    #[test]
    fn test_evaluate_unparsable() {
        let case = CheckCase::Parse {
            name: None,
            value: "PXY".to_string(),
            expect: None,
        };
        let result = evaluate(0, &case);
        assert!(result.passed);
        assert_eq!(result.actual, "unparsable");
    }

    #[tokio::test]
    async fn test_run_cases_keeps_input_order() {
        let cases: Vec<CheckCase> = (0..32)
            .map(|i| CheckCase::Compare {
                name: Some(format!("case-{i}")),
                first: Some(format!("PT{i}M")),
                second: Some(format!("PT{}S", i * 60)),
                delimiters: None,
                expect: true,
            })
            .collect();

        let report = run_cases(cases).await.unwrap();
        assert!(report.is_success());
        assert_eq!(report.passed, 32);
        for (i, result) in report.results.iter().enumerate() {
            assert_eq!(result.index, i);
            assert_eq!(result.name.as_deref(), Some(format!("case-{i}").as_str()));
        }
    }

    #[tokio::test]
    async fn test_run_cases_counts_failures() {
        let cases = vec![
            CheckCase::Validate {
                name: None,
                value: Some("P1D".to_string()),
                expect: ErrorCode::NoError,
            },
            CheckCase::Validate {
                name: None,
                value: Some("P".to_string()),
                expect: ErrorCode::NoError,
            },
        ];

        let report = run_cases(cases).await.unwrap();
        assert!(!report.is_success());
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
    }
}
