use std::fmt;

use crate::errors::{ErrorInfo, QecError};
use crate::StabilizerCode;

/// Commutation relation checked by [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidationCondition {
    /// Every pair of stabilizers commutes: `S Λ Sᵀ = 0`.
    StabilizersCommute,
    /// Every stabilizer commutes with every logical: `S Λ Lᵀ = 0`.
    StabilizersCommuteWithLogicals,
    /// Logical X_i anticommutes with Z_i only: `L Λ Lᵀ = [[0, I], [I, 0]]`.
    LogicalPairing,
}

impl ValidationCondition {
    const ALL: [ValidationCondition; 3] = [
        ValidationCondition::StabilizersCommute,
        ValidationCondition::StabilizersCommuteWithLogicals,
        ValidationCondition::LogicalPairing,
    ];

    /// Stable error code reported when the condition fails.
    pub fn code(self) -> &'static str {
        match self {
            ValidationCondition::StabilizersCommute => "stabilizers-anticommute",
            ValidationCondition::StabilizersCommuteWithLogicals => {
                "stabilizer-logical-anticommute"
            }
            ValidationCondition::LogicalPairing => "logical-pairing-violated",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|condition| condition.code() == code)
    }

    /// Every condition reported by a [`QecError::Validation`] from [`validate`].
    pub fn all_of(err: &QecError) -> Vec<Self> {
        let QecError::Validation(info) = err else {
            return Vec::new();
        };
        match info.context.get(FAILED_KEY) {
            Some(list) => list.split(',').filter_map(Self::from_code).collect(),
            None => Self::from_code(&info.code).into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

const FAILED_KEY: &str = "failed_conditions";

/// One violated commutation relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Relation that does not hold.
    pub condition: ValidationCondition,
    /// First offending `(row, column)` of the product table, if the table could be formed.
    pub entry: Option<(usize, usize)>,
}

/// Outcome of checking all three commutation relations of a code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Violated relations in check order.
    pub failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    /// Returns whether every relation holds.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns whether `condition` was violated.
    pub fn violates(&self, condition: ValidationCondition) -> bool {
        self.failures.iter().any(|f| f.condition == condition)
    }
}

/// Evaluates the commutation relations of a code without failing on violations.
///
/// Only malformed matrices (logicals acting on a different qubit count than
/// the stabilizers) are reported as errors.
pub fn check_code<C: StabilizerCode + ?Sized>(code: &C) -> Result<ValidationReport, QecError> {
    let stabilizers = code.stabilizers();
    let logicals = code.logicals()?;
    let mut report = ValidationReport::default();

    let table = stabilizers.commutation_table(stabilizers)?;
    if let Some(entry) = first_mismatch(&table, |_, _| false) {
        report.failures.push(ValidationFailure {
            condition: ValidationCondition::StabilizersCommute,
            entry: Some(entry),
        });
    }

    let table = stabilizers.commutation_table(&logicals)?;
    if let Some(entry) = first_mismatch(&table, |_, _| false) {
        report.failures.push(ValidationFailure {
            condition: ValidationCondition::StabilizersCommuteWithLogicals,
            entry: Some(entry),
        });
    }

    let k = code.logical_xs().num_rows();
    if code.logical_zs().num_rows() != k {
        report.failures.push(ValidationFailure {
            condition: ValidationCondition::LogicalPairing,
            entry: None,
        });
    } else {
        let table = logicals.commutation_table(&logicals)?;
        if let Some(entry) = first_mismatch(&table, |i, j| i + k == j || j + k == i) {
            report.failures.push(ValidationFailure {
                condition: ValidationCondition::LogicalPairing,
                entry: Some(entry),
            });
        }
    }
    Ok(report)
}

/// Checks the commutation relations of a code's stabilizers and logicals.
///
/// The check is read only and must be requested explicitly. A violation is
/// reported as a [`QecError::Validation`] whose code is the first failed
/// [`ValidationCondition::code`]; every failed condition is listed under the
/// `failed_conditions` context key together with the offending table entries.
///
/// A code can break several conditions at once, so [`QecError::code`] only
/// names the first in check order. Use [`ValidationCondition::all_of`] to test
/// for a particular condition.
pub fn validate<C: StabilizerCode + ?Sized>(code: &C) -> Result<(), QecError> {
    let report = check_code(code)?;
    let Some(first) = report.failures.first() else {
        tracing::debug!(code = %code.label(), nkd = %code.nkd(), "stabilizer code validated");
        return Ok(());
    };

    let failed: Vec<&str> = report.failures.iter().map(|f| f.condition.code()).collect();
    let mut info = ErrorInfo::new(first.condition.code(), message(first.condition))
        .with_context("code", code.label())
        .with_context(FAILED_KEY, failed.join(","));
    for failure in &report.failures {
        let value = match failure.entry {
            Some((row, column)) => format!("{row},{column}"),
            None => format!(
                "logical_xs={} logical_zs={}",
                code.logical_xs().num_rows(),
                code.logical_zs().num_rows()
            ),
        };
        info = info.with_context(failure.condition.code(), value);
    }
    tracing::debug!(code = %code.label(), failed = %failed.join(","), "stabilizer code failed validation");
    Err(QecError::Validation(info))
}

fn message(condition: ValidationCondition) -> &'static str {
    match condition {
        ValidationCondition::StabilizersCommute => "stabilizer rows anticommute",
        ValidationCondition::StabilizersCommuteWithLogicals => {
            "stabilizer row anticommutes with a logical operator"
        }
        ValidationCondition::LogicalPairing => {
            "logical operators do not satisfy the canonical pairing"
        }
    }
}

fn first_mismatch(
    table: &[Vec<bool>],
    expected: impl Fn(usize, usize) -> bool,
) -> Option<(usize, usize)> {
    table.iter().enumerate().find_map(|(i, row)| {
        row.iter()
            .enumerate()
            .find(|&(j, &anticommutes)| anticommutes != expected(i, j))
            .map(|(j, _)| (i, j))
    })
}
