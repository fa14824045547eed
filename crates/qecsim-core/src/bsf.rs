//! Pauli strings and their binary symplectic form.
//!
//! An n-qubit Pauli operator is stored as 2n bits: the x-half for all qubits
//! followed by the z-half for all qubits. Qubit `q` is encoded by the pair
//! `(bits[q], bits[n + q])` with `00 = I`, `10 = X`, `11 = Y`, `01 = Z`.
//! Phases are not tracked.
//!
//! The symplectic product `(A_x · B_z + A_z · B_x) mod 2` is `true` exactly
//! when two operators anticommute. Between two matrices it is row aligned
//! (row `i` of `A` against row `i` of `B`); the all-pairs table used when
//! checking commutation relations is [`BsfMatrix::commutation_table`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, QecError};

/// Single-qubit Pauli label, ordered `I < X < Y < Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pauli {
    /// Identity.
    I,
    /// Bit flip.
    X,
    /// Bit and phase flip.
    Y,
    /// Phase flip.
    Z,
}

impl Pauli {
    /// Non-identity labels in enumeration order.
    pub const NON_IDENTITY: [Pauli; 3] = [Pauli::X, Pauli::Y, Pauli::Z];

    /// Parses a capital `I`, `X`, `Y` or `Z`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Pauli::I),
            'X' => Some(Pauli::X),
            'Y' => Some(Pauli::Y),
            'Z' => Some(Pauli::Z),
            _ => None,
        }
    }

    /// Returns the character used in Pauli strings.
    pub fn as_char(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    /// Decodes an `(x, z)` bit pair.
    pub fn from_bits(x: bool, z: bool) -> Self {
        match (x, z) {
            (false, false) => Pauli::I,
            (true, false) => Pauli::X,
            (true, true) => Pauli::Y,
            (false, true) => Pauli::Z,
        }
    }

    /// Encodes the label as an `(x, z)` bit pair.
    pub fn bits(self) -> (bool, bool) {
        match self {
            Pauli::I => (false, false),
            Pauli::X => (true, false),
            Pauli::Y => (true, true),
            Pauli::Z => (false, true),
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Pauli operator in binary symplectic form.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<bool>", into = "Vec<bool>")]
pub struct BsfVector {
    bits: Box<[bool]>,
}

impl BsfVector {
    /// Wraps raw symplectic bits; the length must be even.
    pub fn new(bits: impl Into<Vec<bool>>) -> Result<Self, QecError> {
        let bits: Vec<bool> = bits.into();
        if bits.len() % 2 != 0 {
            let info = ErrorInfo::new("odd-bsf-length", "symplectic vector length must be even")
                .with_context("length", bits.len().to_string());
            return Err(QecError::Format(info));
        }
        Ok(Self {
            bits: bits.into_boxed_slice(),
        })
    }

    /// Returns the identity operator on `num_qubits` qubits.
    pub fn identity(num_qubits: usize) -> Self {
        Self {
            bits: vec![false; 2 * num_qubits].into_boxed_slice(),
        }
    }

    /// Builds a vector from separate x and z halves.
    pub fn from_xz(x: &[bool], z: &[bool]) -> Result<Self, QecError> {
        if x.len() != z.len() {
            let info = ErrorInfo::new("half-length-mismatch", "x and z halves differ in length")
                .with_context("x_len", x.len().to_string())
                .with_context("z_len", z.len().to_string());
            return Err(QecError::Dimension(info));
        }
        let mut bits = Vec::with_capacity(2 * x.len());
        bits.extend_from_slice(x);
        bits.extend_from_slice(z);
        Ok(Self {
            bits: bits.into_boxed_slice(),
        })
    }

    /// Builds an operator acting as `pauli` on each listed qubit and as identity elsewhere.
    ///
    /// A qubit listed twice takes the last label.
    pub fn from_sparse(num_qubits: usize, terms: &[(usize, Pauli)]) -> Result<Self, QecError> {
        let mut bits = vec![false; 2 * num_qubits];
        for &(qubit, pauli) in terms {
            if qubit >= num_qubits {
                let info = ErrorInfo::new("qubit-out-of-range", "qubit index outside operator")
                    .with_context("qubit", qubit.to_string())
                    .with_context("num_qubits", num_qubits.to_string());
                return Err(QecError::Dimension(info));
            }
            let (x, z) = pauli.bits();
            bits[qubit] = x;
            bits[num_qubits + qubit] = z;
        }
        Ok(Self {
            bits: bits.into_boxed_slice(),
        })
    }

    /// Returns the number of qubits the operator acts on.
    pub fn num_qubits(&self) -> usize {
        self.bits.len() / 2
    }

    /// Returns the full `(x-half, z-half)` bit sequence.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Returns the x-half.
    pub fn x_part(&self) -> &[bool] {
        &self.bits[..self.num_qubits()]
    }

    /// Returns the z-half.
    pub fn z_part(&self) -> &[bool] {
        &self.bits[self.num_qubits()..]
    }

    /// Returns the label on `qubit`, or `None` if it is out of range.
    pub fn pauli(&self, qubit: usize) -> Option<Pauli> {
        let n = self.num_qubits();
        (qubit < n).then(|| Pauli::from_bits(self.bits[qubit], self.bits[n + qubit]))
    }

    /// Number of qubits on which the operator is not the identity.
    pub fn weight(&self) -> usize {
        let n = self.num_qubits();
        (0..n)
            .filter(|&q| self.bits[q] || self.bits[n + q])
            .count()
    }

    /// Returns whether every qubit carries the identity.
    pub fn is_identity(&self) -> bool {
        self.bits.iter().all(|&bit| !bit)
    }

    /// Product of two operators, ignoring phase.
    pub fn compose(&self, other: &BsfVector) -> Result<BsfVector, QecError> {
        check_widths(self.num_qubits(), other.num_qubits())?;
        let bits: Vec<bool> = self
            .bits
            .iter()
            .zip(other.bits.iter())
            .map(|(a, b)| a ^ b)
            .collect();
        Ok(Self {
            bits: bits.into_boxed_slice(),
        })
    }

    /// Renders the operator as a Pauli string.
    pub fn to_pauli(&self) -> String {
        let n = self.num_qubits();
        (0..n)
            .map(|q| Pauli::from_bits(self.bits[q], self.bits[n + q]).as_char())
            .collect()
    }
}

impl fmt::Debug for BsfVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BsfVector").field(&self.to_pauli()).finish()
    }
}

impl fmt::Display for BsfVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pauli())
    }
}

impl FromStr for BsfVector {
    type Err = QecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        pauli_to_bsf(s)
    }
}

impl TryFrom<Vec<bool>> for BsfVector {
    type Error = QecError;

    fn try_from(bits: Vec<bool>) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<BsfVector> for Vec<bool> {
    fn from(vector: BsfVector) -> Self {
        vector.bits.into_vec()
    }
}

/// Ordered rows of symplectic vectors sharing one qubit count.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BsfMatrix {
    num_qubits: usize,
    rows: Vec<BsfVector>,
}

impl BsfMatrix {
    /// Returns a matrix with no rows acting on `num_qubits` qubits.
    pub fn empty(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            rows: Vec::new(),
        }
    }

    /// Collects rows that must all act on `num_qubits` qubits.
    pub fn from_rows(num_qubits: usize, rows: Vec<BsfVector>) -> Result<Self, QecError> {
        for (idx, row) in rows.iter().enumerate() {
            if row.num_qubits() != num_qubits {
                let info = ErrorInfo::new("row-width-mismatch", "matrix row has the wrong width")
                    .with_context("row", idx.to_string())
                    .with_context("expected_qubits", num_qubits.to_string())
                    .with_context("found_qubits", row.num_qubits().to_string());
                return Err(QecError::Dimension(info));
            }
        }
        Ok(Self { num_qubits, rows })
    }

    /// Returns the number of qubits each row acts on.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Returns the number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rows in order.
    pub fn rows(&self) -> &[BsfVector] {
        &self.rows
    }

    /// Returns row `idx` if present.
    pub fn row(&self, idx: usize) -> Option<&BsfVector> {
        self.rows.get(idx)
    }

    /// Iterates over the rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, BsfVector> {
        self.rows.iter()
    }

    /// Stacks `other` below `self`.
    ///
    /// A matrix without rows takes the width of the other operand, so an
    /// empty block built by [`paulis_to_bsf`] on zero qubits stacks with anything.
    pub fn vstack(&self, other: &BsfMatrix) -> Result<BsfMatrix, QecError> {
        if self.rows.is_empty() {
            return Ok(other.clone());
        }
        if other.rows.is_empty() {
            return Ok(self.clone());
        }
        check_widths(self.num_qubits, other.num_qubits)?;
        let mut rows = Vec::with_capacity(self.rows.len() + other.rows.len());
        rows.extend_from_slice(&self.rows);
        rows.extend_from_slice(&other.rows);
        Ok(Self {
            num_qubits: self.num_qubits,
            rows,
        })
    }

    /// Renders each row as a Pauli string.
    pub fn to_paulis(&self) -> Vec<String> {
        self.rows.iter().map(BsfVector::to_pauli).collect()
    }

    /// Weight of each row.
    pub fn weights(&self) -> Vec<usize> {
        self.rows.iter().map(BsfVector::weight).collect()
    }

    /// All-pairs symplectic products: entry `[i][j]` is row `i` of `self` against row `j` of `other`.
    ///
    /// Widths are only compared when both matrices have rows.
    pub fn commutation_table(&self, other: &BsfMatrix) -> Result<Vec<Vec<bool>>, QecError> {
        if !self.rows.is_empty() && !other.rows.is_empty() {
            check_widths(self.num_qubits, other.num_qubits)?;
        }
        Ok(self
            .rows
            .iter()
            .map(|a| other.rows.iter().map(|b| parity(a, b)).collect())
            .collect())
    }
}

impl fmt::Debug for BsfMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BsfMatrix")
            .field("num_qubits", &self.num_qubits)
            .field("rows", &self.to_paulis())
            .finish()
    }
}

impl<'a> IntoIterator for &'a BsfMatrix {
    type Item = &'a BsfVector;
    type IntoIter = std::slice::Iter<'a, BsfVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Converts a Pauli string to a symplectic vector.
pub fn pauli_to_bsf(pauli: &str) -> Result<BsfVector, QecError> {
    let labels = parse_labels(pauli)?;
    let n = labels.len();
    let mut bits = vec![false; 2 * n];
    for (q, label) in labels.into_iter().enumerate() {
        let (x, z) = label.bits();
        bits[q] = x;
        bits[n + q] = z;
    }
    Ok(BsfVector {
        bits: bits.into_boxed_slice(),
    })
}

/// Converts a collection of equal-length Pauli strings to a matrix, one row per string.
///
/// An empty collection yields an empty matrix on zero qubits.
pub fn paulis_to_bsf<S: AsRef<str>>(paulis: &[S]) -> Result<BsfMatrix, QecError> {
    let mut rows = Vec::with_capacity(paulis.len());
    let mut width = None;
    for (idx, pauli) in paulis.iter().enumerate() {
        let row = pauli_to_bsf(pauli.as_ref())?;
        match width {
            None => width = Some(row.num_qubits()),
            Some(expected) if expected != row.num_qubits() => {
                let info = ErrorInfo::new(
                    "inconsistent-pauli-length",
                    "Pauli strings in a collection must share one length",
                )
                .with_context("index", idx.to_string())
                .with_context("expected", expected.to_string())
                .with_context("found", row.num_qubits().to_string());
                return Err(QecError::Format(info));
            }
            Some(_) => {}
        }
        rows.push(row);
    }
    Ok(BsfMatrix {
        num_qubits: width.unwrap_or(0),
        rows,
    })
}

/// Converts raw symplectic bits to a Pauli string.
pub fn bsf_to_pauli(bits: &[bool]) -> Result<String, QecError> {
    BsfVector::new(bits.to_vec()).map(|vector| vector.to_pauli())
}

/// Converts each row of a matrix to a Pauli string.
pub fn bsf_to_paulis(matrix: &BsfMatrix) -> Vec<String> {
    matrix.to_paulis()
}

fn parse_labels(pauli: &str) -> Result<Vec<Pauli>, QecError> {
    pauli
        .chars()
        .enumerate()
        .map(|(position, c)| {
            Pauli::from_char(c).ok_or_else(|| {
                let info = ErrorInfo::new("invalid-pauli-label", "expected one of I, X, Y, Z")
                    .with_context("position", position.to_string())
                    .with_context("label", c.to_string());
                QecError::Format(info)
            })
        })
        .collect()
}

/// Symplectic product between symplectic vectors and matrices.
///
/// `true` marks an anticommuting pair.
pub trait SymplecticProduct<Rhs: ?Sized = Self> {
    /// `bool` for two vectors, one flag per row otherwise.
    type Output;

    /// Computes the product of `self` with `rhs`.
    fn symplectic_product(&self, rhs: &Rhs) -> Result<Self::Output, QecError>;
}

impl SymplecticProduct for BsfVector {
    type Output = bool;

    fn symplectic_product(&self, rhs: &BsfVector) -> Result<bool, QecError> {
        check_widths(self.num_qubits(), rhs.num_qubits())?;
        Ok(parity(self, rhs))
    }
}

impl SymplecticProduct<BsfVector> for BsfMatrix {
    type Output = Vec<bool>;

    fn symplectic_product(&self, rhs: &BsfVector) -> Result<Vec<bool>, QecError> {
        check_widths(self.num_qubits, rhs.num_qubits())?;
        Ok(self.rows.iter().map(|row| parity(row, rhs)).collect())
    }
}

impl SymplecticProduct<BsfMatrix> for BsfVector {
    type Output = Vec<bool>;

    fn symplectic_product(&self, rhs: &BsfMatrix) -> Result<Vec<bool>, QecError> {
        check_widths(self.num_qubits(), rhs.num_qubits)?;
        Ok(rhs.rows.iter().map(|row| parity(self, row)).collect())
    }
}

impl SymplecticProduct for BsfMatrix {
    type Output = Vec<bool>;

    fn symplectic_product(&self, rhs: &BsfMatrix) -> Result<Vec<bool>, QecError> {
        check_widths(self.num_qubits, rhs.num_qubits)?;
        if self.rows.len() != rhs.rows.len() {
            let info = ErrorInfo::new(
                "row-count-mismatch",
                "row-aligned symplectic product needs equal row counts",
            )
            .with_context("left_rows", self.rows.len().to_string())
            .with_context("right_rows", rhs.rows.len().to_string())
            .with_hint("use BsfMatrix::commutation_table for the all-pairs product");
            return Err(QecError::Dimension(info));
        }
        Ok(self
            .rows
            .iter()
            .zip(rhs.rows.iter())
            .map(|(a, b)| parity(a, b))
            .collect())
    }
}

/// Symplectic product of `a` with `b`; see [`SymplecticProduct`].
pub fn bsp<A, B>(a: &A, b: &B) -> Result<A::Output, QecError>
where
    A: SymplecticProduct<B> + ?Sized,
    B: ?Sized,
{
    a.symplectic_product(b)
}

// Callers must have checked that both operands act on the same qubits.
fn parity(a: &BsfVector, b: &BsfVector) -> bool {
    let n = a.num_qubits();
    let (ax, az) = a.bits.split_at(n);
    let (bx, bz) = b.bits.split_at(n);
    let mut parity = false;
    for q in 0..n {
        parity ^= (ax[q] & bz[q]) ^ (az[q] & bx[q]);
    }
    parity
}

fn check_widths(left_qubits: usize, right_qubits: usize) -> Result<(), QecError> {
    if left_qubits != right_qubits {
        let info = ErrorInfo::new("width-mismatch", "operands act on different qubit counts")
            .with_context("left_width", (2 * left_qubits).to_string())
            .with_context("right_width", (2 * right_qubits).to_string());
        return Err(QecError::Dimension(info));
    }
    Ok(())
}
