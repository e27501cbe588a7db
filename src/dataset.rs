use crate::error::KMeansError;
use ndarray::Array2;

/// Build an `(n, d)` matrix from row vectors.
///
/// This is the boundary where caller-supplied tabular data is validated:
/// past this point the type system guarantees a rectangular matrix.
///
/// # Errors
///
/// - `EmptyDataset` if `rows` is empty or the rows have zero width
/// - `DimensionMismatch` if the rows have inconsistent lengths
pub fn from_rows(rows: &[Vec<f32>]) -> Result<Array2<f32>, KMeansError> {
    if rows.is_empty() {
        return Err(KMeansError::EmptyDataset);
    }

    let n_features = rows[0].len();
    if n_features == 0 {
        return Err(KMeansError::EmptyDataset);
    }

    for (i, row) in rows.iter().enumerate() {
        if row.len() != n_features {
            return Err(KMeansError::DimensionMismatch(format!(
                "Row 0 has {} features but row {} has {}",
                n_features,
                i,
                row.len()
            )));
        }
    }

    let mut data = Array2::zeros((rows.len(), n_features));
    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            data[[i, j]] = value;
        }
    }

    Ok(data)
}
