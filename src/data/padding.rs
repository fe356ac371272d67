// ============================================================
// Padding Primitives
// ============================================================
// Turn ragged per-utterance arrays into rectangular batches.
//
//   pad_1d:  [L_i]      → [B, max L]      zero-filled on the right
//   pad_2d:  [L_i, W]   → [B, max L, W]   zero-filled along time
//
// The fill value is T::default(), i.e. 0 for every numeric field.
// Token 0 is also the text pad symbol, so the padded text never
// collides with a real phoneme.
//
// Both accept owned arrays or views.

use ndarray::{s, Array2, Array3, ArrayBase, Data, Ix1, Ix2};

use crate::error::{DatasetError, Result};

pub fn pad_1d<T, S>(seqs: &[ArrayBase<S, Ix1>]) -> Array2<T>
where
    T: Clone + Default,
    S: Data<Elem = T>,
{
    let max_len = seqs.iter().map(|seq| seq.len()).max().unwrap_or(0);
    let mut out = Array2::from_elem((seqs.len(), max_len), T::default());

    for (mut row, seq) in out.outer_iter_mut().zip(seqs) {
        row.slice_mut(s![..seq.len()]).assign(seq);
    }
    out
}

/// Pad along the first axis to the longest sequence. All inputs must
/// share their second dimension.
pub fn pad_2d<T, S>(seqs: &[ArrayBase<S, Ix2>]) -> Result<Array3<T>>
where
    T: Clone + Default,
    S: Data<Elem = T>,
{
    let max_len = seqs.iter().map(|seq| seq.nrows()).max().unwrap_or(0);
    pad_2d_to(seqs, max_len)
}

/// Pad along the first axis to a fixed `max_len`. A longer sequence
/// is an error, never truncated.
pub fn pad_2d_to<T, S>(seqs: &[ArrayBase<S, Ix2>], max_len: usize) -> Result<Array3<T>>
where
    T: Clone + Default,
    S: Data<Elem = T>,
{
    let width = seqs.first().map_or(0, |seq| seq.ncols());
    let mut out = Array3::from_elem((seqs.len(), max_len, width), T::default());

    for (i, seq) in seqs.iter().enumerate() {
        if seq.ncols() != width {
            return Err(DatasetError::Shape(format!(
                "sequence {i} has width {}, expected {width}",
                seq.ncols()
            )));
        }
        if seq.nrows() > max_len {
            return Err(DatasetError::Shape(format!(
                "sequence {i} has {} frames, longer than max_len {max_len}",
                seq.nrows()
            )));
        }
        out.slice_mut(s![i, ..seq.nrows(), ..]).assign(seq);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    #[test]
    fn pad_1d_zero_fills_to_longest() {
        let padded = pad_1d(&[array![1i64, 2, 3], array![4i64, 5]]);
        assert_eq!(padded, array![[1, 2, 3], [4, 5, 0]]);
    }

    #[test]
    fn pad_1d_keeps_prefix_and_zero_suffix() {
        let seqs: Vec<Array1<f32>> = (0..6)
            .map(|n| Array1::from_iter((0..n).map(|v| v as f32 + 1.0)))
            .collect();
        let padded = pad_1d(&seqs);
        assert_eq!(padded.dim(), (6, 5));

        for (row, seq) in padded.outer_iter().zip(&seqs) {
            assert_eq!(row.slice(s![..seq.len()]), seq.view());
            assert!(row.slice(s![seq.len()..]).iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn pad_1d_accepts_views() {
        let a = array![7.0f32, 8.0];
        let b = array![9.0f32];
        let padded = pad_1d(&[a.view(), b.view()]);
        assert_eq!(padded, array![[7.0, 8.0], [9.0, 0.0]]);
    }

    #[test]
    fn pad_1d_of_nothing_is_empty() {
        let padded = pad_1d::<i64, _>(&Vec::<Array1<i64>>::new());
        assert_eq!(padded.dim(), (0, 0));
    }

    #[test]
    fn pad_2d_zero_fills_time_axis() {
        let short = Array2::<f32>::ones((2, 3));
        let long = Array2::<f32>::from_elem((3, 3), 2.0);
        let padded = pad_2d(&[short, long.clone()]).unwrap();

        assert_eq!(padded.dim(), (2, 3, 3));
        assert_eq!(padded.slice(s![0, ..2, ..]), Array2::<f32>::ones((2, 3)));
        assert_eq!(padded.slice(s![0, 2, ..]), array![0.0f32, 0.0, 0.0]);
        assert_eq!(padded.slice(s![1, .., ..]), long);
    }

    #[test]
    fn pad_2d_rejects_mixed_widths() {
        let err = pad_2d(&[Array2::<f32>::zeros((2, 80)), Array2::<f32>::zeros((2, 40))]);
        assert!(matches!(err, Err(DatasetError::Shape(_))));
    }

    #[test]
    fn pad_2d_to_fixed_length() {
        let padded = pad_2d_to(&[Array2::<f32>::ones((2, 4))], 5).unwrap();
        assert_eq!(padded.dim(), (1, 5, 4));
        assert_eq!(padded.sum(), 8.0);

        let err = pad_2d_to(&[Array2::<f32>::ones((6, 4))], 5);
        assert!(matches!(err, Err(DatasetError::Shape(_))));
    }
}
