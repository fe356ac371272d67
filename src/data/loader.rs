// ============================================================
// Array Loader
// ============================================================
// Reads the per-utterance .npy files written by the preprocessor
// using ndarray-npy.
//
// numpy does not always save what the model wants: pitch comes
// out of pyworld as float64, durations as int64 or int32
// depending on platform. Each loader asks for the model dtype
// first and, if the header says otherwise, re-reads in the wider
// or narrower type and converts.
//
// A missing file is reported as MissingFile with the exact path
// so an inconsistent preprocessed tree is easy to diagnose.

use std::path::Path;

use ndarray::{Array, Dimension};
use ndarray_npy::{read_npy, ReadNpyError};

use crate::error::{DatasetError, Result};

/// Load a float array, accepting float32 or float64 on disk.
pub fn load_f32<D: Dimension>(path: &Path) -> Result<Array<f32, D>> {
    ensure_exists(path)?;

    match read_npy::<_, Array<f32, D>>(path) {
        Ok(array) => Ok(array),
        Err(ReadNpyError::WrongDescriptor(_)) => {
            let wide: Array<f64, D> = read_npy(path).map_err(|e| npy_error(path, e))?;
            tracing::trace!("Narrowed float64 → float32: {}", path.display());
            Ok(wide.mapv(|v| v as f32))
        }
        Err(e) => Err(npy_error(path, e)),
    }
}

/// Load an integer array, accepting int64 or int32 on disk.
pub fn load_i64<D: Dimension>(path: &Path) -> Result<Array<i64, D>> {
    ensure_exists(path)?;

    match read_npy::<_, Array<i64, D>>(path) {
        Ok(array) => Ok(array),
        Err(ReadNpyError::WrongDescriptor(_)) => {
            let narrow: Array<i32, D> = read_npy(path).map_err(|e| npy_error(path, e))?;
            tracing::trace!("Widened int32 → int64: {}", path.display());
            Ok(narrow.mapv(i64::from))
        }
        Err(e) => Err(npy_error(path, e)),
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(DatasetError::MissingFile(path.to_path_buf()))
    }
}

fn npy_error(path: &Path, source: ReadNpyError) -> DatasetError {
    DatasetError::Npy { path: path.to_path_buf(), source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1, Array2};
    use ndarray_npy::write_npy;

    #[test]
    fn reads_float32_directly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mel.npy");
        let mel: Array2<f32> = array![[0.5, 1.0], [1.5, 2.0], [2.5, 3.0]];
        write_npy(&path, &mel).unwrap();

        let loaded: Array2<f32> = load_f32(&path).unwrap();
        assert_eq!(loaded, mel);
    }

    #[test]
    fn narrows_float64() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pitch.npy");
        write_npy(&path, &array![110.0f64, 220.5, 0.0]).unwrap();

        let loaded: Array1<f32> = load_f32(&path).unwrap();
        assert_eq!(loaded, array![110.0f32, 220.5, 0.0]);
    }

    #[test]
    fn widens_int32() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("duration.npy");
        write_npy(&path, &array![3i32, 0, 7]).unwrap();

        let loaded: Array1<i64> = load_i64(&path).unwrap();
        assert_eq!(loaded, array![3i64, 0, 7]);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("energy").join("s-energy-x.npy");
        match load_f32::<ndarray::Ix1>(&path) {
            Err(DatasetError::MissingFile(p)) => assert_eq!(p, path),
            other => panic!("expected MissingFile, got {other:?}"),
        }
    }

    #[test]
    fn wrong_rank_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.npy");
        write_npy(&path, &array![1.0f32, 2.0]).unwrap();
        assert!(matches!(
            load_f32::<ndarray::Ix2>(&path),
            Err(DatasetError::Npy { .. })
        ));
    }
}
