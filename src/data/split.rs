use rand::Rng;

use crate::error::DataError;

/// Fisher-Yates shuffle: row `i` swaps with a uniform pick from `i..len`.
pub fn shuffle_rows<T, R: Rng + ?Sized>(rows: &mut [T], rng: &mut R) {
    let len = rows.len();
    for i in 0..len {
        let r = rng.gen_range(i..len);
        rows.swap(i, r);
    }
}

/// Split rows into a leading training part and a trailing test part.
///
/// The training part holds `floor(train_fraction * len)` rows.
pub fn train_test_split<T: Clone>(
    rows: &[T],
    train_fraction: f64,
) -> Result<(Vec<T>, Vec<T>), DataError> {
    if !(0.0..=1.0).contains(&train_fraction) {
        return Err(DataError::InvalidSplit {
            fraction: train_fraction,
        });
    }
    let num_train = ((train_fraction * rows.len() as f64) as usize).min(rows.len());
    let (train, test) = rows.split_at(num_train);
    Ok((train.to_vec(), test.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rows: Vec<usize> = (0..100).collect();
        shuffle_rows(&mut rows, &mut StdRng::seed_from_u64(0));
        assert_ne!(rows, (0..100).collect::<Vec<_>>());
        let mut sorted = rows.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut empty: Vec<u8> = Vec::new();
        shuffle_rows(&mut empty, &mut StdRng::seed_from_u64(1));
        let mut one = vec![42];
        shuffle_rows(&mut one, &mut StdRng::seed_from_u64(1));
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn test_split_eighty_twenty() {
        let rows: Vec<usize> = (0..100).collect();
        let (train, test) = train_test_split(&rows, 0.8).unwrap();
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(), 20);
        assert_eq!(train[0], 0);
        assert_eq!(test[0], 80);
    }

    #[test]
    fn test_split_rejects_bad_fraction() {
        let rows = vec![1, 2, 3];
        assert!(train_test_split(&rows, 1.5).is_err());
        assert!(train_test_split(&rows, -0.1).is_err());
        assert!(train_test_split(&rows, f64::NAN).is_err());
    }
}
