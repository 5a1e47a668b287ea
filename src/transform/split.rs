//! Positional train/test split.

use crate::domain::Partition;
use crate::transform::window::Windowed;

/// First test index for `len` samples: `floor(0.8 * len)`, computed exactly.
pub fn split_index(len: usize) -> usize {
    len / 5 * 4 + len % 5 * 4 / 5
}

/// Keep the leading 80% (`Train`) or the trailing 20% (`Test`) of samples.
///
/// Order is preserved within each side; there is no shuffling.
pub fn split<T>(mut windowed: Windowed<T>, partition: Partition) -> Windowed<T> {
    let cut = split_index(windowed.len());

    match partition {
        Partition::Train => {
            windowed.truncate(cut);
            windowed
        }
        Partition::Test => windowed.split_off(cut),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::window::make_windows;

    #[test]
    fn split_index_is_floor_of_eighty_percent() {
        assert_eq!(split_index(0), 0);
        assert_eq!(split_index(1), 0);
        assert_eq!(split_index(4), 3);
        assert_eq!(split_index(7), 5);
        assert_eq!(split_index(10), 8);
        assert_eq!(split_index(358), 286);
        assert_eq!(split_index(usize::MAX), usize::MAX / 5 * 4);
    }

    #[test]
    fn train_then_test_reassembles_full_sequence() {
        let rows: Vec<i32> = (0..50).collect();
        for look_back in 1..6 {
            let full = make_windows(&rows, look_back);
            let train = split(full.clone(), Partition::Train);
            let test = split(full.clone(), Partition::Test);

            assert_eq!(train.len(), split_index(full.len()));
            assert_eq!(train.len() + test.len(), full.len());

            let mut inputs = train.inputs().to_vec();
            inputs.extend_from_slice(test.inputs());
            let mut labels = train.labels().to_vec();
            labels.extend_from_slice(test.labels());
            assert_eq!(inputs, full.inputs());
            assert_eq!(labels, full.labels());
        }
    }

    #[test]
    fn tiny_inputs_leave_one_side_empty() {
        let one = make_windows(&[1, 2, 3], 1);
        assert_eq!(one.len(), 1);
        assert!(split(one.clone(), Partition::Train).is_empty());
        assert_eq!(split(one, Partition::Test).labels(), &[2]);

        let none = make_windows::<i32>(&[], 3);
        assert!(split(none.clone(), Partition::Train).is_empty());
        assert!(split(none, Partition::Test).is_empty());
    }

    #[test]
    fn look_back_survives_split() {
        let w = make_windows(&[1, 2, 3, 4, 5, 6, 7, 8], 3);
        assert_eq!(split(w, Partition::Train).look_back(), 3);
    }
}
