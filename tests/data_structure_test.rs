use selection_labels::utils::data_structures::{Matrix, ResettableArray, VersionedFlags};

#[test]
fn test_matrix() {
    let mut matrix = Matrix::new(3, 4, 0);

    assert_eq!(matrix.rows(), 3);
    assert_eq!(matrix.cols(), 4);
    assert_eq!(matrix.data.len(), 3 * 4);

    matrix.set(0, 0, 7);
    matrix.set(2, 3, 9);
    matrix.set(1, 2, 5);

    assert_eq!(matrix.get(0, 0), 7);
    assert_eq!(matrix.get(2, 3), 9);
    assert_eq!(matrix.get(1, 2), 5);
    assert_eq!(matrix.get(1, 3), 0);
}

#[test]
fn test_resettable_array() {
    let mut array = ResettableArray::new(5, usize::MAX);

    array.set(1, 10);
    array.set(3, 30);

    assert_eq!(array[0], usize::MAX);
    assert_eq!(array[1], 10);
    assert_eq!(array[3], 30);

    array.reset();

    assert_eq!(array[1], usize::MAX);
    assert_eq!(array[3], usize::MAX);

    // modifying the same index twice must survive a single reset correctly
    array.set(2, 1);
    array.set(2, 2);
    assert_eq!(array[2], 2);

    array.reset();
    assert_eq!(array[2], usize::MAX);
}

#[test]
fn test_versioned_flags() {
    let mut flags = VersionedFlags::new(4);

    assert!(!flags.is_set(0));

    flags.set(0);
    flags.set(2);

    assert!(flags.is_set(0));
    assert!(!flags.is_set(1));
    assert!(flags.is_set(2));

    flags.reset();

    assert!(!flags.is_set(0));
    assert!(!flags.is_set(2));

    flags.set(1);
    assert!(flags.is_set(1));
}
