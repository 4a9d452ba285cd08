use percolate::prelude::*;

fn s(row: u32, col: u32) -> Site {
    Site::new(row, col)
}

#[test]
fn one_by_one_open_percolates() {
    let mut grid = PercolationGrid::new(1).unwrap();
    grid.open(s(1, 1)).unwrap();
    assert!(grid.is_open(s(1, 1)).unwrap());
    assert!(grid.is_full(s(1, 1)).unwrap());
    assert!(grid.percolates());
}

#[test]
fn two_by_two_left_column_percolates() {
    let mut grid = PercolationGrid::new(2).unwrap();
    grid.open(s(1, 1)).unwrap();
    grid.open(s(2, 1)).unwrap();
    assert!(grid.percolates());
    assert!(grid.is_full(s(2, 1)).unwrap());
    assert!(!grid.is_full(s(2, 2)).unwrap());
    assert!(!grid.is_full(s(1, 2)).unwrap());
}

#[test]
fn three_by_three_bottom_row_has_no_backwash() {
    let mut grid = PercolationGrid::new(3).unwrap();
    grid.open(s(3, 1)).unwrap();
    grid.open(s(3, 2)).unwrap();
    grid.open(s(3, 3)).unwrap();
    assert!(!grid.percolates());
    assert!(!grid.is_full(s(3, 1)).unwrap());
    assert!(!grid.is_full(s(3, 2)).unwrap());
    assert!(!grid.is_full(s(3, 3)).unwrap());
}

#[test]
fn fresh_grids_are_closed_and_do_not_percolate() {
    for n in 1..=6 {
        let grid = PercolationGrid::new(n).unwrap();
        assert!(!grid.percolates());
        for row in 1..=n {
            for col in 1..=n {
                assert!(!grid.is_open(s(row, col)).unwrap());
            }
        }
    }
}

#[test]
fn zero_dimension_is_invalid() {
    let err = PercolationGrid::new(0).unwrap_err();
    assert_eq!(err, PercolationError::EmptyGrid);
    assert_eq!(err.to_string(), "grid dimension must be greater than zero");
}

#[test]
fn coordinate_errors_on_every_accessor() {
    let mut grid = PercolationGrid::new(4).unwrap();
    for bad in [s(0, 2), s(2, 5), s(5, 2)] {
        assert!(matches!(
            grid.open(bad),
            Err(PercolationError::SiteOutOfBounds { dimension: 4, .. })
        ));
        assert!(grid.is_open(bad).is_err());
        assert!(grid.is_full(bad).is_err());
    }
}

#[test]
fn error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(PercolationError::SiteOutOfBounds {
        site: s(9, 9),
        dimension: 3,
    });
    assert_eq!(err.to_string(), "site (9, 9) out of bounds: [1, 3] x [1, 3]");
}
