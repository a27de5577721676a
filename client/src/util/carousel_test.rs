use super::*;

#[test]
fn cycle_index_steps_forward_and_wraps() {
    assert_eq!(cycle_index(3, 0, 1), Some(1));
    assert_eq!(cycle_index(3, 2, 1), Some(0));
}

#[test]
fn cycle_index_steps_backward_and_wraps() {
    assert_eq!(cycle_index(3, 1, -1), Some(0));
    assert_eq!(cycle_index(3, 0, -1), Some(2));
}

#[test]
fn cycle_index_empty_is_none() {
    assert_eq!(cycle_index(0, 0, 1), None);
}

#[test]
fn cycle_index_out_of_range_current_is_normalized() {
    assert_eq!(cycle_index(4, 9, 0), Some(1));
}
