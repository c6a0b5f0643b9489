use super::*;

#[test]
fn completion_rate_handles_empty_board() {
    assert_eq!(completion_rate(StageCounts::default()), 0);
}

#[test]
fn completion_rate_rounds_down() {
    let counts = StageCounts { total: 3, todo: 1, in_progress: 1, completed: 1 };
    assert_eq!(completion_rate(counts), 33);
}
