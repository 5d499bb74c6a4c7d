use super::*;

fn row(user: &str, category: &str, score: f64) -> UserScoreRow {
    UserScoreRow {
        user: user.to_string(),
        category: category.to_string(),
        score,
    }
}

#[test]
fn test_format_score_three_decimals() {
    assert_eq!(format_score(0.4), "0.400");
    assert_eq!(format_score(0.6067), "0.607");
}

#[test]
fn test_rows_by_user_keeps_order() {
    let rows = vec![
        row("bob", "animal", 0.9),
        row("bob", "vehicle", 0.2),
        row("alice", "food", 0.5),
    ];
    let groups = rows_by_user(&rows);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, "bob");
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[1].0, "alice");
}

#[test]
fn test_rows_by_user_empty() {
    assert!(rows_by_user(&[]).is_empty());
}
