use crate::report::{SummaryData, format_score, rows_by_user};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Top Categories by User\n");
    out.push_str("======================\n\n");

    out.push_str(&format!("Categories: {} ({})\n", data.n_categories, data.categories_source));
    out.push_str(&format!("Classifier: {}\n", data.classifier));
    if let Some(user) = &data.user_filter {
        out.push_str(&format!("User filter: {}\n", user));
    }
    out.push_str(&format!(
        "Users: {} discovered, {} processed, {} without images\n",
        data.stats.users_discovered, data.stats.users_processed, data.stats.users_skipped_empty
    ));
    out.push_str(&format!(
        "Images: {} processed, {} without classification\n\n",
        data.stats.images_processed, data.stats.images_degraded
    ));

    let groups = rows_by_user(&data.rows);
    if groups.is_empty() {
        out.push_str("No categories scored.\n");
        return out;
    }

    for (user, rows) in groups {
        out.push_str(&format!("{}\n", user));
        for (rank, row) in rows.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} {}\n",
                rank + 1,
                row.category,
                format_score(row.score)
            ));
        }
    }

    out
}
