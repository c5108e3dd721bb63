//! Compare command

use crate::config::{Endpoint, OutputFormat, RunConfig};
use aptdiff_core::diff::{diff_stats, render_json, render_text, CategoryStats};
use aptdiff_core::{
    diff_snapshots, filter_snapshot, log_op_end, log_op_error, log_op_start,
    reclassify_mark_changes, DiffNode, Snapshot,
};
use aptdiff_store::load_from;
use std::time::Instant;

pub fn execute(config: &RunConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    log_op_start!(
        "compare",
        source = %config.source,
        target = %config.target,
        summary = config.summary,
        filter = config.filter,
        reverse = config.reverse
    );

    print_header(config);

    match run(config) {
        Ok(node) => {
            let stats = diff_stats(&node);
            for (category, counts) in stats.iter().filter(|(_, c)| c.total() > 0) {
                tracing::debug!(
                    category = %category,
                    add_count = counts.adds,
                    delete_count = counts.deletes,
                    change_count = counts.changes,
                    "category differential"
                );
            }
            let total = stats.values().fold(CategoryStats::default(), |acc, s| CategoryStats {
                adds: acc.adds + s.adds,
                deletes: acc.deletes + s.deletes,
                changes: acc.changes + s.changes,
            });
            log_op_end!(
                "compare",
                duration_ms = start.elapsed().as_millis() as u64,
                add_count = total.adds,
                delete_count = total.deletes,
                change_count = total.changes
            );
            Ok(())
        }
        Err(e) => {
            log_op_error!(
                "compare",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e.into())
        }
    }
}

fn print_header(config: &RunConfig) {
    println!("Action: {}", config.action);
    match &config.source {
        Endpoint::Live => println!("Source is set to current APT packages"),
        Endpoint::Directory(dir) => println!("Source: {}", dir.display()),
    }
    match &config.target {
        Endpoint::Live => println!("Target is set to current APT packages"),
        Endpoint::Directory(dir) => println!("Target: {}", dir.display()),
    }
    println!("Summary: {}", title_bool(config.summary));
    println!("Filter: {}", title_bool(config.filter));
    println!("Reverse: {}", title_bool(config.reverse));
}

fn run(config: &RunConfig) -> aptdiff_core::Result<DiffNode> {
    let from = load_from(config.source.open().as_ref())?;
    let to = load_from(config.target.open().as_ref())?;

    println!("Differential:");
    let node = build_differential(from, to, config);
    match config.format {
        OutputFormat::Json => println!("{}", render_json(&node)?),
        OutputFormat::Text => print!("{}", render_text(&node)),
    }
    Ok(node)
}

/// Apply reverse, filter and summary to the loaded snapshots, then diff
pub fn build_differential(mut from: Snapshot, mut to: Snapshot, config: &RunConfig) -> DiffNode {
    if config.reverse {
        std::mem::swap(&mut from, &mut to);
    }
    if config.filter {
        filter_snapshot(&mut from);
        filter_snapshot(&mut to);
    }
    if config.summary {
        from.prune_details();
        to.prune_details();
    }

    let mut node = diff_snapshots(&from, &to);
    if config.filter {
        reclassify_mark_changes(&mut node);
    }
    node
}

/// Booleans print capitalized on the console
fn title_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Action;
    use aptdiff_core::logging_facility::test_capture::init_test_capture;
    use aptdiff_core::schema::{
        EVENT_END, EVENT_START, FIELD_ADD_COUNT, FIELD_CHANGE_COUNT, FIELD_DELETE_COUNT,
        FIELD_TARGET,
    };
    use aptdiff_core::{load_snapshot, CannedSource, Category, Value};
    use aptdiff_store::save_snapshot;

    fn config(summary: bool, filter: bool, reverse: bool) -> RunConfig {
        RunConfig {
            action: Action::Compare,
            source: Endpoint::Live,
            target: Endpoint::Live,
            summary,
            filter,
            reverse,
            format: OutputFormat::Json,
        }
    }

    fn snapshots() -> (Snapshot, Snapshot) {
        let before = CannedSource::new("before")
            .with(Category::Autos, "foo\nlibbar1\n")
            .with(Category::Selversions, "foo\t1.0\n");
        let after = CannedSource::new("after")
            .with(Category::Autos, "libbar2\n")
            .with(Category::Manuals, "foo\n")
            .with(Category::Selversions, "foo\t1.1\n");
        (
            load_snapshot(&before).unwrap(),
            load_snapshot(&after).unwrap(),
        )
    }

    #[test]
    fn test_plain_compare_keeps_everything() {
        let (from, to) = snapshots();
        let node = build_differential(from, to, &config(false, false, false));

        let autos = node.nested("autos").unwrap();
        assert!(autos.delete.contains_key("foo"));
        assert!(autos.delete.contains_key("libbar1"));
        assert!(node.nested("selversions").is_some());
    }

    #[test]
    fn test_filter_reclassifies_and_drops_libraries() {
        let (from, to) = snapshots();
        let node = build_differential(from, to, &config(false, true, false));

        let autos = node.nested("autos").unwrap();
        assert!(autos.is_empty());
        let manuals = node.nested("manuals").unwrap();
        assert_eq!(manuals.add.get("foo"), Some(&Value::scalar("Was Auto")));
    }

    #[test]
    fn test_summary_drops_detail_categories() {
        let (from, to) = snapshots();
        let node = build_differential(from, to, &config(true, false, false));

        assert!(!node.change.contains_key("selversions"));
        assert!(!node.change.contains_key("seldetails"));
    }

    #[test]
    fn test_reverse_swaps_sides() {
        let (from, to) = snapshots();
        let node = build_differential(from, to, &config(false, false, true));

        let manuals = node.nested("manuals").unwrap();
        assert!(manuals.delete.contains_key("foo"));
    }

    #[test]
    fn test_execute_logs_endpoints_and_counts() {
        let capture = init_test_capture();
        let temp_dir = tempfile::tempdir().unwrap();
        let before = temp_dir.path().join("before");
        let after = temp_dir.path().join("after");
        save_snapshot(
            &before,
            &CannedSource::new("before").with(Category::Autos, "foo\nbar\n"),
        )
        .unwrap();
        save_snapshot(
            &after,
            &CannedSource::new("after")
                .with(Category::Autos, "bar\nbaz\nqux\n")
                .with(Category::Holds, "vim\n"),
        )
        .unwrap();

        let config = RunConfig {
            source: Endpoint::Directory(before),
            target: Endpoint::Directory(after.clone()),
            ..config(false, false, false)
        };
        execute(&config).unwrap();

        let events = capture.events_for_op("compare");
        let start = events
            .iter()
            .find(|e| e.event.as_deref() == Some(EVENT_START))
            .unwrap();
        let target = after.display().to_string();
        assert_eq!(start.field(FIELD_TARGET), Some(target.as_str()));

        let end = events
            .iter()
            .find(|e| e.event.as_deref() == Some(EVENT_END))
            .unwrap();
        assert_eq!(end.field(FIELD_ADD_COUNT), Some("3"));
        assert_eq!(end.field(FIELD_DELETE_COUNT), Some("1"));
        assert_eq!(end.field(FIELD_CHANGE_COUNT), Some("0"));
    }

    #[test]
    fn test_title_bool() {
        assert_eq!(title_bool(true), "True");
        assert_eq!(title_bool(false), "False");
    }
}
