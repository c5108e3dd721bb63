//! Parse and filter behavior on captured command output.

use aptdiff_core::parse::parse_category;
use aptdiff_core::{
    diff_snapshots, filter_snapshot, load_snapshot, CannedSource, Category, Value,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_trailing_newline_does_not_matter(
        names in prop::collection::vec("[a-z][a-z0-9.+-]{0,8}", 0..8),
    ) {
        let body = names.join("\n");
        let with_newline = format!("{}\n", body);

        for category in [Category::Manuals, Category::Selections] {
            let plain = parse_category(category, &body).unwrap();
            let terminated = parse_category(category, &with_newline).unwrap();
            prop_assert_eq!(plain, terminated);
        }
    }
}

#[test]
fn test_obsolete_conffiles_keyed_by_path() {
    let text = " /etc/init.d/foo 0123456789abcdef obsolete\n \
                /etc/default/bar fedcba9876543210 obsolete\n";

    let map = parse_category(Category::Obsconffiles, text).unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(
        map.get("/etc/init.d/foo"),
        Some(&Value::scalar("0123456789abcdef"))
    );
}

#[test]
fn test_filtered_snapshots_hide_library_churn() {
    let before = CannedSource::new("before")
        .with(
            Category::Selections,
            "libssl3\t\t\tinstall\nlinux-image-amd64\t\thold\nvim\t\t\tinstall\n",
        )
        .with(Category::Autos, "libssl3\nlibinput-pad-xtest\n")
        .with(Category::Manuals, "python3.11-venv\nvim\n");
    let after = CannedSource::new("after")
        .with(
            Category::Selections,
            "libssl4\t\t\tinstall\nlinux-image-amd64\t\thold\nvim\t\t\tinstall\n",
        )
        .with(Category::Autos, "libssl4\nlibinput-pad-xtest\n")
        .with(Category::Manuals, "python3.12-venv\nvim\n");

    let mut from = load_snapshot(&before).unwrap();
    let mut to = load_snapshot(&after).unwrap();
    filter_snapshot(&mut from);
    filter_snapshot(&mut to);

    let selections = from.get(Category::Selections).unwrap();
    assert_eq!(selections.len(), 1);
    assert_eq!(
        selections.get("linux-image-amd64"),
        Some(&Value::scalar("hold"))
    );
    assert!(from
        .get(Category::Autos)
        .unwrap()
        .contains_key("libinput-pad-xtest"));

    let node = diff_snapshots(&from, &to);
    assert!(node.is_empty(), "unexpected differential: {:?}", node);
}

#[test]
fn test_unfiltered_snapshots_show_library_churn() {
    let before = CannedSource::new("before").with(Category::Autos, "libssl3\n");
    let after = CannedSource::new("after").with(Category::Autos, "libssl4\n");

    let from = load_snapshot(&before).unwrap();
    let to = load_snapshot(&after).unwrap();
    let node = diff_snapshots(&from, &to);

    let autos = node.nested("autos").unwrap();
    assert!(autos.delete.contains_key("libssl3"));
    assert!(autos.add.contains_key("libssl4"));
}
