use std::fs;
use std::io::Cursor;
use std::path::Path;

use clap::Parser;
use gallery_cli::{Cli, import_catalog, read_entries, run, scan_catalog};

fn write_svg(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "<svg/>").unwrap();
}

fn icon_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let icons = dir.path().join("icons");
    write_svg(&icons, "phylopic/birds/owl_silhouette.svg");
    write_svg(&icons, "phylopic/bat.svg");
    write_svg(&icons, "bioicons/heron_icon.svg");
    write_svg(&icons, "bioicons/.hidden.svg");
    fs::write(icons.join("bioicons/readme.txt"), "notes").unwrap();
    dir
}

#[test]
fn import_writes_sorted_catalog() {
    let dir = icon_tree();
    let output = dir.path().join("icons.json");

    let report = import_catalog(&dir.path().join("icons"), &output, None).unwrap();
    assert_eq!((report.total, report.generated, report.preserved), (3, 3, 0));

    let entries = read_entries(&output).unwrap();
    let files: Vec<&str> = entries.iter().map(|e| e.filename.as_str()).collect();
    assert_eq!(
        files,
        vec!["bioicons/heron_icon.svg", "phylopic/bat.svg", "phylopic/birds/owl_silhouette.svg"]
    );
    assert_eq!(entries[2].source.as_deref(), Some("phylopic"));
    assert_eq!(entries[2].tags, vec!["birds".to_string()]);
}

#[test]
fn import_keeps_readonly_entries_and_uses_names() {
    let dir = icon_tree();
    let output = dir.path().join("icons.json");
    fs::write(
        &output,
        r#"{ "icons": [
            { "filename": "phylopic/bat.svg", "name": "Curated Bat", "readonly": true },
            { "filename": "bioicons/heron_icon.svg", "name": "Stale" }
        ] }"#,
    )
    .unwrap();
    let names = dir.path().join("names.txt");
    fs::write(&names, "heron;Grey Heron\n").unwrap();

    let report = import_catalog(&dir.path().join("icons"), &output, Some(&names)).unwrap();
    assert_eq!(report.preserved, 1);

    let entries = read_entries(&output).unwrap();
    let bat = entries.iter().find(|e| e.filename == "phylopic/bat.svg").unwrap();
    assert_eq!(bat.name.as_deref(), Some("Curated Bat"));
    assert!(bat.readonly);
    let heron = entries.iter().find(|e| e.filename == "bioicons/heron_icon.svg").unwrap();
    assert_eq!(heron.name.as_deref(), Some("Grey Heron"));
}

#[test]
fn scan_lists_every_file() {
    let dir = icon_tree();
    let output = dir.path().join("scan_icons.json");

    assert_eq!(scan_catalog(&dir.path().join("icons"), &output).unwrap(), 5);
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json[0]["filename"], "bioicons/.hidden.svg");
    assert_eq!(json[2]["filename"], "bioicons/readme.txt");
}

#[tokio::test]
async fn pack_filters_and_zips_from_disk() {
    let dir = icon_tree();
    let root = dir.path();
    let catalog = root.join("icons.json");
    import_catalog(&root.join("icons"), &catalog, None).unwrap();
    let output = root.join("out.zip");

    let cli = Cli::parse_from([
        "gallery",
        "pack",
        "--catalog",
        catalog.to_str().unwrap(),
        "--root",
        root.to_str().unwrap(),
        "--only",
        "phylopic",
        "--output",
        output.to_str().unwrap(),
    ]);
    run(cli).await.unwrap();

    let bytes = fs::read(&output).unwrap();
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut names: Vec<&str> = archive.file_names().collect();
    names.sort();
    assert_eq!(names, vec!["Bat.svg", "Owl Silhouette.svg"]);
}

#[tokio::test]
async fn pack_selects_explicit_asset_paths() {
    let dir = icon_tree();
    let root = dir.path();
    let catalog = root.join("icons.json");
    import_catalog(&root.join("icons"), &catalog, None).unwrap();
    let output = root.join("picked.zip");

    let cli = Cli::parse_from([
        "gallery",
        "pack",
        "--catalog",
        catalog.to_str().unwrap(),
        "--root",
        root.to_str().unwrap(),
        "--path",
        "icons/phylopic/bat.svg",
        "--output",
        output.to_str().unwrap(),
    ]);
    run(cli).await.unwrap();

    let archive = zip::ZipArchive::new(Cursor::new(fs::read(&output).unwrap())).unwrap();
    assert_eq!(archive.file_names().collect::<Vec<_>>(), vec!["Bat.svg"]);
}

#[test]
fn facet_flag_rejects_unknown_kind() {
    let parsed = Cli::try_parse_from(["gallery", "search", "--facet", "color"]);
    assert!(parsed.is_err());
}
