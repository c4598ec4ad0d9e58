//! Theme file generation through the library API.

use everforest::config::GeneratorConfig;
use everforest::error::ThemeError;
use everforest::generate;
use everforest::palette::{Appearance, Contrast};

use crate::common::assertions::{assert_json_has_fields, assert_variant_names};
use crate::common::fixtures::{Workspace, repo_colors, without_slot};
use crate::common::init_test_logging;

fn config_for(workspace: &Workspace) -> GeneratorConfig {
    GeneratorConfig {
        input: workspace.colors_path(),
        output_dir: workspace.themes_dir(),
        ..GeneratorConfig::default()
    }
}

#[test]
fn writes_both_theme_files() {
    init_test_logging();
    let workspace = Workspace::new();
    let report = generate::run(&config_for(&workspace)).unwrap();

    assert!(report.ok);
    assert_eq!(report.files.len(), 2);

    let dark = workspace.theme_json("dark");
    assert_json_has_fields(&dark, &["$schema", "name", "author", "themes"]);
    assert_eq!(dark["$schema"], "https://zed.dev/schema/themes/v0.1.0.json");
    assert_eq!(dark["name"], "Everforest Dark");
    assert_eq!(dark["author"], "Kimberli Zhong");
    assert_variant_names(
        &dark,
        &["Everforest Dark Hard", "Everforest Dark Medium", "Everforest Dark Soft"],
    );
    for variant in dark["themes"].as_array().unwrap() {
        assert_eq!(variant["appearance"], "dark");
    }

    let light = workspace.theme_json("light");
    assert_eq!(light["name"], "Everforest Light");
    assert_variant_names(
        &light,
        &["Everforest Light Hard", "Everforest Light Medium", "Everforest Light Soft"],
    );
    assert_eq!(light["themes"][2]["appearance"], "light");
}

#[test]
fn variants_use_their_own_background() {
    let workspace = Workspace::new();
    generate::run(&config_for(&workspace)).unwrap();

    let colors = repo_colors();
    let dark = workspace.theme_json("dark");
    for (i, contrast) in ["hard", "medium", "soft"].iter().enumerate() {
        assert_eq!(
            dark["themes"][i]["style"]["background"],
            colors["dark"]["background"][contrast]["bg0"]
        );
        assert_eq!(
            dark["themes"][i]["style"]["text"],
            colors["dark"]["foreground"]["fg"]
        );
    }
}

#[test]
fn output_is_byte_identical_across_runs() {
    let workspace = Workspace::new();
    let config = config_for(&workspace);

    generate::run(&config).unwrap();
    let first_dark = workspace.read_theme("dark");
    let first_light = workspace.read_theme("light");

    generate::run(&config).unwrap();
    assert_eq!(workspace.read_theme("dark"), first_dark);
    assert_eq!(workspace.read_theme("light"), first_light);
}

#[test]
fn serialization_keeps_table_order_and_four_space_indent() {
    let workspace = Workspace::new();
    generate::run(&config_for(&workspace)).unwrap();
    let text = workspace.read_theme("dark");

    let border = text.find("\"border\":").unwrap();
    let background = text.find("\"background\":").unwrap();
    let players = text.find("\"players\":").unwrap();
    let syntax = text.find("\"syntax\":").unwrap();
    assert!(border < background && background < players && players < syntax);
    assert!(text.starts_with("{\n    \"$schema\""));
    assert!(text.ends_with("}\n"));
}

#[test]
fn missing_slot_writes_nothing() {
    let workspace = Workspace::with_colors(&without_slot(repo_colors(), "green"));
    let err = generate::run(&config_for(&workspace)).unwrap_err();

    assert!(matches!(err, ThemeError::MissingColorSlot { ref slot } if slot == "green"));
    assert!(!workspace.themes_dir().exists());
}

#[test]
fn missing_light_slot_leaves_existing_dark_file_untouched() {
    let mut colors = repo_colors();
    colors["light"]["foreground"]
        .as_object_mut()
        .unwrap()
        .remove("orange");
    let workspace = Workspace::with_colors(&colors);
    std::fs::create_dir_all(workspace.themes_dir()).unwrap();
    std::fs::write(workspace.theme_path("dark"), "previous").unwrap();

    let err = generate::run(&config_for(&workspace)).unwrap_err();
    assert!(matches!(err, ThemeError::MissingColorSlot { ref slot } if slot == "orange"));
    assert_eq!(workspace.read_theme("dark"), "previous");
    assert!(!workspace.theme_path("light").exists());
}

#[test]
fn missing_source_is_reported() {
    let workspace = Workspace::empty();
    let err = generate::run(&config_for(&workspace)).unwrap_err();
    assert!(matches!(err, ThemeError::SourceNotFound { .. }));
}

#[test]
fn malformed_source_is_reported() {
    let workspace = Workspace::with_raw_colors(r#"{"dark": {"background": {}}}"#);
    let err = generate::run(&config_for(&workspace)).unwrap_err();
    assert!(matches!(err, ThemeError::SourceMalformed { .. }));
}

#[test]
fn unwritable_output_dir_fails() {
    let workspace = Workspace::new();
    // A regular file where the output directory should be.
    std::fs::write(workspace.themes_dir(), "not a directory").unwrap();

    let err = generate::run(&config_for(&workspace)).unwrap_err();
    assert!(matches!(err, ThemeError::OutputWriteFailed { .. }));
}

#[test]
fn dry_run_reports_without_writing() {
    let workspace = Workspace::new();
    let config = GeneratorConfig {
        dry_run: true,
        ..config_for(&workspace)
    };
    let report = generate::run(&config).unwrap();

    assert!(report.dry_run);
    assert_eq!(report.variant_names().count(), 6);
    assert!(!workspace.themes_dir().exists());
}

#[test]
fn selection_writes_only_requested_file() {
    let workspace = Workspace::new();
    let config = config_for(&workspace)
        .with_appearance(Appearance::Dark)
        .with_contrasts(&[Contrast::Medium]);
    let report = generate::run(&config).unwrap();

    assert_eq!(report.files.len(), 1);
    assert!(!workspace.theme_path("light").exists());
    assert_variant_names(&workspace.theme_json("dark"), &["Everforest Dark Medium"]);
}
