//! End-to-end advisory runs over real image files.

mod common;

use common::fixtures::names;
use common::ImageFolder;
use optimus_img::analysis::CompressionLevel;
use optimus_img::models::{AdvisoryOutcome, AppConfig, PROGRESSIVE_MARKER};
use optimus_img::services::{
    exclude_progressive, find_images, Advisor, AdvisorOptions, AdvisorSummary, ImageCodec,
};
use pretty_assertions::assert_eq;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

fn advisor() -> Advisor<ImageCodec> {
    Advisor::new(ImageCodec::new(), AdvisorOptions::default())
}

#[test]
fn test_standard_folder_advisories() {
    let folder = ImageFolder::standard();

    let images = find_images(folder.path());
    let advisories = advisor().analyse(&images);

    // Discovery returns names in sorted order
    assert_eq!(advisories.len(), 4);
    common::assert_failed(&advisories[0]);
    assert_eq!(advisories[0].path(), folder.join(names::BROKEN));
    common::assert_outcome(
        &advisories[1],
        &folder.join(names::GRADIENT),
        AdvisoryOutcome::NoAction,
    );
    common::assert_outcome(
        &advisories[2],
        &folder.join(names::LOGO),
        AdvisoryOutcome::IconSuggestion,
    );
    assert_eq!(advisories[3].path(), folder.join(names::NOISE));
    common::assert_compression(&advisories[3], CompressionLevel::Low);

    assert_eq!(
        AdvisorSummary::from_advisories(&advisories),
        AdvisorSummary {
            total: 4,
            no_action: 1,
            compression_warnings: 1,
            icon_suggestions: 1,
            errors: 1,
        }
    );
}

#[test]
fn test_input_order_is_preserved() {
    let folder = ImageFolder::standard();
    let images = vec![
        folder.join(names::NOISE),
        folder.join(names::BROKEN),
        folder.join(names::LOGO),
    ];

    let advisories = advisor().analyse(&images);

    let paths: Vec<_> = advisories.iter().map(|a| a.path().to_path_buf()).collect();
    assert_eq!(paths, images);
    common::assert_failed(&advisories[1]);
    assert!(advisories[2].is_actionable());
}

#[test]
fn test_nested_folders_and_progressive_variants() {
    let folder = ImageFolder::new();
    folder.logo("icons/brand/logo.png");
    folder.gradient("photos/hero.jpeg");
    folder.gradient("photos/hero-OptimusIMG-progressive.jpeg");
    folder.text("photos/README.txt");

    let images = exclude_progressive(find_images(folder.path()), PROGRESSIVE_MARKER);

    assert_eq!(
        images,
        vec![
            folder.join("icons/brand/logo.png"),
            folder.join("photos/hero.jpeg"),
        ]
    );

    let advisories = advisor().analyse(&images);
    assert_eq!(advisories[0].outcome, AdvisoryOutcome::IconSuggestion);
    assert_eq!(advisories[1].outcome, AdvisoryOutcome::NoAction);
}

#[test]
fn test_config_changes_verdict() {
    let folder = ImageFolder::new();
    let logo = folder.logo(names::LOGO);

    // A limit of one color makes the two-color logo photographic
    let mut config = AppConfig::default();
    config.palette.color_limit = 1;
    let options = AdvisorOptions::from_config(&config).unwrap();

    let advisories = Advisor::new(ImageCodec::new(), options).analyse(&[logo.clone()]);

    common::assert_outcome(&advisories[0], &logo, AdvisoryOutcome::NoAction);
}

#[test]
fn test_missing_folder_yields_empty_report() {
    let images = find_images(std::path::Path::new("/nonexistent/optimus/images"));
    assert!(advisor().analyse(&images).is_empty());
}

#[test]
fn test_cancellation_stops_before_first_image() {
    let folder = ImageFolder::standard();
    let images = find_images(folder.path());

    let advisories = advisor()
        .with_cancellation(Arc::new(AtomicBool::new(true)))
        .analyse(&images);

    assert!(advisories.is_empty());
}

#[test]
fn test_json_report() {
    let folder = ImageFolder::new();
    let logo = folder.logo(names::LOGO);
    let noise = folder.noise(names::NOISE);

    let advisories = advisor().analyse(&[logo.clone(), noise.clone()]);
    let json = serde_json::to_value(&advisories).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            { "path": logo, "outcome": "icon-suggestion" },
            { "path": noise, "outcome": "compression-warning", "level": "low-compression" },
        ])
    );
}
