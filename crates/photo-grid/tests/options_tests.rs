use photo_grid::*;

#[test]
fn test_default_options_are_valid() {
    let options = GridOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.paper, PaperSize::A4);
    assert_eq!(options.border, BorderPreset::Bordered);
}

#[test]
fn test_border_presets() {
    assert_eq!(
        BorderPreset::Bordered.margins(),
        GridMargins {
            outer_mm: 15.0,
            gap_mm: 10.0
        }
    );
    assert_eq!(
        BorderPreset::Borderless.margins(),
        GridMargins {
            outer_mm: 5.0,
            gap_mm: 0.0
        }
    );
}

#[test]
fn test_validation_rejects_empty_paper() {
    let options = GridOptions {
        paper: PaperSize::Custom {
            width_mm: 0.0,
            height_mm: 297.0,
        },
        ..Default::default()
    };
    match options.validate() {
        Err(GridError::Config(msg)) => assert!(msg.contains("Paper size")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_negative_margins() {
    let options = GridOptions {
        border: BorderPreset::Custom {
            outer_mm: -1.0,
            gap_mm: 0.0,
        },
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(GridError::Config(_))));
}

#[test]
fn test_validation_rejects_margins_wider_than_page() {
    let options = GridOptions {
        paper: PaperSize::A5,
        border: BorderPreset::Custom {
            outer_mm: 80.0,
            gap_mm: 0.0,
        },
        ..Default::default()
    };
    match options.validate() {
        Err(GridError::Config(msg)) => assert!(msg.contains("leave no room")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.json");
    let options = GridOptions {
        paper: PaperSize::Letter,
        border: BorderPreset::Borderless,
        stretch: true,
        title: Some("Family".to_string()),
    };

    options.save(&path).await.unwrap();
    let loaded = GridOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_partial_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.json");
    std::fs::write(&path, r#"{ "stretch": true }"#).unwrap();

    let loaded = GridOptions::load(&path).await.unwrap();
    assert!(loaded.stretch);
    assert_eq!(loaded.paper, PaperSize::A4);
    assert_eq!(loaded.title, None);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = GridOptions::load(&path).await;
    assert!(matches!(result, Err(GridError::Config(_))));
}
