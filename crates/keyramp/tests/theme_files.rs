//! Loading themes from disk.

use std::fs;

use keyramp::color::ColorSpace;
use keyramp::{Theme, ThemeError};
use tempfile::TempDir;

const YAML: &str = r##"
background: "#1e1e1e"
ratios: [3, 4.5, 7]
colors:
  - name: teal
    keys: ["#008080", "#66cccc", "#003333"]
    space: LCH
    smooth: true
"##;

#[test]
fn yaml_file_is_named_after_its_stem() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("night.yaml");
    fs::write(&path, YAML).unwrap();

    let theme = Theme::from_file(&path).unwrap();
    assert_eq!(theme.name(), Some("night"));
    assert_eq!(theme.source_path(), Some(path.as_path()));

    let teal = theme.color("teal").unwrap();
    assert_eq!(teal.scale.space(), ColorSpace::Lch);
    assert!(teal.scale.is_smooth());
}

#[test]
fn dark_background_luminosity_rises_with_ratio() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("night.yml");
    fs::write(&path, YAML).unwrap();

    let lums = Theme::from_file(&path).unwrap().luminosities();
    assert!(lums.windows(2).all(|w| w[0] < w[1]), "{:?}", lums);
}

#[test]
fn json_file_keeps_declared_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.json");
    fs::write(
        &path,
        r##"{
            "name": "brand",
            "background": "white",
            "ratios": [4.5],
            "colors": [{"name": "red", "keys": ["#ff0000"], "space": "HSLuv"}]
        }"##,
    )
    .unwrap();

    let theme = Theme::from_file(&path).unwrap();
    assert_eq!(theme.name(), Some("brand"));
    assert_eq!(theme.color("red").unwrap().scale.space(), ColorSpace::Hsluv);
}

#[test]
fn refresh_picks_up_edits() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("live.yaml");
    fs::write(&path, YAML).unwrap();

    let mut theme = Theme::from_file(&path).unwrap();
    assert_eq!(theme.ratio_values(), vec![3.0, 4.5, 7.0]);

    fs::write(&path, YAML.replace("[3, 4.5, 7]", "[2]")).unwrap();
    theme.refresh().unwrap();
    assert_eq!(theme.ratio_values(), vec![2.0]);
    assert_eq!(theme.name(), Some("live"));
}

#[test]
fn refresh_without_source_fails() {
    let mut theme = Theme::from_yaml(YAML).unwrap();
    assert!(matches!(theme.refresh(), Err(ThemeError::NoSource)));
}

#[test]
fn missing_file() {
    let err = Theme::from_file("/nonexistent/path/theme.yaml").unwrap_err();
    assert!(matches!(err, ThemeError::Io { .. }));
}

#[test]
fn unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.toml");
    fs::write(&path, "").unwrap();
    assert!(matches!(
        Theme::from_file(&path),
        Err(ThemeError::UnsupportedFormat(ext)) if ext == "toml"
    ));
}

#[test]
fn saved_yaml_loads_back() {
    let theme = Theme::from_yaml(YAML).unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.yaml");
    fs::write(&path, theme.to_yaml().unwrap()).unwrap();

    let back = Theme::from_file(&path).unwrap();
    assert_eq!(back.colors(), theme.colors());
    assert_eq!(back.ratio_values(), theme.ratio_values());
}
