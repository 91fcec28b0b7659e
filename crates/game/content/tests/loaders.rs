use std::io::Write;
use std::path::{Path, PathBuf};

use skirmish_content::{ConfigLoader, ScenarioLoader};
use skirmish_core::{CoverTier, MatchConfig, Team, UnitId, UnitProfile};
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn data_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

#[test]
fn bundled_config_is_valid() {
    let config = ConfigLoader::load(&data_file("match.toml")).unwrap();
    assert_eq!(config.seed, 24301);
    assert_eq!(config.unit, MatchConfig::default().unit);
    assert_eq!(config.doctrine, MatchConfig::default().doctrine);
}

#[test]
fn bundled_scenario_is_valid() {
    let battlefield =
        ScenarioLoader::load(&data_file("crossing.ron"), &UnitProfile::default()).unwrap();
    assert_eq!(battlefield.roster(Team::Blue).len(), 3);
    assert_eq!(battlefield.roster(Team::Red).len(), 3);
    assert_eq!(battlefield.covers().len(), 9);
}

#[test]
fn config_errors_name_the_file() {
    let file = write_temp("[doctrine]\nstay_health_ratio = 1.5\n");
    let err = ConfigLoader::load(file.path()).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("doctrine.stay_health_ratio"), "{message}");
    assert!(message.contains(&file.path().display().to_string()), "{message}");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigLoader::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}

#[test]
fn scenario_placements_use_the_profile() {
    let file = write_temp(
        r#"(
            covers: [(position: (0.0, 4.0), tier: Half)],
            blue: [(id: 1, position: (0.0, 0.0), health: Some(35.0))],
            red: [(id: 2, position: (1.0, 8.0))],
        )"#,
    );
    let profile = UnitProfile {
        max_health: 80.0,
        ..UnitProfile::default()
    };
    let battlefield = ScenarioLoader::load(file.path(), &profile).unwrap();

    assert_eq!(battlefield.unit(UnitId(1)).unwrap().health(), 35.0);
    assert_eq!(battlefield.unit(UnitId(2)).unwrap().health(), 80.0);
    assert_eq!(battlefield.covers().iter().next().unwrap().tier, CoverTier::Half);
}

#[test]
fn duplicate_unit_ids_are_rejected() {
    let file = write_temp(
        r#"(
            blue: [(id: 1, position: (0.0, 0.0))],
            red: [(id: 1, position: (0.0, 8.0))],
        )"#,
    );
    let err = ScenarioLoader::load(file.path(), &UnitProfile::default()).unwrap_err();
    assert!(format!("{err:#}").contains("more than once"));
}

#[test]
fn malformed_scenario_fails_to_parse() {
    let file = write_temp("(blue: [], red: ");
    let err = ScenarioLoader::load_spec(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse scenario RON"));
}

#[test]
fn non_finite_placements_are_rejected() {
    for layout in [
        "(blue: [(id: 1, position: (NaN, 0.0))], red: [(id: 2, position: (0.0, 8.0))])",
        "(blue: [(id: 1, position: (0.0, 0.0))], red: [(id: 2, position: (0.0, inf))])",
        "(covers: [(position: (-inf, 4.0), tier: Full)], \
          blue: [(id: 1, position: (0.0, 0.0))], red: [(id: 2, position: (0.0, 8.0))])",
    ] {
        let file = write_temp(layout);
        let err = ScenarioLoader::load(file.path(), &UnitProfile::default()).unwrap_err();
        assert!(format!("{err:#}").contains("non-finite position"), "{err:#}");
    }
}
