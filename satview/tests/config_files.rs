use satview_lib::config::{Config, PlotFormat};
use std::{collections::HashSet, fs, path::Path};

const CONFIG_FILES: &[&str] = &["default.toml", "stations.toml", "weather_json.toml"];

#[test]
fn example_view_config_file_list_matches_expected() {
    let cfg_files: HashSet<String> = fs::read_dir("../configs")
        .unwrap()
        .map(|d| d.unwrap().file_name().into_string().unwrap())
        .collect();
    let expected: HashSet<String> = CONFIG_FILES.iter().map(|f| f.to_string()).collect();
    assert_eq!(cfg_files, expected, "Example configs directory is missing an expected config file or contains a new config file that should be tested");
}

#[test]
fn example_view_config_files_parse() {
    let dir = Path::new("../configs");
    for cfg_file in CONFIG_FILES {
        let p = dir.join(cfg_file);
        if let Err(e) = Config::load(&p) {
            panic!("Failed to load '{}'. {e}", p.display());
        }
    }
}

#[test]
fn weather_config_uses_category_alias() {
    let cfg = Config::load("../configs/weather_json.toml").unwrap();
    assert_eq!(cfg.categories, vec!["weather", "noaa", "goes"]);
    assert_eq!(cfg.plot.unwrap().format, PlotFormat::Json);
}
