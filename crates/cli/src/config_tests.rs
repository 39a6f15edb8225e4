// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn test_init_and_load_config() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path()).unwrap();

    let config = Config::load(&work_dir).unwrap();
    assert_eq!(config, Config::default());
    assert!(config.confirm_deletes);
}

#[test]
fn test_init_writes_empty_board() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path()).unwrap();

    let board_path = work_dir.join(BOARD_FILE_NAME);
    assert!(board_path.exists());
    let board = FileStore::new(&board_path).load().unwrap();
    assert!(board.is_empty());
}

#[test]
fn test_already_initialized() {
    let temp = TempDir::new().unwrap();
    init_work_dir(temp.path()).unwrap();

    let result = init_work_dir(temp.path());
    assert!(matches!(result, Err(Error::AlreadyInitialized(_))));
    if let Err(e) = result {
        assert!(e.to_string().contains("already initialized"));
    }
}

#[test]
fn test_init_succeeds_with_empty_kb_dir() {
    let temp = TempDir::new().unwrap();
    let work_dir = temp.path().join(".kb");
    std::fs::create_dir_all(&work_dir).unwrap();

    let result = init_work_dir(temp.path());
    assert!(result.is_ok());
    assert!(work_dir.join("config.toml").exists());
}

#[test]
fn test_init_keeps_existing_board() {
    let temp = TempDir::new().unwrap();
    let work_dir = temp.path().join(".kb");
    std::fs::create_dir_all(&work_dir).unwrap();
    let board = r#"{"workstreams":[{"id":"ws-1","name":"Keep","cards":[]}]}"#;
    std::fs::write(work_dir.join(BOARD_FILE_NAME), board).unwrap();

    init_work_dir(temp.path()).unwrap();

    let loaded = FileStore::new(work_dir.join(BOARD_FILE_NAME)).load().unwrap();
    assert_eq!(loaded.workstreams[0].name, "Keep");
}

#[test]
fn test_config_load_missing_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    assert_eq!(Config::load(temp.path()).unwrap(), Config::default());
}

#[test]
fn test_config_load_invalid_toml() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "board = [").unwrap();

    let err = Config::load(temp.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_config_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let config = Config {
        board: Some("boards/team.json".to_string()),
        confirm_deletes: false,
    };
    config.save(temp.path()).unwrap();

    assert_eq!(Config::load(temp.path()).unwrap(), config);
}

#[test]
fn test_confirm_deletes_defaults_to_true() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "board = \"b.json\"\n").unwrap();

    let config = Config::load(temp.path()).unwrap();
    assert!(config.confirm_deletes);
    assert_eq!(config.board.as_deref(), Some("b.json"));
}

#[test]
fn test_board_path_default() {
    let work_dir = PathBuf::from("/project/.kb");
    let path = get_board_path(&work_dir, &Config::default());
    assert_eq!(path, PathBuf::from("/project/.kb/board.json"));
}

#[test]
fn test_board_path_relative_to_project_root() {
    let work_dir = PathBuf::from("/project/.kb");
    let config = Config {
        board: Some("boards/team.json".to_string()),
        ..Config::default()
    };
    let path = get_board_path(&work_dir, &config);
    assert_eq!(path, PathBuf::from("/project/boards/team.json"));
}

#[test]
fn test_board_path_absolute() {
    let work_dir = PathBuf::from("/project/.kb");
    let config = Config {
        board: Some("/shared/board.json".to_string()),
        ..Config::default()
    };
    let path = get_board_path(&work_dir, &config);
    assert_eq!(path, PathBuf::from("/shared/board.json"));
}

#[test]
fn test_find_work_dir_walks_up() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path()).unwrap();
    let nested = temp.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_work_dir_from(&nested).unwrap(), work_dir);
}

#[test]
fn test_find_work_dir_not_initialized() {
    let temp = TempDir::new().unwrap();
    let result = find_work_dir_from(temp.path());
    // An ancestor of the temp dir may itself hold a .kb.
    if let Err(e) = result {
        assert!(matches!(e, Error::NotInitialized));
    }
}
