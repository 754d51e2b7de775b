//! Tests for CalculatorService

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use wallcalc::application::services::CalculatorService;
use wallcalc::application::{ApplicationError, DataSource};
use wallcalc::config::Settings;
use wallcalc::domain::{DelimiterMode, DomainError, Room};
use wallcalc::infrastructure::di::ServiceContainer;
use wallcalc::infrastructure::traits::{FileSystem, RealFileSystem};
use wallcalc::util::testing;

/// In-memory filesystem; unknown paths fail with NotFound.
#[derive(Default)]
struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    fn with_file(path: &str, content: &str) -> Self {
        let fs = Self::default();
        fs.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
        fs
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn ensure_parent(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

fn service(content: &str, settings: Settings) -> CalculatorService {
    testing::init_test_setup();
    let fs = Arc::new(MemoryFileSystem::with_file("rooms.txt", content));
    CalculatorService::new(fs, Arc::new(settings))
}

fn source() -> DataSource {
    DataSource::new("rooms.txt").unwrap()
}

fn positions(rooms: &[Room]) -> Vec<usize> {
    rooms.iter().map(Room::position).collect()
}

#[test]
fn given_room_file_when_calculating_then_report_has_all_sections() {
    // Arrange
    let content = "2x2x2\n2x3x4\n100x100x100\n2x3x4\n1x2x3\n";
    let service = service(content, Settings::default());

    // Act
    let report = service.calculate(&source()).unwrap();

    // Assert
    assert_eq!(report.room_count, 5);
    assert_eq!(positions(&report.cubic_rooms), vec![3, 1]);
    assert_eq!(positions(&report.duplicate_rooms), vec![2, 4]);
    // with extra: 28 + 58 + 70000 + 58 + 24
    assert_eq!(report.total_area, 70168.0);
    assert!(report.include_extra);
    assert_eq!(report.summary_line(), "70168 square feets");
}

#[test]
fn given_no_extra_setting_when_calculating_then_base_area_only() {
    let settings = Settings {
        add_extra: false,
        unit: "meter".into(),
        ..Default::default()
    };
    let service = service("2x3x4\n", settings);

    let report = service.calculate(&source()).unwrap();

    assert_eq!(report.total_area, 52.0);
    assert_eq!(report.summary_line(), "52 square meters");
}

#[test]
fn given_empty_file_when_calculating_then_empty_report() {
    let service = service("", Settings::default());

    let report = service.calculate(&source()).unwrap();

    assert_eq!(report.room_count, 0);
    assert_eq!(report.total_area, 0.0);
    assert!(report.cubic_rooms.is_empty());
    assert!(report.duplicate_rooms.is_empty());
}

#[test]
fn given_custom_delimiter_when_loading_then_rooms_parsed() {
    let settings = Settings {
        delimiter: ";".into(),
        ..Default::default()
    };
    let service = service("2;3;4\r\n5;5;5\r\n", settings);

    let rooms = service.load_rooms(&source()).unwrap();

    assert_eq!(rooms, vec![Room::new(1, 2.0, 3.0, 4.0), Room::new(2, 5.0, 5.0, 5.0)]);
}

#[test]
fn given_regex_delimiter_when_loading_then_rooms_parsed() {
    let settings = Settings {
        delimiter: r"\s*[x×]\s*".into(),
        delimiter_mode: DelimiterMode::Regex,
        ..Default::default()
    };
    let service = service("2 x 3×4\n", settings);

    let rooms = service.load_rooms(&source()).unwrap();

    assert_eq!(rooms, vec![Room::new(1, 2.0, 3.0, 4.0)]);
}

#[test]
fn given_blank_line_when_not_skipping_then_parse_error() {
    let service = service("1x1x1\n\n2x2x2\n", Settings::default());

    let err = service.load_rooms(&source()).unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::RoomParse { .. })
    ));
}

#[test]
fn given_blank_line_when_skipping_then_positions_are_line_numbers() {
    let settings = Settings {
        skip_blank_lines: true,
        ..Default::default()
    };
    let service = service("1x1x1\n\n2x2x2\n", settings);

    let rooms = service.load_rooms(&source()).unwrap();

    assert_eq!(positions(&rooms), vec![1, 3]);
}

#[test]
fn given_short_line_when_calculating_then_invalid_dimensions() {
    let service = service("2x3x4\n2x3\n", Settings::default());

    let err = service.calculate(&source()).unwrap_err();

    match err {
        ApplicationError::Domain(DomainError::InvalidDimensions {
            position,
            expected,
            actual,
        }) => {
            assert_eq!(position, 2);
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn given_non_numeric_line_when_calculating_then_room_parse_error_with_line() {
    let service = service("axbxc\n", Settings::default());

    let err = service.calculate(&source()).unwrap_err();

    match err {
        ApplicationError::Domain(DomainError::RoomParse {
            line, delimiter, ..
        }) => {
            assert_eq!(line, "axbxc");
            assert_eq!(delimiter, "x");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn given_missing_file_when_calculating_then_data_source_error() {
    let service = service("", Settings::default());
    let missing = DataSource::new("elsewhere.txt").unwrap();

    let err = service.calculate(&missing).unwrap_err();

    match err {
        ApplicationError::DataSource { source_id, source } => {
            assert_eq!(source_id, "elsewhere.txt");
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn given_invalid_regex_when_calculating_then_invalid_delimiter() {
    let settings = Settings {
        delimiter: "[".into(),
        delimiter_mode: DelimiterMode::Regex,
        ..Default::default()
    };
    let service = service("1x1x1\n", settings);

    let err = service.calculate(&source()).unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InvalidDelimiter { .. })
    ));
}

#[test]
fn given_real_file_when_calculating_via_container_then_reads_from_disk() {
    // Arrange
    testing::init_test_setup();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("rooms.txt");
    std::fs::write(&path, "3x3x3\n3x3x3\n1x2x3\n").unwrap();
    let container = ServiceContainer::with_deps(Settings::default(), Arc::new(RealFileSystem));

    // Act
    let report = container
        .calculator()
        .calculate(&DataSource::new(path.to_str().unwrap()).unwrap())
        .unwrap();

    // Assert
    assert_eq!(positions(&report.cubic_rooms), vec![1, 2]);
    assert_eq!(positions(&report.duplicate_rooms), vec![1, 2]);
    // 63 + 63 + 24
    assert_eq!(report.total_area, 150.0);
}

#[test]
fn given_same_rooms_when_report_twice_then_identical() {
    let service = service("", Settings::default());
    let rooms = vec![
        Room::new(1, 0.1, 0.2, 0.3),
        Room::new(2, 0.4, 0.5, 0.6),
        Room::new(3, 0.7, 0.8, 0.9),
    ];

    let first = service.report(&rooms);
    let second = service.report(&rooms);

    assert_eq!(first.total_area.to_bits(), second.total_area.to_bits());
    assert_eq!(first, second);
}
