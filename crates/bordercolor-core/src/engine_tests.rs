use super::fake::{FRAMED, FakeCompositor, POPUP};
use super::*;
use crate::compositor::DWMWA_COLOR_DEFAULT;

fn engine(compositor: FakeCompositor) -> Engine<FakeCompositor> {
    let engine = Engine::new(compositor);
    engine.colors().reload(Some("#0078D4"), Some("#808080"));
    engine
}

#[test]
fn apply_activating_writes_active_color() {
    // Arrange
    let engine = engine(FakeCompositor::default().with_window(100, FRAMED));

    // Act
    engine.apply(100, true);

    // Assert
    assert_eq!(engine.compositor().writes(), vec![(100, 0x00D4_7800)]);
}

#[test]
fn apply_deactivating_writes_inactive_color() {
    // Arrange
    let engine = engine(FakeCompositor::default().with_window(100, FRAMED));

    // Act
    engine.apply(100, false);

    // Assert
    assert_eq!(engine.compositor().writes(), vec![(100, 0x0080_8080)]);
}

#[test]
fn apply_skips_ineligible_window() {
    // Arrange
    let engine = engine(FakeCompositor::default().with_window(100, POPUP));

    // Act
    engine.apply(100, true);

    // Assert
    assert!(engine.compositor().writes().is_empty());
}

#[test]
fn apply_skips_stale_handle() {
    // Arrange
    let engine = engine(FakeCompositor::default());

    // Act
    engine.apply(0xDEAD, true);

    // Assert
    assert!(engine.compositor().writes().is_empty());
}

#[test]
fn apply_twice_writes_twice_identically() {
    // Arrange
    let engine = engine(FakeCompositor::default().with_window(100, FRAMED));

    // Act
    engine.apply(100, true);
    engine.apply(100, true);

    // Assert
    let writes = engine.compositor().writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0], writes[1]);
}

#[test]
fn failed_write_is_not_retried() {
    // Arrange
    let compositor = FakeCompositor {
        write_result: 0x8000_4005_u32 as i32, // E_FAIL
        ..Default::default()
    }
    .with_window(100, FRAMED);
    let engine = engine(compositor);

    // Act
    engine.apply(100, true);

    // Assert
    assert_eq!(engine.compositor().writes().len(), 1);
}

#[test]
fn apply_follows_reloaded_colors() {
    // Arrange
    let engine = engine(FakeCompositor::default().with_window(100, FRAMED));
    engine.colors().reload(Some("#FF0000"), Some("#0000FF"));

    // Act
    engine.apply(100, true);
    engine.apply(100, false);

    // Assert
    assert_eq!(
        engine.compositor().writes(),
        vec![(100, 0x0000_00FF), (100, 0x00FF_0000)]
    );
}

#[test]
fn apply_all_gives_foreground_window_the_active_color() {
    // Arrange
    let mut compositor = FakeCompositor::default()
        .with_window(100, FRAMED)
        .with_window(200, FRAMED)
        .with_window(300, POPUP);
    compositor.foreground = 200;
    let engine = engine(compositor);

    // Act
    let visited = engine.apply_all();

    // Assert
    assert_eq!(visited, 3);
    assert_eq!(
        engine.compositor().writes(),
        vec![(100, 0x0080_8080), (200, 0x00D4_7800)]
    );
}

#[test]
fn reset_all_writes_sentinel_to_each_eligible_window() {
    // Arrange
    let engine = engine(
        FakeCompositor::default()
            .with_window(100, FRAMED)
            .with_window(200, FRAMED)
            .with_window(300, POPUP),
    );

    // Act
    let reset = engine.reset_all();

    // Assert
    assert_eq!(reset, 2);
    assert_eq!(
        engine.compositor().writes(),
        vec![(100, DWMWA_COLOR_DEFAULT), (200, DWMWA_COLOR_DEFAULT)]
    );
}

#[test]
fn reset_all_skips_windows_destroyed_mid_enumeration() {
    // Arrange
    let mut compositor = FakeCompositor::default().with_window(100, FRAMED);
    compositor.owned.push(999); // enumerated, then destroyed
    let engine = engine(compositor);

    // Act
    let reset = engine.reset_all();

    // Assert
    assert_eq!(reset, 1);
    assert_eq!(engine.compositor().writes(), vec![(100, DWMWA_COLOR_DEFAULT)]);
}
