use std::cell::Cell;

use super::*;
use crate::engine::fake::{FRAMED, FakeCompositor, POPUP};

const DWMWA_NCRENDERING_POLICY: u32 = 2;
const WM_PAINT: u32 = 0x000F;
const WA_ACTIVE: usize = 1;
const WA_CLICKACTIVE: usize = 2;
const E_INVALIDARG: i32 = 0x8007_0057_u32 as i32;

fn engine() -> Engine<FakeCompositor> {
    let engine = Engine::new(
        FakeCompositor::default()
            .with_window(100, FRAMED)
            .with_window(200, POPUP),
    );
    engine.colors().reload(Some("#0078D4"), Some("#808080"));
    engine
}

// -- set_attribute --

#[test]
fn border_color_on_eligible_window_is_suppressed() {
    // Arrange
    let engine = engine();
    let forwarded = Cell::new(false);

    // Act
    let hr = engine.set_attribute(100, DWMWA_BORDER_COLOR, || {
        forwarded.set(true);
        E_INVALIDARG
    });

    // Assert
    assert_eq!(hr, S_OK);
    assert!(!forwarded.get());
    assert!(engine.compositor().writes().is_empty());
}

#[test]
fn border_color_on_ineligible_window_is_forwarded() {
    // Arrange
    let engine = engine();
    let forwarded = Cell::new(false);

    // Act
    let hr = engine.set_attribute(200, DWMWA_BORDER_COLOR, || {
        forwarded.set(true);
        E_INVALIDARG
    });

    // Assert
    assert!(forwarded.get());
    assert_eq!(hr, E_INVALIDARG);
}

#[test]
fn border_color_on_stale_handle_is_forwarded() {
    // Arrange
    let engine = engine();

    // Act
    let hr = engine.set_attribute(0xDEAD, DWMWA_BORDER_COLOR, || E_INVALIDARG);

    // Assert
    assert_eq!(hr, E_INVALIDARG);
}

#[test]
fn other_attributes_are_forwarded_with_original_result() {
    // Arrange
    let engine = engine();
    let forwarded = Cell::new(0);

    // Act
    let hr = engine.set_attribute(100, DWMWA_NCRENDERING_POLICY, || {
        forwarded.set(forwarded.get() + 1);
        E_INVALIDARG
    });

    // Assert
    assert_eq!(forwarded.get(), 1);
    assert_eq!(hr, E_INVALIDARG);
}

// -- window_proc --

#[test]
fn activate_writes_active_color_after_original() {
    // Arrange
    let engine = engine();
    let order = std::cell::RefCell::new(Vec::new());

    // Act
    let result = engine.window_proc(100, WM_ACTIVATE, WA_ACTIVE, || {
        order.borrow_mut().push("original");
        assert!(engine.compositor().writes().is_empty());
        42
    });

    // Assert
    assert_eq!(result, 42);
    assert_eq!(*order.borrow(), vec!["original"]);
    assert_eq!(engine.compositor().writes(), vec![(100, 0x00D4_7800)]);
}

#[test]
fn click_activate_counts_as_activation() {
    // Arrange
    let engine = engine();

    // Act
    engine.window_proc(100, WM_ACTIVATE, WA_CLICKACTIVE, || 0);

    // Assert
    assert_eq!(engine.compositor().writes(), vec![(100, 0x00D4_7800)]);
}

#[test]
fn deactivate_writes_inactive_color() {
    // Arrange
    let engine = engine();

    // Act
    engine.window_proc(100, WM_NCACTIVATE, 0, || 1);

    // Assert
    assert_eq!(engine.compositor().writes(), vec![(100, 0x0080_8080)]);
}

#[test]
fn minimized_deactivation_is_not_mistaken_for_activation() {
    // Arrange
    let engine = engine();
    let minimized_inactive = 0x0001_0000 | WA_INACTIVE;

    // Act
    engine.window_proc(100, WM_ACTIVATE, minimized_inactive, || 0);

    // Assert
    assert_eq!(engine.compositor().writes(), vec![(100, 0x0080_8080)]);
}

#[test]
fn unrelated_messages_only_forward() {
    // Arrange
    let engine = engine();

    // Act
    let result = engine.window_proc(100, WM_PAINT, 1, || 7);

    // Assert
    assert_eq!(result, 7);
    assert!(engine.compositor().writes().is_empty());
}

#[test]
fn activation_of_ineligible_window_does_not_write() {
    // Arrange
    let engine = engine();

    // Act
    let result = engine.window_proc(200, WM_NCACTIVATE, 1, || 1);

    // Assert
    assert_eq!(result, 1);
    assert!(engine.compositor().writes().is_empty());
}

// -- dialog_proc --

#[test]
fn dialog_reacts_to_nc_activate() {
    // Arrange
    let engine = engine();

    // Act
    let result = engine.dialog_proc(100, WM_NCACTIVATE, 1, || 1);

    // Assert
    assert_eq!(result, 1);
    assert_eq!(engine.compositor().writes(), vec![(100, 0x00D4_7800)]);
}

#[test]
fn dialog_ignores_activate() {
    // Arrange
    let engine = engine();

    // Act
    let result = engine.dialog_proc(100, WM_ACTIVATE, WA_ACTIVE, || 3);

    // Assert
    assert_eq!(result, 3);
    assert!(engine.compositor().writes().is_empty());
}

// -- end to end --

#[test]
fn foreign_write_cannot_overwrite_enforced_color() {
    // Arrange
    let engine = engine();
    engine.window_proc(100, WM_NCACTIVATE, 1, || 1);

    // Act: some other code tries to restore the accent color.
    let hr = engine.set_attribute(100, DWMWA_BORDER_COLOR, || {
        engine.compositor().write_border_color(100, 0x0000_FF00)
    });

    // Assert
    assert_eq!(hr, S_OK);
    assert_eq!(engine.compositor().writes(), vec![(100, 0x00D4_7800)]);
}
