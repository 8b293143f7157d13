//! Byte-exact output of every emitter operation, captured through an
//! in-memory sink instead of standard output.

use std::thread;

use ansi_cout::{ColorBase, Emitter, EmitterConfig, ScreenMode, TextAttribute};
use ansi_cout_common::SharedBuffer;

fn emitter() -> (Emitter<SharedBuffer>, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let emitter = Emitter::with_config(buffer.clone(), EmitterConfig::new());
    (emitter, buffer)
}

// =============================================================================
// Cursor
// =============================================================================

#[test]
fn test_cursor_moves_for_sample_counts() {
    for n in [1u32, 5, 100] {
        let (mut e, buffer) = emitter();
        e.cursor_up(n).unwrap();
        assert_eq!(buffer.take(), format!("\x1b[{n}A").into_bytes());
        e.cursor_down(n).unwrap();
        assert_eq!(buffer.take(), format!("\x1b[{n}B").into_bytes());
        e.cursor_forward(n).unwrap();
        assert_eq!(buffer.take(), format!("\x1b[{n}C").into_bytes());
        e.cursor_backward(n).unwrap();
        assert_eq!(buffer.take(), format!("\x1b[{n}D").into_bytes());
    }
}

#[test]
fn test_cursor_save_and_restore() {
    let (mut e, buffer) = emitter();
    e.cursor_save().unwrap();
    assert_eq!(buffer.take(), b"\x1b[s");
    e.cursor_restore().unwrap();
    assert_eq!(buffer.take(), b"\x1b[u");
}

#[test]
fn test_position_is_emitted_without_final_byte() {
    let (mut e, buffer) = emitter();
    e.position(3, 7).unwrap();
    assert_eq!(buffer.contents_string(), "\x1b[3;7");
}

// =============================================================================
// Erase
// =============================================================================

#[test]
fn test_erase_sequences() {
    let (mut e, buffer) = emitter();
    e.erase_display().unwrap();
    assert_eq!(buffer.take(), b"\x1b[2J");
    e.erase_line().unwrap();
    assert_eq!(buffer.take(), b"\x1b[K");
}

// =============================================================================
// Graphics mode
// =============================================================================

#[test]
fn test_every_color_in_both_directions() {
    for color in ColorBase::ALL {
        let k = color.code();
        let (mut e, buffer) = emitter();

        e.foreground(color).unwrap();
        assert_eq!(buffer.take(), format!("\x1b[{}m", k + 40).into_bytes());

        e.background(color).unwrap();
        assert_eq!(buffer.take(), format!("\x1b[{}m", k + 30).into_bytes());
    }
}

#[test]
fn test_every_attribute_alone() {
    for attr in TextAttribute::ALL {
        let (mut e, buffer) = emitter();
        e.attribute(&[attr]).unwrap();
        assert_eq!(buffer.take(), format!("\x1b[{}m", attr.code()).into_bytes());
    }
}

#[test]
fn test_bold_underscore_joined_in_call_order() {
    let (mut e, buffer) = emitter();
    e.attribute(&[TextAttribute::Bold, TextAttribute::Underscore])
        .unwrap();
    assert_eq!(buffer.contents_string(), "\x1b[1;4m");
}

#[test]
fn test_set_graphics_mode_without_values() {
    let (mut e, buffer) = emitter();
    e.set_graphics_mode(&[]).unwrap();
    assert_eq!(buffer.contents_string(), "\x1b[m");
}

#[test]
fn test_set_graphics_mode_with_values() {
    let (mut e, buffer) = emitter();
    e.set_graphics_mode(&[0, 1, 31, 65535]).unwrap();
    assert_eq!(buffer.contents_string(), "\x1b[0;1;31;65535m");
}

#[test]
fn test_screen_mode_set_and_reset() {
    let (mut e, buffer) = emitter();
    e.set_mode(ScreenMode::LineWrapping).unwrap();
    e.reset_mode(ScreenMode::LineWrapping).unwrap();
    assert_eq!(buffer.contents_string(), "\x1b[=7h\x1b[=7l");
}

// =============================================================================
// Statelessness
// =============================================================================

#[test]
fn test_same_call_twice_gives_two_identical_copies() {
    let (mut e, buffer) = emitter();
    e.bold().unwrap();
    let first = buffer.take();
    e.bold().unwrap();
    let second = buffer.take();
    assert_eq!(first, second);

    e.cursor_up(2).unwrap();
    e.cursor_up(2).unwrap();
    assert_eq!(buffer.contents_string(), "\x1b[2A\x1b[2A");
}

#[test]
fn test_parallel_emitters_never_split_a_sequence() {
    let buffer = SharedBuffer::new();

    let handles: Vec<_> = (1..=4u32)
        .map(|n| {
            let sink = buffer.clone();
            thread::spawn(move || {
                let mut e = Emitter::with_config(sink, EmitterConfig::new());
                for _ in 0..50 {
                    e.cursor_forward(n).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let text = buffer.contents_string();
    for n in 1..=4u32 {
        assert_eq!(text.matches(&format!("\x1b[{n}C")).count(), 50);
    }
    assert_eq!(text.matches('\x1b').count(), 200);
}
