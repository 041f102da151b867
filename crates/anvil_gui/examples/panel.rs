// Minimal headless demo: builds a settings panel, drives it with a scripted
// pointer instead of a real window, and prints what the widgets report.
// Useful for seeing the callback flow without a graphics backend.

use std::cell::Cell;
use std::rc::Rc;

use anvil_core::PointerState;
use anvil_gui::{
    Checkbox, Color, CommandCanvas, Container, Group, Orientation, Slider, WidgetKind, Widgets,
};
use glam::Vec2;

fn init_logger() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply()
        .expect("logger init");
}

fn main() {
    init_logger();

    let mut widgets = Widgets::new();
    let mut panel = Container::new(50.0, 50.0, 300.0, 200.0)
        .with_background(Color::DARK_GRAY);

    // ── Widgets ─────────────────────────────────────────────────────────────

    let ok = widgets
        .spawn("ok")
        .with_position(10.0, 10.0)
        .with_size(80.0, 24.0)
        .on_state_changed(|down| log::info!("ok button: {}", if down { "down" } else { "up" }))
        .build();

    let mute = widgets
        .spawn("mute")
        .with_kind(WidgetKind::Checkbox(Checkbox::default()))
        .with_position(10.0, 44.0)
        .with_size(16.0, 16.0)
        .on_state_changed(|checked| log::info!("mute: {checked}"))
        .build();

    let volume = widgets
        .spawn("volume")
        .with_kind(WidgetKind::Slider(Slider::new(Orientation::Horizontal)))
        .with_position(10.0, 70.0)
        .with_size(200.0, 12.0)
        .on_editing_finished(|_| log::info!("volume: drag finished"))
        .build();

    // Three radio buttons; exclusion is coordinated here on the host side,
    // not inside the toolkit. The momentary state-changed callbacks record
    // which member was pressed last.
    let selected = Rc::new(Cell::new(0usize));
    let mut quality = Group::new("quality");
    for (i, label) in ["low", "medium", "high"].iter().enumerate() {
        let selected = selected.clone();
        let key = widgets
            .spawn(*label)
            .with_kind(WidgetKind::RadioButton(Default::default()))
            .with_position(10.0 + 30.0 * i as f32, 100.0)
            .with_size(20.0, 20.0)
            .on_state_changed(move |down| {
                if down {
                    selected.set(i);
                }
            })
            .build();
        quality.add(key);
    }

    for &key in quality.keys() {
        panel.add(&mut widgets, key);
    }
    panel.add(&mut widgets, ok);
    panel.add(&mut widgets, mute);
    panel.add(&mut widgets, volume);

    // ── Scripted interaction ────────────────────────────────────────────────
    // Window coordinates; the panel sits at (50, 50) so local (x, y) is
    // window (x + 50, y + 50).

    let script: &[(f32, f32, bool)] = &[
        (60.0, 60.0, false),  // hover the ok button
        (60.0, 60.0, true),   // press it
        (60.0, 60.0, false),  // release it
        (65.0, 100.0, true),  // click the mute checkbox
        (65.0, 100.0, false),
        (110.0, 126.0, true), // grab the volume slider mid-track
        (160.0, 126.0, true), // drag right
        (160.0, 126.0, false),
        (95.0, 160.0, true),  // press the "medium" radio
        (95.0, 160.0, false),
    ];

    let mut pointer = PointerState::new();
    for &(x, y, down) in script {
        pointer.set_position(Vec2::new(x, y));
        pointer.set_button(0, down);
        panel.update(&mut widgets, &pointer);
    }

    // ── Results ─────────────────────────────────────────────────────────────

    let muted = widgets.get(mute).map(|e| e.is_checked()).unwrap_or(false);
    let level = widgets.get(volume).map(|e| e.value()).unwrap_or(0.0);
    log::info!("mute ended up {muted}, volume at {level:.2}");
    log::info!("selected quality: {}", selected.get());

    let mut canvas = CommandCanvas::new();
    panel.draw(&widgets, &mut canvas);
    log::info!("draw pass recorded {} commands", canvas.commands().len());
}
