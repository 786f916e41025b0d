// src/main.rs
use nannou::prelude::*;
use rand::Rng;
use std::time::Instant;

use hotspotvis::{
    animation::AnimationClock,
    config::*,
    controllers::{OscCommand, OscController, OscSender},
    models::{HotspotDef, Scene},
    views::{Backdrop, HotspotLayer},
};

struct Model {
    // Core components:
    scene: Scene,
    layer: HotspotLayer,
    backdrop: Backdrop,
    clock: AnimationClock,

    // Comms components:
    osc_controller: OscController,
    osc_sender: OscSender,

    random: rand::rngs::ThreadRng,

    // Style
    style: StyleConfig,

    // Attract mode
    attract_enabled: bool,
    attract_dwell: f32,
    last_attract: f32,

    // Markers added at runtime, newest last
    added_ids: Vec<String>,
    next_added: u32,

    // FPS
    last_update: Instant,
    fps: f32,

    // Message
    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Load the hotspot scene
    let scene_path = config.resolve_scene_path();
    let scene = Scene::load(scene_path).expect("Failed to load scene file");

    // Create OSC controller
    let osc_controller =
        OscController::new(config.osc.rx_port).expect("Failed to create OSC Controller");
    let osc_sender = OscSender::new(config.osc.rx_port).expect("Failed to create OSC Sender");

    // Create window
    app.new_window()
        .title("hotspotvis 0.1.2")
        .size(config.window.width, config.window.height)
        .msaa_samples(1)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .build()
        .unwrap();

    // One clock for the whole screen; markers and the backdrop subscribe to
    // it and it only runs while they do.
    let clock = AnimationClock::new(config.animation.clone());

    let mut layer = HotspotLayer::new();
    layer.mount_scene(&scene, &clock, &config.style);
    println!(
        "Mounted scene '{}' with {} hotspots",
        scene.name,
        layer.marker_count()
    );

    Model {
        scene,
        layer,
        backdrop: Backdrop::new(),
        clock,

        osc_controller,
        osc_sender,

        random: rand::thread_rng(),

        style: config.style,

        attract_enabled: config.attract.enabled,
        attract_dwell: config.attract.dwell,
        last_attract: 0.0,

        added_ids: Vec::new(),
        next_added: 1,

        // FPS
        last_update: Instant::now(),
        fps: 0.0,

        debug_flag: false,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        // clear every highlight
        Key::Space => {
            model.osc_sender.send_clear_highlights();
        }
        // highlight a random hotspot
        Key::H => {
            if let Some(id) = pick_random_id(model) {
                model.osc_sender.send_highlight_hotspot(&id, 1);
            }
        }
        // toggle overlay mode on the highlighted marker
        Key::O => {
            if let Some(id) = model.layer.highlighted_id().map(String::from) {
                let on = !model.layer.is_overlay_active(&id);
                model.osc_sender.send_set_overlay(&id, on as i32);
            }
        }
        // drop a new marker somewhere on screen
        Key::N => {
            let id = format!("extra_{}", model.next_added);
            model.next_added += 1;
            let x = model.random.gen_range(0.1..0.9);
            let y = model.random.gen_range(0.1..0.9);
            let shape_kind = if model.random.gen_bool(0.5) {
                "area"
            } else {
                "point"
            };
            model.osc_sender.send_add_hotspot(&id, x, y, shape_kind);
            model.added_ids.push(id);
        }
        // remove the newest runtime marker
        Key::X => {
            if let Some(id) = model.added_ids.pop() {
                model.osc_sender.send_remove_hotspot(&id);
            }
        }
        Key::V => {
            model.osc_sender.send_toggle_layer();
        }
        Key::B => {
            model.osc_sender.send_toggle_backdrop();
        }

        /***************** Below functions aren't routed through OSC ****************** */
        Key::A => {
            model.attract_enabled = !model.attract_enabled;
            model.last_attract = app.time;
            println!(
                "Attract mode {}",
                if model.attract_enabled { "on" } else { "off" }
            );
        }
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        Key::Q => {
            app.quit();
        }
        _ => (),
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }

    let point = pt2(app.mouse.x, app.mouse.y);
    if let Some(id) = model.layer.hit_test(app.window_rect(), point, &model.style) {
        let on = !model.layer.is_highlighted(&id);
        model.osc_sender.send_highlight_hotspot(&id, on as i32);
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32();
    }

    // Process OSC messages
    model.osc_controller.process_messages();
    launch_commands(app, model);

    // Attract mode walks the highlight around on its own
    run_attract_mode(app, model);

    /**************** The single tick driving every subscriber ****************/
    model.clock.update(app.time);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window = app.window_rect();

    model.backdrop.draw(&draw);
    model.layer.draw(&draw, window, &model.style);

    if model.debug_flag {
        draw_debug_overlay(&draw, window, model);
    }

    draw.to_frame(app, &frame).unwrap();
}

fn draw_debug_overlay(draw: &Draw, window: Rect, model: &Model) {
    let text = format!(
        "scene: {}\nFPS: {:.1}\nmarkers: {}\nsubscribers: {}\nticks: {}\nclock: {}",
        model.scene.name,
        model.fps,
        model.layer.marker_count(),
        model.clock.subscriber_count(),
        model.clock.tick_count(),
        if model.clock.is_running() {
            "running"
        } else {
            "stopped"
        },
    );
    draw.text(&text)
        .x_y(window.left() + 160.0, window.top() - 70.0)
        .w(300.0)
        .left_justify()
        .color(RED)
        .font_size(14);
}

// ******************************* Attract Mode *******************************

fn run_attract_mode(app: &App, model: &mut Model) {
    if !model.attract_enabled {
        return;
    }
    if app.time - model.last_attract < model.attract_dwell {
        return;
    }
    model.last_attract = app.time;

    if let Some(id) = pick_random_id(model) {
        model.osc_sender.send_highlight_hotspot(&id, 1);
    }
}

fn pick_random_id(model: &mut Model) -> Option<String> {
    let ids = model.layer.hotspot_ids();
    if ids.is_empty() {
        return None;
    }
    let index = model.random.gen_range(0..ids.len());
    Some(ids[index].clone())
}

// ******************************* OSC Launcher *******************************

fn launch_commands(_app: &App, model: &mut Model) {
    for command in model.osc_controller.take_commands() {
        match command {
            OscCommand::HighlightHotspot { id, on } => {
                model.layer.set_highlight(&id, on);
            }
            OscCommand::ClearHighlights => {
                model.layer.clear_highlights();
            }
            OscCommand::SetOverlay { id, on } => {
                model.layer.set_overlay(&id, on);
            }
            OscCommand::AddHotspot {
                id,
                x,
                y,
                shape_kind,
            } => {
                let def = HotspotDef {
                    id: id.clone(),
                    label: id,
                    x,
                    y,
                    shape_kind,
                    radius: None,
                };
                model.layer.add_hotspot(def, &model.clock, &model.style);
            }
            OscCommand::RemoveHotspot { id } => {
                model.layer.remove_hotspot(&id);
            }
            OscCommand::ToggleLayer => {
                model.layer.toggle_visibility(&model.clock, &model.style);
            }
            OscCommand::ToggleBackdrop => {
                model.backdrop.toggle(&model.clock);
            }
        }
    }
}
