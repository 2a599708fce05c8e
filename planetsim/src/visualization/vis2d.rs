use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::{PrimaryWindow, WindowCloseRequested, WindowResized, WindowResolution};

use crate::simulation::input::{Key, MouseButton as SimButton, SandboxEvent};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Rgb};

#[derive(Component)]
struct BodyIndex(pub usize);

/// Input transitions collected this frame, consumed by the physics step
#[derive(Resource, Default)]
struct FrameEvents(Vec<SandboxEvent>);

pub fn run_2d(scenario: Scenario) {
    info!("run_2d: starting Bevy 2D sandbox with {} bodies", scenario.registry.len());

    let window = Window {
        title: "planetsim".into(),
        resolution: WindowResolution::new(scenario.bounds.width as f32, scenario.bounds.height as f32),
        ..Default::default()
    };

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .init_resource::<FrameEvents>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..Default::default()
        }))
        .add_systems(Startup, setup_camera_system)
        .add_systems(Update, (collect_input_system, physics_step_system, sync_bodies_system).chain())
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

/// Translate Bevy input into edge-triggered sandbox events
fn collect_input_system(
    mut events: ResMut<FrameEvents>,
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut resized: EventReader<WindowResized>,
    mut close_requested: EventReader<WindowCloseRequested>,
) {
    for e in resized.read() {
        events.0.push(SandboxEvent::Resized {
            width: e.width as f64,
            height: e.height as f64,
        });
    }
    if close_requested.read().next().is_some() {
        events.0.push(SandboxEvent::Closed);
    }

    // Window cursor coordinates already match simulation space (top-left origin, y down)
    if let Some(cursor) = windows.get_single().ok().and_then(|w| w.cursor_position()) {
        let position = NVec2::new(cursor.x as f64, cursor.y as f64);
        for (bevy_button, button) in [
            (MouseButton::Left, SimButton::Left),
            (MouseButton::Right, SimButton::Right),
            (MouseButton::Middle, SimButton::Middle),
        ] {
            if mouse.just_pressed(bevy_button) {
                events.0.push(SandboxEvent::MousePressed { button, position });
            }
            if mouse.just_released(bevy_button) {
                events.0.push(SandboxEvent::MouseReleased { button, position });
            }
        }
    }

    for code in keys.get_just_pressed() {
        events.0.push(SandboxEvent::KeyPressed(key_from(*code)));
    }
    for code in keys.get_just_released() {
        events.0.push(SandboxEvent::KeyReleased(key_from(*code)));
    }
}

fn key_from(code: KeyCode) -> Key {
    match code {
        KeyCode::Space => Key::Space,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

fn physics_step_system(
    mut scenario: ResMut<Scenario>,
    mut events: ResMut<FrameEvents>,
    time: Res<Time>,
    mut exit: EventWriter<AppExit>,
) {
    let dt = scenario.sim_dt(time.delta_seconds_f64());
    let frame_events = std::mem::take(&mut events.0);

    if !scenario.frame(&frame_events, dt) {
        exit.send(AppExit::Success);
    }
}

/// Spawn a circle for every new body and move all circles to their bodies
fn sync_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
    mut spawned: Local<usize>,
) {
    let bounds = scenario.bounds;
    let to_world = |p: NVec2| Vec3::new((p.x - bounds.width / 2.0) as f32, (bounds.height / 2.0 - p.y) as f32, 0.0);

    for (i, body) in scenario.drawables().enumerate().skip(*spawned) {
        let Rgb(r, g, b) = body.color;
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(Color::srgb_u8(r, g, b))),
                transform: Transform::from_translation(to_world(body.position)),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
    *spawned = scenario.registry.len();

    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.registry.get(*i) {
            transform.translation = to_world(b.x);
        }
    }
}
