use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use spritewalk_simulation::{
    disable_mover, spawn_character, CharacterMover, GroundCollider, MoverPlugin, Player,
    RapierBridgePlugin,
};

mod camera;
mod input;
mod rendering;

use camera::CameraPlugin;
use input::KeyboardInputPlugin;
use rendering::RenderingSyncPlugin;

/// Пикселей на world unit (только для визуала, физика в units)
pub const PIXELS_PER_UNIT: f32 = 64.0;

fn main() {
    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "SPRITEWALK".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Physics (Rapier владеет интеграцией и коллизиями)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        // Simulation (mover logic) + Body2d ↔ Rapier Velocity
        .add_plugins((MoverPlugin, RapierBridgePlugin))
        // Keyboard → ActionInput / JumpPerformed
        .add_plugins(KeyboardInputPlugin)
        // Rendering sync (simulation → visuals)
        .add_plugins(RenderingSyncPlugin)
        // Camera follow
        .add_plugins(CameraPlugin)
        .add_systems(Startup, setup_scene)
        .run();
}

/// Spawn пол, платформу и двух персонажей (SideScroller управляется первым)
fn setup_scene(mut commands: Commands) {
    spawn_ground(&mut commands, Vec2::new(0.0, -0.5), Vec2::new(20.0, 0.5));
    spawn_ground(&mut commands, Vec2::new(4.0, 1.5), Vec2::new(1.5, 0.25));

    // SideScroller: gravity, probe у ног
    let jumper = spawn_character(
        &mut commands,
        CharacterMover {
            ground_check_offset: Vec2::new(0.0, -0.45),
            ..CharacterMover::side_scroller()
        },
        Vec2::new(-2.0, 1.0),
    );
    commands.entity(jumper).insert((
        Player,
        character_body(1.0),
        rendering::NeedsVisual,
    ));

    // TopDown: без гравитации, висит над полом (отдельная "комната")
    let walker = spawn_character(&mut commands, CharacterMover::top_down(), Vec2::new(0.0, 5.0));
    commands.entity(walker).insert((character_body(0.0), rendering::NeedsVisual));
    disable_mover(&mut commands, walker);
}

/// Rapier компоненты персонажа (rotation заблокирован, velocity пишет мувер)
fn character_body(gravity_scale: f32) -> impl Bundle {
    (
        RigidBody::Dynamic,
        Collider::cuboid(0.3, 0.45),
        LockedAxes::ROTATION_LOCKED,
        Velocity::zero(),
        GravityScale(gravity_scale),
    )
}

/// Пол/платформа: Rapier collider (коллизии тел) + GroundCollider (ground probe мувера)
///
/// Оба строятся из одного `half_extents`.
fn spawn_ground(commands: &mut Commands, center: Vec2, half_extents: Vec2) {
    commands.spawn((
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Fixed,
        Collider::cuboid(half_extents.x, half_extents.y),
        GroundCollider::ground(half_extents),
        Sprite::from_color(Color::srgb(0.3, 0.5, 0.3), half_extents * 2.0),
    ));
}
