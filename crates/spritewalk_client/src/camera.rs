use bevy::prelude::*;
use spritewalk_simulation::Player;

use crate::rendering::HasVisual;
use crate::PIXELS_PER_UNIT;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(PostUpdate, follow_player.before(bevy::transform::TransformSystem::TransformPropagate));
    }
}

#[derive(Component)]
pub struct FollowCamera {
    /// Скорость догоняния (1/sec), больше = жёстче
    pub stiffness: f32,
    /// Смещение от персонажа (world units)
    pub offset: Vec2,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            stiffness: 5.0,
            offset: Vec2::new(0.0, 1.5),
        }
    }
}

fn spawn_camera(mut commands: Commands) {
    // Scale камеры = 1 / PIXELS_PER_UNIT → 1 world unit = 64 px
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 1.5, 0.0).with_scale(Vec3::splat(1.0 / PIXELS_PER_UNIT)),
        FollowCamera::default(),
    ));
}

/// Камера плавно следует за visual активного персонажа
fn follow_player(
    time: Res<Time>,
    player_query: Query<&HasVisual, With<Player>>,
    targets: Query<&Transform, Without<FollowCamera>>,
    mut camera_query: Query<(&FollowCamera, &mut Transform)>,
) {
    let Ok((camera, mut camera_transform)) = camera_query.single_mut() else {
        return;
    };
    let Ok(has_visual) = player_query.single() else {
        return;
    };
    let Ok(target) = targets.get(has_visual.0) else {
        return;
    };

    let goal = target.translation.truncate() + camera.offset;
    let current = camera_transform.translation.truncate();
    let blend = (camera.stiffness * time.delta_secs()).min(1.0);
    let next = current.lerp(goal, blend);

    camera_transform.translation.x = next.x;
    camera_transform.translation.y = next.y;
}
