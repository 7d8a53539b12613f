use bevy::prelude::*;
use spritewalk_simulation::{
    AnimatorParams, CharacterMover, Facing, MotionProfile, MovementState, SpriteFacing, PARAM_IS_GROUNDED,
    PARAM_IS_RUNNING, PARAM_IS_WALKING,
};

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                spawn_visuals_for_new_movers,
                sync_transforms,
                sync_sprite_flip,
                sync_facing_marker,
                sync_animator_tint,
                play_jump_squash,
            )
                .chain()
                .after(spritewalk_simulation::MoverSet::Motion),
        );
    }
}

/// Marker: simulation entity needs visual representation
#[derive(Component)]
pub struct NeedsVisual;

/// Link: visual entity → simulation entity
#[derive(Component)]
pub struct VisualOf(pub Entity);

/// Link: simulation entity → visual entity
#[derive(Component)]
pub struct HasVisual(pub Entity);

/// Маленький спрайт-"нос": показывает Direction (и flip для Left)
#[derive(Component)]
pub struct FacingMarker {
    pub owner: Entity,
}

/// Squash анимация прыжка (оставшееся время, sec)
#[derive(Component)]
pub struct JumpSquash {
    pub remaining: f32,
}

const BODY_SIZE: Vec2 = Vec2::new(0.6, 0.9);
const JUMP_SQUASH_DURATION: f32 = 0.2;

/// Spawn visual representation (цветной прямоугольник + маркер направления)
fn spawn_visuals_for_new_movers(
    mut commands: Commands,
    query: Query<(Entity, &CharacterMover, &Transform), With<NeedsVisual>>,
) {
    for (sim_entity, mover, sim_transform) in query.iter() {
        let visual_entity = commands
            .spawn((
                Sprite::from_color(profile_color(mover.profile), BODY_SIZE),
                *sim_transform,
                VisualOf(sim_entity),
            ))
            .id();

        let marker = commands
            .spawn((
                FacingMarker { owner: sim_entity },
                Sprite::from_color(Color::srgb(0.95, 0.95, 0.95), Vec2::splat(0.15)),
                Transform::from_xyz(0.0, -0.2, 0.1),
            ))
            .id();

        // Link simulation ↔ visual
        commands
            .entity(sim_entity)
            .remove::<NeedsVisual>()
            .insert(HasVisual(visual_entity));

        commands.entity(visual_entity).add_child(marker);
    }
}

/// Sync simulation transforms → visual transforms (scale принадлежит visual)
fn sync_transforms(
    sim_query: Query<(&Transform, &HasVisual), Changed<Transform>>,
    mut visual_query: Query<&mut Transform, (With<VisualOf>, Without<HasVisual>)>,
) {
    for (sim_transform, has_visual) in sim_query.iter() {
        if let Ok(mut visual_transform) = visual_query.get_mut(has_visual.0) {
            visual_transform.translation = sim_transform.translation;
        }
    }
}

/// SpriteFacing.flip_x → Sprite.flip_x
fn sync_sprite_flip(
    sim_query: Query<(&SpriteFacing, &HasVisual), Changed<SpriteFacing>>,
    mut sprites: Query<&mut Sprite, With<VisualOf>>,
) {
    for (facing, has_visual) in sim_query.iter() {
        if let Ok(mut sprite) = sprites.get_mut(has_visual.0) {
            sprite.flip_x = facing.flip_x;
        }
    }
}

/// Direction + flip → позиция маркера (цветной прямоугольник flip не показывает)
fn sync_facing_marker(
    sim_query: Query<&MovementState, Changed<MovementState>>,
    mut markers: Query<(&FacingMarker, &mut Transform)>,
) {
    for (marker, mut transform) in markers.iter_mut() {
        let Ok(state) = sim_query.get(marker.owner) else {
            continue;
        };

        let offset = match state.facing {
            Facing::Down => Vec2::new(0.0, -0.2),
            Facing::Up => Vec2::new(0.0, 0.3),
            // Спрайт нарисован смотрящим влево, flip_x = смотрит вправо
            Facing::Left if state.flip_x => Vec2::new(0.22, 0.2),
            Facing::Left => Vec2::new(-0.22, 0.2),
        };
        transform.translation = offset.extend(0.1);
    }
}

/// Animator bools → оттенок (idle / walk / run, в воздухе темнее)
fn sync_animator_tint(
    sim_query: Query<(&CharacterMover, &AnimatorParams, &HasVisual), Changed<AnimatorParams>>,
    mut sprites: Query<&mut Sprite, With<VisualOf>>,
) {
    for (mover, animator, has_visual) in sim_query.iter() {
        let Ok(mut sprite) = sprites.get_mut(has_visual.0) else {
            continue;
        };

        sprite.color = animator_tint(mover.profile, animator);
    }
}

/// Цвет по bool параметрам аниматора (как state machine читает их по имени)
fn animator_tint(profile: MotionProfile, animator: &AnimatorParams) -> Color {
    let param = |name: &str| animator.bool_param(name).unwrap_or(false);

    let base = profile_color(profile).to_srgba();
    let gain = if param(PARAM_IS_RUNNING) {
        1.3
    } else if param(PARAM_IS_WALKING) {
        1.1
    } else {
        1.0
    };
    let airborne = profile == MotionProfile::SideScroller && !param(PARAM_IS_GROUNDED);
    let shade = if airborne { 0.7 } else { 1.0 };

    Color::srgb(
        (base.red * gain * shade).min(1.0),
        (base.green * gain * shade).min(1.0),
        (base.blue * gain * shade).min(1.0),
    )
}

/// Забираем trigger `Jump` и играем squash на visual
fn play_jump_squash(
    mut commands: Commands,
    time: Res<Time>,
    mut sim_query: Query<(&mut AnimatorParams, &HasVisual)>,
    mut visuals: Query<(Entity, &mut Transform, Option<&mut JumpSquash>), With<VisualOf>>,
) {
    for (mut animator, has_visual) in sim_query.iter_mut() {
        // Не трогаем AnimatorParams без trigger (иначе Changed срабатывает каждый кадр)
        if !animator.is_jump_pending() {
            continue;
        }
        if animator.consume_jump() {
            commands.entity(has_visual.0).insert(JumpSquash {
                remaining: JUMP_SQUASH_DURATION,
            });
        }
    }

    for (entity, mut transform, squash) in visuals.iter_mut() {
        let Some(mut squash) = squash else {
            continue;
        };

        squash.remaining -= time.delta_secs();
        if squash.remaining <= 0.0 {
            transform.scale = Vec3::ONE;
            commands.entity(entity).remove::<JumpSquash>();
            continue;
        }

        let t = squash.remaining / JUMP_SQUASH_DURATION;
        transform.scale = Vec3::new(1.0 - 0.25 * t, 1.0 + 0.25 * t, 1.0);
    }
}

fn profile_color(profile: MotionProfile) -> Color {
    match profile {
        MotionProfile::TopDown => Color::srgb(0.2, 0.4, 0.75),
        MotionProfile::SideScroller => Color::srgb(0.75, 0.35, 0.2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_follows_animator_params() {
        let idle = AnimatorParams {
            is_grounded: true,
            ..default()
        };
        let running = AnimatorParams {
            is_running: true,
            is_grounded: true,
            ..default()
        };
        let airborne = AnimatorParams::default();

        let base = profile_color(MotionProfile::SideScroller).to_srgba();
        let idle_color = animator_tint(MotionProfile::SideScroller, &idle).to_srgba();
        let running_color = animator_tint(MotionProfile::SideScroller, &running).to_srgba();
        let airborne_color = animator_tint(MotionProfile::SideScroller, &airborne).to_srgba();

        assert!((idle_color.red - base.red).abs() < 1e-5);
        assert!(running_color.red > idle_color.red);
        assert!(airborne_color.red < idle_color.red);
    }

    #[test]
    fn test_top_down_is_never_shaded_as_airborne() {
        let params = AnimatorParams::default();
        let base = profile_color(MotionProfile::TopDown).to_srgba();
        let color = animator_tint(MotionProfile::TopDown, &params).to_srgba();
        assert!((color.blue - base.blue).abs() < 1e-5);
    }
}
