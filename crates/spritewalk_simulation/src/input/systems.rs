//! Input Sampler system

use bevy::prelude::*;

use super::components::{ActionInput, InputSample};
use crate::components::{CharacterMover, InputBound};

/// Система: ActionInput → InputSample (один раз в начале tick)
///
/// Выключенные муверы (без InputBound) не сэмплируются: их sample
/// остаётся от последнего включённого tick и никем не читается.
pub fn sample_input(
    mut query: Query<(&ActionInput, &mut InputSample), (With<CharacterMover>, With<InputBound>)>,
) {
    for (actions, mut sample) in query.iter_mut() {
        *sample = InputSample::from_actions(actions);
    }
}
