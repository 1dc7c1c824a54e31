// src/reward.rs

use crate::model::RewardConfig;

/// Estrellas que se pintan en las pantallas de inicio y de premio.
pub const STAR_COUNT: usize = 6;

/// Regla de producto: el premio se desbloquea con `threshold` aciertos o más.
pub fn is_reward_eligible(score: usize, reward: &RewardConfig) -> bool {
    score >= reward.threshold
}

/// Porcentaje de aciertos redondeado al entero más cercano.
pub fn score_percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 / total as f64 * 100.0).round() as u32
}

/// Estrellas encendidas: una por cada 20 % (redondeando hacia arriba).
pub fn filled_stars(score: usize, total: usize) -> usize {
    let percentage = score_percentage(score, total);
    (percentage.div_ceil(20) as usize).min(STAR_COUNT)
}
