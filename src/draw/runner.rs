use rand::Rng;

use super::{AnimationPlan, DrawSession, Phase, display_pick};
use crate::models::Participant;

/// 在当前候选池上播放动画，然后抽出一名中奖者
///
/// 每一帧都会回调 `on_frame`。中奖者在最后一帧之后单独抽取，
/// 与最后展示的号码无关。
pub async fn animated_draw<R, F>(
    session: &mut DrawSession,
    plan: &AnimationPlan,
    rng: &mut R,
    mut on_frame: F,
) -> Option<Participant>
where
    R: Rng + ?Sized,
    F: FnMut(Phase, &Participant),
{
    if !session.has_more_draws() {
        return None;
    }

    for frame in plan.frames() {
        tokio::time::sleep(frame.delay).await;
        if let Some(shown) = display_pick(session.pool(), rng) {
            on_frame(frame.phase, shown);
        }
    }

    session.draw(rng).cloned()
}
