//! 客户端抽奖
//!
//! 选人逻辑（[`pick_winner`]、[`DrawSession`]）是纯同步的；滚动动画由
//! [`AnimationPlan`] 描述、[`animated_draw`] 播放，动画不影响中奖结果。

pub mod animation;
pub mod runner;
pub mod session;

pub use animation::{AnimationPlan, Frame, Phase};
pub use runner::animated_draw;
pub use session::{DrawSession, MAX_WINNERS, MIN_WINNERS, display_pick, pick_winner};
