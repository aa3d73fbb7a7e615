use std::time::Duration;

use crate::config::DrawConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 匀速快速滚动
    Fast,
    /// 揭晓前逐渐减速
    Slow,
}

/// 一帧动画：等待 `delay` 后随机展示一个候选号码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub delay: Duration,
    pub phase: Phase,
}

/// 每次揭晓前的滚动动画（只描述帧序列，不含定时器）
///
/// 快速阶段每 `fast_tick_ms` 一帧，直到累计时间超过 `fast_phase_ms` 的 80%；
/// 慢速阶段从 `slow_start_ms` 开始，每帧间隔增加 `slow_step_ms`，超过
/// `slow_max_ms` 即结束。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationPlan {
    frames: Vec<Frame>,
}

impl AnimationPlan {
    pub fn from_config(config: &DrawConfig) -> Self {
        let mut frames = Vec::new();

        let tick = config.fast_tick_ms.max(1);
        let cutoff = config.fast_phase_ms * 4 / 5;
        let mut elapsed = 0;
        while config.fast_phase_ms > 0 {
            elapsed += tick;
            frames.push(Frame {
                delay: Duration::from_millis(tick),
                phase: Phase::Fast,
            });
            if elapsed > cutoff {
                break;
            }
        }

        // 步长为 0 时不会结束
        if config.slow_step_ms > 0 {
            let mut interval = config.slow_start_ms.max(1);
            while interval <= config.slow_max_ms {
                frames.push(Frame {
                    delay: Duration::from_millis(interval),
                    phase: Phase::Slow,
                });
                interval += config.slow_step_ms;
            }
        }

        Self { frames }
    }

    /// 无动画，直接揭晓
    pub fn instant() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn total_duration(&self) -> Duration {
        self.frames.iter().map(|f| f.delay).sum()
    }
}

impl Default for AnimationPlan {
    fn default() -> Self {
        Self::from_config(&DrawConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_shape() {
        let plan = AnimationPlan::default();
        let fast: Vec<_> = plan
            .frames()
            .iter()
            .filter(|f| f.phase == Phase::Fast)
            .collect();
        let slow: Vec<_> = plan
            .frames()
            .iter()
            .filter(|f| f.phase == Phase::Slow)
            .collect();

        // 每 50ms 一帧，直到超过 3200ms
        assert_eq!(fast.len(), 65);
        assert!(fast.iter().all(|f| f.delay == Duration::from_millis(50)));

        // 100, 150, ..., 500
        let slow_ms: Vec<u128> = slow.iter().map(|f| f.delay.as_millis()).collect();
        assert_eq!(slow_ms, vec![100, 150, 200, 250, 300, 350, 400, 450, 500]);

        assert_eq!(plan.total_duration(), Duration::from_millis(3250 + 2700));
    }

    #[test]
    fn test_fast_phase_precedes_slow_phase() {
        let plan = AnimationPlan::default();
        let first_slow = plan
            .frames()
            .iter()
            .position(|f| f.phase == Phase::Slow)
            .unwrap();
        assert!(plan.frames()[..first_slow].iter().all(|f| f.phase == Phase::Fast));
        assert!(plan.frames()[first_slow..].iter().all(|f| f.phase == Phase::Slow));
    }

    #[test]
    fn test_slow_phase_decelerates() {
        let plan = AnimationPlan::from_config(&DrawConfig {
            slow_start_ms: 10,
            slow_step_ms: 30,
            slow_max_ms: 200,
            ..DrawConfig::default()
        });
        let slow: Vec<Duration> = plan
            .frames()
            .iter()
            .filter(|f| f.phase == Phase::Slow)
            .map(|f| f.delay)
            .collect();
        assert!(!slow.is_empty());
        assert!(slow.windows(2).all(|w| w[0] < w[1]));
        assert!(slow.iter().all(|d| *d <= Duration::from_millis(200)));
    }

    #[test]
    fn test_degenerate_configs_terminate() {
        let plan = AnimationPlan::from_config(&DrawConfig {
            fast_phase_ms: 0,
            fast_tick_ms: 0,
            slow_step_ms: 0,
            ..DrawConfig::default()
        });
        assert!(plan.frames().is_empty());
        assert!(AnimationPlan::instant().frames().is_empty());
    }
}
