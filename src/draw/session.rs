use rand::Rng;

use crate::models::Participant;

pub const MIN_WINNERS: usize = 1;
pub const MAX_WINNERS: usize = 5;

/// 从 `pool` 中等概率取出一个
///
/// 返回中奖者和剩余候选池（保持原顺序）；池为空时返回 `None`。
pub fn pick_winner<T, R>(mut pool: Vec<T>, rng: &mut R) -> Option<(T, Vec<T>)>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..pool.len());
    let winner = pool.remove(index);
    Some((winner, pool))
}

/// 动画帧展示用的随机候选，不影响中奖结果
pub fn display_pick<'a, T, R>(pool: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.gen_range(0..pool.len()))
}

/// 一次抽奖会话：剩余候选、已中奖名单、目标人数。仅存在于客户端进程内。
#[derive(Debug, Clone)]
pub struct DrawSession {
    participants: Vec<Participant>,
    pool: Vec<Participant>,
    winners: Vec<Participant>,
    requested: usize,
}

impl DrawSession {
    pub fn new(participants: Vec<Participant>, requested: usize) -> Self {
        Self {
            pool: participants.clone(),
            participants,
            winners: Vec::new(),
            requested: requested.clamp(MIN_WINNERS, MAX_WINNERS),
        }
    }

    /// 设置目标人数（限定在 1..=5），已抽出的中奖者保留
    pub fn set_requested(&mut self, requested: usize) {
        self.requested = requested.clamp(MIN_WINNERS, MAX_WINNERS);
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn pool(&self) -> &[Participant] {
        &self.pool
    }

    pub fn winners(&self) -> &[Participant] {
        &self.winners
    }

    /// 没有参与者时不能抽奖
    pub fn is_enabled(&self) -> bool {
        !self.participants.is_empty()
    }

    pub fn has_more_draws(&self) -> bool {
        self.winners.len() < self.requested && !self.pool.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        !self.has_more_draws()
    }

    /// 候选池已空但未达到目标人数
    pub fn is_exhausted(&self) -> bool {
        self.pool.is_empty() && self.winners.len() < self.requested
    }

    /// 抽出下一位中奖者；会话已完成时返回 `None`
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Participant> {
        if !self.has_more_draws() {
            return None;
        }
        let pool = std::mem::take(&mut self.pool);
        let (winner, remaining) = pick_winner(pool, rng)?;
        self.pool = remaining;
        self.winners.push(winner);
        self.winners.last()
    }

    pub fn reset(&mut self) {
        self.winners.clear();
        self.pool = self.participants.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn participant(number: i32, name: &str) -> Participant {
        Participant {
            number,
            name: name.to_string(),
            email: format!("{}@x", name.to_lowercase()),
        }
    }

    fn roster(n: i32) -> Vec<Participant> {
        (1..=n).map(|i| participant(i, &format!("P{i}"))).collect()
    }

    #[test]
    fn test_pick_winner_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_winner(Vec::<i32>::new(), &mut rng).is_none());
    }

    #[test]
    fn test_pick_winner_removes_exactly_the_winner() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = vec![1, 2, 3, 4, 5];
        let (winner, remaining) = pick_winner(pool.clone(), &mut rng).unwrap();
        assert_eq!(remaining.len(), 4);
        assert!(!remaining.contains(&winner));
        let mut all = remaining.clone();
        all.push(winner);
        all.sort();
        assert_eq!(all, pool);
    }

    #[test]
    fn test_pick_winner_reaches_every_entry() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let (winner, _) = pick_winner(vec![1, 2, 3], &mut rng).unwrap();
            seen.insert(winner);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_two_participants_two_winners_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = DrawSession::new(vec![participant(1, "A"), participant(2, "B")], 2);
        while session.draw(&mut rng).is_some() {}

        let mut names: Vec<&str> = session.winners().iter().map(|p| p.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["A", "B"]);
        assert!(session.is_complete());
        assert!(!session.is_exhausted());
    }

    #[test]
    fn test_draws_without_replacement() {
        let mut rng = StdRng::seed_from_u64(11);
        let everyone = roster(20);
        let mut session = DrawSession::new(everyone.clone(), 5);
        while session.has_more_draws() {
            session.draw(&mut rng).unwrap();
        }

        assert_eq!(session.winners().len(), 5);
        let numbers: HashSet<i32> = session.winners().iter().map(|p| p.number).collect();
        assert_eq!(numbers.len(), 5);
        assert!(session.winners().iter().all(|w| everyone.contains(w)));
        assert!(session.winners().iter().all(|w| !session.pool().contains(w)));
        assert_eq!(session.pool().len(), 15);
    }

    #[test]
    fn test_more_winners_than_participants_stops_when_pool_empty() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = DrawSession::new(roster(3), 5);
        let mut drawn = 0;
        while session.draw(&mut rng).is_some() {
            drawn += 1;
        }
        assert_eq!(drawn, 3);
        assert!(session.pool().is_empty());
        assert!(session.is_complete());
        assert!(session.is_exhausted());
        assert!(session.draw(&mut rng).is_none());
    }

    #[test]
    fn test_zero_participants_disables_draw() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = DrawSession::new(Vec::new(), 1);
        assert!(!session.is_enabled());
        assert!(!session.has_more_draws());
        assert!(session.draw(&mut rng).is_none());
        assert!(session.winners().is_empty());
    }

    #[test]
    fn test_requested_is_clamped() {
        let mut session = DrawSession::new(roster(10), 0);
        assert_eq!(session.requested(), 1);
        session.set_requested(9);
        assert_eq!(session.requested(), 5);
        session.set_requested(3);
        assert_eq!(session.requested(), 3);
    }

    #[test]
    fn test_raising_requested_allows_more_draws() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = DrawSession::new(roster(4), 1);
        session.draw(&mut rng).unwrap();
        assert!(session.is_complete());

        session.set_requested(2);
        assert!(session.has_more_draws());
        session.draw(&mut rng).unwrap();
        assert_eq!(session.winners().len(), 2);
    }

    #[test]
    fn test_reset_restores_full_pool() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut session = DrawSession::new(roster(4), 3);
        while session.draw(&mut rng).is_some() {}
        assert_eq!(session.pool().len(), 1);

        session.reset();
        assert!(session.winners().is_empty());
        assert_eq!(session.pool(), session.participants());
        assert_eq!(session.requested(), 3);
        assert!(session.has_more_draws());
    }

    #[test]
    fn test_display_pick_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(2);
        let pool = roster(3);
        for _ in 0..50 {
            let shown = display_pick(&pool, &mut rng).unwrap();
            assert!(pool.contains(shown));
        }
        assert!(display_pick::<Participant, _>(&[], &mut rng).is_none());
    }
}
