use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::models::domain::Question;

pub struct QuestionSampler;

impl QuestionSampler {
    /// Draws `count` distinct question ids from `pool`, uniformly at random
    /// and in uniformly random order. The returned order is the session's
    /// presentation order.
    ///
    /// Caller must ensure `count <= pool.len()`; the capacity check (and the
    /// resulting `InsufficientPool` error) lives in `ExamService`.
    pub fn sample(pool: &[Question], count: usize) -> Vec<Uuid> {
        let mut rng = rand::rng();
        Self::sample_with_rng(pool, count, &mut rng)
    }

    /// Same as [`sample`], with an injected rng for deterministic tests.
    ///
    /// Shuffles a scratch index vector with a partial Fisher-Yates
    /// (`partial_shuffle`), which is uniform over both the chosen subset and
    /// its order; the pool itself is never touched.
    pub fn sample_with_rng<R: Rng + ?Sized>(
        pool: &[Question],
        count: usize,
        rng: &mut R,
    ) -> Vec<Uuid> {
        debug_assert!(count <= pool.len());

        let mut indices: Vec<usize> = (0..pool.len()).collect();
        let (sampled, _) = indices.partial_shuffle(rng, count);
        sampled.iter().map(|&i| pool[i].id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::test_questions;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn make_pool(size: usize) -> Vec<Question> {
        test_questions(Uuid::new_v4(), size)
    }

    #[test]
    fn test_sample_returns_exactly_count_distinct_ids_from_pool() {
        let pool = make_pool(50);
        let pool_ids: HashSet<Uuid> = pool.iter().map(|q| q.id).collect();

        for count in [1, 20, 25, 50] {
            let sampled = QuestionSampler::sample(&pool, count);
            assert_eq!(sampled.len(), count);

            let distinct: HashSet<Uuid> = sampled.iter().copied().collect();
            assert_eq!(distinct.len(), count);
            assert!(distinct.is_subset(&pool_ids));
        }
    }

    #[test]
    fn test_sample_does_not_mutate_pool() {
        let pool = make_pool(10);
        let before: Vec<Uuid> = pool.iter().map(|q| q.id).collect();

        QuestionSampler::sample(&pool, 5);

        let after: Vec<Uuid> = pool.iter().map(|q| q.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sample_is_deterministic_for_a_seed() {
        let pool = make_pool(30);

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(
            QuestionSampler::sample_with_rng(&pool, 20, &mut rng1),
            QuestionSampler::sample_with_rng(&pool, 20, &mut rng2)
        );
    }

    #[test]
    fn test_sample_order_varies_across_seeds() {
        let pool = make_pool(20);

        let orders: HashSet<Vec<Uuid>> = (0..20)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                QuestionSampler::sample_with_rng(&pool, 20, &mut rng)
            })
            .collect();

        // 20 seeds producing the same permutation of 20 elements would mean
        // the shuffle is broken.
        assert!(orders.len() > 1);
    }

    #[test]
    fn test_every_pool_member_is_reachable() {
        let pool = make_pool(5);
        let pool_ids: HashSet<Uuid> = pool.iter().map(|q| q.id).collect();

        let mut seen: HashSet<Uuid> = HashSet::new();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            seen.extend(QuestionSampler::sample_with_rng(&pool, 2, &mut rng));
        }

        assert_eq!(seen, pool_ids);
    }

    #[test]
    fn test_full_pool_sample_is_a_permutation() {
        let pool = make_pool(10);
        let pool_ids: HashSet<Uuid> = pool.iter().map(|q| q.id).collect();

        let sampled = QuestionSampler::sample(&pool, 10);
        let sampled_ids: HashSet<Uuid> = sampled.iter().copied().collect();
        assert_eq!(sampled_ids, pool_ids);
    }
}
