#[cfg(test)]
mod tests {
    use crate::sum::partition::*;
    use proptest::prelude::*;

    #[test]
    fn test_even_split() {
        let plan = plan_partitions(10, 2).expect("plan");
        assert_eq!(
            plan,
            vec![
                Partition { index: 0, start: 0, len: 5 },
                Partition { index: 1, start: 5, len: 5 },
            ]
        );
    }

    #[test]
    fn test_uneven_split_shortens_last_partition() {
        let plan = plan_partitions(5, 2).expect("plan");
        assert_eq!(partition_size(5, 2), 3);
        assert_eq!(plan[0], Partition { index: 0, start: 0, len: 3 });
        assert_eq!(plan[1], Partition { index: 1, start: 3, len: 2 });
    }

    #[test]
    fn test_fewer_elements_than_workers() {
        let plan = plan_partitions(7, 10).expect("plan");
        assert_eq!(plan.len(), 10);
        let populated: Vec<_> = plan.iter().filter(|p| !p.is_empty()).collect();
        let empty: Vec<_> = plan.iter().filter(|p| p.is_empty()).collect();
        assert_eq!(populated.len(), 7);
        assert!(populated.iter().all(|p| p.len == 1));
        assert_eq!(empty.len(), 3);
        assert!(empty.iter().all(|p| p.start == 7 && p.end() == 7));
    }

    #[test]
    fn test_trailing_partitions_empty_when_size_rounds_up() {
        // ceil(11 / 5) = 3 -> 3, 3, 3, 2, 0
        let lens: Vec<usize> = plan_partitions(11, 5).expect("plan").iter().map(|p| p.len).collect();
        assert_eq!(lens, vec![3, 3, 3, 2, 0]);
    }

    #[test]
    fn test_zero_elements_all_partitions_empty() {
        let plan = plan_partitions(0, 10).expect("plan");
        assert_eq!(plan.len(), 10);
        assert!(plan.iter().all(Partition::is_empty));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let err = plan_partitions(10, 0).unwrap_err();
        assert!(err.to_string().contains("worker count"));
    }

    #[test]
    fn test_absurd_worker_count_rejected() {
        for workers in [MAX_WORKERS + 1, usize::MAX / 2, usize::MAX] {
            let err = plan_partitions(10, workers).unwrap_err();
            assert!(err.to_string().contains("exceeds the maximum"), "workers = {workers}");
        }
        assert_eq!(plan_partitions(3, MAX_WORKERS).expect("plan").len(), MAX_WORKERS);
        assert!(check_workers(1).is_ok());
    }

    #[test]
    fn test_slice_matches_range() {
        let values = [1, 2, 3, 4, 5];
        let plan = plan_partitions(values.len(), 2).expect("plan");
        assert_eq!(plan[0].slice(&values), &[1, 2, 3]);
        assert_eq!(plan[1].slice(&values), &[4, 5]);
    }

    proptest! {
        #[test]
        fn prop_partitions_cover_exactly_once(len in 0usize..5_000, workers in 1usize..64) {
            let plan = plan_partitions(len, workers).unwrap();
            prop_assert_eq!(plan.len(), workers);
            let mut cursor = 0;
            for (i, part) in plan.iter().enumerate() {
                prop_assert_eq!(part.index, i);
                prop_assert!(part.end() <= len);
                if !part.is_empty() {
                    prop_assert_eq!(part.start, cursor);
                    cursor = part.end();
                }
            }
            prop_assert_eq!(cursor, len);
            prop_assert_eq!(plan.iter().map(|p| p.len).sum::<usize>(), len);
        }
    }
}
