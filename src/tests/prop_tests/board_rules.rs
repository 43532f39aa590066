use super::*;

const CASES: u32 = 256;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn reachable_groups_always_have_liberties(r in arb_reachable()) {
        let b = r.board;
        for cell in 0..b.cell_count() {
            if b.get(cell).is_some() {
                let liberties = b.liberties(cell).unwrap_or(0);
                prop_assert!(liberties > 0, "cell {} has no liberty\n{}", cell, b);
            }
        }
    }

    #[test]
    fn illegal_placement_leaves_board_unchanged(r in arb_reachable(), cell in 0u8..49) {
        let before = r.board;
        let mut b = r.board;
        match b.place(cell, r.to_move) {
            Ok(()) => prop_assert_eq!(before.stone_count() + 1, b.stone_count()),
            Err(_) => prop_assert_eq!(before, b),
        }
    }

    #[test]
    fn random_move_is_legal(r in arb_reachable(), seed in any::<u64>()) {
        let mut rng = RngState::from_seed_u64(seed);
        match r.board.random_move(r.to_move, &mut rng) {
            Some((action, next)) => {
                prop_assert_eq!(r.to_move, action.who);
                prop_assert!(r.board.is_legal(action));
                prop_assert_eq!(r.board.stone_count() + 1, next.stone_count());
            }
            None => prop_assert!(!r.board.has_legal_action(&r.board.action_space(r.to_move))),
        }
    }

    #[test]
    fn candidates_cover_every_cell(r in arb_reachable()) {
        let space = r.board.action_space(r.to_move);
        prop_assert_eq!(r.board.cell_count() as usize, space.len());
        prop_assert!(space.iter().all(|a| a.who == r.to_move));
        let legal = r.board.legal_actions(&space);
        prop_assert!(legal.iter().all(|a| r.board.get(a.cell).is_none()));
    }
}
