mod common;

use common::{group_ids, player};
use society_engine::grouping::{
    group_players, group_players_manual, partition_sizes, plan_groups, GroupingOptions,
};
use society_engine::model::HandicapBasis;
use society_engine::EngineError;

fn roster(n: usize) -> Vec<society_engine::model::PlayerWithHandicap> {
    (0..n)
        .map(|i| {
            let handicap = i32::try_from(i).expect("small roster");
            player(&format!("p{i:02}"), &format!("Player {i:02}"), Some(handicap))
        })
        .collect()
}

#[test]
fn test3_partition_sizes() {
    assert_eq!(partition_sizes(9, 4), vec![3, 3, 3]);
    assert_eq!(partition_sizes(10, 4), vec![4, 3, 3]);
    assert_eq!(partition_sizes(5, 3), vec![3, 2]);
    assert_eq!(partition_sizes(8, 4), vec![4, 4]);
    assert_eq!(partition_sizes(4, 4), vec![4]);
    assert_eq!(partition_sizes(2, 4), vec![2]);
    assert_eq!(partition_sizes(13, 4), vec![4, 3, 3, 3]);
    assert_eq!(partition_sizes(3, 0), vec![1, 1, 1]);
    assert!(partition_sizes(0, 4).is_empty());
}

#[test]
fn test3_nine_players_in_fours_become_threes() {
    let groups = group_players(&roster(9), HandicapBasis::Playing, true, 4);
    let sizes: Vec<usize> = groups.iter().map(|g| g.players.len()).collect();
    assert_eq!(sizes, vec![3, 3, 3]);
    let numbers: Vec<usize> = groups.iter().map(|g| g.group_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert!(groups.iter().all(|g| g.tee_time.is_none()));
}

#[test]
fn test3_sort_direction() {
    let players = vec![
        player("a", "Ann", Some(5)),
        player("b", "Ben", Some(20)),
        player("c", "Cat", Some(12)),
    ];

    let desc = group_players(&players, HandicapBasis::Playing, true, 4);
    assert_eq!(group_ids(&desc), vec![vec!["b", "c", "a"]]);

    let asc = group_players(&players, HandicapBasis::Playing, false, 4);
    assert_eq!(group_ids(&asc), vec![vec!["a", "c", "b"]]);
}

#[test]
fn test3_missing_handicaps_sort_last_either_way() {
    let players = vec![
        player("x", "Xena", None),
        player("a", "Ann", Some(5)),
        player("b", "Ben", Some(20)),
        player("w", "Walt", None),
    ];

    let desc = group_players(&players, HandicapBasis::Playing, true, 2);
    assert_eq!(group_ids(&desc), vec![vec!["b", "a"], vec!["w", "x"]]);

    let asc = group_players(&players, HandicapBasis::Playing, false, 2);
    assert_eq!(group_ids(&asc), vec![vec!["a", "b"], vec!["w", "x"]]);
}

#[test]
fn test3_ties_break_on_name_ignoring_case() {
    let players = vec![
        player("3", "charlie", Some(10)),
        player("1", "bob", Some(10)),
        player("2", "Alice", Some(10)),
    ];
    for descending in [true, false] {
        let groups = group_players(&players, HandicapBasis::Playing, descending, 4);
        assert_eq!(group_ids(&groups), vec![vec!["2", "1", "3"]]);
    }
}

#[test]
fn test3_basis_selects_the_handicap() {
    let mut a = player("a", "Ann", Some(10));
    a.playing_handicap = Some(2);
    let b = player("b", "Ben", Some(5));

    let by_course = group_players(&[a.clone(), b.clone()], HandicapBasis::Course, true, 4);
    assert_eq!(group_ids(&by_course), vec![vec!["a", "b"]]);

    let by_playing = group_players(&[a, b], HandicapBasis::Playing, true, 4);
    assert_eq!(group_ids(&by_playing), vec![vec!["b", "a"]]);
}

#[test]
fn test3_empty_roster() {
    assert!(group_players(&[], HandicapBasis::Playing, true, 4).is_empty());
    assert_eq!(group_players_manual(&[], &[]), Ok(Vec::new()));
}

#[test]
fn test3_manual_assignment_is_verbatim() -> Result<(), Box<dyn std::error::Error>> {
    let players = vec![
        player("a", "Ann", Some(5)),
        player("b", "Ben", Some(20)),
        player("c", "Cat", Some(12)),
        player("d", "Dan", None),
    ];
    let groups = group_players_manual(&players, &[1, 0, 1, 0])?;

    assert_eq!(group_ids(&groups), vec![vec!["b", "d"], vec!["a", "c"]]);
    assert_eq!(groups[0].group_number, 1);
    assert_eq!(groups[1].group_number, 2);
    Ok(())
}

#[test]
fn test3_manual_assignment_rejects_gaps_and_mismatches() {
    let players = vec![player("a", "Ann", Some(5)), player("b", "Ben", Some(20))];

    assert_eq!(
        group_players_manual(&players, &[0, 2]),
        Err(EngineError::ManualAssignmentGap(1))
    );
    assert_eq!(
        group_players_manual(&players, &[1, 1]),
        Err(EngineError::ManualAssignmentGap(0))
    );
    assert_eq!(
        group_players_manual(&players, &[0]),
        Err(EngineError::ManualAssignmentLength {
            players: 2,
            indices: 1
        })
    );
}

#[test]
fn test3_manual_index_past_the_roster_is_a_gap() {
    let one = vec![player("a", "Ann", Some(5))];
    assert_eq!(
        group_players_manual(&one, &[usize::MAX]),
        Err(EngineError::ManualAssignmentGap(0))
    );

    let two = vec![player("a", "Ann", Some(5)), player("b", "Ben", Some(20))];
    assert_eq!(
        group_players_manual(&two, &[0, 1_000_000_000]),
        Err(EngineError::ManualAssignmentGap(1))
    );

    let options = GroupingOptions {
        basis: HandicapBasis::Playing,
        descending: true,
        group_size: 4,
    };
    assert_eq!(
        plan_groups(&one, &[Some(usize::MAX)], &options),
        Err(EngineError::ManualAssignmentGap(0))
    );
}

#[test]
fn test3_plan_groups_dispatch() -> Result<(), Box<dyn std::error::Error>> {
    let players = vec![
        player("a", "Ann", Some(5)),
        player("b", "Ben", Some(20)),
        player("c", "Cat", Some(12)),
    ];
    let options = GroupingOptions {
        basis: HandicapBasis::Playing,
        descending: true,
        group_size: 2,
    };

    let automatic = plan_groups(&players, &[], &options)?;
    assert_eq!(group_ids(&automatic), vec![vec!["b", "c"], vec!["a"]]);

    let no_overrides = plan_groups(&players, &[None, None, None], &options)?;
    assert_eq!(no_overrides, automatic);

    let manual = plan_groups(&players, &[Some(0), Some(0), Some(0)], &options)?;
    assert_eq!(group_ids(&manual), vec![vec!["a", "b", "c"]]);

    assert_eq!(
        plan_groups(&players, &[Some(0), None, Some(1)], &options),
        Err(EngineError::PartialManualAssignment {
            assigned: 2,
            players: 3
        })
    );
    Ok(())
}
