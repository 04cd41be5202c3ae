// tests/joins.rs
use anyhow::Result;
use lava::testing::*;
use lava::*;
use std::collections::HashMap;

fn names(pets: &[Pet]) -> Vec<String> {
    pets.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn join_emits_matching_pairs_only() -> Result<()> {
    let people = vec![Person::new("Robbie", 23), Person::new("Alex", 1)];
    let pets = vec![Pet::new("Rex", "Robbie")];

    let rows = join(
        people,
        pets,
        |p| p.name.clone(),
        |pet| pet.owner.clone(),
        |p, pet| (p.name.clone(), pet.name.clone()),
    );

    assert_eq!(rows, vec![("Robbie".to_string(), "Rex".to_string())]);
    Ok(())
}

#[test]
fn group_join_gives_empty_slice_for_unmatched_outer() -> Result<()> {
    let people = vec![Person::new("Robbie", 23), Person::new("Alex", 1)];
    let pets = vec![Pet::new("Rex", "Robbie")];

    let rows = group_join(
        people,
        pets,
        |p| p.name.clone(),
        |pet| pet.owner.clone(),
        |p, owned| (p.name, names(owned)),
    );

    assert_eq!(
        rows,
        vec![
            ("Robbie".to_string(), vec!["Rex".to_string()]),
            ("Alex".to_string(), Vec::<String>::new()),
        ]
    );
    Ok(())
}

#[test]
fn join_rows_are_outer_major_inner_minor() -> Result<()> {
    let rows = join(
        sample_people(),
        sample_pets(),
        |p| p.name.clone(),
        |pet| pet.owner.clone(),
        |p, pet| format!("{}:{}", p.name, pet.name),
    );

    assert_collections_equal(
        &rows,
        &[
            "Robbie:Rex".to_string(),
            "Robbie:Spot".to_string(),
            "Robbie:Rex".to_string(),
            "Robbie:Spot".to_string(),
            "Stephanie:Whiskers".to_string(),
            "Todd:Tom".to_string(),
            "Dan:Goldie".to_string(),
        ],
    );
    Ok(())
}

#[test]
fn join_cardinality_is_sum_of_key_products() -> Result<()> {
    let people = sample_people();
    let pets = pets_for(&people, |p| (p.age % 3) as usize);

    let mut outer_counts: HashMap<&str, usize> = HashMap::new();
    for p in &people {
        *outer_counts.entry(p.name.as_str()).or_default() += 1;
    }
    let mut inner_counts: HashMap<&str, usize> = HashMap::new();
    for pet in &pets {
        *inner_counts.entry(pet.owner.as_str()).or_default() += 1;
    }
    let expected: usize = outer_counts
        .iter()
        .map(|(k, n)| n * inner_counts.get(k).copied().unwrap_or(0))
        .sum();

    let rows = join(
        people.clone(),
        pets.clone(),
        |p| p.name.clone(),
        |pet| pet.owner.clone(),
        |_, _| (),
    );
    assert_eq!(rows.len(), expected);
    Ok(())
}

#[test]
fn group_join_emits_one_row_per_outer_element() -> Result<()> {
    let people = sample_people();
    let rows = group_join(
        people.clone(),
        sample_pets(),
        |p| p.name.clone(),
        |pet| pet.owner.clone(),
        |p, owned| (p.name, owned.len()),
    );

    assert_eq!(rows.len(), people.len());
    assert_eq!(rows[0], ("Robbie".to_string(), 2));
    assert_eq!(rows[3], ("Alex".to_string(), 0));
    Ok(())
}

#[test]
fn join_against_empty_inner_is_empty() -> Result<()> {
    let rows = join(
        sample_people(),
        Vec::<Pet>::new(),
        |p| p.name.clone(),
        |pet| pet.owner.clone(),
        |p, pet| (p.name.clone(), pet.name.clone()),
    );
    assert!(rows.is_empty());

    let grouped = group_join(
        vec![1, 2],
        Vec::<(i32, char)>::new(),
        |n| *n,
        |r| r.0,
        |n, matched| (n, matched.len()),
    );
    assert_eq!(grouped, vec![(1, 0), (2, 0)]);
    Ok(())
}

#[test]
fn join_by_matches_keys_through_comparator() -> Result<()> {
    let owners = vec!["robbie", "TODD", "alex"];
    let rows = join_by(
        owners,
        sample_pets(),
        |o| o.to_string(),
        |pet| pet.owner.clone(),
        |o, pet| (*o, pet.name.clone()),
        |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()),
    );

    assert_eq!(
        rows,
        vec![
            ("robbie", "Rex".to_string()),
            ("robbie", "Spot".to_string()),
            ("TODD", "Tom".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn join_with_eq_keys_matches_float_keys() -> Result<()> {
    let sensors = vec![("a", 0.5_f64), ("b", 1.5)];
    let readings = vec![(0.5_f64, 10), (0.5, 11), (2.0, 12)];

    let rows = join_with(sensors, readings, |s| s.1, |r| r.0, |s, r| (s.0, r.1), EqKeys);
    assert_eq!(rows, vec![("a", 10), ("a", 11)]);
    Ok(())
}

#[test]
fn group_join_by_and_with_keep_outer_order() -> Result<()> {
    let rows = group_join_by(
        vec!["DAN", "alex", "stephanie"],
        sample_pets(),
        |o| o.to_string(),
        |pet| pet.owner.clone(),
        |o, owned| (o, names(owned)),
        |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()),
    );
    assert_eq!(
        rows,
        vec![
            ("DAN", vec!["Goldie".to_string()]),
            ("alex", Vec::new()),
            ("stephanie", vec!["Whiskers".to_string()]),
        ]
    );

    let sizes = group_join_with(
        vec![0.5_f64, 3.0],
        vec![(0.5_f64, 'x'), (0.5, 'y')],
        |k| *k,
        |r| r.0,
        |k, matched| (k, matched.len()),
        EqKeys,
    );
    assert_eq!(sizes, vec![(0.5, 2), (3.0, 0)]);
    Ok(())
}

#[test]
fn sequence_join_methods_produce_lists() -> Result<()> {
    let users = from_set(vec![(1u32, "Alice"), (2, "Bob")]);
    let scores = vec![(1u32, 95u32), (2, 87), (3, 92), (1, 70)];

    let joined = users.clone().join(scores.clone(), |u| u.0, |s| s.0, |u, s| (u.1, s.1));
    assert_eq!(joined.shape(), Shape::List);
    assert_eq!(joined.into_vec(), vec![("Alice", 95), ("Alice", 70), ("Bob", 87)]);

    let totals = users.group_join(scores.clone(), |u| u.0, |s| s.0, |u, s| {
        (u.1, s.iter().map(|x| x.1).sum::<u32>())
    });
    assert_eq!(totals.into_vec(), vec![("Alice", 165), ("Bob", 87)]);

    let loose = from_vec(vec![10u32, 20])
        .join_by(scores.clone(), |n| *n, |s| s.0 * 10, |n, s| (*n, s.1), |a: &u32, b: &u32| a.cmp(b));
    assert_eq!(loose.into_vec(), vec![(10, 95), (10, 70), (20, 87)]);

    let counted = from_vec(vec![3u32, 4])
        .group_join_by(scores, |n| *n, |s| s.0, |n, s| (n, s.len()), |a: &u32, b: &u32| a.cmp(b));
    assert_eq!(counted.into_vec(), vec![(3, 1), (4, 0)]);
    Ok(())
}
