// tests/sets.rs
use anyhow::Result;
use lava::testing::*;
use lava::*;
use std::collections::HashSet;

#[test]
fn distinct_keeps_first_occurrences() -> Result<()> {
    let people = vec![("Robbie", 23), ("Robbie", 23), ("Alex", 1)];
    let out = distinct(people);

    assert_eq!(out, vec![("Robbie", 23), ("Alex", 1)]);
    assert_eq!(out.len(), 2);
    Ok(())
}

#[test]
fn distinct_is_idempotent() -> Result<()> {
    let once = distinct(sample_people());
    let twice = distinct(once.clone());

    assert_collections_equal(&twice, &once);
    assert_no_duplicates(&once);
    assert_eq!(once.len(), 8);
    Ok(())
}

#[test]
fn union_has_no_duplicates_and_matches_distinct_concat() -> Result<()> {
    let a = vec![1, 2, 2, 5];
    let b = vec![5, 3, 1, 4];

    let u = union(a.clone(), b.clone());
    assert_no_duplicates(&u);
    assert_eq!(u, vec![1, 2, 5, 3, 4]);
    assert_eq!(u.len(), distinct(a.into_iter().chain(b)).len());
    Ok(())
}

#[test]
fn intersect_follows_left_order_without_duplicates() -> Result<()> {
    let a = vec![1, 2, 2, 3];
    let b = vec![2, 3, 3, 4];

    let out = intersect(a, b.clone());
    assert_eq!(out, vec![2, 3]);

    let right: HashSet<_> = distinct(b).into_iter().collect();
    assert!(out.iter().all(|x| right.contains(x)));
    Ok(())
}

#[test]
fn except_retains_left_duplicates() -> Result<()> {
    assert_eq!(except(vec![1, 1, 2, 3], vec![2]), vec![1, 1, 3]);
    assert_eq!(except(vec![1, 1, 2], Vec::new()), vec![1, 1, 2]);
    assert!(except(vec![1, 2], vec![2, 1]).is_empty());
    Ok(())
}

#[test]
fn operators_on_empty_inputs() -> Result<()> {
    let empty: Vec<i32> = Vec::new();

    assert!(distinct(empty.clone()).is_empty());
    assert_eq!(union(empty.clone(), vec![1, 1]), vec![1]);
    assert!(intersect(vec![1, 2], empty.clone()).is_empty());
    assert!(except(empty, vec![1]).is_empty());
    Ok(())
}

#[test]
fn by_key_variants_compare_projected_keys() -> Result<()> {
    let words = vec!["Rust", "rust", "Go", "RUST", "go", "Zig"];

    assert_eq!(distinct_by_key(words.clone(), |w| w.to_lowercase()), vec!["Rust", "Go", "Zig"]);
    assert_eq!(
        union_by_key(vec!["a", "B"], vec!["b", "C", "A"], |w| w.to_lowercase()),
        vec!["a", "B", "C"]
    );
    assert_eq!(
        intersect_by_key(words.clone(), vec!["GO", "zig"], |w| w.to_lowercase()),
        vec!["Go", "Zig"]
    );
    assert_eq!(
        except_by_key(words, vec!["rust"], |w| w.to_lowercase()),
        vec!["Go", "go", "Zig"]
    );
    Ok(())
}

#[test]
fn by_key_variants_on_records() -> Result<()> {
    let pairs = vec![("a", 1), ("b", 2), ("a", 3)];

    assert_eq!(intersect_by_key(pairs.clone(), vec![("a", 9)], |p| p.0), vec![("a", 1)]);
    assert_eq!(except_by_key(pairs.clone(), vec![("a", 9)], |p| p.0), vec![("b", 2)]);
    assert_eq!(distinct_by_key(pairs, |p| p.0), vec![("a", 1), ("b", 2)]);
    Ok(())
}

#[test]
fn sequence_set_operators_keep_shape() -> Result<()> {
    let set = from_set(vec![3, 1, 3]);
    assert_eq!(set.shape(), Shape::Set);

    let u = set.clone().union(vec![2, 1]);
    assert_eq!(u.shape(), Shape::Set);
    assert_eq!(u.as_slice(), &[3, 1, 2]);

    let i = set.clone().intersect(vec![1]);
    assert_eq!((i.shape(), i.into_vec()), (Shape::Set, vec![1]));

    let e = from_vec(vec![1, 1, 2]).except(vec![2]);
    assert_eq!((e.shape(), e.into_vec()), (Shape::List, vec![1, 1]));

    let d = from_vec(vec!["x", "X", "y"]).distinct_by_key(|s| s.to_lowercase());
    assert_eq!(d.into_vec(), vec!["x", "y"]);
    Ok(())
}

#[test]
fn sequence_by_key_operators() -> Result<()> {
    let people = from_vec(sample_people());

    let unique_names = people.clone().distinct_by_key(|p| p.name.clone());
    assert_eq!(unique_names.len(), 8);

    let extra = vec![Person::new("Robbie", 99), Person::new("Zed", 50)];
    let merged = people.clone().union_by_key(extra.clone(), |p| p.name.clone());
    assert_eq!(merged.len(), 9);
    assert_eq!(merged.last()?.name, "Zed");

    let shared = people.clone().intersect_by_key(extra.clone(), |p| p.name.clone());
    assert_eq!(shared.into_vec(), vec![Person::new("Robbie", 23)]);

    let rest = people.except_by_key(extra, |p| p.name.clone());
    assert_eq!(rest.len(), 7);
    Ok(())
}
