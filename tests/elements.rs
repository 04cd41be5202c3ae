// tests/elements.rs
use anyhow::Result;
use lava::testing::*;
use lava::*;

#[test]
fn first_and_last_families() -> Result<()> {
    let people = from_vec(sample_people());

    assert_eq!(people.first()?.name, "Robbie");
    assert_eq!(people.last()?.name, "Brian");
    assert_eq!(people.first_where(|p| p.age > 40)?.name, "Justin");
    assert_eq!(people.last_where(|p| p.age < 25)?.name, "Mark");
    assert!(people.first_where_or_default(|p| p.age > 100).is_none());
    assert!(people.last_where_or_default(|p| p.age > 100).is_none());
    Ok(())
}

#[test]
fn empty_sequences_report_not_found() -> Result<()> {
    let empty = from_vec(Vec::<i32>::new());

    assert!(matches!(empty.first(), Err(QueryError::NotFound(_))));
    assert!(matches!(empty.last(), Err(QueryError::NotFound(_))));
    assert!(matches!(empty.single(), Err(QueryError::NotFound(_))));
    assert!(matches!(empty.min(), Err(QueryError::NotFound(_))));
    assert!(matches!(empty.max(), Err(QueryError::NotFound(_))));
    assert!(matches!(empty.average(), Err(QueryError::NotFound(_))));
    assert_eq!(empty.first_or_default(), None);
    assert_eq!(empty.last_or_default(), None);
    Ok(())
}

#[test]
fn predicate_without_match_is_not_found() -> Result<()> {
    let err = first_where(vec![1, 2, 3], |n| *n > 5).unwrap_err();
    assert!(matches!(err, QueryError::NotFound(ref msg) if msg.contains("first_where")));

    let err = last_where(vec![1, 2, 3], |n| *n > 5).unwrap_err();
    assert!(matches!(err, QueryError::NotFound(_)));
    Ok(())
}

#[test]
fn single_enforces_uniqueness() -> Result<()> {
    assert_eq!(single(vec![5])?, 5);
    assert_eq!(
        single(vec![1, 2]).unwrap_err(),
        QueryError::MultipleMatches { count: 2 }
    );

    let people = from_vec(sample_people());
    assert_eq!(people.single_where(|p| p.name == "Alex")?.age, 1);
    assert_eq!(
        people.single_where(|p| p.name == "Robbie").unwrap_err(),
        QueryError::MultipleMatches { count: 2 }
    );
    assert!(matches!(
        people.single_where(|p| p.age > 100),
        Err(QueryError::NotFound(_))
    ));
    assert_eq!(people.single_where_or_default(|p| p.age > 100)?, None);
    assert!(people.single_where_or_default(|p| p.age > 30).is_err());
    Ok(())
}

#[test]
fn element_at_checks_range() -> Result<()> {
    let seq = from_vec(vec![10, 20, 30]);

    assert_eq!(*seq.element_at(1)?, 20);
    assert_eq!(seq.element_at_or_default(3), None);

    let err = seq.element_at(10).unwrap_err();
    assert_eq!(
        err,
        QueryError::InvalidArgument("index 10 out of range for sequence of length 3".into())
    );
    assert_eq!(element_at(vec![10, 20, 30], 2)?, 30);
    assert_eq!(element_at(vec![10, 20, 30], 3).unwrap_err(), err_for(3, 3));
    assert_eq!(element_at_or_default(vec![10, 20, 30], 0), Some(10));
    Ok(())
}

fn err_for(index: usize, len: usize) -> QueryError {
    QueryError::InvalidArgument(format!(
        "index {index} out of range for sequence of length {len}"
    ))
}

#[test]
fn extremes_and_projections() -> Result<()> {
    let people = from_vec(sample_people());

    assert_eq!(people.min()?.name, "Alex");
    assert_eq!(people.max()?.name, "Brian");
    assert_eq!(people.min_by_key(|p| p.name.clone())?.name, "Alex");
    assert_eq!(people.max_by_key(|p| p.age)?.name, "Brian");

    assert_eq!(min(vec![3, 1, 2])?, 1);
    assert_eq!(max(vec![3, 1, 2])?, 3);
    assert_eq!(min_by_key(vec!["ccc", "a"], |s| s.len())?, "a");
    assert_eq!(max_by_key(vec!["ccc", "a"], |s| s.len())?, "ccc");
    Ok(())
}

#[test]
fn projected_extremes_return_the_key() -> Result<()> {
    let people = from_vec(sample_people());

    assert_eq!(people.max_of(|p| p.age)?, 44);
    assert_eq!(people.min_of(|p| p.age)?, 1);
    assert_eq!(people.max_of(|p| p.name.len())?, 9);

    assert_eq!(max_of(vec!["ccc", "a"], |s| s.len())?, 3);
    assert!(matches!(
        min_of(Vec::<u32>::new(), |n| *n),
        Err(QueryError::NotFound(ref msg)) if msg.contains("min_of")
    ));
    Ok(())
}

#[test]
fn reduce_folds_without_seed() -> Result<()> {
    let ages = from_vec(sample_people()).select(|p| p.age);
    assert_eq!(ages.reduce(|a, b| a.max(b))?, 44);
    assert_eq!(ages.reduce(|a, b| a + b)?, 240);

    assert_eq!(reduce(vec!["a", "b"].into_iter().map(String::from), |acc, s| acc + &s)?, "ab");
    assert_eq!(reduce(vec![7], |a, b| a * b)?, 7);
    assert!(matches!(
        reduce(Vec::<i32>::new(), |a, b| a + b),
        Err(QueryError::NotFound(_))
    ));
    Ok(())
}

#[test]
fn min_and_max_keep_first_of_equals() -> Result<()> {
    let pairs = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
    let by_first = |p: &(i32, char)| p.0;

    assert_eq!(min_by_key(pairs, by_first)?, (0, 'b'));
    assert_eq!(max(vec![Person::new("X", 1), Person::new("X", 1)])?.age, 1);
    Ok(())
}

#[test]
fn reductions() -> Result<()> {
    let ages = from_vec(sample_people()).select(|p| p.age);

    assert_eq!(ages.sum(), 240);
    assert!((ages.average()? - 240.0 / 9.0).abs() < 1e-9);
    assert_eq!(ages.aggregate(0u32, |acc, a| acc.max(*a)), 44);
    assert_eq!(ages.count(), 9);
    assert_eq!(ages.count_where(|a| *a > 30), 3);
    assert!(ages.any());
    assert!(ages.any_where(|a| *a == 1));
    assert!(ages.all(|a| *a > 0));
    assert!(from_vec(Vec::<u32>::new()).all(|a| *a > 100));
    assert!(ages.contains(&42));

    assert_eq!(sum(vec![1.5_f64, 2.5]), 4.0);
    assert_eq!(sum(Vec::<i64>::new()), 0);
    assert_eq!(average(vec![1u8, 2, 3])?, 2.0);
    assert_eq!(aggregate(vec!["a", "b", "c"], String::new(), |acc, s| acc + s), "abc");
    Ok(())
}

#[test]
fn sequence_equality() -> Result<()> {
    assert!(sequence_equal(vec![1, 2, 3], vec![1, 2, 3]));
    assert!(!sequence_equal(vec![1, 2, 3], vec![1, 2]));
    assert!(!sequence_equal(vec![1, 2], vec![2, 1]));

    let seq = from_vec(vec!["a", "b"]);
    assert!(seq.sequence_equal(&vec!["a", "b"]));
    assert!(!seq.sequence_equal(&vec!["a"]));
    Ok(())
}

#[test]
fn error_messages_render() -> Result<()> {
    assert_eq!(
        QueryError::MultipleMatches { count: 3 }.to_string(),
        "expected exactly one matching element, found 3"
    );
    assert_eq!(
        first(Vec::<u8>::new()).unwrap_err().to_string(),
        "no element found: `first` called on an empty sequence"
    );
    Ok(())
}
