use lists::{ArrayList, LinkedList, List, OutOfBoundsError};

fn collect<L: List<i32>>(list: &L) -> Vec<i32> {
    list.iter().copied().collect()
}

fn filled<L: List<i32>>(new: impl Fn() -> L, values: &[i32]) -> L {
    let mut list = new();
    for &v in values {
        list.append(v);
    }
    list
}

fn append_grows_by_one<L: List<i32>>(new: impl Fn() -> L) {
    let mut list = new();
    for i in 0..50 {
        let before = list.len();
        list.append(i);
        assert_eq!(list.len(), before + 1);
        assert_eq!(list.get(list.len() - 1), Ok(&i));
    }
}

fn insert_shifts_later_elements<L: List<i32>>(new: impl Fn() -> L) {
    for p in 0..=4 {
        let mut list = filled(&new, &[0, 1, 2, 3]);
        list.insert(p, 99).unwrap();
        assert_eq!(list.get(p), Ok(&99));
        assert_eq!(list.len(), 5);

        let mut expected = vec![0, 1, 2, 3];
        expected.insert(p, 99);
        assert_eq!(collect(&list), expected);
    }
}

fn remove_shifts_later_elements<L: List<i32>>(new: impl Fn() -> L) {
    for p in 0..4 {
        let mut list = filled(&new, &[0, 1, 2, 3]);
        assert_eq!(list.remove(p), Ok(p as i32));
        assert_eq!(list.len(), 3);

        let mut expected = vec![0, 1, 2, 3];
        expected.remove(p);
        assert_eq!(collect(&list), expected);
    }
}

fn set_touches_one_position<L: List<i32>>(new: impl Fn() -> L) {
    let mut list = filled(new, &[1, 2, 3]);
    assert_eq!(list.set(1, 20), Ok(2));
    assert_eq!(list.get(1), Ok(&20));
    assert_eq!(collect(&list), [1, 20, 3]);
}

fn clear_empties<L: List<i32>>(new: impl Fn() -> L) {
    let mut list = filled(new, &[1, 2, 3]);
    list.clear();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.get(0), Err(OutOfBoundsError { position: 0, size: 0 }));
    assert!(list.remove(0).is_err());
    assert_eq!(list.iter().count(), 0);

    list.append(9);
    assert_eq!(collect(&list), [9]);
    assert_eq!(list.len(), 1);
}

fn iteration_is_repeatable<L: List<i32>>(new: impl Fn() -> L) {
    let list = filled(new, &[5, 6, 7, 8]);
    let first = collect(&list);
    let second = collect(&list);
    assert_eq!(first, [5, 6, 7, 8]);
    assert_eq!(first, second);
}

fn out_of_bounds<L: List<i32>>(new: impl Fn() -> L) {
    let mut list = new();
    assert!(list.get(0).is_err());
    assert!(list.set(0, 1).is_err());
    assert!(list.remove(0).is_err());
    assert_eq!(
        list.insert(1, 1),
        Err(OutOfBoundsError { position: 1, size: 0 })
    );

    let mut list = filled(new, &[1, 2]);
    assert_eq!(list.get(2), Err(OutOfBoundsError { position: 2, size: 2 }));
    assert!(list.set(2, 0).is_err());
    assert!(list.remove(2).is_err());
    assert!(list.insert(3, 0).is_err());
    assert!(list.get(usize::MAX).is_err());
    // failed calls leave the list alone
    assert_eq!(collect(&list), [1, 2]);
}

fn mixed_operations<L: List<i32>>(new: impl Fn() -> L) {
    let mut list = new();
    let mut model = Vec::new();
    for i in 0..100 {
        match i % 5 {
            0 | 1 => {
                list.append(i);
                model.push(i);
            }
            2 => {
                let p = (i as usize * 7) % (model.len() + 1);
                list.insert(p, i).unwrap();
                model.insert(p, i);
            }
            3 => {
                let p = (i as usize * 3) % model.len();
                assert_eq!(list.remove(p), Ok(model.remove(p)));
            }
            _ => {
                let p = (i as usize) % model.len();
                assert_eq!(list.set(p, -i), Ok(model[p]));
                model[p] = -i;
            }
        }
        assert_eq!(list.len(), model.len());
    }
    assert_eq!(collect(&list), model);
}

macro_rules! contract_tests {
    ($name:ident, $new:expr) => {
        mod $name {
            use super::*;

            #[test]
            fn append() {
                append_grows_by_one(|| $new);
            }

            #[test]
            fn insert() {
                insert_shifts_later_elements(|| $new);
            }

            #[test]
            fn remove() {
                remove_shifts_later_elements(|| $new);
            }

            #[test]
            fn set() {
                set_touches_one_position(|| $new);
            }

            #[test]
            fn clear() {
                clear_empties(|| $new);
            }

            #[test]
            fn iteration() {
                iteration_is_repeatable(|| $new);
            }

            #[test]
            fn bounds() {
                out_of_bounds(|| $new);
            }

            #[test]
            fn mixed() {
                mixed_operations(|| $new);
            }
        }
    };
}

contract_tests!(linked, LinkedList::<i32>::new());
contract_tests!(array, ArrayList::<i32>::new());
contract_tests!(small_array, ArrayList::<i32>::with_capacity(1));
contract_tests!(empty_array, ArrayList::<i32>::with_capacity(0));

fn insert_into_empty<L: List<char> + Default>() {
    let mut list = L::default();
    list.insert(0, 'a').unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0), Ok(&'a'));
}

#[test]
fn insert_at_zero_on_empty() {
    insert_into_empty::<LinkedList<char>>();
    insert_into_empty::<ArrayList<char>>();
}
