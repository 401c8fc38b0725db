use rand::{rngs::StdRng, Rng, SeedableRng};
use stack_sort::{bubble_sort, Options, ScriptedConsole, Session, Stack, Termination};

#[test]
fn exercise_walkthrough() {
    let mut console = ScriptedConsole::new([
        "print",
        "push 5 3 8",
        "print",
        "pop",
        "print",
        "reset",
        "print",
        "sort 6 3 2 9 7 1 5 4 8",
    ]);
    Session::new(Options::default(), &mut console).run().unwrap();

    assert_eq!(
        console.output(),
        [
            "( )",
            "( 5 3 8 )",
            "8",
            "( 5 3 )",
            "( )",
            "sorted ( 1 2 3 4 5 6 7 8 9 )",
            "early termination on pass 6",
        ]
    );
}

#[test]
fn legacy_rule_through_session() {
    let options = Options {
        termination: Termination::SingleSwap,
        ..Options::default()
    };
    let mut console = ScriptedConsole::new(["sort 2 3 1", "sort 1 2 3"]);
    Session::new(options, &mut console).run().unwrap();

    assert_eq!(
        console.output(),
        [
            "sorted ( 2 1 3 )",
            "early termination on pass 1",
            "sorted ( 1 2 3 )",
        ]
    );
}

/// Random push/pop sequences agree with a `Vec` used as a stack.
#[test]
fn stack_matches_vec_model() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut stack = Stack::<8>::new();
    let mut model: Vec<i32> = vec![];

    for _ in 0..2000 {
        match rng.gen_range(0..10) {
            0 => {
                stack.reset();
                model.clear();
            }
            1..=5 => {
                let v = rng.gen();
                let pushed = stack.push(v);
                assert_eq!(pushed, model.len() < 8);
                if pushed {
                    model.push(v);
                }
            }
            _ => {
                if let Some(v) = model.pop() {
                    assert_eq!(stack.peek(), Some(v));
                    assert_eq!(stack.pop(), v);
                } else {
                    assert!(stack.is_empty());
                }
            }
        }
        assert_eq!(stack.as_slice(), &model[..]);
    }
}

#[test]
fn sort_matches_std_sort() {
    let mut rng = StdRng::seed_from_u64(2);
    for len in 0..64usize {
        let mut values: Vec<i32> = (0..len).map(|_| rng.gen()).collect();
        let mut expected = values.clone();
        expected.sort_unstable();

        let report = bubble_sort(&mut values);
        assert_eq!(values, expected);
        assert!(report.passes <= len.saturating_sub(1));
    }
}
