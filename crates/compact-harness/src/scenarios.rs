//! The fixed compaction scenarios.

use compact::compact;
use tracing::debug;

use crate::unit_test::UnitTest;

pub const WRONG_SIZE: &str = "wrong size returned!";
pub const WRONG_CONTENT: &str = "compacted incorrectly!";

/// Size claimed for the absent-storage case.
pub const ABSENT_STORAGE_SIZE: isize = 40;

/// A sorted input and the prefix it must compact to.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub label: &'static str,
    pub input: &'static [i32],
    pub expected: &'static [i32],
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        label: "given example",
        input: &[1, 3, 7, 7, 8, 9, 9, 9, 10],
        expected: &[1, 3, 7, 8, 9, 10],
    },
    Scenario {
        label: "small single number",
        input: &[1, 1],
        expected: &[1],
    },
    Scenario {
        label: "larger single number",
        input: &[1, 1, 1, 1],
        expected: &[1],
    },
    Scenario {
        label: "end of array duplicates",
        input: &[1, 2, 2, 2, 2],
        expected: &[1, 2],
    },
    Scenario {
        label: "beginning of array duplicates",
        input: &[2, 2, 2, 2, 3, 5, 6],
        expected: &[2, 3, 5, 6],
    },
    Scenario {
        label: "already compact",
        input: &[1, 3, 7, 8, 9, 10],
        expected: &[1, 3, 7, 8, 9, 10],
    },
];

/// Compact `array` over its full length, then check the returned size and,
/// only if that matched, every element of the expected prefix.
pub fn check_compact(test: &mut UnitTest, array: &mut [i32], expected: &[i32]) {
    let size = array.len() as isize;
    let returned = compact(Some(&mut array[..]), size);

    if test.check(returned == expected.len() as isize, WRONG_SIZE) {
        for (actual, wanted) in array.iter().zip(expected) {
            test.check(actual == wanted, WRONG_CONTENT);
        }
    }
}

/// No storage at all: the claimed size must come back unchanged.
pub fn check_absent_storage(test: &mut UnitTest) {
    let returned = compact::<i32>(None, ABSENT_STORAGE_SIZE);
    test.check(returned == ABSENT_STORAGE_SIZE, WRONG_SIZE);
}

pub fn run_all(test: &mut UnitTest) {
    for scenario in SCENARIOS {
        debug!(scenario = scenario.label, "running");
        let mut array = scenario.input.to_vec();
        check_compact(test, &mut array, scenario.expected);
    }
    debug!(scenario = "bad data", "running");
    check_absent_storage(test);
}
