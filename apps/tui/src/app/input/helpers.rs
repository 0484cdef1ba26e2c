use crate::domain::Gender;

pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Moves `index` down by `step` rows, stopping on the last row.
pub const fn step_down(index: usize, step: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    let target = index.saturating_add(step);
    if target >= len {
        len - 1
    } else {
        target
    }
}

pub const fn next_gender(gender: Gender) -> Gender {
    match Gender::from_index(wrap_increment(gender.index(), Gender::ALL.len())) {
        Some(next) => next,
        None => gender,
    }
}

pub const fn prev_gender(gender: Gender) -> Gender {
    match Gender::from_index(wrap_decrement(gender.index(), Gender::ALL.len())) {
        Some(prev) => prev,
        None => gender,
    }
}
