//! Substring replacement and name cleaning for generated source text.

use tracing::trace;

/// Substitutions applied by [`clean_name`], in order.
const NAME_SUBSTITUTIONS: [(&str, &str); 4] = [(".", "_"), ("@", "_"), ("outer", "o"), ("inner", "i")];

/// Replace every occurrence of `from` in `base` with `to`, left to right.
///
/// After each replacement the search resumes right after the inserted text, so a
/// `to` that contains `from` is never expanded again. An empty `from` leaves
/// `base` untouched.
///
/// ```rust
/// # use autosched_schedule::str_replace;
/// let mut name = String::from("a.b.c");
/// str_replace(&mut name, ".", "_");
/// assert_eq!(name, "a_b_c");
/// ```
pub fn str_replace(base: &mut String, from: &str, to: &str) {
    if from.is_empty() {
        trace!(base = %base, "empty replacement pattern, nothing to do");
        return;
    }

    let mut cursor = 0;
    while let Some(offset) = base[cursor..].find(from) {
        let pos = cursor + offset;
        base.replace_range(pos..pos + from.len(), to);
        cursor = pos + to.len();
    }
}

/// Clean an iterator name so it is a valid identifier in generated code.
///
/// ```rust
/// # use autosched_schedule::clean_name;
/// assert_eq!(clean_name("i.outer@0"), "i_o_0");
/// ```
pub fn clean_name(name: &str) -> String {
    let mut ret = name.to_owned();
    for (from, to) in NAME_SUBSTITUTIONS {
        str_replace(&mut ret, from, to);
    }
    ret
}
