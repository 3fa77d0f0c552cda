//! Helpers for dotted Java names (`java.util.Map.Entry`).

pub const SEPARATOR: char = '.';

/// Last segment of a dotted name. A name without separator is returned as is.
pub fn simple_name(fqn: &str) -> &str {
    fqn.rsplit_once(SEPARATOR).map_or(fqn, |(_, name)| name)
}

/// Everything before the last separator, or `""` for the default package.
pub fn package_of(fqn: &str) -> &str {
    fqn.rsplit_once(SEPARATOR).map_or("", |(prefix, _)| prefix)
}

pub fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}{}{}", prefix, SEPARATOR, name)
    }
}

/// Turns a binary name (`a.Outer$Inner`) into its canonical form (`a.Outer.Inner`).
pub fn canonical(binary_name: &str) -> String {
    binary_name.replace('$', ".")
}

/// A name is well formed when every segment is a non-empty identifier-ish run.
pub fn is_well_formed(fqn: &str) -> bool {
    !fqn.is_empty()
        && fqn.split(SEPARATOR).all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        })
}
