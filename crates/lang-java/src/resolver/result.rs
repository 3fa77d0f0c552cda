use super::TableOwner;

/// Outcome of a type or value lookup.
///
/// `owner` is the table that produced the answer (or, for a failed result,
/// the table where the walk ended). `cause` links the failed attempts of the
/// tables that delegated on the way out; the deepest link is the table the
/// query started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveResult<T> {
    symbol: Option<T>,
    owner: TableOwner,
    cause: Option<Box<ResolveResult<T>>>,
}

impl<T> ResolveResult<T> {
    pub fn found(symbol: T, owner: TableOwner) -> Self {
        Self {
            symbol: Some(symbol),
            owner,
            cause: None,
        }
    }

    pub fn failed(owner: TableOwner) -> Self {
        Self {
            symbol: None,
            owner,
            cause: None,
        }
    }

    pub fn symbol(&self) -> Option<&T> {
        self.symbol.as_ref()
    }

    pub fn into_symbol(self) -> Option<T> {
        self.symbol
    }

    pub fn owner(&self) -> TableOwner {
        self.owner
    }

    pub fn is_failed(&self) -> bool {
        self.symbol.is_none()
    }

    pub fn cause(&self) -> Option<&ResolveResult<T>> {
        self.cause.as_deref()
    }

    /// Walks the cause chain, nearest link first.
    pub fn causes(&self) -> impl Iterator<Item = &ResolveResult<T>> {
        std::iter::successors(self.cause(), |r| r.cause())
    }

    /// Appends `attempt` as the deepest link. Symbol and owner are untouched.
    pub(crate) fn with_deepest_cause(mut self, attempt: ResolveResult<T>) -> Self {
        self.push_cause(attempt);
        self
    }

    fn push_cause(&mut self, attempt: ResolveResult<T>) {
        match &mut self.cause {
            Some(cause) => cause.push_cause(attempt),
            None => self.cause = Some(Box::new(attempt)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{ScopeKind, TableId};

    fn owner(id: u64, kind: ScopeKind) -> TableOwner {
        TableOwner {
            id: TableId(id),
            kind,
        }
    }

    #[test]
    fn test_found_and_failed() {
        let found = ResolveResult::found("x", owner(3, ScopeKind::Local));
        assert!(!found.is_failed());
        assert_eq!(found.symbol(), Some(&"x"));
        assert!(found.cause().is_none());

        let failed: ResolveResult<&str> = ResolveResult::failed(owner(0, ScopeKind::Empty));
        assert!(failed.is_failed());
        assert_eq!(failed.into_symbol(), None);
    }

    #[test]
    fn test_cause_chain_grows_at_the_deep_end() {
        let top = owner(1, ScopeKind::Member);
        let middle = owner(2, ScopeKind::Local);
        let bottom = owner(3, ScopeKind::Local);

        let result = ResolveResult::found("f", top)
            .with_deepest_cause(ResolveResult::failed(middle))
            .with_deepest_cause(ResolveResult::failed(bottom));

        assert_eq!(result.owner(), top);
        assert_eq!(result.symbol(), Some(&"f"));
        let chain: Vec<TableOwner> = result.causes().map(ResolveResult::owner).collect();
        assert_eq!(chain, vec![middle, bottom]);
        assert!(result.causes().all(ResolveResult::is_failed));
    }
}
