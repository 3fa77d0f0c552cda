use scopechain_api::{MethodSymbol, SymbolResult};
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

/// Candidates contributed by a single scope, in the scope's own order.
pub type MethodCandidates<'a> = Box<dyn Iterator<Item = MethodSymbol> + 'a>;

type Segment<'a> = Box<dyn Iterator<Item = SymbolResult<MethodSymbol>> + 'a>;
type Supplier<'a> = Box<dyn FnOnce() -> Segment<'a> + 'a>;

/// A lazily concatenated sequence of method candidates.
///
/// The stream is a queue of deferred segments. A segment's supplier runs the
/// first time iteration reaches it, never earlier, so pulling a candidate
/// from the first segment leaves every later supplier untouched. Chaining
/// with [`Iterator::chain`] would not do: the second iterator has to exist
/// before the chain does.
///
/// An `Err` item ends the stream; nothing after it is evaluated.
pub struct MethodStream<'a> {
    current: Option<Segment<'a>>,
    pending: VecDeque<Supplier<'a>>,
}

impl<'a> MethodStream<'a> {
    pub fn empty() -> Self {
        Self {
            current: None,
            pending: VecDeque::new(),
        }
    }

    /// A stream over candidates that are already at hand.
    pub fn of<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = MethodSymbol>,
        I::IntoIter: 'a,
    {
        let mut stream = Self::empty();
        stream.current = Some(Box::new(candidates.into_iter().map(Ok)));
        stream
    }

    /// Appends a scope's local producer. `produce` runs when iteration gets there.
    pub fn then_local(
        mut self,
        produce: impl FnOnce() -> SymbolResult<MethodCandidates<'a>> + 'a,
    ) -> Self {
        self.pending.push_back(Box::new(move || -> Segment<'a> {
            match produce() {
                Ok(candidates) => Box::new(candidates.map(Ok)),
                Err(err) => Box::new(std::iter::once(Err(err))),
            }
        }));
        self
    }

    /// Appends another stream, typically the parent's. `produce` runs when
    /// iteration gets there.
    pub fn then_stream(mut self, produce: impl FnOnce() -> MethodStream<'a> + 'a) -> Self {
        self.pending
            .push_back(Box::new(move || -> Segment<'a> { Box::new(produce()) }));
        self
    }

    /// Pulls at most one candidate.
    pub fn find_first(mut self) -> SymbolResult<Option<MethodSymbol>> {
        self.next().transpose()
    }

    fn poison(&mut self) {
        self.current = None;
        self.pending.clear();
    }
}

impl Iterator for MethodStream<'_> {
    type Item = SymbolResult<MethodSymbol>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(segment) = self.current.as_mut() {
                match segment.next() {
                    Some(Ok(method)) => return Some(Ok(method)),
                    Some(Err(err)) => {
                        self.poison();
                        return Some(Err(err));
                    }
                    None => self.current = None,
                }
            }

            let supplier = self.pending.pop_front()?;
            self.current = Some(supplier());
        }
    }
}

impl FusedIterator for MethodStream<'_> {}

impl fmt::Debug for MethodStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodStream")
            .field("started", &self.current.is_some())
            .field("pending", &self.pending.len())
            .finish()
    }
}
